use chrono::NaiveDate;

/// Reformats a `YYYYMMDD` upload date as e.g. "Oct 26, 2025".
/// Anything that doesn't parse is displayed as delivered.
pub fn format_upload_date(upload_date: &str) -> String {
    match NaiveDate::parse_from_str(upload_date, "%Y%m%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => upload_date.to_string(),
    }
}

/// Humanizes a view count with no decimal places: 812 -> "812", 1500 -> "2K",
/// 1230000 -> "1M".
pub fn format_view_count(view_count: i64) -> String {
    const STEPS: [(i64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

    for (scale, suffix) in STEPS {
        if view_count.abs() >= scale {
            let rounded = (view_count as f64 / scale as f64).round() as i64;
            return format!("{}{}", rounded, suffix);
        }
    }
    view_count.to_string()
}
