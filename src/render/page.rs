use std::collections::HashMap;

use crate::format;
use crate::render::targets::{
    DisplayTargets, VideoBlock, MOVE_SELECTED, PLAYLIST_CREATED_AT, PLAYLIST_LAST_MODIFIED_AT,
    PLAYLIST_PATH, PLAYLIST_THUMBNAIL, PLAYLIST_TITLE, SELECTED_COUNT, VIDEO_LIST,
};

/// A video list entry as it sits on the page, together with its selection
/// marker.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBlock {
    pub block: VideoBlock,
    pub selected: bool,
}

/// In-memory display surface standing in for the host page.
///
/// Only registered targets exist on the surface; writes to anything else are
/// skipped. Selection state lives entirely in the blocks' markers and is
/// recomputed by scanning them, never cached.
#[derive(Debug, Default)]
pub struct Page {
    text_slots: HashMap<String, String>,
    value_slots: HashMap<String, String>,
    image_slots: HashMap<String, String>,
    has_video_list: bool,
    has_move_trigger: bool,
    blocks: Vec<RenderedBlock>,
}

impl Page {
    /// A surface with no targets at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The full set of targets the host page carries.
    pub fn standard() -> Self {
        let mut page = Self::default();
        page.register_value_target(PLAYLIST_PATH);
        page.register_text_target(PLAYLIST_TITLE);
        page.register_text_target(PLAYLIST_CREATED_AT);
        page.register_text_target(PLAYLIST_LAST_MODIFIED_AT);
        page.register_image_target(PLAYLIST_THUMBNAIL);
        page.register_text_target(SELECTED_COUNT);
        page.set_text(SELECTED_COUNT, "0");
        page.has_video_list = true;
        page.has_move_trigger = true;
        page
    }

    pub fn register_text_target(&mut self, target: &str) {
        self.text_slots.insert(target.to_string(), String::new());
    }

    pub fn register_value_target(&mut self, target: &str) {
        self.value_slots.insert(target.to_string(), String::new());
    }

    pub fn register_image_target(&mut self, target: &str) {
        self.image_slots.insert(target.to_string(), String::new());
    }

    pub fn register_video_list(&mut self) {
        self.has_video_list = true;
    }

    pub fn text(&self, target: &str) -> Option<&str> {
        self.text_slots.get(target).map(String::as_str)
    }

    pub fn value(&self, target: &str) -> Option<&str> {
        self.value_slots.get(target).map(String::as_str)
    }

    pub fn image(&self, target: &str) -> Option<&str> {
        self.image_slots.get(target).map(String::as_str)
    }

    pub fn blocks(&self) -> &[RenderedBlock] {
        &self.blocks
    }

    /// Flips the selection marker on the block at `index`, then recounts every
    /// selected block on the page and rewrites the counter target. Returns the
    /// new count, or `None` when no such block exists.
    pub fn toggle_selected(&mut self, index: usize) -> Option<usize> {
        let rendered = self.blocks.get_mut(index)?;
        rendered.selected = !rendered.selected;

        let count = self.selected_count();
        self.set_text(SELECTED_COUNT, &count.to_string());
        Some(count)
    }

    pub fn selected_count(&self) -> usize {
        self.blocks.iter().filter(|rendered| rendered.selected).count()
    }

    /// Bound to the move-selected trigger.
    pub fn move_selected(&mut self) {
        // TODO: the manager API has no move endpoint yet; wire this up once
        // one exists
        tracing::debug!("move selected triggered, nothing to call");
    }

    /// Renders the surface to an HTML document shaped like the host page.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"utf-8\">\n");

        let page_title = match self.text(PLAYLIST_TITLE) {
            Some(title) if !title.is_empty() => title,
            _ => "playlist-view",
        };
        html.push_str(&format!("    <title>{}</title>\n</head>\n<body>\n", page_title));

        if let Some(value) = self.value_slots.get(PLAYLIST_PATH) {
            html.push_str(&format!(
                "    <input id=\"{}\" value=\"{}\" readonly>\n",
                PLAYLIST_PATH, value
            ));
        }
        if let Some(source) = self.image_slots.get(PLAYLIST_THUMBNAIL) {
            html.push_str(&format!(
                "    <img id=\"{}\" src=\"{}\" alt=\"playlist thumbnail\">\n",
                PLAYLIST_THUMBNAIL, source
            ));
        }
        if let Some(text) = self.text_slots.get(PLAYLIST_TITLE) {
            html.push_str(&format!("    <h1 id=\"{}\">{}</h1>\n", PLAYLIST_TITLE, text));
        }
        if let Some(text) = self.text_slots.get(PLAYLIST_CREATED_AT) {
            html.push_str(&format!(
                "    <p id=\"{}\" class=\"faint\">{}</p>\n",
                PLAYLIST_CREATED_AT, text
            ));
        }
        if let Some(text) = self.text_slots.get(PLAYLIST_LAST_MODIFIED_AT) {
            html.push_str(&format!(
                "    <p id=\"{}\" class=\"faint\">{}</p>\n",
                PLAYLIST_LAST_MODIFIED_AT, text
            ));
        }

        if self.has_video_list {
            html.push_str(&format!("    <div id=\"{}\">\n", VIDEO_LIST));
            for rendered in &self.blocks {
                html.push_str(&video_item_html(rendered));
            }
            html.push_str("    </div>\n");
        }

        if let Some(count) = self.text_slots.get(SELECTED_COUNT) {
            html.push_str(&format!(
                "    <span id=\"{}\">{}</span>\n",
                SELECTED_COUNT, count
            ));
        }
        if self.has_move_trigger {
            html.push_str(&format!(
                "    <button id=\"{}\">Move selected videos</button>\n",
                MOVE_SELECTED
            ));
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}

impl DisplayTargets for Page {
    fn set_text(&mut self, target: &str, text: &str) -> bool {
        match self.text_slots.get_mut(target) {
            Some(slot) => {
                *slot = text.to_string();
                true
            }
            None => false,
        }
    }

    fn set_value(&mut self, target: &str, value: &str) -> bool {
        match self.value_slots.get_mut(target) {
            Some(slot) => {
                *slot = value.to_string();
                true
            }
            None => false,
        }
    }

    fn set_image(&mut self, target: &str, source: &str) -> bool {
        match self.image_slots.get_mut(target) {
            Some(slot) => {
                *slot = source.to_string();
                true
            }
            None => false,
        }
    }

    fn append_video_block(&mut self, block: VideoBlock) -> bool {
        if !self.has_video_list {
            return false;
        }
        self.blocks.push(RenderedBlock {
            block,
            selected: false,
        });
        true
    }
}

fn video_item_html(rendered: &RenderedBlock) -> String {
    let block = &rendered.block;
    let class = if rendered.selected {
        "video-item selected"
    } else {
        "video-item"
    };

    format!(
        r#"        <div class="{class}">
            <img src="{thumbnail}" alt="video thumbnail" class="video-thumbnail">
            <div class="video-info">
                <p class="title">
                    <a href="{url}" target="_blank">{title}</a>
                </p>
                <div class="sub-info faint">
                    <div>
                        <span class="view-count">{views} views</span>
                        <span>&bull;</span>
                        <span class="upload-date">{date}</span>
                    </div>
                    <p class="uploader">{uploader}</p>
                </div>
            </div>
        </div>
"#,
        class = class,
        thumbnail = block.thumbnail,
        url = block.url,
        title = block.title,
        views = format::format_view_count(block.view_count),
        date = format::format_upload_date(&block.upload_date),
        uploader = block.uploader,
    )
}
