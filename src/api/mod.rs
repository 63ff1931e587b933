mod error;
mod handlers;
mod types;

pub use handlers::create_router;
