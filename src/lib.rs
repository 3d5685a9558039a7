pub mod app;
pub mod calendar;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod record;
pub mod storage;
pub mod timeline;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use storage::{load_or_default, resolve_data_path};
