use crate::calendar::WeekStart;
use crate::models::MoodLog;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub week_start: WeekStart,
    pub data: Arc<Mutex<MoodLog>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, week_start: WeekStart, data: MoodLog) -> Self {
        Self {
            data_path,
            week_start,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
