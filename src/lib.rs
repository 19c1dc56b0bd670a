pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod web;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::activities_repo::ActivityDirectory;
use crate::database::seed::{self, SeedError};

/// Builds the directory from `ACTIVITIES_FILE` when set, else the built-in catalog.
pub fn load_directory(config: &AppConfig) -> Result<Arc<ActivityDirectory>, SeedError> {
    let activities = match &config.activities_file {
        Some(path) => seed::load_activities_file(path)?,
        None => seed::default_activities(),
    };
    Ok(Arc::new(ActivityDirectory::new(activities)))
}
