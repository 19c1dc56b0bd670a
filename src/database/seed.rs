use std::path::{Path, PathBuf};

use thiserror::Error;

use super::activities_repo::ActivityMap;
use crate::models::Activity;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read activities file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid activities file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid activities file {path}: {activity} must allow at least one participant")]
    ZeroCapacity { path: PathBuf, activity: String },
}

/// The catalog the school starts every term with.
pub fn default_activities() -> ActivityMap {
    let mut activities = ActivityMap::new();
    activities.insert(
        "Chess Club".to_string(),
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    activities.insert(
        "Programming Class".to_string(),
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    activities.insert(
        "Gym Class".to_string(),
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );
    activities
}

/// Reads a JSON object of `{name: activity}` in file order.
///
/// Every activity needs a capacity of at least one; the capacity is never
/// checked against signups.
pub fn load_activities_file(path: &Path) -> Result<ActivityMap, SeedError> {
    let raw = std::fs::read(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let activities: ActivityMap =
        serde_json::from_slice(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if let Some((name, _)) = activities.iter().find(|(_, a)| a.max_participants == 0) {
        return Err(SeedError::ZeroCapacity {
            path: path.to_path_buf(),
            activity: name.clone(),
        });
    }
    Ok(activities)
}
