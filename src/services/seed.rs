use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{Activity, ActivityView};
use crate::services::activity_directory::ActivityDirectory;

const EMBEDDED_SEED: &str = include_str!("../../seed/activities.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("could not read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("seed is not valid activity JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("activity '{activity}' lists {email} more than once")]
    DuplicateParticipant { activity: String, email: String },
}

/// Builds the directory from `path` when given, otherwise from the seed
/// compiled into the binary.
pub fn load_directory(path: Option<&Path>) -> Result<ActivityDirectory, SeedError> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            parse_seed(&raw)
        }
        None => parse_seed(EMBEDDED_SEED),
    }
}

pub fn parse_seed(raw: &str) -> Result<ActivityDirectory, SeedError> {
    let views: BTreeMap<String, ActivityView> = serde_json::from_str(raw)?;

    let mut activities = Vec::with_capacity(views.len());
    for (name, view) in views {
        let mut seen = HashSet::new();
        if let Some(dup) = view.participants.iter().find(|p| !seen.insert(p.as_str())) {
            return Err(SeedError::DuplicateParticipant {
                activity: name,
                email: dup.clone(),
            });
        }
        activities.push(Activity::from_view(name, view));
    }

    Ok(ActivityDirectory::new(activities))
}
