use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameDevError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("unknown game type '{0}': expected one of platformer, puzzle, endless-runner, physics-based, arcade")]
    UnknownGameType(String),

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameDevError>;

// ---------------------------------------------------------------------------
// Stage errors
// ---------------------------------------------------------------------------

/// Non-fatal: the pipeline logs it and moves on.
#[derive(Debug, Error)]
pub enum KnowledgeRefreshError {
    #[error("invalid knowledge topic: {0:?}")]
    InvalidTopic(String),

    #[error("knowledge source '{source_name}' failed for topic '{topic}': {reason}")]
    Source {
        source_name: String,
        topic: String,
        reason: String,
    },
}

/// A single failed call against the issue tracker.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("tracker API key not set: export {0}")]
    MissingApiKey(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("tracker returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("tracker API error: {0}")]
    Api(String),

    #[error("tracker rejected {0}")]
    Rejected(String),
}

/// Fatal for the tracker structuring stage. Whatever was created before the
/// failing call stays in the tracker.
#[derive(Debug, Error)]
pub enum TrackerCreationError {
    #[error("failed to create project '{name}': {source}")]
    Project {
        name: String,
        #[source]
        source: TrackerError,
    },

    #[error("failed to create sprint '{name}': {source}")]
    Sprint {
        name: String,
        #[source]
        source: TrackerError,
    },

    #[error("failed to create issue '{title}': {source}")]
    Issue {
        title: String,
        #[source]
        source: TrackerError,
    },
}

/// Fatal for the template assembly stage. Files written before the failure
/// are left on disk.
#[derive(Debug, Error)]
pub enum TemplateGenerationError {
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
