use crate::error::{GameDevError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Config location
// ---------------------------------------------------------------------------

pub const CONFIG_DIR: &str = ".gamedev";
pub const CONFIG_FILE: &str = "config.yaml";

pub fn default_config_path() -> Result<PathBuf> {
    let home = home::home_dir().ok_or(GameDevError::HomeNotFound)?;
    Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
}

// ---------------------------------------------------------------------------
// Generated project layout
// ---------------------------------------------------------------------------

/// Subdirectories created under every generated project root, in order.
pub const PROJECT_SUBDIRS: &[&str] = &[
    "src",
    "src/components",
    "src/screens",
    "src/hooks",
    "src/utils",
    "src/assets",
    "public",
];

static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();

fn whitespace_re() -> &'static Regex {
    WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Directory (and npm package) name for a game: lower-cased, every whitespace
/// run replaced by a single hyphen.
pub fn project_dir_name(game_name: &str) -> String {
    whitespace_re()
        .replace_all(&game_name.to_lowercase(), "-")
        .into_owned()
}

pub fn project_dir(project_path: &Path, game_name: &str) -> PathBuf {
    project_path.join(project_dir_name(game_name))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
