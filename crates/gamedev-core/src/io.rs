use crate::error::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// A crash never leaves a half-written file behind.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    write_atomic(path, data)?;
    Ok(())
}

fn write_atomic(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// ProjectFs
// ---------------------------------------------------------------------------

/// Filesystem capability used by the template engine.
///
/// Each call stands alone. Nothing groups a sequence of writes into a
/// transaction, so a failure midway leaves earlier writes in place.
pub trait ProjectFs {
    /// Create `path` and any missing parents. Succeeds if it already exists.
    fn ensure_dir(&self, path: &Path) -> std::io::Result<()>;

    fn write_file(&self, path: &Path, content: &str) -> std::io::Result<()>;

    /// Write `value` as pretty-printed JSON with a trailing newline.
    fn write_json(&self, path: &Path, value: &serde_json::Value) -> std::io::Result<()> {
        let mut text = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        text.push('\n');
        self.write_file(path, &text)
    }
}

/// [`ProjectFs`] backed by the local disk. Every file is written atomically.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl ProjectFs for LocalFs {
    fn ensure_dir(&self, path: &Path) -> std::io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> std::io::Result<()> {
        write_atomic(path, content.as_bytes())
    }
}
