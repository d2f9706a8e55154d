//! Saving a copy of a staged payload to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PreviewError;

/// Write `data` into `dir` under `name`, never overwriting.
///
/// An existing file of the same name gets a numbered sibling instead:
/// `report.pdf`, `report (1).pdf`, `report (2).pdf`, ... Returns the path
/// actually written.
pub fn save_copy(name: &str, data: &[u8], dir: &Path) -> Result<PathBuf, PreviewError> {
    let target = available_path(dir, name);
    fs::write(&target, data).map_err(|e| PreviewError::io(&target, e))?;
    debug!(path = %target.display(), bytes = data.len(), "saved copy");
    Ok(target)
}

/// First non-colliding path for `name` inside `dir`.
fn available_path(dir: &Path, name: &str) -> PathBuf {
    let candidate = dir.join(name);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (name, None),
    };

    for n in 1.. {
        let sibling = match ext {
            Some(ext) => format!("{stem} ({n}).{ext}"),
            None => format!("{stem} ({n})"),
        };
        let candidate = dir.join(sibling);
        if !candidate.exists() {
            return candidate;
        }
    }
    unreachable!("counter exhausted");
}
