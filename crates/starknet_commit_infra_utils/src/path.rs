use std::fs;
use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

/// The canonical workspace root: the directory holding `crates/`, and the base of every relative
/// artifact path.
pub fn project_path() -> std::io::Result<PathBuf> {
    // Every crate lives in `<root>/crates/<crate>`.
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    fs::canonicalize(manifest_dir.ancestors().nth(2).unwrap_or(manifest_dir))
}

/// Joins a relative `path` onto the project root; absolute paths are returned unchanged. The
/// result is not required to exist.
pub fn resolve_project_path(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(project_path()?.join(path))
}
