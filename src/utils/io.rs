// src/utils/io.rs
use std::path::PathBuf;

/// Get the application data directory. Nothing is created here; writers create
/// the directories they need.
pub fn get_app_data_dir() -> Option<PathBuf> {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "passforge", "passforge") {
        Some(proj_dirs.data_dir().to_path_buf())
    } else {
        log::error!("Could not determine data directory");
        None
    }
}

/// Create the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &std::path::Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent)
        }
        _ => Ok(()),
    }
}
