use std::fs;
use std::path::Path;

use super::SiteError;

/// Brings a destination directory in line with a static asset source.
///
/// The CLI runs this before page generation; the conversion core never does.
pub trait AssetSync {
    fn sync(&self, source: &Path, destination: &Path) -> Result<(), SiteError>;
}

/// Clears the destination, then copies the source tree into it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssetSync;

impl AssetSync for FsAssetSync {
    fn sync(&self, source: &Path, destination: &Path) -> Result<(), SiteError> {
        if !source.is_dir() {
            return Err(SiteError::MissingSource(source.to_path_buf()));
        }
        clean_directory(destination)?;
        copy_directory(source, destination)
    }
}

/// Empties `dir`, creating it if it does not exist.
pub fn clean_directory(dir: &Path) -> Result<(), SiteError> {
    if !dir.exists() {
        log::info!("Creating directory: {}", dir.display());
        return fs::create_dir_all(dir).map_err(SiteError::io(dir));
    }

    for entry in fs::read_dir(dir).map_err(SiteError::io(dir))? {
        let path = entry.map_err(SiteError::io(dir))?.path();
        let file_type = fs::symlink_metadata(&path)
            .map_err(SiteError::io(&path))?
            .file_type();
        if file_type.is_dir() {
            fs::remove_dir_all(&path).map_err(SiteError::io(&path))?;
            log::info!("Removed subdirectory: {}", path.display());
        } else {
            fs::remove_file(&path).map_err(SiteError::io(&path))?;
            log::info!("Removed file: {}", path.display());
        }
    }
    Ok(())
}

/// Recursively copies the contents of `source` into `destination`.
pub fn copy_directory(source: &Path, destination: &Path) -> Result<(), SiteError> {
    if !destination.exists() {
        fs::create_dir_all(destination).map_err(SiteError::io(destination))?;
    }

    for entry in fs::read_dir(source).map_err(SiteError::io(source))? {
        let from = entry.map_err(SiteError::io(source))?.path();
        let Some(name) = from.file_name() else {
            continue;
        };
        let to = destination.join(name);
        if from.is_dir() {
            copy_directory(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(SiteError::io(&from))?;
            log::info!("Copied {} to {}", from.display(), to.display());
        }
    }
    Ok(())
}
