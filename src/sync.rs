use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::errors::{Result, SiteMgrError};
use crate::interfaces::ObjectStore;
use crate::utils::log_utils::Logger;

/// Upload every regular file under `root` to `bucket_name`.
///
/// The root is canonicalized first, so a missing path fails before any
/// network call. Files upload one at a time in filesystem listing order;
/// directories are traversed, never uploaded. Upload-only: nothing is ever
/// deleted remotely, and the first failed upload aborts the rest of the walk.
///
/// # Errors
///
/// Returns an error if the root cannot be resolved, a directory entry cannot
/// be read, or an upload fails.
pub fn sync_tree(
    store: &dyn ObjectStore,
    root: &Path,
    bucket_name: &str,
    logger: &Logger,
) -> Result<()> {
    let root = root.canonicalize()?;

    for entry in WalkDir::new(&root) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let key = object_key(&root, entry.path())?;
        logger.info(&format!(
            "uploading {} as {key}",
            entry.path().display()
        ));
        store.upload_file(bucket_name, entry.path(), &key)?;
    }

    Ok(())
}

/// Derive an object key from a file's path relative to the sync root:
/// components joined with `/` regardless of platform separator.
///
/// # Errors
///
/// Returns an error if the path is outside the root or a component is not
/// valid UTF-8.
pub fn object_key(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| SiteMgrError::InvalidPath(format!("{} is outside the sync root", path.display())))?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component.as_os_str().to_str() {
            Some(part) => parts.push(part),
            None => {
                return Err(SiteMgrError::InvalidPath(path.display().to_string()));
            }
        }
    }

    Ok(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn key_is_relative_to_root_with_forward_slashes() {
        let root = PathBuf::from("/srv/site");
        let file = root.join("css").join("app.css");
        assert_eq!(object_key(&root, &file).unwrap(), "css/app.css");
    }

    #[test]
    fn top_level_file_keeps_bare_name() {
        let root = PathBuf::from("/srv/site");
        assert_eq!(
            object_key(&root, &root.join("index.html")).unwrap(),
            "index.html"
        );
    }

    #[test]
    fn path_outside_root_is_rejected() {
        let root = PathBuf::from("/srv/site");
        let stray = PathBuf::from("/srv/other/index.html");
        assert!(matches!(
            object_key(&root, &stray),
            Err(SiteMgrError::InvalidPath(_))
        ));
    }
}
