use std::fs;
use std::path::PathBuf;

use super::types::{Args, Command};

/// Checks if a directory is readable.
///
/// # Errors
///
/// Returns an error if the directory does not exist, cannot be read, or
/// metadata lookups fail.
pub fn check_readable_dir(dir: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(dir);

    if path.is_dir() && fs::metadata(&path).is_ok() && fs::read_dir(&path).is_ok() {
        Ok(path)
    } else {
        Err(format!("The directory '{dir}' is not readable."))
    }
}

/// Validate the args for the selected subcommand
///
/// # Errors
///
/// Returns an error if a bucket name is empty.
pub fn validate(args: &Args) -> Result<(), String> {
    let bucket = match &args.command {
        Command::ListBuckets => return Ok(()),
        Command::ListBucketObjects { bucket }
        | Command::SetupBucket { bucket }
        | Command::Sync { bucket, .. } => bucket,
    };

    if bucket.trim().is_empty() {
        return Err("bucket name must not be empty".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_dir_accepts_cwd() {
        assert!(check_readable_dir(".").is_ok());
    }

    #[test]
    fn readable_dir_rejects_missing_path() {
        let err = check_readable_dir("/does/not/exist").unwrap_err();
        assert!(err.contains("not readable"));
    }

    #[test]
    fn validate_rejects_blank_bucket() {
        let args = Args {
            command: Command::SetupBucket {
                bucket: "  ".to_string(),
            },
            verbose: 0,
            region: None,
        };
        assert!(validate(&args).is_err());
    }
}
