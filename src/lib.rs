pub mod args;
pub mod errors;
pub mod interfaces;
pub mod s3;
pub mod sync;
pub mod utils {
    pub mod log_utils;
}

pub use args::{Args, Command};
pub use errors::{Result, SiteMgrError};

use crate::s3::S3StorageClient;
use crate::utils::log_utils::Logger;

/// Run the selected subcommand against a freshly constructed storage client.
///
/// The client is built once here and shared by reference; nothing else holds
/// process-wide state.
///
/// # Errors
///
/// Returns an error if the client cannot be constructed or the subcommand's
/// storage operations fail.
pub fn run_app(args: &Args) -> Result<()> {
    let logger = Logger::new(args.verbose);
    let manager = S3StorageClient::new(args.region.clone(), args.verbose)?;

    match &args.command {
        Command::ListBuckets => {
            for name in manager.all_buckets()? {
                println!("{name}");
            }
        }
        Command::ListBucketObjects { bucket } => {
            for key in manager.all_objects(bucket)? {
                println!("{key}");
            }
        }
        Command::SetupBucket { bucket } => {
            manager.init_bucket(bucket)?;
            manager.set_policy(bucket)?;
            manager.configure_website(bucket)?;
            logger.info(&format!("bucket '{bucket}' configured for website hosting"));
        }
        Command::Sync { path, bucket } => {
            sync::sync_tree(&manager, path, bucket, &logger)?;
        }
    }

    Ok(())
}
