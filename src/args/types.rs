use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::validators::{check_readable_dir, validate};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Deploy static websites to S3", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Print extra stuff (use -v -v or --verbose --verbose for even more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Override the region from the ambient AWS configuration
    #[arg(long, global = true, value_name = "REGION")]
    pub region: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List all buckets in the account
    ListBuckets,

    /// List all objects in a bucket
    ListBucketObjects {
        /// Bucket to list
        bucket: String,
    },

    /// Create a bucket and configure it for public website hosting
    SetupBucket {
        /// Bucket to create or reuse
        bucket: String,
    },

    /// Upload every file under a local directory to a bucket
    Sync {
        /// Local directory to walk
        #[arg(value_name = "PATH", value_parser = check_readable_dir)]
        path: PathBuf,
        /// Destination bucket
        bucket: String,
    },
}

impl Args {
    /// Validate the arguments for the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid for the selected subcommand.
    pub fn validate(&self) -> Result<(), String> {
        validate(self)
    }
}
