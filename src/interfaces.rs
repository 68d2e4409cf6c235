use crate::errors::Result;
use crate::s3::S3StorageClient;
use mockall::automock;
use std::path::Path;

/// Interface for object-upload operations to facilitate testing
///
/// `sync_tree` depends on this seam rather than on the concrete client, so
/// the walk can be exercised without a network.
#[automock]
pub trait ObjectStore {
    fn upload_file(&self, bucket_name: &str, local_path: &Path, key: &str) -> Result<()>;
}

impl ObjectStore for S3StorageClient {
    fn upload_file(&self, bucket_name: &str, local_path: &Path, key: &str) -> Result<()> {
        S3StorageClient::upload_file(self, bucket_name, local_path, key)
    }
}
