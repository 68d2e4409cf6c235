use aws_sdk_s3::Client;

/// Synchronous facade over one authenticated S3 account.
///
/// Every operation blocks the calling thread on the private runtime; the
/// handle is read-only after construction and safe to reuse sequentially.
pub struct S3StorageClient {
    pub(crate) client: Client,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) region: Option<String>,
    pub verbose: u8,
}
