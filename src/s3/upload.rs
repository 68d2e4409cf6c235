use crate::errors::{Result, SiteMgrError};
use crate::s3::bucket::storage_err;
use crate::s3::models::S3StorageClient;
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;

/// Map an object key's filename extension to a MIME type.
///
/// Static table, `text/plain` when the extension is unrecognized or absent.
#[must_use]
pub fn content_type_for(key: &str) -> &'static str {
    let ext = key
        .rsplit('/')
        .next()
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("html" | "htm") => "text/html",
        Some("css") => "text/css",
        Some("js" | "mjs") => "text/javascript",
        Some("json") => "application/json",
        Some("xml") => "application/xml",
        Some("txt") => "text/plain",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("pdf") => "application/pdf",
        _ => "text/plain",
    }
}

impl S3StorageClient {
    /// Upload one local file to a bucket at the given key, overwriting any
    /// existing object.
    ///
    /// The content-type header is derived from the key's extension; the body
    /// streams from disk rather than loading into memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the upload fails; the
    /// caller's walk aborts on the first failure.
    pub fn upload_file(&self, bucket_name: &str, local_path: &Path, key: &str) -> Result<()> {
        let content_type = content_type_for(key);

        self.runtime.block_on(async {
            let body = ByteStream::from_path(local_path).await.map_err(|e| {
                SiteMgrError::Storage(format!(
                    "Failed to read '{}': {e}",
                    local_path.display()
                ))
            })?;

            self.client
                .put_object()
                .bucket(bucket_name)
                .key(key)
                .content_type(content_type)
                .body(body)
                .send()
                .await
                .map_err(storage_err)?;

            Ok(())
        })
    }
}
