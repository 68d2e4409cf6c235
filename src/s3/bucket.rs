use crate::errors::{Result, SiteMgrError};
use crate::s3::models::S3StorageClient;
use crate::s3::policy::PolicyDocument;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::types::{
    BucketLocationConstraint, CreateBucketConfiguration, ErrorDocument, IndexDocument,
    WebsiteConfiguration,
};

/// Render an SDK error with its full context chain, verbatim.
pub(crate) fn storage_err<E>(err: E) -> SiteMgrError
where
    E: std::error::Error + 'static,
{
    SiteMgrError::Storage(DisplayErrorContext(err).to_string())
}

impl S3StorageClient {
    /// Get the names of all buckets in the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing call fails.
    pub fn all_buckets(&self) -> Result<Vec<String>> {
        self.runtime.block_on(async {
            let response = self
                .client
                .list_buckets()
                .send()
                .await
                .map_err(storage_err)?;

            Ok(response
                .buckets()
                .iter()
                .filter_map(|b| b.name().map(ToString::to_string))
                .collect())
        })
    }

    /// Get the keys of all objects in a bucket, following the SDK paginator.
    ///
    /// # Errors
    ///
    /// Returns an error if the bucket does not exist or a page fetch fails.
    pub fn all_objects(&self, bucket_name: &str) -> Result<Vec<String>> {
        self.runtime.block_on(async {
            let mut keys = Vec::new();
            let mut pages = self
                .client
                .list_objects_v2()
                .bucket(bucket_name)
                .into_paginator()
                .send();

            while let Some(page) = pages.next().await {
                let page = page.map_err(storage_err)?;
                for object in page.contents() {
                    if let Some(key) = object.key() {
                        keys.push(key.to_string());
                    }
                }
            }

            Ok(keys)
        })
    }

    /// Create a bucket, or reuse it if this account already owns it.
    ///
    /// A name taken by another account or invalid per the service's naming
    /// rules surfaces as an error.
    ///
    /// # Errors
    ///
    /// Returns an error for any creation failure other than
    /// `BucketAlreadyOwnedByYou`.
    pub fn init_bucket(&self, bucket_name: &str) -> Result<()> {
        self.runtime.block_on(async {
            let mut request = self.client.create_bucket().bucket(bucket_name);

            // us-east-1 is the one region that rejects a location constraint
            if let Some(region) = self.region.as_deref().filter(|r| *r != "us-east-1") {
                request = request.create_bucket_configuration(
                    CreateBucketConfiguration::builder()
                        .location_constraint(BucketLocationConstraint::from(region))
                        .build(),
                );
            }

            match request.send().await {
                Ok(_) => Ok(()),
                Err(err) => {
                    let service_err = err.into_service_error();
                    if service_err.is_bucket_already_owned_by_you() {
                        Ok(())
                    } else {
                        Err(storage_err(service_err))
                    }
                }
            }
        })
    }

    /// Attach the fixed public-read policy to a bucket.
    ///
    /// # Errors
    ///
    /// Returns an error if the policy cannot be serialized or the service
    /// rejects it.
    pub fn set_policy(&self, bucket_name: &str) -> Result<()> {
        let policy = PolicyDocument::public_read(bucket_name).to_json()?;

        self.runtime.block_on(async {
            self.client
                .put_bucket_policy()
                .bucket(bucket_name)
                .policy(policy)
                .send()
                .await
                .map_err(storage_err)?;

            Ok(())
        })
    }

    /// Configure the bucket for static website hosting with the fixed
    /// `index.html`/`error.html` documents.
    ///
    /// # Errors
    ///
    /// Returns an error if the website configuration cannot be built or the
    /// service rejects it.
    pub fn configure_website(&self, bucket_name: &str) -> Result<()> {
        let index = IndexDocument::builder()
            .suffix("index.html")
            .build()
            .map_err(storage_err)?;
        let error = ErrorDocument::builder()
            .key("error.html")
            .build()
            .map_err(storage_err)?;

        let website_config = WebsiteConfiguration::builder()
            .index_document(index)
            .error_document(error)
            .build();

        self.runtime.block_on(async {
            self.client
                .put_bucket_website()
                .bucket(bucket_name)
                .website_configuration(website_config)
                .send()
                .await
                .map_err(storage_err)?;

            Ok(())
        })
    }
}
