use crate::errors::{Result, SiteMgrError};
use crate::s3::models::S3StorageClient;
use crate::utils::log_utils;
use aws_config::BehaviorVersion;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;

impl S3StorageClient {
    /// Create a new client from the ambient AWS configuration chain.
    ///
    /// Credentials and the default region are resolved the way the AWS CLI
    /// resolves them (env vars, profile, instance metadata); `region`
    /// overrides the chain when given.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn new(region: Option<String>, verbose: u8) -> Result<Self> {
        // Runtime is created once and reused for every operation
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| SiteMgrError::Runtime(format!("Failed to create runtime: {e}")))?;

        let region_provider = RegionProviderChain::first_try(region.map(Region::new))
            .or_default_provider()
            .or_else(Region::new("us-east-1"));

        let aws_config = runtime.block_on(
            aws_config::defaults(BehaviorVersion::latest())
                .region(region_provider)
                .load(),
        );

        let resolved_region = aws_config.region().map(ToString::to_string);

        if verbose >= 2 {
            log_utils::debug(
                &format!(
                    "Created S3 client in region {}",
                    resolved_region.as_deref().unwrap_or("(none)")
                ),
                verbose,
            );
        }

        Ok(Self {
            client: Client::new(&aws_config),
            runtime,
            region: resolved_region,
            verbose,
        })
    }

    /// Build a client around a preconfigured SDK client.
    ///
    /// Used by tests to substitute a replay transport; also the escape hatch
    /// for custom endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn with_client(client: Client, region: Option<String>, verbose: u8) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| SiteMgrError::Runtime(format!("Failed to create runtime: {e}")))?;

        Ok(Self {
            client,
            runtime,
            region,
            verbose,
        })
    }

    /// Region the client was resolved to, if any
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}
