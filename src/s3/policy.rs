use crate::errors::Result;
use serde::Serialize;

/// A bucket access policy, serialized to the service's JSON wire format.
///
/// Typed rather than string-templated so bucket names never get interpolated
/// into a raw document.
#[derive(Debug, Serialize)]
pub struct PolicyDocument {
    #[serde(rename = "Version")]
    version: &'static str,
    #[serde(rename = "Statement")]
    statement: Vec<PolicyStatement>,
}

#[derive(Debug, Serialize)]
struct PolicyStatement {
    #[serde(rename = "Sid")]
    sid: &'static str,
    #[serde(rename = "Effect")]
    effect: &'static str,
    #[serde(rename = "Principal")]
    principal: &'static str,
    #[serde(rename = "Action")]
    action: &'static str,
    #[serde(rename = "Resource")]
    resource: String,
}

impl PolicyDocument {
    /// The fixed-shape policy granting anonymous `GetObject` on every key
    /// under the bucket.
    #[must_use]
    pub fn public_read(bucket_name: &str) -> Self {
        Self {
            version: "2012-10-17",
            statement: vec![PolicyStatement {
                sid: "PublicReadGetObject",
                effect: "Allow",
                principal: "*",
                action: "s3:GetObject",
                resource: format!("arn:aws:s3:::{bucket_name}/*"),
            }],
        }
    }

    /// Serialize to the JSON form the service expects.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
