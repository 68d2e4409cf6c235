pub mod bucket;
pub mod client;
pub mod models;
pub mod policy;
pub mod upload;

// Re-export types for convenient access from other modules
pub use models::S3StorageClient;
pub use policy::PolicyDocument;
pub use upload::content_type_for;
