//! # JSON Schema Registry
//!
//! A network-accessible registry of JSON Schema documents that also validates
//! arbitrary JSON payloads against previously registered schemas.
//!
//! ## Features
//!
//! - **Create-once schemas**: a schema ID, once written, is immutable
//! - **Storage backends**: in-memory (dev/testing), directory-backed files
//! - **Null normalization**: explicit `null` object fields are treated as
//!   absent before validation
//! - **REST API**: upload, download, and validate endpoints
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │              Schema Registry Service            │
//! ├────────────────────────────────────────────────┤
//! │  REST API                                       │
//! │  ├── POST /schema/{id}    - Upload schema       │
//! │  ├── GET  /schema/{id}    - Download schema     │
//! │  └── POST /validate/{id}  - Validate document   │
//! ├────────────────────────────────────────────────┤
//! │  Registry Service                               │
//! │  ├── Schema compilation (jsonschema)            │
//! │  ├── Null normalization                         │
//! │  └── Error classification                       │
//! ├────────────────────────────────────────────────┤
//! │  Storage Backends                               │
//! │  ├── Memory (development/testing)               │
//! │  └── File (one file per schema ID)              │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use schema_registry::{RegistryConfig, SchemaRegistry};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> schema_registry::SchemaResult<()> {
//! let registry = SchemaRegistry::new(RegistryConfig::memory())?;
//!
//! let schema = br#"{"type":"object","required":["name"]}"#;
//! registry.create_schema("user", schema).await?;
//!
//! registry.validate_json(br#"{"name":"alice","age":null}"#, "user").await?;
//! # Ok(())
//! # }
//! ```
//!
//! The registry never versions, updates, or deletes schemas. Re-uploading
//! under an existing ID is a conflict even when the bytes are identical.

pub mod compiler;
pub mod config;
pub mod error;
pub mod normalize;
pub mod registry;
pub mod server;
pub mod storage;

pub use config::{Conf, RegistryConfig, ServerConfig, StorageConfig};
pub use error::{SchemaError, SchemaResult};
pub use normalize::strip_nulls;
pub use registry::SchemaRegistry;
pub use server::SchemaServer;
pub use storage::{create_storage, FileStorage, MemoryStorage, Storage, StorageBackend};
