//! # Medialib Architecture
//!
//! Medialib keeps a catalog of media files (documents, images, audio, video)
//! together with keyword/value metadata, and answers "which files carry this
//! value?" from an inverted index. The catalog lives in memory; JSON files are
//! only read on `load` and written on `save`.
//!
//! The crate is a library first. The `medialib` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses the prompt line, renders results                  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses indexes, keeps the last result set                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per user command, returns CmdResult        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collection + Index (collection.rs, index.rs)               │
//! │  - Owns the records, keeps the value index in step          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Codec Layer (codec/)                                       │
//! │  - FileImport / FileExport traits                           │
//! │  - JsonCodec (production), InMemoryCodec (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr and nothing exits
//! the process. Diagnostics go through `tracing`; whoever embeds the library
//! decides whether to install a subscriber.
//!
//! ## Records and Validation
//!
//! A record's [`model::FileKind`] fixes the metadata keywords it must carry.
//! Records that fail validation on import are dropped, the rest are kept, and
//! every failure is reported back in one [`error::MediaError::ValidationFailed`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user command
//! - [`collection`]: The record set and its mutation rules
//! - [`index`]: Value → record positions
//! - [`codec`]: Serialized form, path resolution, import/export backends
//! - [`model`]: `MediaFile`, `Metadata`, `FileKind`
//! - [`validate`]: Required-keyword checks
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Prompt parsing and rendering for the binary (not part of the lib API)

pub mod api;
pub mod codec;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod validate;
