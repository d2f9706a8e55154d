//! Core types and state transitions for satchel.
//!
//! This crate provides the fundamental data structures used throughout
//! the satchel workspace: staged file handles, the in-memory blob store,
//! the session registry with its preview selection, and preview strategy
//! dispatch.

mod blob;
mod error;
mod format;
mod handle;
mod session;
mod stage;
mod strategy;

pub use blob::{BlobId, BlobStore};
pub use error::StageError;
pub use format::format_file_size;
pub use handle::{FileHandle, HandleId};
pub use session::Session;
pub use stage::{stage_file, stage_files, StagedFile};
pub use strategy::{resolve_strategy, PreviewStrategy};
