//! Preview collaborators for satchel.
//!
//! The session core only decides *which* strategy applies to a staged file;
//! this crate supplies the collaborators each strategy delegates to:
//!
//! - [`pager`] - asynchronous page counting for paged documents
//! - [`probe`] - image decoding for inline rendering
//! - [`export`] - saving a copy of a payload under its original name

mod config;
mod error;
mod export;
mod pager;
mod probe;

pub use config::{PreviewConfig, PreviewConfigBuilder};
pub use error::PreviewError;
pub use export::save_copy;
pub use pager::{page_count, start_page_count, PagerEvent};
pub use probe::{decode_image, ImageInfo};
