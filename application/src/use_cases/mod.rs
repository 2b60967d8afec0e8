//! Use cases
//!
//! - [`load_content::ContentLoader`]: resolve, open and decode one dataset
//! - [`content_provider::ContentProvider`]: the read API used by the rest of the application

pub mod content_provider;
pub mod load_content;
