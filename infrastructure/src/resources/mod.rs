//! Resource bundle adapters.

mod directory;

pub use directory::DirectoryResourceBundle;
