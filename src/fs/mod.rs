//! File System Module
//!
//! Provides the in-memory virtual file system the shell and its scripts
//! operate on. State lives only for the session; nothing is persisted.

pub mod types;
pub mod vfs;

pub use types::*;
pub use vfs::Vfs;
