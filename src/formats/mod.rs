//! File format handlers

pub mod xbin;

// Re-export main container types for convenience
pub use xbin::{TextEntry, XbinResource, read_xbin, write_xbin};
