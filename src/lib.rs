//! # xbinloc
//!
//! A pure-Rust library and CLI for the XBIN/RLOC binary container format
//! that holds a game's localized text assets.
//!
//! ## Quick Start
//!
//! ### Working with containers on disk
//!
//! ```no_run
//! use xbinloc::archive::{pack_directory, unpack_archive};
//!
//! // Pack a directory of <digits>_<name>.txt files
//! let packed = pack_directory("messages/", "messages.bin")?;
//! println!("Packed {packed} entries");
//!
//! // Unpack a container back into text files
//! unpack_archive("messages.bin", "output/")?;
//! # Ok::<(), xbinloc::Error>(())
//! ```
//!
//! ### Working with container bytes
//!
//! ```no_run
//! use xbinloc::formats::xbin::{parse_xbin_bytes, read_xbin};
//!
//! let resource = read_xbin("messages.bin")?;
//! for entry in &resource.entries {
//!     println!("{}: {}", entry.name, entry.text);
//! }
//! # Ok::<(), xbinloc::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `xbinloc` command-line binary

pub mod archive;
pub mod error;
pub mod formats;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::archive::{pack_directory, unpack_archive};
    pub use crate::error::{Error, Result};
    pub use crate::formats::xbin::{
        TextEntry, XbinResource, encode_xbin_bytes, parse_xbin_bytes, read_xbin, write_xbin,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
