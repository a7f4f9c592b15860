//! Directory-level pack and unpack operations
//!
//! Wraps the XBIN codec with the filesystem conventions the game's text
//! dumps use: numbered source files in, numbered `.txt` files out.

pub mod naming;
mod packer;
mod unpacker;

pub use packer::pack_directory;
pub use unpacker::unpack_archive;
