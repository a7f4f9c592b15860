//! Error types for `xbinloc`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `xbinloc` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Container Header Errors ====================
    /// The file is not an XBIN container (missing XBIN magic).
    #[error("invalid XBIN magic: expected XBIN, found {0:?}")]
    InvalidXbinMagic([u8; 4]),

    /// The container's version tag is not the supported revision.
    #[error("unsupported XBIN version tag: {0:?}")]
    InvalidVersionTag([u8; 4]),

    /// The constant tag at header offset 12 does not match.
    #[error("invalid XBIN constant tag: {0:?}")]
    InvalidConstantTag([u8; 4]),

    // ==================== Container Data Errors ====================
    /// A field, name, or content read ran past the end of the container.
    #[error("unexpected end of container data")]
    UnexpectedEndOfData,

    /// A recorded offset points outside the container.
    #[error("offset {offset} out of bounds for container of {len} bytes")]
    InvalidOffset {
        /// The offending offset value.
        offset: u32,
        /// The container length in bytes.
        len: u64,
    },

    // ==================== Text Encoding Errors ====================
    /// A content code point does not fit in a 16-bit code unit.
    #[error("code point {ch:?} does not fit in a 16-bit code unit")]
    UnencodableCodePoint {
        /// The offending character.
        ch: char,
    },

    /// A name record does not hold valid UTF-8.
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    /// Content code units do not form valid UTF-16.
    #[error("UTF-16 conversion error: {0}")]
    Utf16Error(#[from] std::string::FromUtf16Error),

    // ==================== File System Errors ====================
    /// The pack source is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// An input filename does not follow the `<digits>_<name>` convention.
    #[error("invalid entry file name: {0}")]
    InvalidEntryFileName(String),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

// Add conversion from walkdir::Error
impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `xbinloc` operations.
pub type Result<T> = std::result::Result<T, Error>;
