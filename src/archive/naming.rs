//! Entry file naming conventions
//!
//! Source files are named `<digits>_<name>.<ext>`: the digits give the sort
//! key, and the rest with the extension stripped becomes the stored entry
//! name. Recovered entries are written back as `<index>_<name>.txt`.

use std::path::Path;

use crate::error::{Error, Result};

/// Split `<digits>_<name>.<ext>` into the numeric sort key and entry name.
pub fn parse_entry_file_name(file_name: &str) -> Result<(u64, String)> {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::InvalidEntryFileName(file_name.to_string()))?;

    let (digits, name) = stem
        .split_once('_')
        .ok_or_else(|| Error::InvalidEntryFileName(file_name.to_string()))?;
    let index = digits
        .parse::<u64>()
        .map_err(|_| Error::InvalidEntryFileName(file_name.to_string()))?;
    if name.is_empty() {
        return Err(Error::InvalidEntryFileName(file_name.to_string()));
    }

    Ok((index, name.to_string()))
}

/// Output file name for a recovered entry.
pub fn entry_file_name(index: u64, name: &str) -> String {
    format!("{index}_{name}.txt")
}
