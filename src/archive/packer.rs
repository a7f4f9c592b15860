//! Packing a directory of numbered text files into an XBIN container

use std::path::Path;

use walkdir::WalkDir;

use crate::archive::naming::parse_entry_file_name;
use crate::error::{Error, Result};
use crate::formats::xbin::{TextEntry, XbinResource, write_xbin};

/// Pack a flat directory of `<digits>_<name>.<ext>` text files into an XBIN
/// container at `output_file`, returning the number of entries packed.
///
/// Files are encoded in ascending numeric-prefix order. Every file in the
/// directory must follow the naming convention and hold valid UTF-8 text.
pub fn pack_directory<P: AsRef<Path>>(input_dir: P, output_file: P) -> Result<usize> {
    let input_dir = input_dir.as_ref();
    if !input_dir.is_dir() {
        return Err(Error::NotADirectory(input_dir.to_path_buf()));
    }

    tracing::info!("Scanning directory: {:?}", input_dir);

    let mut entries = Vec::new();
    for dir_entry in WalkDir::new(input_dir).min_depth(1).max_depth(1) {
        let dir_entry = dir_entry?;
        if !dir_entry.file_type().is_file() {
            continue;
        }
        let file_name = dir_entry.file_name().to_string_lossy();
        let (index, name) = parse_entry_file_name(&file_name)?;
        let text = std::fs::read_to_string(dir_entry.path())?;
        entries.push(TextEntry { index, name, text });
    }

    // The numeric prefix determines on-disk entry order
    entries.sort_by_key(|e| e.index);

    tracing::info!("Found {} files, creating container", entries.len());

    let resource = XbinResource { entries };
    write_xbin(output_file.as_ref(), &resource)?;

    tracing::info!("Container created successfully");
    Ok(resource.len())
}
