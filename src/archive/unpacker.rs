//! Unpacking an XBIN container into a directory of text files

use std::fs;
use std::path::Path;

use crate::archive::naming::entry_file_name;
use crate::error::Result;
use crate::formats::xbin::read_xbin;

/// Unpack an XBIN container into `output_dir`, one `<index>_<name>.txt`
/// file per entry, returning the number of entries written.
///
/// The index is the entry's content start offset in the container; it keeps
/// the original entry order under a numeric sort but is not a stored
/// sequence number.
pub fn unpack_archive<P: AsRef<Path>>(input_file: P, output_dir: P) -> Result<usize> {
    let output_dir = output_dir.as_ref();

    let resource = read_xbin(input_file.as_ref())?;
    tracing::info!("Container holds {} entries, extracting", resource.len());

    fs::create_dir_all(output_dir)?;
    for entry in &resource.entries {
        let path = output_dir.join(entry_file_name(entry.index, &entry.name));
        fs::write(path, &entry.text)?;
    }

    tracing::info!("Extraction complete");
    Ok(resource.len())
}
