//! CLI command for unpacking a container into a directory

use std::path::Path;

use crate::archive::unpack_archive;

pub fn execute(input_file: &Path, output_dir: &Path, quiet: bool) -> anyhow::Result<()> {
    let count = unpack_archive(input_file, output_dir)?;

    if !quiet {
        println!("Unpacked {count} entries into {}", output_dir.display());
    }

    Ok(())
}
