//! CLI command for packing a directory into a container

use std::path::Path;

use crate::archive::pack_directory;

pub fn execute(input_dir: &Path, output_file: &Path, quiet: bool) -> anyhow::Result<()> {
    let count = pack_directory(input_dir, output_file)?;

    if !quiet {
        println!("Packed {count} entries into {}", output_file.display());
    }

    Ok(())
}
