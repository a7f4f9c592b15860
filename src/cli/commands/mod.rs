use clap::Subcommand;
use std::path::PathBuf;

pub mod list;
pub mod pack;
pub mod unpack;

#[derive(Subcommand)]
pub enum Commands {
    /// Pack a directory of numbered text files into a container
    Pack {
        /// Source directory of `<digits>_<name>.txt` files
        input_dir: PathBuf,

        /// Output container file
        output_file: PathBuf,

        /// Suppress summary output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Unpack a container into a directory of text files
    Unpack {
        /// Source container file
        input_file: PathBuf,

        /// Output directory
        output_dir: PathBuf,

        /// Suppress summary output
        #[arg(short, long)]
        quiet: bool,
    },

    /// List entries in a container
    List {
        /// Container file to read
        path: PathBuf,

        /// Maximum entries to display
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Pack {
                input_dir,
                output_file,
                quiet,
            } => pack::execute(input_dir, output_file, *quiet),
            Commands::Unpack {
                input_file,
                output_dir,
                quiet,
            } => unpack::execute(input_file, output_dir, *quiet),
            Commands::List { path, limit, json } => list::execute(path, *limit, *json),
        }
    }
}
