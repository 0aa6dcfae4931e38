use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vcucfg::report::OutputFormat;

#[derive(Parser)]
#[command(name = "vcucfg")]
#[command(
    about = "Parse VCU encoder configuration files and map them to codec parameters",
    long_about = None
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a config file and print its sections with inferred value types
    Parse {
        /// Path to the .cfg file
        config: PathBuf,

        /// Output format (defaults to the tool settings)
        #[arg(long, short = 'f', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Map a config file onto encoder parameters and print them
    Params {
        /// Path to the .cfg file
        config: PathBuf,

        /// Output format (defaults to the tool settings)
        #[arg(long, short = 'f', value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the sections and keys the parameter mapping understands
    Sections {
        /// Output format; json and toml include the mapping rules
        #[arg(long, short = 'f', value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the accepted pixel format names
    Formats,

    /// Resolve an encode job from a config file and show it (dry run)
    Encode {
        /// Path to the .cfg file
        #[arg(long, short = 'c', value_name = "CFG")]
        cfg: PathBuf,

        /// Input YUV file (overrides [INPUT] YUVFile)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Output bitstream file (overrides [OUTPUT] BitstreamFile)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// First picture to encode (overrides [RUN] FirstPicture)
        #[arg(long, short = 'f')]
        first_picture: Option<u32>,

        /// Number of pictures to encode, or ALL (overrides [RUN] MaxPicture)
        #[arg(long, short = 'm')]
        max_picture: Option<String>,
    },

    /// Show settings status and location, or create default settings if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}
