use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::ATTACHLIMITS_VERSION;

#[derive(Parser, Debug)]
#[clap(version = ATTACHLIMITS_VERSION)]
pub struct Cli {
    /// Logging verbosity [OFF, ERROR, WARN, INFO, DEBUG, TRACE]
    #[arg(global = true, short, long, default_value_t = LevelFilter::Warn)]
    pub verbosity: LevelFilter,

    #[clap(subcommand)]
    pub command: Commands,
}

/// How results are printed
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Yaml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve how many EBS volumes can be attached to the given instance types
    Resolve {
        /// Instance types, e.g. m7i.4xlarge
        #[clap(required = true, num_args = 1..)]
        instance_types: Vec<String>,

        /// Output format
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Human)]
        output: OutputFormat,
    },

    /// Show whether an instance type is built on Nitro and its shared attachment budget
    Nitro {
        /// Instance type, e.g. t2.micro
        #[clap(index = 1)]
        instance_type: String,
    },

    /// Show the attachment slots taken by local devices of an instance type
    Reserved {
        /// Instance type, e.g. g5.xlarge
        #[clap(index = 1)]
        instance_type: String,

        /// Output format
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Human)]
        output: OutputFormat,
    },

    /// Show the number of entries in each reference table
    Tables,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Resolve { .. } => "resolve",
            Commands::Nitro { .. } => "nitro",
            Commands::Reserved { .. } => "reserved",
            Commands::Tables => "tables",
        }
    }
}
