use anyhow::Result;
use clap::Subcommand;

pub mod export;
pub mod generate;
pub mod lookup;
pub mod report;

pub use export::ExportFormat;

#[derive(Subcommand, Default)]
pub enum Commands {
    /// Print every zone mapping with summary counts (default)
    #[default]
    Report,
    /// Resolve zone ids to key labels
    Lookup {
        /// Zone ids to resolve; unknown ids print as "Zone <id>"
        #[arg(required = true, allow_negative_numbers = true)]
        zones: Vec<i64>,
    },
    /// Print createKeyButton calls for the keyboard visualizer
    Generate,
    /// Dump the zone table in a machine-readable format
    Export {
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
}

impl Commands {
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Report => report::execute(),
            Commands::Lookup { zones } => lookup::execute(&zones),
            Commands::Generate => generate::execute(),
            Commands::Export { format } => export::execute(format),
        }
    }
}
