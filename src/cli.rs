use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "travelbudget",
    version,
    about = "Estimate a travel budget from a structured plan"
)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Estimate a budget (default)
    Estimate {
        /// JSON travel plan; the built-in Paris example is used when omitted
        #[arg(short, long)]
        plan: Option<PathBuf>,

        /// Ask the configured language model to refine the estimate
        #[arg(short, long)]
        refine: bool,
    },

    /// Show accommodation prices per quality tier
    Prices {
        #[arg(short, long)]
        destination: String,

        #[arg(short, long, default_value = "hotel")]
        accommodation_type: String,
    },
}

impl Cli {
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Estimate {
            plan: None,
            refine: false,
        })
    }
}
