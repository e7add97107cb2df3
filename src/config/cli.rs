use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cpf-gen")]
#[command(about = "Generate and validate Brazilian CPF numbers")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write random valid CPFs to a file, one per line
    Generate(GenerateArgs),
    /// Check CPF candidates given as arguments or read from a file
    Validate(ValidateArgs),
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[arg(long, short = 'n', help = "Number of CPFs to generate [default: 15000]")]
    pub count: Option<usize>,

    #[arg(long, short = 'o', help = "Output file [default: cpfs.csv]")]
    pub output: Option<String>,

    #[arg(long, help = "Fixed RNG seed for reproducible output")]
    pub seed: Option<u64>,

    #[arg(long, help = "TOML config file with a [generation] section")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    #[arg(help = "Candidates, e.g. 11144477735")]
    pub candidates: Vec<String>,

    #[arg(long, short = 'i', help = "File with one candidate per line")]
    pub input: Option<PathBuf>,

    #[arg(long, help = "Print the report as JSON")]
    pub json: bool,

    #[arg(long, help = "Exit with an error if any candidate is invalid")]
    pub strict: bool,
}
