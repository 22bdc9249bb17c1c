use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "listctl")]
#[command(version, about = "Runs list scripts against a growable array", long_about = None)]
pub struct Cli {
    /// The .lst script file to run
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Initial capacity of the array
    #[arg(short, long, allow_negative_numbers = true)]
    pub capacity: Option<i64>,

    /// Continue after a failing command instead of stopping
    #[arg(short, long)]
    pub keep_going: bool,

    /// Run the built-in demonstration scenarios
    #[arg(short, long)]
    pub demo: bool,

    /// Set verbose level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
