use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tabcat")]
#[command(
    author,
    version,
    about = "Render delimiter-separated values as an aligned text table"
)]
pub struct Cli {
    /// Input file; reads stdin when omitted
    pub input: Option<PathBuf>,

    /// Field delimiter of the input records
    #[clap(short = 'd', long = "delimiter", default_value = ",")]
    pub delimiter: char,

    /// Treat every input row as body, without a headline
    #[clap(long = "no-header")]
    pub no_header: bool,

    /// String rendered between adjacent columns
    #[clap(short = 's', long = "separator")]
    pub separator: Option<String>,

    /// Display text substituted for empty cells
    #[clap(short = 'n', long = "null-value")]
    pub null_value: Option<String>,
}
