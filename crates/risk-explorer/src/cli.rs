use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "risk-explorer",
    version,
    about = "Browse AI risk sources and risk management measures"
)]
pub(crate) struct Args {
    /// Dataset path; overrides `data_path` from the config file.
    #[arg(long)]
    pub(crate) data: Option<PathBuf>,
    #[arg(long, default_value = "config/explorer.toml")]
    pub(crate) config: PathBuf,
    #[arg(long)]
    pub(crate) category: Option<String>,
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Print both lists to stdout instead of starting the TUI.
    #[arg(long)]
    pub(crate) print: bool,
    #[arg(long, default_value = "logs")]
    pub(crate) log_dir: PathBuf,
    #[arg(long, default_value_t = false)]
    pub(crate) log_to_stderr: bool,
}
