use clap::Parser;

#[derive(Parser)]
#[command(name = "sync-runner")]
#[command(about = "Keeps live team boards in step with their template boards")]
#[command(version)]
pub struct Cli {
    /// Run a single merge pass and exit instead of looping on the
    /// configured interval
    #[arg(long)]
    pub once: bool,

    /// Config directory (overrides SYNC_CONFIG_DIR)
    #[arg(long)]
    pub config_dir: Option<String>,
}
