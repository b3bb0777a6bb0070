use clap::Parser;
use internship_console::core::config;
use internship_console::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "internship-console",
    about = "Admin console for the PM Internship Scheme backend"
)]
struct Args {
    /// Backend base URL (overrides config file and CONSOLE_API_BASE)
    #[arg(long)]
    api_base: Option<String>,

    /// Config file to use instead of ~/.internship-console/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config(args.config.as_deref()).map_err(std::io::Error::other)?;
    let resolved = config::resolve(&file_config, args.api_base.as_deref());

    // File logger: the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!(
        "Internship console starting up (api base: '{}', log level: {})",
        resolved.api_base,
        resolved.log_level
    );

    tui::run(resolved)
}
