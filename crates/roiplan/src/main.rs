use std::path::PathBuf;

use clap::Parser;
use roiplan::data::storage::DataDirectory;
use roiplan::report::{ReportFormat, render_report};
use roiplan::{App, init_logging};

#[derive(Parser, Debug)]
#[command(name = "roiplan")]
#[command(about = "A terminal ROI sandbox for platform-led operating models")]
struct Args {
    /// Path to the data directory (default: ~/.roiplan/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Root directory for the theory-to-case markdown documents
    #[arg(long)]
    docs_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Print the configured scenario's results and exit instead of starting the dashboard
    #[arg(short, long, value_enum)]
    report: Option<ReportFormat>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(DataDirectory::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let storage = DataDirectory::new(data_dir);
    let config = storage.load_config_or_default();

    if let Some(format) = args.report {
        let output = render_report(&config.defaults, format)?;
        print!("{output}");
        return Ok(());
    }

    let docs_root = args
        .docs_dir
        .or_else(|| config.docs_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let mut app = App::new(config, docs_root, Some(storage));

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
