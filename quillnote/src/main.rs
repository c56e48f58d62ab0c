use anyhow::Result;
use clap::Parser;
use quillnote::app::Quillnote;
use quillnote::cli::{Cli, Commands};
use quillnote::commands;
use quillnote_core::config::StoreConfig;
use quillnote_core::storage::NoteStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let mut config = StoreConfig::resolve(cli.config.as_deref()).await?;
    if let Some(dir) = &cli.container {
        config.base_dir = Some(dir.clone());
    }
    let app = Quillnote::new(NoteStore::new(config));

    match cli.command {
        Commands::List => commands::handle_list(app).await?,
        Commands::Add(args) => commands::handle_add(args, app).await?,
        Commands::Show(args) => commands::handle_show(args, app).await?,
        Commands::Edit(args) => commands::handle_edit(args, app).await?,
    }

    Ok(())
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
