use anyhow::{bail, Result};
use clap::Parser;
use console::style;
use dialoguer::Select;
use quillnote_core::config::StoreConfig;
use quillnote_core::storage::{Note, NoteStore};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod bridge;
mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let mut config = StoreConfig::resolve(cli.config.as_deref()).await?;
    if let Some(dir) = &cli.container {
        config.base_dir = Some(dir.clone());
    }
    let store = NoteStore::new(config);

    let presentation = bridge::prepare(
        cli.mode.into(),
        cli.source.as_deref(),
        &store.config().note_extension,
    );
    if presentation.extension_mismatch {
        eprintln!(
            "{}",
            style("Source file is not a Quillnote document").yellow().bold()
        );
    } else if let Some(label) = &presentation.confirm_label {
        eprintln!("{}", style(label).bold());
    }

    // Enumeration failure shows an empty picker, never an error dialog.
    let notes = match store.list_notes().await {
        Ok(notes) => notes,
        Err(e) => {
            warn!("Could not list notes, presenting empty picker: {}", e);
            Vec::new()
        }
    };
    if notes.is_empty() {
        eprintln!("{}", style("No notes available").dim());
        return Ok(());
    }

    let chosen = choose(notes, cli.pick)?;

    // The grant-access handoff: the transport receives the exact location
    // of the chosen note.
    println!("{}", chosen.location().display());
    Ok(())
}

fn choose(mut notes: Vec<Note>, pick: Option<String>) -> Result<Note> {
    match pick {
        Some(title) => match notes.into_iter().find(|n| n.title() == title) {
            Some(note) => Ok(note),
            None => bail!("No note titled '{title}'"),
        },
        None => {
            let titles: Vec<&str> = notes.iter().map(Note::title).collect();
            let index = Select::new()
                .with_prompt("Choose a note")
                .items(&titles)
                .default(0)
                .interact()?;
            Ok(notes.swap_remove(index))
        }
    }
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
