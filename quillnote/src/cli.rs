use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Quillnote: plain-text notes in a container shared with the document
/// picker.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the store configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the shared container's base directory.
    #[arg(long, global = true)]
    pub container: Option<PathBuf>,

    /// Increase verbosity (use multiple times for more).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the notes currently in the shared container.
    List,

    /// Create a new note and save it to the shared container.
    Add(AddArgs),

    /// Print a note's text.
    Show(ShowArgs),

    /// Edit a note's text and save it back.
    Edit(EditArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Title for the new note (prompted for when omitted).
    pub title: Option<String>,

    /// Initial text for the note.
    #[arg(long)]
    pub text: Option<String>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Title of the note to show.
    pub title: String,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Title of the note to edit.
    pub title: String,

    /// Replacement text; opens $EDITOR when omitted.
    #[arg(long)]
    pub text: Option<String>,
}
