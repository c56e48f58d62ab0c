use crate::bridge::PickerMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Quillnote document picker: lists the shared notes and grants the
/// requesting process access to the chosen one.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Presentation mode requested by the transport.
    #[arg(long, value_enum, default_value_t = ModeArg::Import)]
    pub mode: ModeArg,

    /// Source file supplied by the transport for export/move requests.
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Pick the note with this title without prompting.
    #[arg(long)]
    pub pick: Option<String>,

    /// Path to the store configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the shared container's base directory.
    #[arg(long)]
    pub container: Option<PathBuf>,

    /// Increase verbosity (use multiple times for more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors.
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Import,
    Open,
    Export,
    Move,
}

impl From<ModeArg> for PickerMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Import => PickerMode::Import,
            ModeArg::Open => PickerMode::Open,
            ModeArg::Export => PickerMode::ExportToService,
            ModeArg::Move => PickerMode::MoveToService,
        }
    }
}
