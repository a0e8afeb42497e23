//! CLI argument definitions using clap

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::application::OutputFormat;

/// Convert flat organizational records into a nested org-chart tree
#[derive(Parser, Debug)]
#[command(name = "orgtree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Divisions JSON file
    // OsString so that an empty argument reaches us instead of failing in clap
    #[arg(value_hint = ValueHint::FilePath, value_parser = clap::value_parser!(OsString))]
    pub file: Option<OsString>,

    /// Output format (default: from config, else json)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file layered over the global one
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Debug level, repeat for more (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Print shell completions and exit
    #[arg(long, value_enum)]
    pub completions: Option<clap_complete::Shell>,
}
