// Wed Jan 15 2026 - Alex

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "opcode-extractor")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Map opcodes as defined in an opcode map file for a game executable", long_about = None)]
pub struct Args {
    /// The opcode map to use
    pub opcode_map_file: PathBuf,

    /// The game executable to map
    pub game_executable: PathBuf,

    /// Dump every decoded case, not only the mapped ones. Unmapped slots are
    /// written as Index_<slot>; unrecognised handlers as Index_unknown
    #[arg(default_value_t = false, action = ArgAction::Set)]
    pub dump_all_opcodes: bool,

    /// Write the opcode map as JSON to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep jump-table order in the JSON output instead of sorting by opcode
    #[arg(long)]
    pub keep_order: bool,

    /// Abort when the switch count differs from the expected count
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    #[arg(short, long)]
    pub quiet: bool,

    #[arg(long)]
    pub no_color: bool,
}
