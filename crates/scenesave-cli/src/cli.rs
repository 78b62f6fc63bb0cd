//! CLI argument definitions for scenesave.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "scenesave",
    version,
    about = "Scene-file save helper - parse, version, and place Maya scene files",
    long_about = "Parse legacy Maya scene filenames into their semantic fields,\n\
                  compute the next filename under the studio naming convention,\n\
                  and resolve job/scene/shot contexts to a save location."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Naming convention file (TOML); compiled-in defaults when omitted.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decompose a filename into its semantic fields.
    Parse(ParseArgs),

    /// Compute the next canonical filename for an existing one.
    Next(NextArgs),

    /// Plan the next save for a full filepath, resolving its context.
    Plan(PlanArgs),

    /// Show the scene/shot tree for a job.
    Tree(TreeArgs),

    /// List the configured discipline vocabulary.
    Disciplines,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Filename to decompose.
    #[arg(value_name = "FILENAME")]
    pub filename: String,

    /// Emit the record as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct NextArgs {
    /// Existing filename to derive the next one from.
    #[arg(value_name = "FILENAME")]
    pub filename: String,

    /// Version increment applied when no explicit version is set.
    #[arg(long = "step", default_value_t = 1)]
    pub step: i64,

    /// Set the version outright instead of incrementing.
    #[arg(long = "set-version", value_name = "N")]
    pub set_version: Option<u32>,

    /// Override the discipline tag.
    #[arg(long = "discipline", value_name = "TAG")]
    pub discipline: Option<String>,

    /// Override the artist initials.
    #[arg(long = "user", value_name = "INITIALS")]
    pub user: Option<String>,

    /// Attach an optional note.
    #[arg(long = "note", value_name = "TEXT")]
    pub note: Option<String>,

    /// Emit the result as JSON instead of plain text.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct PlanArgs {
    /// Full path of the currently open scene file.
    #[arg(value_name = "FILEPATH")]
    pub filepath: String,

    /// Version increment applied when no explicit version is set.
    #[arg(long = "step", default_value_t = 1)]
    pub step: i64,

    /// Set the version outright instead of incrementing.
    #[arg(long = "set-version", value_name = "N")]
    pub set_version: Option<u32>,

    /// Jobs root directory used to resolve contexts (default: /<server_root>).
    #[arg(long = "jobs-root", value_name = "DIR")]
    pub jobs_root: Option<PathBuf>,

    /// Emit the plan as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct TreeArgs {
    /// Job whose scenes and shots to list.
    #[arg(value_name = "JOB")]
    pub job: String,

    /// Jobs root directory used to resolve contexts (default: /<server_root>).
    #[arg(long = "jobs-root", value_name = "DIR")]
    pub jobs_root: Option<PathBuf>,

    /// Include scenes and shots on the configured ignore lists.
    #[arg(long = "all")]
    pub all: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
