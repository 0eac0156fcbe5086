use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "costscope",
    about = "Cost and usage analytics for AI coding assistant session logs",
    version
)]
pub struct Cli {
    /// Log root directory (default: COSTSCOPE_ROOT or ~/.claude/projects)
    #[arg(long, global = true)]
    pub root: Option<String>,

    /// Output format (table, json)
    #[arg(long, global = true, default_value = "table")]
    pub format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan all projects and print the snapshot
    Scan {
        /// Force a fresh scan instead of serving a cached snapshot
        #[arg(long)]
        no_cache: bool,
    },
    /// List the sessions of one project
    Sessions {
        /// Project directory name under the log root
        project: String,
    },
    /// Show the per-message breakdown of one session
    Detail {
        /// Project directory name under the log root
        project: String,
        /// Session id as recorded in the log file
        session_id: String,
    },
    /// Drop the snapshot cache and rescan
    Refresh,
}
