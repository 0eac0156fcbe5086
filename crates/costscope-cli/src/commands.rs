use crate::args::{Cli, Commands};
use crate::output;
use anyhow::Result;
use costscope_runtime::{Client, Config, StderrLog};
use std::sync::Arc;

pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.root.as_deref())?;
    let client = Client::new(config, Arc::new(StderrLog));

    match cli.command {
        Commands::Scan { no_cache } => {
            let snapshot = client.scan_all(!no_cache).await?;
            output::print_snapshot(&snapshot, &cli.format)
        }
        Commands::Sessions { project } => {
            let sessions = client.sessions_of(&project).await?;
            output::print_sessions(&project, &sessions, &cli.format)
        }
        Commands::Detail {
            project,
            session_id,
        } => {
            let detail = client.detail_of(&project, &session_id).await?;
            output::print_detail(&detail, &cli.format)
        }
        Commands::Refresh => {
            let report = client.refresh().await?;
            output::print_refresh(&report, &cli.format)
        }
    }
}
