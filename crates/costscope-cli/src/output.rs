use anyhow::Result;
use costscope_types::{RefreshReport, SessionDetail, SessionSummary, Snapshot};

pub fn print_snapshot(snapshot: &Snapshot, format: &str) -> Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
        return Ok(());
    }

    println!(
        "{:<30} {:>8} {:>12}  {}",
        "PROJECT", "SESSIONS", "COST", "LAST ACTIVITY"
    );
    for project in &snapshot.projects {
        println!(
            "{:<30} {:>8} {:>12.4}  {}",
            project.name, project.total_sessions, project.total_cost, project.last_activity
        );
    }
    println!(
        "\n{} project(s), scanned at {} in {} ms",
        snapshot.total_projects, snapshot.scanned_at, snapshot.scan_duration_ms
    );
    Ok(())
}

pub fn print_sessions(project: &str, sessions: &[SessionSummary], format: &str) -> Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(sessions)?);
        return Ok(());
    }

    println!("Sessions for {}", project);
    println!(
        "{:<38} {:>8} {:>12} {:>10} {:>6}  {}",
        "SESSION", "MESSAGES", "COST", "TOKENS", "SIDE%", "LAST MESSAGE"
    );
    for session in sessions {
        println!(
            "{:<38} {:>8} {:>12.4} {:>10} {:>5}%  {}",
            session.session_id,
            session.message_count,
            session.total_cost,
            session.total_tokens,
            session.sidechain_percentage,
            session.last_message_time
        );
    }
    Ok(())
}

pub fn print_detail(detail: &SessionDetail, format: &str) -> Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(detail)?);
        return Ok(());
    }

    let summary = &detail.summary;
    println!("Session {} ({})", summary.session_id, summary.filename);
    println!(
        "{} message(s), {:.4} total, {} tokens, {}% sidechain",
        summary.message_count, summary.total_cost, summary.total_tokens, summary.sidechain_percentage
    );
    println!("{} .. {}\n", summary.first_message_time, summary.last_message_time);

    println!(
        "{:<26} {:<10} {:>12} {:>8}  {}",
        "TIMESTAMP", "ROLE", "COST", "TOKENS", "MESSAGE"
    );
    for message in &detail.messages {
        println!(
            "{:<26} {:<10} {:>12.4} {:>8}  {}{}",
            message.timestamp,
            message.role,
            message.cost,
            message.usage.total(),
            message.message_id,
            if message.is_sidechain { " (sidechain)" } else { "" }
        );
    }
    Ok(())
}

pub fn print_refresh(report: &RefreshReport, format: &str) -> Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!(
        "Rescanned {} project(s) in {} ms at {}",
        report.projects_scanned, report.duration_ms, report.scanned_at
    );
    Ok(())
}
