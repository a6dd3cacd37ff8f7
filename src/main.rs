// Snapshot report: load a JSON snapshot and print the coverage summary.
//
// Usage:
//   streamer-report [--log-json] <snapshot.json> [project_number]
//
// Snapshot layout: { "globalDefaults": {...}, "projects": [...], "events": [...] }
// "globalDefaults" may be omitted, the builtin topology is used then.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Deserialize;
use streamer_maintenance::{
    logging, EventFilter, MaintenanceApi, ProjectScope, Snapshot, Topology, TopologyConfig,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportInput {
    #[serde(default)]
    global_defaults: Option<Topology>,
    #[serde(flatten)]
    snapshot: Snapshot,
}

/// 分离 `--log-json` 开关, 返回 (是否 JSON 日志, 其余位置参数)
fn split_log_flag(args: impl Iterator<Item = String>) -> (bool, Vec<String>) {
    let (flags, positional): (Vec<String>, Vec<String>) =
        args.partition(|arg| arg == "--log-json");
    (!flags.is_empty(), positional)
}

fn main() -> Result<()> {
    let (json_log, positional) = split_log_flag(std::env::args().skip(1));
    if json_log {
        logging::init_json();
    } else {
        logging::init();
    }

    let mut args = positional.into_iter();
    let path = args
        .next()
        .context("usage: streamer-report [--log-json] <snapshot.json> [project_number]")?;
    let project_number = args
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read snapshot {}", path))?;
    let input: ReportInput =
        serde_json::from_str(&raw).with_context(|| format!("failed to parse snapshot {}", path))?;

    let global_defaults = match input.global_defaults {
        Some(topology) => {
            TopologyConfig::check(&topology)?;
            topology
        }
        None => TopologyConfig::builtin_defaults(),
    };

    tracing::info!(
        version = streamer_maintenance::VERSION,
        projects = input.snapshot.projects.len(),
        events = input.snapshot.events.len(),
        "loaded snapshot"
    );

    let filter = match project_number {
        Some(pn) => EventFilter::all().with_scope(ProjectScope::Project(pn)),
        None => EventFilter::all(),
    };

    let api = MaintenanceApi::new(global_defaults);
    let summary = api.coverage_summary(&input.snapshot, &filter, Utc::now());

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
