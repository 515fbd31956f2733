//! `build` and `build-all` command handlers

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::json;

use libforge::application::{BatchReport, BuildReport};
use libforge::config::Config;
use libforge::presentation::cli::RequestSource;
use libforge::presentation::factory;
use libforge::{default_manifest, BuildRequest};

use super::absolutize;

pub fn cmd_build(source: &RequestSource, config: &Config, json: bool) -> Result<()> {
    let mut request = read_request(source)?;
    request.output_base_dir = absolutize(&request.output_base_dir)?;

    let use_case = factory::create_build_use_case(config);
    let report = use_case
        .build(&request)
        .with_context(|| format!("build of '{}' failed", request.artifact_name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

pub fn cmd_build_all(out: &Path, keep_going: bool, config: &Config, json: bool) -> Result<()> {
    let out = absolutize(out)?;
    fs::create_dir_all(&out)
        .with_context(|| format!("cannot create output directory {}", out.display()))?;

    let requests = default_manifest(&out);
    let use_case = factory::create_build_use_case(config);
    let report = use_case.build_all(&requests, keep_going);

    if json {
        emit_batch_json(&report)?;
    } else {
        for built in &report.built {
            print_report(built);
        }
        for (name, err) in &report.failed {
            eprintln!("{}: FAILED: {}", name, err);
        }
        for name in &report.skipped {
            eprintln!("{}: skipped", name);
        }
    }

    if !report.is_success() {
        bail!(
            "{} of {} builds failed",
            report.failed.len(),
            requests.len()
        );
    }
    Ok(())
}

fn read_request(source: &RequestSource) -> Result<BuildRequest> {
    let (json, origin) = match (&source.request, &source.request_file) {
        (Some(inline), _) => (inline.clone(), "--request".to_string()),
        (None, Some(path)) => (
            fs::read_to_string(path)
                .with_context(|| format!("cannot read build request {}", path.display()))?,
            path.display().to_string(),
        ),
        (None, None) => bail!("no build request given"),
    };
    BuildRequest::from_json(&json).with_context(|| format!("invalid build request in {}", origin))
}

fn print_report(report: &BuildReport) {
    println!(
        "{} {}: {} ({})",
        report.artifact_name,
        report.publish.version,
        report.publish.status,
        report.publish.target_dir.display()
    );
}

fn emit_batch_json(report: &BatchReport) -> Result<()> {
    let failed: Vec<_> = report
        .failed
        .iter()
        .map(|(name, err)| json!({ "artifact_name": name, "error": err.to_string() }))
        .collect();
    let out = json!({
        "built": report.built,
        "failed": failed,
        "skipped": report.skipped,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
