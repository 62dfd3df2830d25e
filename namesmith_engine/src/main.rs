#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Namesmith **
//! Demo driver standing in for the host asset-creation workflow: load an
//! asset snapshot and hook parameters, run both creation hooks, and report
//! the allow/deny decision.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use namesmith_engine::data_paths::data_path;
use namesmith_engine::{load_asset, load_params, post_create, pre_create};

fn main() -> Result<ExitCode> {
    env_logger::init();

    let mut json_output = false;
    let mut paths: Vec<PathBuf> = Vec::new();
    for arg in env::args().skip(1) {
        if arg == "--json" {
            json_output = true;
        } else {
            paths.push(PathBuf::from(arg));
        }
    }

    let asset_path = paths.first().cloned().unwrap_or_else(|| data_path("sample_page.ron"));
    let params_path = paths.get(1).cloned().unwrap_or_else(|| data_path("params.toml"));

    let params = load_params(&params_path).context("while loading hook parameters")?;
    let mut asset = load_asset(&asset_path).context("while loading asset snapshot")?;
    info!("asset snapshot loaded from '{}'", asset_path.display());

    pre_create(&mut asset);
    let decision = post_create(&mut asset, &params);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else if decision.allow {
        println!("{} system name: {}", "allowed".bright_green().bold(), asset.name().bold());
    } else {
        println!("{} {}", "denied".bright_red().bold(), decision.message);
    }

    Ok(if decision.allow { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
