//! `drex extract <config>` – restore catalogued files into the DRS tree.

use anyhow::Result;
use drex_core::config::ExtractConfig;
use drex_core::extract;
use drex_core::retrieval::MooClient;
use std::path::Path;

pub fn run_extract(config: &Path, dry_run: bool, skip_existing: bool) -> Result<()> {
    let cfg = ExtractConfig::load(config)?;
    tracing::debug!("loaded config: {:?}", cfg);

    if dry_run {
        let planned = extract::plan(&cfg)?;
        for entry in &planned {
            println!("{} -> {}", entry.source, entry.destination.display());
        }
        println!("{} file(s) would be restored.", planned.len());
        return Ok(());
    }

    let client = MooClient::new();
    let report = extract::run(&cfg, &client, skip_existing)?;
    println!(
        "Restored {} file(s) to {} ({} skipped).",
        report.restored,
        cfg.gws_root.display(),
        report.skipped
    );
    Ok(())
}
