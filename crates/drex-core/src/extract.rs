//! Catalogue-driven extraction: strip the archive root, translate to the
//! DRS layout, create the destination tree, and hand each file to the
//! retrieval client.
//!
//! Strictly sequential, one file at a time. The first error of any kind
//! aborts the run; files restored before it stay in place.

use std::fs;
use std::path::PathBuf;

use crate::catalogue::Catalogue;
use crate::config::ExtractConfig;
use crate::drs;
use crate::error::ExtractError;
use crate::retrieval::RetrievalClient;

/// One catalogue entry mapped to its local destination.
#[derive(Debug, Clone)]
pub struct PlannedRetrieval {
    /// Full MASS URI as listed in the catalogue.
    pub source: String,
    /// Local path under the group-workspace root.
    pub destination: PathBuf,
}

/// Counts reported after a completed run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtractReport {
    /// Files handed to the retrieval client.
    pub restored: usize,
    /// Files left alone because the destination already existed.
    pub skipped: usize,
}

fn plan_one(
    cfg: &ExtractConfig,
    mass_root: &str,
    uri: &str,
) -> Result<PlannedRetrieval, ExtractError> {
    let archive_path = drs::strip_mass_root(uri, mass_root)?;
    let drs_path = drs::to_drs_path(archive_path)?;
    Ok(PlannedRetrieval {
        source: uri.to_string(),
        destination: cfg.gws_root.join(drs_path),
    })
}

/// Map every NetCDF entry in the catalogue to its destination without
/// touching the filesystem. Dry runs print this.
pub fn plan(cfg: &ExtractConfig) -> Result<Vec<PlannedRetrieval>, ExtractError> {
    let catalogue = Catalogue::load(&cfg.xml_file)?;
    let mass_root = cfg.mass_root();
    catalogue
        .netcdf_urls()
        .map(|uri| plan_one(cfg, &mass_root, uri))
        .collect()
}

/// Restore every NetCDF file listed in the catalogue into the DRS tree.
///
/// Entries are processed in catalogue order. Destination directories are
/// created as needed; pre-existing ones are fine, so interrupted runs can
/// be repeated. With `skip_existing`, entries whose destination file is
/// already present are not retrieved again.
pub fn run(
    cfg: &ExtractConfig,
    client: &dyn RetrievalClient,
    skip_existing: bool,
) -> Result<ExtractReport, ExtractError> {
    let catalogue = Catalogue::load(&cfg.xml_file)?;
    let mass_root = cfg.mass_root();
    let mut report = ExtractReport::default();

    for uri in catalogue.netcdf_urls() {
        let planned = plan_one(cfg, &mass_root, uri)?;
        if skip_existing && planned.destination.exists() {
            tracing::info!("already present, skipping {}", planned.destination.display());
            report.skipped += 1;
            continue;
        }
        if let Some(parent) = planned.destination.parent() {
            fs::create_dir_all(parent).map_err(|e| ExtractError::Filesystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        client.retrieve(&planned.source, &planned.destination)?;
        tracing::info!(
            "restored {} to {}",
            planned.source,
            planned.destination.display()
        );
        report.restored += 1;
    }

    tracing::info!(
        "run restored {} file(s), skipped {}",
        report.restored,
        report.skipped
    );
    Ok(report)
}
