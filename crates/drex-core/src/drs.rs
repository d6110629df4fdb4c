//! DRS path derivation from archive paths.
//!
//! CDDS archives each dataset with an extra staging level (e.g.
//! `embargoed`) between the grid label and the version directory. The
//! public DRS tree has no such level, so restoring a file means dropping
//! component 9 of the archive-relative path and keeping everything else in
//! order. Purely structural slicing on raw `/`-separated components; no
//! normalisation of any kind.

use crate::error::ExtractError;

/// Leading components that identify a dataset: mip era, activity,
/// institution, source, experiment, member, table, variable, grid label.
pub const DATASET_ID_COMPONENTS: usize = 9;

/// Components of a full archive-relative path: the dataset identifier,
/// then the staging directory, the version directory, and the filename.
pub const ARCHIVE_PATH_COMPONENTS: usize = DATASET_ID_COMPONENTS + 3;

/// Map an archive-relative path to its DRS-relative path by removing the
/// staging directory.
///
/// The input must have exactly [`ARCHIVE_PATH_COMPONENTS`] components
/// `[id0..id8, staging, version, filename]`; the result keeps all of them
/// except `staging`, whatever its value. Any other component count is
/// rejected; in particular an 11-component path (already in DRS form)
/// fails rather than silently losing its version directory.
pub fn to_drs_path(archive_path: &str) -> Result<String, ExtractError> {
    let parts: Vec<&str> = archive_path.split('/').collect();
    if parts.len() != ARCHIVE_PATH_COMPONENTS {
        return Err(ExtractError::MalformedPath {
            path: archive_path.to_string(),
            reason: format!(
                "{} components, expected {}",
                parts.len(),
                ARCHIVE_PATH_COMPONENTS
            ),
        });
    }
    let mut drs = Vec::with_capacity(ARCHIVE_PATH_COMPONENTS - 1);
    drs.extend_from_slice(&parts[..DATASET_ID_COMPONENTS]);
    drs.extend_from_slice(&parts[DATASET_ID_COMPONENTS + 1..]);
    Ok(drs.join("/"))
}

/// Strip the configured archive root from a catalogue URI, returning the
/// archive-relative path.
///
/// Tolerates a trailing `/` on the root. The prefix must end on a
/// component boundary; a URI outside the root cannot satisfy the dataset
/// schema and is rejected.
pub fn strip_mass_root<'a>(uri: &'a str, mass_root: &str) -> Result<&'a str, ExtractError> {
    let root = mass_root.trim_end_matches('/');
    let rest = uri
        .strip_prefix(root)
        .and_then(|r| r.strip_prefix('/'))
        .filter(|r| !r.is_empty());
    rest.ok_or_else(|| ExtractError::MalformedPath {
        path: uri.to_string(),
        reason: format!("not under archive root {root}"),
    })
}
