//! `drex translate <path>` – print the DRS form of one archive path.

use anyhow::Result;
use drex_core::drs;

pub fn run_translate(path: &str, mass_root: Option<&str>) -> Result<()> {
    let archive_path = match mass_root {
        Some(root) => drs::strip_mass_root(path, root)?,
        None => path,
    };
    println!("{}", drs::to_drs_path(archive_path)?);
    Ok(())
}
