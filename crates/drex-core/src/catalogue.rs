//! XML catalogue of archived files.
//!
//! An archive listing is a tree of elements whose `url` attributes hold
//! MASS URIs; `nodes` elements are structural containers. Directory and
//! file entries both carry URLs, so the NetCDF suffix is what separates
//! retrievable data files from everything else in the listing.

use std::fs;
use std::path::Path;

use crate::error::ExtractError;

/// Suffix of CMORised NetCDF data files.
pub const NETCDF_SUFFIX: &str = ".nc";

/// Container tag skipped during traversal.
const CONTAINER_TAG: &str = "nodes";

/// Parsed catalogue: every `url` attribute found, in document order.
#[derive(Debug)]
pub struct Catalogue {
    urls: Vec<String>,
}

impl Catalogue {
    /// Read and parse the catalogue file at `path`.
    pub fn load(path: &Path) -> Result<Self, ExtractError> {
        let text = fs::read_to_string(path).map_err(|e| ExtractError::CatalogueParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&text).map_err(|reason| ExtractError::CatalogueParse {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parse catalogue text. Container elements and elements without a
    /// `url` attribute are skipped silently.
    fn parse(text: &str) -> Result<Self, String> {
        let doc = roxmltree::Document::parse(text).map_err(|e| e.to_string())?;
        let urls = doc
            .descendants()
            .filter(|n| n.is_element() && !n.has_tag_name(CONTAINER_TAG))
            .filter_map(|n| n.attribute("url"))
            .map(str::to_string)
            .collect();
        Ok(Catalogue { urls })
    }

    /// Every listed URL, directories included.
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// URLs of the NetCDF data files, the entries worth retrieving.
    pub fn netcdf_urls(&self) -> impl Iterator<Item = &str> {
        self.urls
            .iter()
            .map(String::as_str)
            .filter(|u| u.ends_with(NETCDF_SUFFIX))
    }
}
