use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExtractError;

/// Configuration for one extraction run, loaded from a YAML file.
///
/// The upper-case keys are shared with the CDDS configuration files this
/// tool is usually pointed at, so they keep their external spelling. Extra
/// keys in such files are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    /// XML catalogue listing the archived files to restore.
    pub xml_file: PathBuf,
    /// Archive root the datasets live under, e.g. "moose:/adhoc/projects/cdds".
    #[serde(rename = "OUTPUT_MASS_ROOT")]
    pub output_mass_root: String,
    /// Path fragment appended to the root, e.g. "production".
    #[serde(rename = "OUTPUT_MASS_SUFFIX")]
    pub output_mass_suffix: String,
    /// Local group-workspace root the DRS tree is created under.
    pub gws_root: PathBuf,
}

impl ExtractConfig {
    /// Load and validate the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self, ExtractError> {
        let data = fs::read_to_string(path).map_err(|e| ExtractError::Configuration {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let cfg: ExtractConfig =
            serde_yaml::from_str(&data).map_err(|e| ExtractError::Configuration {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        cfg.validate(path)?;
        Ok(cfg)
    }

    /// Reject empty values; serde already rejects missing keys.
    fn validate(&self, path: &Path) -> Result<(), ExtractError> {
        let checks = [
            (self.xml_file.as_os_str().is_empty(), "xml_file"),
            (self.output_mass_root.is_empty(), "OUTPUT_MASS_ROOT"),
            (self.output_mass_suffix.is_empty(), "OUTPUT_MASS_SUFFIX"),
            (self.gws_root.as_os_str().is_empty(), "gws_root"),
        ];
        for (empty, key) in checks {
            if empty {
                return Err(ExtractError::Configuration {
                    path: path.to_path_buf(),
                    reason: format!("{key} must not be empty"),
                });
            }
        }
        Ok(())
    }

    /// Archive root prefix stripped from every catalogue URI:
    /// `OUTPUT_MASS_ROOT` and `OUTPUT_MASS_SUFFIX` joined by exactly one `/`.
    pub fn mass_root(&self) -> String {
        format!(
            "{}/{}",
            self.output_mass_root.trim_end_matches('/'),
            self.output_mass_suffix.trim_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_yaml_required_keys() {
        let yaml = r#"
            xml_file: /work/listings/ukesm_amon.xml
            OUTPUT_MASS_ROOT: "moose:/adhoc/projects/cdds"
            OUTPUT_MASS_SUFFIX: production
            gws_root: /gws/nopw/j04/cmip6_prep
        "#;
        let cfg: ExtractConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.xml_file, PathBuf::from("/work/listings/ukesm_amon.xml"));
        assert_eq!(cfg.output_mass_root, "moose:/adhoc/projects/cdds");
        assert_eq!(cfg.output_mass_suffix, "production");
        assert_eq!(cfg.gws_root, PathBuf::from("/gws/nopw/j04/cmip6_prep"));
    }

    #[test]
    fn config_yaml_extra_keys_are_ignored() {
        let yaml = r#"
            xml_file: listing.xml
            OUTPUT_MASS_ROOT: "moose:/adhoc/projects/cdds"
            OUTPUT_MASS_SUFFIX: production
            gws_root: /gws/nopw/j04/cmip6_prep
            log_level: debug
        "#;
        let cfg: ExtractConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.output_mass_suffix, "production");
    }

    #[test]
    fn config_yaml_missing_key_fails() {
        let yaml = r#"
            xml_file: listing.xml
            OUTPUT_MASS_ROOT: "moose:/adhoc/projects/cdds"
            OUTPUT_MASS_SUFFIX: production
        "#;
        let err = serde_yaml::from_str::<ExtractConfig>(yaml).unwrap_err();
        assert!(err.to_string().contains("gws_root"));
    }

    #[test]
    fn mass_root_joins_with_single_slash() {
        let mut cfg = ExtractConfig {
            xml_file: PathBuf::from("listing.xml"),
            output_mass_root: "moose:/adhoc/projects/cdds".to_string(),
            output_mass_suffix: "production".to_string(),
            gws_root: PathBuf::from("/gws"),
        };
        assert_eq!(cfg.mass_root(), "moose:/adhoc/projects/cdds/production");

        cfg.output_mass_root = "moose:/adhoc/projects/cdds/".to_string();
        cfg.output_mass_suffix = "/production/".to_string();
        assert_eq!(cfg.mass_root(), "moose:/adhoc/projects/cdds/production");
    }

    #[test]
    fn load_reports_missing_file_as_configuration_error() {
        let err = ExtractConfig::load(Path::new("/no/such/extract.yml")).unwrap_err();
        assert!(matches!(err, ExtractError::Configuration { .. }));
    }

    #[test]
    fn load_rejects_empty_value() {
        let mut f = NamedTempFile::new().unwrap();
        let yaml = r#"
            xml_file: listing.xml
            OUTPUT_MASS_ROOT: "moose:/adhoc/projects/cdds"
            OUTPUT_MASS_SUFFIX: ""
            gws_root: /gws/nopw/j04/cmip6_prep
        "#;
        f.write_all(yaml.as_bytes()).unwrap();
        f.flush().unwrap();
        match ExtractConfig::load(f.path()).unwrap_err() {
            ExtractError::Configuration { reason, .. } => {
                assert!(reason.contains("OUTPUT_MASS_SUFFIX"));
            }
            other => panic!("expected Configuration, got {other}"),
        }
    }
}
