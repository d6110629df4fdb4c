//! Archive retrieval client: the seam around the external MASS tool.
//!
//! The driver only depends on the `RetrievalClient` trait, so the rest of
//! the pipeline runs in tests without `moo` and without tape access.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::ExtractError;

/// Fetches a single archived file into a local destination path.
pub trait RetrievalClient {
    fn retrieve(&self, source: &str, destination: &Path) -> Result<(), ExtractError>;
}

/// Client invoking the MASS command-line tool: `moo get SOURCE DEST`.
///
/// Arguments are passed as argv, never through a shell. Stdout and stderr
/// are captured and reported together when the command fails.
#[derive(Debug, Clone)]
pub struct MooClient {
    program: PathBuf,
}

impl MooClient {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("moo"),
        }
    }

    /// Substitute another executable for `moo` (tests point this at a stub).
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command_line(&self, source: &str, destination: &Path) -> String {
        format!(
            "{} get {} {}",
            self.program.display(),
            source,
            destination.display()
        )
    }
}

impl Default for MooClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RetrievalClient for MooClient {
    fn retrieve(&self, source: &str, destination: &Path) -> Result<(), ExtractError> {
        let command = self.command_line(source, destination);
        tracing::debug!("running {command}");
        let output = Command::new(&self.program)
            .arg("get")
            .arg(source)
            .arg(destination)
            .output()
            .map_err(|e| ExtractError::RetrievalCommand {
                command: command.clone(),
                output: e.to_string(),
            })?;
        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(ExtractError::RetrievalCommand {
                command,
                output: combined.trim().to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[cfg(unix)]
    fn stub_program(dir: &Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("moo");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn retrieve_passes_get_source_and_destination() {
        let dir = tempfile::tempdir().unwrap();
        let args_file = dir.path().join("args");
        let stub = stub_program(
            dir.path(),
            &format!(r#"echo "$@" > {}; exit 0"#, args_file.display()),
        );
        let client = MooClient::with_program(&stub);
        let dest = dir.path().join("tas.nc");
        client.retrieve("moose:/adhoc/archive/tas.nc", &dest).unwrap();
        let args = fs::read_to_string(&args_file).unwrap();
        assert_eq!(
            args.trim(),
            format!("get moose:/adhoc/archive/tas.nc {}", dest.display())
        );
    }

    #[cfg(unix)]
    #[test]
    fn retrieve_failure_carries_command_and_output() {
        let dir = tempfile::tempdir().unwrap();
        let stub = stub_program(dir.path(), r#"echo "archive unavailable" >&2; exit 2"#);
        let client = MooClient::with_program(&stub);
        match client
            .retrieve("moose:/adhoc/archive/tas.nc", Path::new("/tmp/tas.nc"))
            .unwrap_err()
        {
            ExtractError::RetrievalCommand { command, output } => {
                assert!(command.contains("get moose:/adhoc/archive/tas.nc"));
                assert!(output.contains("archive unavailable"));
            }
            other => panic!("expected RetrievalCommand, got {other}"),
        }
    }

    #[test]
    fn retrieve_missing_program_is_a_retrieval_error() {
        let client = MooClient::with_program("/no/such/moo");
        assert!(matches!(
            client.retrieve("moose:/adhoc/archive/tas.nc", Path::new("/tmp/tas.nc")),
            Err(ExtractError::RetrievalCommand { .. })
        ));
    }
}
