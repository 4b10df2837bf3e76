//! Editor host for the command line.

use std::fs;
use std::path::PathBuf;
use wireframe_core::EditorHost;

/// Answers confirmations from a flag and writes artifacts to a directory.
#[derive(Debug)]
pub struct CliHost {
    assume_yes: bool,
    artifact_dir: PathBuf,
    delivered: Vec<PathBuf>,
}

impl CliHost {
    pub fn new(assume_yes: bool, artifact_dir: PathBuf) -> Self {
        Self {
            assume_yes,
            artifact_dir,
            delivered: Vec::new(),
        }
    }

    /// Paths of the artifacts written so far.
    pub fn delivered(&self) -> &[PathBuf] {
        &self.delivered
    }
}

impl EditorHost for CliHost {
    fn confirm(&mut self, message: &str) -> bool {
        if !self.assume_yes {
            log::warn!("Declined \"{message}\" (pass --yes to accept)");
        }
        self.assume_yes
    }

    fn deliver_artifact(&mut self, name: &str, contents: &str) {
        let path = self.artifact_dir.join(name);
        match fs::write(&path, contents) {
            Ok(()) => {
                log::info!("Wrote {}", path.display());
                self.delivered.push(path);
            }
            Err(e) => log::error!("Failed to write {}: {}", path.display(), e),
        }
    }
}
