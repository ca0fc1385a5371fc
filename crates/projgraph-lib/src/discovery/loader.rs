use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{trace, warn};

use super::DiscoveryError;
use super::descriptor::parse_descriptor;
use crate::graph::Unit;

/// A descriptor that could not be turned into a unit
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SkippedDescriptor {
    pub path: PathBuf,
    pub reason: String,
}

/// Units parsed from a batch of descriptor files
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Parsed units, in the order the paths were given
    pub units: Vec<Unit>,
    pub skipped: Vec<SkippedDescriptor>,
}

/// Parses descriptor files concurrently with a bounded number of jobs
pub struct DescriptorLoader {
    semaphore: Arc<Semaphore>,
    jobs: usize,
}

impl DescriptorLoader {
    /// Create a loader running at most `jobs` parses at once
    pub fn new(jobs: usize) -> Result<Self, DiscoveryError> {
        if jobs == 0 {
            return Err(DiscoveryError::InvalidJobCount { count: jobs });
        }

        trace!("Descriptor loader initialized with {} concurrent jobs", jobs);

        Ok(Self {
            semaphore: Arc::new(Semaphore::new(jobs)),
            jobs,
        })
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Parse every path; malformed descriptors are collected, not fatal
    pub async fn load(&self, paths: Vec<PathBuf>) -> Result<LoadOutcome, DiscoveryError> {
        trace!("Loading {} descriptors", paths.len());

        let mut tasks = Vec::with_capacity(paths.len());

        for path in paths {
            let semaphore = self.semaphore.clone();

            let task = tokio::spawn(async move {
                // Acquire semaphore permit to control concurrency
                let _permit = semaphore.acquire_owned().await?;

                let parse_path = path.clone();
                let result = tokio::task::spawn_blocking(move || parse_descriptor(&parse_path)).await?;

                Ok::<_, DiscoveryError>((path, result))
            });

            tasks.push(task);
        }

        // Await in submission order so the outcome is deterministic
        let mut outcome = LoadOutcome::default();
        for task in tasks {
            let (path, result) = task.await??;
            match result {
                Ok(unit) => outcome.units.push(unit),
                Err(e) => {
                    warn!("Skipping descriptor {}: {}", path.display(), e);
                    outcome.skipped.push(SkippedDescriptor {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        trace!(
            "Loaded {} units, skipped {} descriptors",
            outcome.units.len(),
            outcome.skipped.len()
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
