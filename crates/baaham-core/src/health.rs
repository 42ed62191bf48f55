//! Storage liveness reporting.

use tracing::warn;

use crate::repository::HealthRepository;

/// Health service.
///
/// Generic over the repository implementation, like every other
/// service, so it can be driven by a test double.
pub struct HealthService<R: HealthRepository> {
    repo: R,
}

impl<R: HealthRepository> HealthService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns `true` when storage is reachable. Probe errors are logged
    /// and reported as `false`.
    pub async fn check(&self) -> bool {
        match self.repo.check().await {
            Ok(up) => up,
            Err(e) => {
                warn!(error = %e, "Storage health probe failed");
                false
            }
        }
    }
}
