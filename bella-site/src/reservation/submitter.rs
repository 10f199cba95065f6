use std::time::Duration;

use async_trait::async_trait;
use shared::AppResult;
use shared::models::ReservationRequest;

/// Where a reservation request goes once the form leaves `Idle`
///
/// The form treats any `Err` as the single user-facing submission failure.
#[async_trait]
pub trait ReservationSubmitter: Send + Sync {
    async fn submit(&self, request: &ReservationRequest) -> AppResult<()>;
}

/// Stand-in backend: waits for the configured delay, then accepts
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl ReservationSubmitter for SimulatedSubmitter {
    async fn submit(&self, request: &ReservationRequest) -> AppResult<()> {
        tracing::debug!(
            delay_ms = self.delay.as_millis() as u64,
            guests = %request.guests,
            "Simulating reservation submission"
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submitter_waits_then_accepts() {
        let submitter = SimulatedSubmitter::default();
        assert_eq!(submitter.delay(), Duration::from_secs(1));

        let started = tokio::time::Instant::now();
        submitter.submit(&ReservationRequest::default()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(1));
    }
}
