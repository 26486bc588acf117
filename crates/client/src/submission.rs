//! Submission collaborator.
//!
//! The controller only knows the [`ProfileSubmitter`] capability, so a real
//! backend client can replace [`SimulatedSubmitter`] without touching the
//! form logic.

use std::time::Duration;

use async_trait::async_trait;
use employee_profile_shared::{ProfilePayload, SubmitError};

use crate::config::FormConfig;

/// Accepts an assembled payload and reports success or failure.
///
/// Futures are `?Send`: form state lives on the single UI thread.
#[async_trait(?Send)]
pub trait ProfileSubmitter {
    async fn submit(&self, payload: &ProfilePayload) -> Result<(), SubmitError>;
}

/// Waits for a fixed delay, then accepts the payload.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &FormConfig) -> Self {
        Self::new(config.submit_delay)
    }
}

#[async_trait(?Send)]
impl ProfileSubmitter for SimulatedSubmitter {
    async fn submit(&self, payload: &ProfilePayload) -> Result<(), SubmitError> {
        crate::log_debug!(
            "Simulating submit of {} parts ({} ms)",
            payload.part_names().len(),
            self.delay.as_millis()
        );
        sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use employee_profile_shared::{CountryCode, FormFields};

    #[tokio::test]
    async fn simulated_submitter_accepts_any_payload() {
        let payload = ProfilePayload::assemble(&FormFields::default(), CountryCode::default(), None);
        let submitter = SimulatedSubmitter::new(Duration::ZERO);
        assert_eq!(submitter.submit(&payload).await, Ok(()));
    }

    #[test]
    fn simulated_submitter_uses_configured_delay() {
        let config = FormConfig {
            submit_delay: Duration::from_millis(25),
            ..FormConfig::default()
        };
        assert_eq!(SimulatedSubmitter::from_config(&config).delay, Duration::from_millis(25));
    }
}
