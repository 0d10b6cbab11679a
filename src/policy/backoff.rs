use std::time::Duration;

use rand::Rng;
use reqwest::Request;
use serde::Deserialize;

use crate::{error::TryHttpError, failure::FailureReason};

use super::decision::{RetryDecision, RetryPolicy};

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_BASE_DELAY_MS: u64 = 200;
const DEFAULT_MAX_DELAY_MS: u64 = 2_000;

/// Configuration for [`ExponentialBackoff`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackoffConfig {
    /// Maximum number of attempts including the first one
    pub max_attempts: u32,
    /// Initial backoff delay in milliseconds
    pub base_delay_ms: u64,
    /// Maximum backoff delay in milliseconds
    pub max_delay_ms: u64,
    /// Whether to add random jitter to backoff delays
    pub jitter: bool,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay_ms: DEFAULT_BASE_DELAY_MS,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
            jitter: true,
        }
    }
}

impl BackoffConfig {
    /// Parses a configuration from TOML; missing keys keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, TryHttpError> {
        Ok(toml::from_str(input)?)
    }
}

/// Retries every failure with exponentially growing delays until
/// `max_attempts` attempts have been made.
#[derive(Clone, Debug, Default)]
pub struct ExponentialBackoff {
    cfg: BackoffConfig,
}

impl ExponentialBackoff {
    pub fn new(cfg: BackoffConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &BackoffConfig {
        &self.cfg
    }

    /// Delay before the attempt following `attempt`, before jitter.
    pub fn base_delay(&self, attempt: u32) -> Duration {
        let delay = self
            .cfg
            .base_delay_ms
            .saturating_mul(1u64 << attempt.min(16))
            .min(self.cfg.max_delay_ms);
        Duration::from_millis(delay)
    }
}

impl RetryPolicy for ExponentialBackoff {
    fn decide(&self, _request: &Request, _reason: &FailureReason, attempt: u32) -> RetryDecision {
        if attempt.saturating_add(1) >= self.cfg.max_attempts {
            return RetryDecision::stop();
        }
        let mut delay = self.base_delay(attempt);
        if self.cfg.jitter {
            let span = delay.as_millis() as u64 / 2;
            if span > 0 {
                let jitter = rand::thread_rng().gen_range(0..=span);
                delay = delay.saturating_sub(Duration::from_millis(jitter));
            }
        }
        RetryDecision::retry_after(delay)
    }
}
