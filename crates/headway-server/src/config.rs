use std::time::Duration;

use headway_core::store::AdvancePolicy;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Progress gained per advancement step, in percent (default: `10`).
    pub step_percent: u8,
    /// Milliseconds between advancement steps (default: `3000`).
    pub step_interval_ms: u64,
    /// Upper bound in seconds for one long-poll wait (default: `60`).
    /// Twice the time a fresh job needs to complete under the defaults.
    pub wait_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var             | Default   |
    /// |---------------------|-----------|
    /// | `HOST`              | `0.0.0.0` |
    /// | `PORT`              | `3000`    |
    /// | `STEP_PERCENT`      | `10`      |
    /// | `STEP_INTERVAL_MS`  | `3000`    |
    /// | `WAIT_TIMEOUT_SECS` | `60`      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let step_percent: u8 = std::env::var("STEP_PERCENT")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("STEP_PERCENT must be a valid u8");
        assert!(
            (1..=100).contains(&step_percent),
            "STEP_PERCENT must be within 1..=100"
        );

        let step_interval_ms: u64 = std::env::var("STEP_INTERVAL_MS")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("STEP_INTERVAL_MS must be a valid u64");

        let wait_timeout_secs: u64 = std::env::var("WAIT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("WAIT_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            step_percent,
            step_interval_ms,
            wait_timeout_secs,
        }
    }

    /// Advancement policy derived from this configuration.
    pub fn advance_policy(&self) -> AdvancePolicy {
        AdvancePolicy {
            step_percent: self.step_percent,
            step_interval: Duration::from_millis(self.step_interval_ms),
        }
    }

    /// Long-poll deadline as a [`Duration`].
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            step_percent: 10,
            step_interval_ms: 3000,
            wait_timeout_secs: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_the_advertised_cadence() {
        let config = ServerConfig::default();
        let policy = config.advance_policy();

        assert_eq!(policy.step_percent, 10);
        assert_eq!(policy.step_interval, Duration::from_secs(3));
        assert_eq!(policy.time_to_complete(), Duration::from_secs(30));
        assert_eq!(config.wait_timeout(), Duration::from_secs(60));
    }
}
