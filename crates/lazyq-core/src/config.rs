//! Engine configuration that downstream crates can serialize/deserialize.
//!
//! A single process-wide snapshot is read by the buffering operators. It is
//! installed at most once; later reads never observe a change.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::Result;

static CONFIG: OnceCell<EngineConfig> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Hard cap on the number of elements one buffering operator instance may
    /// hold (sort, reverse, seen-sets, group and join tables). `None` is unbounded.
    pub buffer_cap: Option<usize>,

    /// Initial capacity for operator buffers.
    pub buffer_capacity_hint: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            buffer_cap: None,
            buffer_capacity_hint: 16,
        }
    }
}

impl EngineConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `LAZYQ_BUFFER_CAP`: element cap per buffering operator
    /// - `LAZYQ_BUFFER_CAPACITY_HINT`: initial buffer capacity
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("LAZYQ_BUFFER_CAP") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.buffer_cap = Some(v);
            }
        }

        if let Ok(s) = std::env::var("LAZYQ_BUFFER_CAPACITY_HINT") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.buffer_capacity_hint = v;
            }
        }

        cfg
    }

    /// Parse a JSON document; absent fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn with_buffer_cap(mut self, cap: usize) -> Self {
        self.buffer_cap = Some(cap);
        self
    }
}

/// Install the process-wide configuration. Returns `false` if one was already
/// installed (or already read), in which case `cfg` is discarded.
pub fn install(cfg: EngineConfig) -> bool {
    CONFIG.set(cfg).is_ok()
}

/// The active configuration; initialized from the environment on first use.
pub fn current() -> &'static EngineConfig {
    CONFIG.get_or_init(EngineConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let cfg = EngineConfig::from_json(r#"{ "buffer_cap": 128 }"#).unwrap();
        assert_eq!(cfg.buffer_cap, Some(128));
        assert_eq!(cfg.buffer_capacity_hint, 16);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = EngineConfig::from_json("{ buffer_cap: ").unwrap_err();
        assert!(matches!(err, crate::error::SeqError::Config(_)));
    }

    // The only test touching these variables, so it cannot race another reader.
    #[test]
    fn from_env_reads_overrides_and_ignores_malformed_values() {
        std::env::set_var("LAZYQ_BUFFER_CAP", "64");
        std::env::set_var("LAZYQ_BUFFER_CAPACITY_HINT", "8");
        let cfg = EngineConfig::from_env();
        assert_eq!(cfg.buffer_cap, Some(64));
        assert_eq!(cfg.buffer_capacity_hint, 8);

        std::env::set_var("LAZYQ_BUFFER_CAP", "lots");
        std::env::set_var("LAZYQ_BUFFER_CAPACITY_HINT", "-1");
        assert_eq!(EngineConfig::from_env(), EngineConfig::default());

        std::env::remove_var("LAZYQ_BUFFER_CAP");
        std::env::remove_var("LAZYQ_BUFFER_CAPACITY_HINT");
        assert_eq!(EngineConfig::from_env(), EngineConfig::default());
    }

    #[test]
    fn round_trips_through_serde() {
        let cfg = EngineConfig::default().with_buffer_cap(3);
        let text = serde_json::to_string(&cfg).unwrap();
        assert_eq!(EngineConfig::from_json(&text).unwrap(), cfg);
    }
}
