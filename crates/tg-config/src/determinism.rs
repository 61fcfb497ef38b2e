use std::sync::OnceLock;

use tracing::debug;

/// Unified deterministic runtime configuration.
#[derive(Clone, Debug)]
pub struct DeterminismConfig {
    /// Whether deterministic execution is enabled globally.
    pub enabled: bool,
    /// If true reductions should run sequentially to ensure stable ordering.
    pub fix_reduction: bool,
    /// Optional override for the partition size used by parallel reductions.
    pub chunk_size: Option<usize>,
}

impl DeterminismConfig {
    /// Builds a configuration snapshot from environment variables.
    fn from_env() -> Self {
        let enabled = std::env::var("TG_DETERMINISTIC")
            .ok()
            .map(|v| truthy(&v))
            .unwrap_or(false);

        let fix_reduction = std::env::var("TG_DETERMINISTIC_REDUCTION")
            .ok()
            .map(|v| truthy(&v))
            .unwrap_or(enabled);

        let chunk_size = std::env::var("TG_CHUNK_SIZE")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&n| n > 0);

        Self {
            enabled,
            fix_reduction,
            chunk_size,
        }
    }
}

fn truthy(value: &str) -> bool {
    matches!(value, "1" | "true" | "True" | "on" | "ON")
}

static CONFIG: OnceLock<DeterminismConfig> = OnceLock::new();

/// Returns the lazily initialised deterministic configuration.
pub fn config() -> &'static DeterminismConfig {
    CONFIG.get_or_init(|| {
        let cfg = DeterminismConfig::from_env();
        apply_process_hints(&cfg);
        cfg
    })
}

/// Overrides the deterministic configuration. Intended for tests.
pub fn configure(cfg: DeterminismConfig) -> &'static DeterminismConfig {
    CONFIG.get_or_init(|| {
        apply_process_hints(&cfg);
        cfg
    })
}

fn apply_process_hints(cfg: &DeterminismConfig) {
    if cfg.enabled && cfg.fix_reduction {
        // Hint Rayon before any pools are built. This is best-effort; if a pool
        // already exists the environment change is harmless but ineffectual.
        std::env::set_var("RAYON_NUM_THREADS", "1");
        debug!(
            chunk_size = ?cfg.chunk_size,
            "deterministic reductions enabled, pinned RAYON_NUM_THREADS=1"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_accepts_common_spellings() {
        assert!(truthy("1"));
        assert!(truthy("true"));
        assert!(truthy("ON"));
        assert!(!truthy("0"));
        assert!(!truthy("off"));
        assert!(!truthy(""));
    }

    #[test]
    fn configure_wins_over_environment() {
        let cfg = configure(DeterminismConfig {
            enabled: true,
            fix_reduction: true,
            chunk_size: Some(512),
        });
        assert!(cfg.enabled);
        assert!(cfg.fix_reduction);
        assert_eq!(cfg.chunk_size, Some(512));
        // Subsequent reads observe the same snapshot.
        assert_eq!(config().chunk_size, Some(512));
    }
}
