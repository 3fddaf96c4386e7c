use super::{types::Config, ConfigError};
use crate::store::MAX_BATCH_WRITE;
use crate::tier;

/// Validate configuration
/// Currently validates:
/// - At least one tracked solver, none with an empty handle
/// - A non-empty pool whose tier labels are all on the scale
/// - Selector quota and attempt budget are non-zero
/// - Sync batch size fits the store's batch limit and the page delay is set
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.solvers.is_empty() {
        return Err(ConfigError::ValidationError(
            "at least one [[solvers]] entry is required".to_string(),
        ));
    }

    if let Some(solver) = config.solvers.iter().find(|s| s.handle.trim().is_empty()) {
        return Err(ConfigError::ValidationError(format!(
            "solver '{}' has an empty handle",
            solver.name
        )));
    }

    if config.pool.is_empty() {
        return Err(ConfigError::ValidationError(
            "candidate pool is empty (add [[pool]] entries or selector.pool_file)".to_string(),
        ));
    }

    for entry in &config.pool {
        if entry.tag.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "pool entry with an empty tag".to_string(),
            ));
        }
        for label in entry.tier_labels() {
            if !tier::is_known(label) {
                return Err(ConfigError::ValidationError(format!(
                    "pool entry '{}' uses unknown tier label '{}'",
                    entry.tag, label
                )));
            }
        }
    }

    if config.selector.quota == 0 {
        return Err(ConfigError::ValidationError(
            "selector.quota cannot be 0".to_string(),
        ));
    }

    if config.selector.max_attempts == 0 {
        return Err(ConfigError::ValidationError(
            "selector.max_attempts cannot be 0".to_string(),
        ));
    }

    if config.sync.batch_size == 0 || config.sync.batch_size > MAX_BATCH_WRITE {
        return Err(ConfigError::ValidationError(format!(
            "sync.batch_size must be between 1 and {}",
            MAX_BATCH_WRITE
        )));
    }

    if config.sync.page_delay_ms == 0 {
        return Err(ConfigError::ValidationError(
            "sync.page_delay_ms cannot be 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackedSolver;
    use crate::testing::fixtures;

    fn valid_config() -> Config {
        let mut config: Config = toml::from_str("").unwrap();
        config.solvers = vec![TrackedSolver::new("alice", "alice01")];
        config.pool = vec![fixtures::pool_entry("dp")];
        config
    }

    fn assert_invalid(config: &Config) {
        let result = validate_config(config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validate_no_solvers_fails() {
        let mut config = valid_config();
        config.solvers.clear();
        assert_invalid(&config);
    }

    #[test]
    fn test_validate_empty_handle_fails() {
        let mut config = valid_config();
        config.solvers.push(TrackedSolver::new("ghost", "  "));
        assert_invalid(&config);
    }

    #[test]
    fn test_validate_empty_pool_fails() {
        let mut config = valid_config();
        config.pool.clear();
        assert_invalid(&config);
    }

    #[test]
    fn test_validate_unknown_tier_fails() {
        let mut config = valid_config();
        config.pool[0].level.high.max = "D1".to_string();
        assert_invalid(&config);
    }

    #[test]
    fn test_validate_lowercase_tier_accepted() {
        let mut config = valid_config();
        config.pool[0].level.low.min = "b5".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_zero_quota_fails() {
        let mut config = valid_config();
        config.selector.quota = 0;
        assert_invalid(&config);
    }

    #[test]
    fn test_validate_zero_attempts_fails() {
        let mut config = valid_config();
        config.selector.max_attempts = 0;
        assert_invalid(&config);
    }

    #[test]
    fn test_validate_batch_size_bounds() {
        let mut config = valid_config();
        config.sync.batch_size = 0;
        assert_invalid(&config);

        config.sync.batch_size = 26;
        assert_invalid(&config);

        config.sync.batch_size = 25;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_zero_page_delay_fails() {
        let mut config = valid_config();
        config.sync.page_delay_ms = 0;
        assert_invalid(&config);
    }
}
