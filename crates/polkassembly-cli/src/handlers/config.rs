//! Config command handler.
//!
//! Shows the effective check configuration in `key = value` format, with the
//! environment variable that sets each value.

use crate::config::{CheckConfig, ENV_ALLOW_ADDED_DEFAULTS, ENV_ALLOW_UNKNOWN_KEYS, ENV_PRETTY};

/// `(key, value, env var)` rows for `config`.
pub fn rows(config: &CheckConfig) -> Vec<(&'static str, bool, &'static str)> {
    vec![
        (
            "allow_added_defaults",
            config.allow_added_defaults,
            ENV_ALLOW_ADDED_DEFAULTS,
        ),
        (
            "allow_unknown_keys",
            config.allow_unknown_keys,
            ENV_ALLOW_UNKNOWN_KEYS,
        ),
        ("pretty", config.pretty, ENV_PRETTY),
    ]
}

/// Execute the config command.
pub fn execute(config: &CheckConfig) {
    for (key, value, env) in rows(config) {
        println!("{key} = {value}  ({env})");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_reflect_config() {
        let config = CheckConfig::new().with_pretty(false);
        let rows = rows(&config);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], ("pretty", false, ENV_PRETTY));
        assert!(rows[0].1);
    }
}
