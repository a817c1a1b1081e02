//! Logging initialization

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output at debug level
    Development,
    /// Human-readable output limited to warnings, for interactive commands
    Cli,
    /// JSON output at info level
    Production,
    /// Bare registry; tests install their own capture layer
    Test,
}

impl Profile {
    /// Default filter directive when `RUST_LOG` is unset
    pub fn default_directive(&self) -> &'static str {
        match self {
            Profile::Development => "schemex=debug,schemex_core=debug,schemex_store=debug",
            Profile::Cli => "schemex=warn,schemex_core=warn,schemex_store=warn",
            Profile::Production => "schemex=info,schemex_core=info,schemex_store=info",
            Profile::Test => "off",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the global subscriber.
///
/// Only the first call has any effect. `RUST_LOG` overrides the profile's
/// default directive.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()));
        // try_init: an embedding application may already own the global subscriber
        let _ = match profile {
            Profile::Development | Profile::Cli => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .finish()
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init(),
        };
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert!(Profile::Development
            .default_directive()
            .contains("schemex_core=debug"));
        assert!(Profile::Production
            .default_directive()
            .contains("schemex_store=info"));
        assert_eq!(Profile::Test.default_directive(), "off");
    }

    #[test]
    fn test_cli_directive_hides_info_and_debug() {
        let directive = Profile::Cli.default_directive();
        for target in ["schemex=", "schemex_core=", "schemex_store="] {
            assert!(directive.contains(&format!("{}warn", target)), "{}", target);
        }
        assert!(!directive.contains("debug"));
        assert!(!directive.contains("info"));
    }
}
