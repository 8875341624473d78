//! Process-wide tracing setup.
//!
//! Library code only emits `tracing` events. A host application picks a
//! [`Profile`] and calls [`init`] once at startup; later calls are no-ops.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output, debug level.
    Development,
    /// JSON lines, info level.
    Production,
    /// Bare registry; events are dropped unless a test installs its own subscriber.
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is unset. `None` for profiles that do not filter.
    pub fn default_directives(self) -> Option<&'static str> {
        match self {
            Profile::Development => Some("recorder_core=debug,recorder_translators=debug"),
            Profile::Production => Some("recorder_core=info,recorder_translators=info"),
            Profile::Test => None,
        }
    }

    fn filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directives().unwrap_or("off")))
    }
}

static INIT_ONCE: Once = Once::new();

/// Installs the global subscriber for `profile`. A subscriber installed
/// elsewhere first is left in place.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let installed: Result<(), Box<dyn std::error::Error + Send + Sync>> = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(profile.filter())
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(profile.filter())
                .try_init(),
            Profile::Test => tracing_subscriber::registry()
                .try_init()
                .map_err(Into::into),
        };
        if let Err(error) = installed {
            tracing::debug!(?profile, %error, "global subscriber already set; keeping it");
        }
    });
}
