use std::sync::Once;

use tracing_subscriber::filter::Directive;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "daily_limit=info";

/// Installs the global `fmt` subscriber, honouring `RUST_LOG` on top of the crate default.
///
/// Returns `false` when another global subscriber was already installed.
pub fn init_tracing() -> bool {
    let mut installed = false;
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        match fmt().with_env_filter(filter).try_init() {
            Ok(()) => installed = true,
            Err(err) => {
                tracing::debug!(error = %err, "keeping existing tracing subscriber");
            }
        }
    });
    installed
}
