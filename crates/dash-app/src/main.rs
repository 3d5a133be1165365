//! Chart dashboard entry point
//!
//! Build with `trunk serve` from this directory.

use dash_components::Dashboard;

fn main() {
    console_error_panic_hook::set_once();
    init_tracing();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting chart dashboard");
    leptos::mount::mount_to_body(Dashboard);
}

/// Route `tracing` output to the browser console
#[cfg(target_arch = "wasm32")]
fn init_tracing() {
    tracing_wasm::set_as_global_default();
}

/// Route `tracing` output to stderr, filtered by `RUST_LOG`
#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}
