//! Console logging: `tracing` events go to the browser devtools console.

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

/// Debug builds log everything down to `debug!`; release keeps `info!` and up.
pub fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the wasm console subscriber. Call once, before the first event.
pub fn init() {
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(default_level())
        .set_report_logs_in_timings(false)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}
