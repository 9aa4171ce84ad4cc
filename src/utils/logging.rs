//! `tracing` output to the browser console.

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

/// Install the global subscriber. Call once, from `main`.
pub fn init(max_level: Level) {
    let config = WASMLayerConfigBuilder::default()
        .set_max_level(max_level)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);

    tracing::debug!(%max_level, "logging initialised");
}
