use crate::models::Colour;
use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Pixel tracing on stderr, switched on by `LED_DEBUG`
pub(crate) fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("LED_DEBUG").is_ok())
}

/// Trace line printed for each `set_pixel` call
pub(crate) fn pixel_trace(colour: Colour, row: u32, col: u32) -> String {
    format!("Setting pixel row {} column {} to {}", row, col, colour)
}
