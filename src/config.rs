use crate::render::MAX_PREVIEW_SCALE;
use std::sync::OnceLock;

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static PREVIEW_SCALE: OnceLock<u32> = OnceLock::new();

pub(crate) fn preview_scale() -> u32 {
    *PREVIEW_SCALE
        .get_or_init(|| parse_env_u32("LED_PREVIEW_SCALE", 8).clamp(1, MAX_PREVIEW_SCALE))
}

static PREVIEW_GRID: OnceLock<bool> = OnceLock::new();

pub(crate) fn preview_grid() -> bool {
    *PREVIEW_GRID.get_or_init(|| parse_env_bool_u8("LED_PREVIEW_GRID", true))
}
