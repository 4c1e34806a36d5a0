// Reusable library API — visible to both CLI and WASM builds
pub mod direction;
pub mod errors;
pub mod grid;
mod grid_char;
pub mod locator;
pub mod log;
pub mod preview;
pub mod query;

pub use grid_char::{BLANK, BLANK_DISPLAY, FIELD_DELIMITER};

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
