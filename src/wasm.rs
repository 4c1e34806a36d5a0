use crate::errors::GridError;
use crate::grid::Grid;
use crate::log::init_logger;
use crate::preview::render_preview;
use crate::query::{require_word_list, search_words, WordResult};
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "G001", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<GridError> for WasmError {
    fn from(e: GridError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            help: e.help().map(|s| s.to_string()),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

/// Initialize logging and the panic hook.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmMatch {
    direction: &'static str,
    start: [usize; 2],
    end: [usize; 2],
}

#[derive(serde::Serialize)]
struct WasmWordResult {
    word: String,
    found: bool,
    locations: String,
    matches: Vec<WasmMatch>,
}

impl From<&WordResult> for WasmWordResult {
    fn from(r: &WordResult) -> Self {
        WasmWordResult {
            word: r.word.clone(),
            found: r.is_found(),
            locations: r.locations(),
            matches: r
                .matches
                .iter()
                .map(|m| WasmMatch {
                    direction: m.direction.label,
                    start: [m.start.row, m.start.col],
                    end: [m.end.row, m.end.col],
                })
                .collect(),
        }
    }
}

/// A loaded grid, held on the JavaScript side until the next upload replaces it.
#[wasm_bindgen]
pub struct GridHandle {
    grid: Grid,
}

#[wasm_bindgen]
impl GridHandle {
    /// JS entry: `GridHandle.load(text)`; throws an `Error` with code and suggestion on failure.
    #[wasm_bindgen(constructor)]
    pub fn load(text: &str) -> Result<GridHandle, JsValue> {
        let grid = Grid::parse_from_str(text).map_err(WasmError::from)?;
        log::info!("Loaded {} grid.", grid.dimensions_label());
        Ok(GridHandle { grid })
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// `Loaded RxC grid.`
    pub fn summary(&self) -> String {
        format!("Loaded {} grid.", self.grid.dimensions_label())
    }

    pub fn preview(&self) -> String {
        render_preview(&self.grid)
    }

    /// JS entry: `handle.search("cat, dog")` returns
    /// `Array<{ word, found, locations, matches: [{ direction, start, end }] }>`
    pub fn search(&self, words: &str) -> Result<JsValue, JsValue> {
        let words = require_word_list(words).map_err(WasmError::from)?;
        let results: Vec<WasmWordResult> = search_words(&self.grid, &words)
            .iter()
            .map(WasmWordResult::from)
            .collect();

        serde_wasm_bindgen::to_value(&results).map_err(|e| {
            WasmError {
                code: "WASM001".to_string(),
                message: format!("serialization failed: {e}"),
                description: "Failed to serialize search results".to_string(),
                help: Some("This is an internal error. Please report this issue.".to_string()),
            }
            .into()
        })
    }
}

/// Generate a debug report for troubleshooting.
///
/// # Arguments
/// * `grid_summary` - What the page showed after loading (e.g. `Loaded 3x3 grid.`)
/// * `words` - The raw word query
/// * `error_message` - The error message that was displayed
#[wasm_bindgen]
pub fn get_debug_info(grid_summary: &str, words: &str, error_message: &str) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // writing to a String never fails
    let _ = writeln!(&mut report, "=== GRIDSEEK DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let generated = js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_else(|| "unknown".to_string());
    let _ = writeln!(&mut report, "Generated: {generated}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{error_message}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Grid: {grid_summary}");
    let _ = writeln!(&mut report, "Words: {words}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {user_agent}");
        }
        let location = window.location().href().unwrap_or_else(|_| "unknown".to_string());
        let _ = writeln!(&mut report, "Location: {location}");
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}
