//! WASM adapter exposing the clause-risk engine to JavaScript hosts.
//!
//! Thin by design: serialize input, run the engine, serialize output. No
//! rendering, no state. Oversize and empty input map to structured JSON
//! errors so hosts never have to catch exceptions.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use clause_risk::{AnalysisEngine, AnalysisResult, AnalysisSummary, ContractMetadata, RuleCatalog};

// Set up panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Maximum accepted input length, in characters.
const MAX_INPUT_CHARS: usize = 50_000;

/// Successful analysis payload returned to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasmAnalysis {
    pub results: Vec<AnalysisResult>,
    pub metadata: Option<ContractMetadata>,
    pub summary: AnalysisSummary,
    /// Crate version, so hosts can cache-bust on upgrades.
    pub version: String,
}

/// Structured error payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasmError {
    pub error: WasmErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasmErrorBody {
    /// "invalid_input" or "input_too_large".
    pub code: String,
    pub message: String,
}

impl WasmError {
    fn new(code: &str, message: String) -> Self {
        WasmError {
            error: WasmErrorBody {
                code: code.to_string(),
                message,
            },
        }
    }
}

/// Analyze contract text for the given role.
///
/// Returns `{results, metadata, summary, version}` on success or
/// `{error: {code, message}}` for empty or oversize input.
#[wasm_bindgen]
pub fn analyze_contract(text: &str, role: &str) -> JsValue {
    init();
    let value = analyze_contract_internal(text, role);
    serde_wasm_bindgen::to_value(&value).unwrap_or(JsValue::NULL)
}

fn analyze_contract_internal(text: &str, role: &str) -> serde_json::Value {
    if text.trim().is_empty() {
        let error = WasmError::new(
            "invalid_input",
            "Texto do contrato inválido ou vazio.".to_string(),
        );
        return serde_json::to_value(error).unwrap_or_default();
    }

    let char_count = text.chars().count();
    if char_count > MAX_INPUT_CHARS {
        let error = WasmError::new(
            "input_too_large",
            format!(
                "O texto tem {} caracteres; o máximo aceito é {}.",
                char_count, MAX_INPUT_CHARS
            ),
        );
        return serde_json::to_value(error).unwrap_or_default();
    }

    let engine = AnalysisEngine::new();
    let report = engine.analyze(text, role);
    let analysis = WasmAnalysis {
        summary: AnalysisSummary::of(&report.results),
        results: report.results,
        metadata: report.metadata,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    serde_json::to_value(analysis).unwrap_or_default()
}

/// Role names known to the default catalogue, in catalogue order, so hosts
/// can build role pickers without hardcoding.
#[wasm_bindgen]
pub fn available_roles() -> JsValue {
    init();
    let roles = available_roles_internal();
    serde_wasm_bindgen::to_value(&roles).unwrap_or(JsValue::NULL)
}

fn available_roles_internal() -> Vec<String> {
    RuleCatalog::shared().roles().to_vec()
}
