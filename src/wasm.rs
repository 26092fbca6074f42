//! WASM bindings for the cloud-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::geometry::SizeI;
use crate::layout::{layout_cloud, LayoutConfig};
use crate::output::{CloudOutput, ErrorInfo};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

/// JSON request: sizes in placement order, plus optional layout settings.
#[derive(Debug, Deserialize)]
struct CloudRequest {
    sizes: Vec<SizeI>,
    #[serde(default)]
    config: LayoutConfig,
}

/// Run a full layout from a JSON request. Failures come back inside the output.
pub fn build_cloud(input: &str) -> CloudOutput {
    let request: CloudRequest = match serde_json::from_str(input) {
        Ok(request) => request,
        Err(e) => {
            let error = ErrorInfo {
                message: format!("invalid request: {}", e),
                index: None,
            };
            return CloudOutput::from_error(LayoutConfig::default().center, error);
        }
    };
    let center = request.config.center;

    if let Err(e) = request.config.validate(&request.sizes) {
        let error = ErrorInfo {
            message: e.to_string(),
            index: None,
        };
        return CloudOutput::from_error(center, error);
    }

    match layout_cloud(&request.sizes, &request.config) {
        Ok(layouter) => CloudOutput::from_layouter(&layouter),
        Err(e) => {
            let error = ErrorInfo {
                message: e.to_string(),
                index: request.sizes.iter().position(|s| !s.is_valid()),
            };
            CloudOutput::from_error(center, error)
        }
    }
}

#[wasm_bindgen]
pub fn compile_cloud(input: &str) -> String {
    let output = build_cloud(input);
    if let Some(error) = &output.error {
        console_error(&format!("Error building cloud: {}", error.message));
    }
    serde_json::to_string(&output)
        .unwrap_or_else(|_| "{\"error\": {\"message\": \"Serialization error\"}}".to_string())
}
