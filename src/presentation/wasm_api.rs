use wasm_bindgen::prelude::*;

use crate::application::AnalysisService;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::rendering::LineChartRenderer;

/// WASM bridge for JavaScript callers that want the raw payloads instead of
/// the built-in Leptos UI. Thin by design - all logic lives in the
/// application layer.
#[wasm_bindgen]
pub struct StockPredictorApi {
    service: AnalysisService,
    chart_width: u32,
    chart_height: u32,
}

impl Default for StockPredictorApi {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl StockPredictorApi {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { service: AnalysisService::new(), chart_width: 800, chart_height: 400 }
    }

    #[wasm_bindgen(js_name = setChartSize)]
    pub fn set_chart_size(&mut self, width: u32, height: u32) {
        self.chart_width = width;
        self.chart_height = height;
    }

    /// Run the full pipeline and return the snapshot as a JSON string:
    /// symbol, series, table rows and the four chart payloads.
    #[wasm_bindgen(js_name = analyze)]
    pub fn analyze(&self, symbol: String) -> Result<String, JsValue> {
        let snapshot =
            self.service.analyze(&symbol).map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&snapshot)
            .map_err(|e| JsValue::from_str(&format!("snapshot serialization failed: {}", e)))
    }

    /// Run the pipeline and draw directly onto the page's four canvases
    #[wasm_bindgen(js_name = analyzeAndRender)]
    pub fn analyze_and_render(&self, symbol: String) -> Result<(), JsValue> {
        let snapshot =
            self.service.analyze(&symbol).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let renderer = LineChartRenderer::new(self.chart_width, self.chart_height);
        for payload in snapshot.chart_payloads() {
            renderer.render(payload)?;
        }

        get_logger().info(
            LogComponent::Presentation("Api"),
            &format!("✅ Rendered analysis for {}", snapshot.symbol.value()),
        );
        Ok(())
    }
}
