use crate::domain::{
    chart::ChartPayload,
    logging::{LogComponent, get_logger},
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Precomputed geometry shared by every line of one chart
#[derive(Debug, Clone)]
struct ScaleParams {
    padding: f64,
    legend_space: f64,
    chart_width: f64,
    chart_height: f64,
    min_value: f64,
    value_range: f64,
    x_step: f64,
}

/// Canvas 2D renderer for line-chart payloads - Infrastructure implementation.
///
/// Owns no chart state: each call resolves the target canvas by the payload's
/// id and clears it before drawing, so a redraw always disposes the previous
/// frame first.
pub struct LineChartRenderer {
    width: u32,
    height: u32,
}

impl LineChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Get canvas element and 2D context for a payload's target
    fn get_canvas_context(
        &self,
        canvas_id: &str,
    ) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
        let document =
            window.document().ok_or_else(|| JsValue::from_str("document not available"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("canvas '{}' not found", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("element is not a canvas"))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        let context = canvas
            .get_context("2d")
            .map_err(|_| JsValue::from_str("failed to get 2D context"))?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("failed to cast to 2D context"))?;

        Ok((canvas, context))
    }

    /// Render one payload onto its canvas, replacing whatever was there
    pub fn render(&self, payload: &ChartPayload) -> Result<(), JsValue> {
        let (_canvas, context) = self.get_canvas_context(&payload.chart_id)?;

        // Dispose previous frame before drawing the new one
        context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        context.set_fill_style(&JsValue::from("#fafafa"));
        context.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);

        let Some(params) = self.calculate_scale_params(payload) else {
            self.render_no_data_message(&context)?;
            return Ok(());
        };

        for dataset in &payload.datasets {
            self.render_line(&context, &dataset.data, &dataset.color, dataset.dashed, &params)?;
        }

        self.render_value_scale(&context, &params)?;
        self.render_time_labels(&context, payload, &params)?;
        self.render_legend(&context, payload, &params)?;

        get_logger().debug(
            LogComponent::Infrastructure("LineRenderer"),
            &format!(
                "Rendered '{}': {} datasets over {} labels",
                payload.chart_id,
                payload.datasets.len(),
                payload.labels.len()
            ),
        );

        Ok(())
    }

    fn calculate_scale_params(&self, payload: &ChartPayload) -> Option<ScaleParams> {
        if payload.labels.is_empty() {
            return None;
        }

        let mut min_value = f64::INFINITY;
        let mut max_value = f64::NEG_INFINITY;
        for dataset in &payload.datasets {
            for value in dataset.data.iter().flatten() {
                min_value = min_value.min(*value);
                max_value = max_value.max(*value);
            }
        }
        if !min_value.is_finite() || !max_value.is_finite() {
            return None;
        }

        let padding = 40.0;
        let legend_space = 24.0;
        let chart_width = self.width as f64 - padding * 2.0;
        let chart_height = self.height as f64 - padding * 2.0 - legend_space;
        let value_range = (max_value - min_value).max(f64::EPSILON);
        let x_step = if payload.labels.len() > 1 {
            chart_width / (payload.labels.len() - 1) as f64
        } else {
            chart_width
        };

        Some(ScaleParams {
            padding,
            legend_space,
            chart_width,
            chart_height,
            min_value,
            value_range,
            x_step,
        })
    }

    fn value_to_y(&self, value: f64, params: &ScaleParams) -> f64 {
        let normalized = (value - params.min_value) / params.value_range;
        params.padding + params.legend_space + (1.0 - normalized) * params.chart_height
    }

    /// Draw one polyline, lifting the pen over `None` gaps
    fn render_line(
        &self,
        context: &CanvasRenderingContext2d,
        data: &[Option<f64>],
        color: &str,
        dashed: bool,
        params: &ScaleParams,
    ) -> Result<(), JsValue> {
        context.set_stroke_style(&JsValue::from(color));
        context.set_line_width(2.0);
        if dashed {
            let pattern = js_sys::Array::of2(&JsValue::from_f64(5.0), &JsValue::from_f64(5.0));
            context.set_line_dash(&pattern)?;
        }

        context.begin_path();
        let mut pen_down = false;
        for (i, entry) in data.iter().enumerate() {
            match entry {
                Some(value) => {
                    let x = params.padding + i as f64 * params.x_step;
                    let y = self.value_to_y(*value, params);
                    if pen_down {
                        context.line_to(x, y);
                    } else {
                        context.move_to(x, y);
                        pen_down = true;
                    }
                }
                None => pen_down = false,
            }
        }
        context.stroke();

        if dashed {
            context.set_line_dash(&js_sys::Array::new())?;
        }
        Ok(())
    }

    fn render_value_scale(
        &self,
        context: &CanvasRenderingContext2d,
        params: &ScaleParams,
    ) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from("#666666"));
        context.set_font("11px Arial");

        let max_text = format!("${:.2}", params.min_value + params.value_range);
        context.fill_text(&max_text, 4.0, params.padding + params.legend_space)?;

        let min_text = format!("${:.2}", params.min_value);
        context.fill_text(&min_text, 4.0, params.padding + params.legend_space + params.chart_height)?;

        Ok(())
    }

    fn render_time_labels(
        &self,
        context: &CanvasRenderingContext2d,
        payload: &ChartPayload,
        params: &ScaleParams,
    ) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from("#666666"));
        context.set_font("11px Arial");

        let y = self.height as f64 - 8.0;
        if let Some(first) = payload.labels.first() {
            context.fill_text(first, params.padding, y)?;
        }
        if payload.labels.len() > 1 {
            if let Some(last) = payload.labels.last() {
                context.fill_text(last, params.padding + params.chart_width - 60.0, y)?;
            }
        }
        Ok(())
    }

    fn render_legend(
        &self,
        context: &CanvasRenderingContext2d,
        payload: &ChartPayload,
        params: &ScaleParams,
    ) -> Result<(), JsValue> {
        context.set_font("12px Arial");
        let mut x = params.padding;
        let y = 16.0;

        for dataset in &payload.datasets {
            context.set_fill_style(&JsValue::from(dataset.color.as_str()));
            context.fill_rect(x, y - 8.0, 10.0, 10.0);
            context.set_fill_style(&JsValue::from("#333333"));
            context.fill_text(&dataset.label, x + 14.0, y)?;
            x += 14.0 + 8.0 * dataset.label.len() as f64 + 20.0;
        }
        Ok(())
    }

    fn render_no_data_message(&self, context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from("#999999"));
        context.set_font("14px Arial");
        context.fill_text("No chart data available", 40.0, self.height as f64 / 2.0)?;

        get_logger().warn(
            LogComponent::Infrastructure("LineRenderer"),
            "Payload had no plottable values",
        );
        Ok(())
    }
}
