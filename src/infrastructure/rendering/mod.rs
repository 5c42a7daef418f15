pub mod line_renderer;

pub use line_renderer::LineChartRenderer;
