pub mod analysis_service;

pub use analysis_service::{AnalysisService, AnalysisSnapshot, TABLE_ROWS};
