pub mod services;
pub mod value_objects;

pub use value_objects::{ChartDataset, ChartPayload, TableRow};
