pub mod entities;
pub mod generator;
pub mod indicators;
pub mod prediction;
pub mod value_objects;

pub use entities::{PricePoint, PriceSeries};
pub use indicators::MovingAverages;
pub use value_objects::{DateRange, Price, Symbol, Volume};
