pub mod records;
pub mod series;
pub mod transform;

pub use records::{ContinentRecord, CountryRecord, QueryResult};
pub use series::ChartSeries;
pub use transform::to_series;
