pub mod granularity;
pub mod money;
pub mod sales_series;
pub mod targets;

pub use granularity::Granularity;
pub use sales_series::{build_sales_series, SalesRow, SalesSeries};
pub use targets::{build_target_summary, TargetSummary};
