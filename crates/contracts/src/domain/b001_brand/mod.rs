pub mod aggregate;
pub mod dto;

pub use aggregate::{
    Brand, BrandId, InventoryReport, OperationalExpenses, PeriodSales, QuarterTarget,
    SalesDetails, TargetsAndAchieved,
};
pub use dto::BrandDto;
