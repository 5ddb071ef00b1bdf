pub mod d100_sales_performance;
pub mod d101_target_achievement;
