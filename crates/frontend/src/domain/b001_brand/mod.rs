pub mod fixture;
pub mod ui;
