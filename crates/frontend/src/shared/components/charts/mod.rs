pub mod bar_chart;
pub mod geometry;
pub mod line_chart;

pub use bar_chart::BarChart;
pub use line_chart::LineChart;

/// Series color cycle for line charts, reused in the legend.
pub const LINE_COLORS: [&str; 4] = ["#8884d8", "#82ca9d", "#ffc658", "#ff7300"];

pub const ACHIEVED_COLOR: &str = "#4bc0c0";
pub const TARGET_COLOR: &str = "#ff6384";
