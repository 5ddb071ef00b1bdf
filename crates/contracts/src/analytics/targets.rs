//! Achieved-vs-target summarizer for the grouped bar chart.

use serde::{Deserialize, Serialize};

use crate::analytics::money::parse_amount;
use crate::domain::b001_brand::Brand;

/// Two parallel numeric series aligned by brand order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSummary {
    pub brands: Vec<String>,
    pub achieved: Vec<f64>,
    pub target: Vec<f64>,
}

impl TargetSummary {
    pub fn max_value(&self) -> f64 {
        self.achieved
            .iter()
            .chain(self.target.iter())
            .copied()
            .fold(0.0, f64::max)
    }
}

/// Same parsing and zero-fallback policy as the sales aggregator: a
/// malformed annual target or achieved figure contributes `0.0`.
pub fn build_target_summary(brands: &[Brand]) -> TargetSummary {
    TargetSummary {
        brands: brands.iter().map(|b| b.brand_name.clone()).collect(),
        achieved: brands
            .iter()
            .map(|b| parse_amount(&b.targets_and_achieved.achieved))
            .collect(),
        target: brands
            .iter()
            .map(|b| parse_amount(&b.targets_and_achieved.annual_target))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::b001_brand::BrandDto;

    fn brand(name: &str, achieved: &str, target: &str) -> Brand {
        let mut dto = BrandDto::default();
        dto.apply_path("brandName", name.to_string());
        dto.apply_path("targetsAndAchieved.achieved", achieved.to_string());
        dto.apply_path("targetsAndAchieved.annualTarget", target.to_string());
        dto.into_brand()
    }

    #[test]
    fn series_align_by_brand_order() {
        let brands = vec![
            brand("A", "$1,000", "$2,000"),
            brand("B", "$500.50", "$750"),
        ];
        let summary = build_target_summary(&brands);

        assert_eq!(summary.brands, vec!["A", "B"]);
        assert_eq!(summary.achieved, vec![1000.0, 500.5]);
        assert_eq!(summary.target, vec![2000.0, 750.0]);
        assert_eq!(summary.achieved.len(), summary.target.len());
    }

    #[test]
    fn malformed_figures_degrade_to_zero() {
        let brands = vec![brand("A", "pending", "")];
        let summary = build_target_summary(&brands);
        assert_eq!(summary.achieved, vec![0.0]);
        assert_eq!(summary.target, vec![0.0]);
    }

    #[test]
    fn max_spans_both_series() {
        let brands = vec![brand("A", "$900", "$400"), brand("B", "$100", "$850")];
        assert_eq!(build_target_summary(&brands).max_value(), 900.0);
    }
}
