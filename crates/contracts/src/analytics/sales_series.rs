//! Time-bucket aggregator: reshapes the brand list into per-period rows for
//! the sales-performance line chart.

use serde::{Deserialize, Serialize};

use crate::analytics::granularity::Granularity;
use crate::analytics::money::parse_amount;
use crate::domain::b001_brand::Brand;

/// One chart row: a period label plus one value per brand.
///
/// `values[i]` belongs to `SalesSeries::brands[i]`; a brand without a
/// breakdown entry for the period contributes `0.0`, never an omission, so
/// every series stays the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRow {
    pub period: String,
    pub values: Vec<f64>,
}

/// Ordered row set for one granularity, ready for direct chart consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSeries {
    pub granularity: Granularity,
    /// Brand names in list order; fixes the column order of every row
    pub brands: Vec<String>,
    /// One row per canonical period, in canonical order
    pub rows: Vec<SalesRow>,
}

impl SalesSeries {
    /// Maximum value across all rows, used to scale the y axis.
    pub fn max_value(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|row| row.values.iter().copied())
            .fold(0.0, f64::max)
    }
}

/// Builds the ordered per-period rows for the selected granularity.
///
/// Row order follows the canonical period sequence of the granularity
/// (12 months, 4 quarters, 2 half-years, or the fixed year list), not the
/// order breakdown entries happen to appear in the data.
pub fn build_sales_series(brands: &[Brand], granularity: Granularity) -> SalesSeries {
    let brand_names: Vec<String> = brands.iter().map(|b| b.brand_name.clone()).collect();

    let rows = granularity
        .period_labels()
        .iter()
        .map(|label| {
            let values = brands
                .iter()
                .map(|brand| {
                    brand
                        .sales_details
                        .breakdown(granularity)
                        .and_then(|entries| entries.iter().find(|e| e.period == *label))
                        .map(|entry| parse_amount(&entry.sales))
                        .unwrap_or(0.0)
                })
                .collect();
            SalesRow {
                period: (*label).to_string(),
                values,
            }
        })
        .collect();

    SalesSeries {
        granularity,
        brands: brand_names,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::b001_brand::{Brand, BrandDto, PeriodSales};

    fn brand_with_quarters(name: &str, quarters: &[(&str, &str)]) -> Brand {
        let mut dto = BrandDto::default();
        dto.apply_path("brandName", name.to_string());
        let mut brand = dto.into_brand();
        brand.sales_details.quarter_wise = Some(
            quarters
                .iter()
                .map(|(q, s)| PeriodSales::new(*q, *s))
                .collect(),
        );
        brand
    }

    fn bare_brand(name: &str) -> Brand {
        let mut dto = BrandDto::default();
        dto.apply_path("brandName", name.to_string());
        dto.into_brand()
    }

    #[test]
    fn row_count_matches_granularity() {
        let brands = vec![bare_brand("A")];
        assert_eq!(
            build_sales_series(&brands, Granularity::Monthly).rows.len(),
            12
        );
        assert_eq!(
            build_sales_series(&brands, Granularity::Quarterly)
                .rows
                .len(),
            4
        );
        assert_eq!(
            build_sales_series(&brands, Granularity::HalfYearly)
                .rows
                .len(),
            2
        );
        assert_eq!(
            build_sales_series(&brands, Granularity::Yearly).rows.len(),
            3
        );
    }

    #[test]
    fn rows_follow_canonical_order_not_data_order() {
        // Breakdown entries deliberately out of order and incomplete
        let brands = vec![brand_with_quarters(
            "A",
            &[("Q3", "$300"), ("Q1", "$100")],
        )];
        let series = build_sales_series(&brands, Granularity::Quarterly);

        let periods: Vec<&str> = series.rows.iter().map(|r| r.period.as_str()).collect();
        assert_eq!(periods, vec!["Q1", "Q2", "Q3", "Q4"]);
        assert_eq!(series.rows[0].values, vec![100.0]);
        assert_eq!(series.rows[1].values, vec![0.0]);
        assert_eq!(series.rows[2].values, vec![300.0]);
        assert_eq!(series.rows[3].values, vec![0.0]);
    }

    #[test]
    fn every_row_has_a_value_for_every_brand() {
        let brands = vec![
            brand_with_quarters("A", &[("Q1", "$1,000.50")]),
            bare_brand("B"),
            brand_with_quarters("C", &[("Q4", "$4,000")]),
        ];
        let series = build_sales_series(&brands, Granularity::Quarterly);

        assert_eq!(series.brands, vec!["A", "B", "C"]);
        for row in &series.rows {
            assert_eq!(row.values.len(), 3);
        }
        assert_eq!(series.rows[0].values, vec![1000.5, 0.0, 0.0]);
        assert_eq!(series.rows[3].values, vec![0.0, 0.0, 4000.0]);
    }

    #[test]
    fn brand_without_breakdown_is_all_zeros() {
        let brands = vec![bare_brand("New")];
        for granularity in Granularity::ALL {
            let series = build_sales_series(&brands, granularity);
            for row in &series.rows {
                assert_eq!(row.values, vec![0.0]);
            }
        }
    }

    #[test]
    fn appended_brand_shows_up_with_zero_values() {
        let mut brands = vec![brand_with_quarters("A", &[("Q1", "$100")])];
        brands.push(bare_brand("B"));

        let series = build_sales_series(&brands, Granularity::Quarterly);
        assert_eq!(series.brands.len(), 2);
        assert!(series.rows.iter().all(|r| r.values[1] == 0.0));
        assert_eq!(series.rows[0].values[0], 100.0);
    }

    #[test]
    fn malformed_sales_strings_degrade_to_zero() {
        let brands = vec![brand_with_quarters("A", &[("Q1", "TBD"), ("Q2", "")])];
        let series = build_sales_series(&brands, Granularity::Quarterly);
        assert_eq!(series.rows[0].values, vec![0.0]);
        assert_eq!(series.rows[1].values, vec![0.0]);
    }

    #[test]
    fn max_value_spans_all_rows() {
        let brands = vec![
            brand_with_quarters("A", &[("Q1", "$100"), ("Q2", "$900")]),
            brand_with_quarters("B", &[("Q3", "$450")]),
        ];
        let series = build_sales_series(&brands, Granularity::Quarterly);
        assert_eq!(series.max_value(), 900.0);
    }
}
