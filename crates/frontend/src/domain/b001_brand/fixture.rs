//! Static in-memory seed data for the brand list.
//!
//! There is no backend: these records are the whole data set, and brands
//! created through the form live next to them in view state until the page
//! is reloaded.

use chrono::{NaiveDate, TimeZone, Utc};
use contracts::domain::b001_brand::{
    Brand, BrandId, InventoryReport, OperationalExpenses, PeriodSales, QuarterTarget,
    SalesDetails, TargetsAndAchieved,
};
use once_cell::sync::Lazy;

fn periods(entries: &[(&str, &str)]) -> Option<Vec<PeriodSales>> {
    Some(
        entries
            .iter()
            .map(|(period, sales)| PeriodSales::new(*period, *sales))
            .collect(),
    )
}

fn quarter_targets(entries: &[(&str, &str, &str)]) -> Option<Vec<QuarterTarget>> {
    Some(
        entries
            .iter()
            .map(|(quarter, achieved, target)| QuarterTarget {
                quarter: (*quarter).to_string(),
                achieved: (*achieved).to_string(),
                target: (*target).to_string(),
            })
            .collect(),
    )
}

static SEED: Lazy<Vec<Brand>> = Lazy::new(|| {
    vec![
        Brand {
            id: BrandId::new_v4(),
            brand_name: "Velora".to_string(),
            logo: Some("/logos/velora.svg".to_string()),
            sales_details: SalesDetails {
                total_sales: "$1,250,000".to_string(),
                top_product: "Velora Classic Tee".to_string(),
                growth_rate: "12.5%".to_string(),
                month_wise: periods(&[
                    ("Jan", "$95,000"),
                    ("Feb", "$88,500"),
                    ("Mar", "$102,300"),
                    ("Apr", "$97,800"),
                    ("May", "$110,250"),
                    ("Jun", "$105,400"),
                    ("Jul", "$99,600"),
                    ("Aug", "$108,900"),
                    ("Sep", "$112,750"),
                    ("Oct", "$104,200"),
                    ("Nov", "$118,300"),
                    ("Dec", "$107,000"),
                ]),
                quarter_wise: periods(&[
                    ("Q1", "$285,800"),
                    ("Q2", "$313,450"),
                    ("Q3", "$321,250"),
                    ("Q4", "$329,500"),
                ]),
                half_yearly: periods(&[("H1", "$599,250"), ("H2", "$650,750")]),
                yearly: periods(&[
                    ("2021", "$980,000"),
                    ("2022", "$1,105,000"),
                    ("2023", "$1,250,000"),
                ]),
            },
            inventory_report: InventoryReport {
                total_stock: "54,000 units".to_string(),
                warehouses: Some(vec![
                    "Dallas, TX".to_string(),
                    "Reno, NV".to_string(),
                    "Columbus, OH".to_string(),
                ]),
                damaged_units: "312".to_string(),
                last_audit: NaiveDate::from_ymd_opt(2023, 11, 14),
            },
            operational_expenses: OperationalExpenses {
                annual: "$420,000".to_string(),
                marketing: Some("$150,000".to_string()),
                rnd: Some("$95,000".to_string()),
                logistics: Some("$175,000".to_string()),
            },
            targets_and_achieved: TargetsAndAchieved {
                annual_target: "$1,400,000".to_string(),
                achieved: "$1,250,000".to_string(),
                quarter_wise: quarter_targets(&[
                    ("Q1", "$285,800", "$330,000"),
                    ("Q2", "$313,450", "$340,000"),
                    ("Q3", "$321,250", "$360,000"),
                    ("Q4", "$329,500", "$370,000"),
                ]),
            },
            head_of_brand: "Maya Castellanos".to_string(),
            created_at: Utc.with_ymd_and_hms(2021, 3, 2, 9, 0, 0).unwrap(),
        },
        Brand {
            id: BrandId::new_v4(),
            brand_name: "Northtrail".to_string(),
            logo: Some("/logos/northtrail.svg".to_string()),
            sales_details: SalesDetails {
                total_sales: "$2,080,000".to_string(),
                top_product: "Northtrail Summit Jacket".to_string(),
                growth_rate: "18.2%".to_string(),
                month_wise: periods(&[
                    ("Jan", "$210,000"),
                    ("Feb", "$165,000"),
                    ("Mar", "$158,500"),
                    ("Apr", "$142,000"),
                    ("May", "$138,750"),
                    ("Jun", "$151,200"),
                    ("Jul", "$149,800"),
                    ("Aug", "$163,400"),
                    ("Sep", "$178,900"),
                    ("Oct", "$196,450"),
                    ("Nov", "$215,000"),
                    ("Dec", "$211,000"),
                ]),
                quarter_wise: periods(&[
                    ("Q1", "$533,500"),
                    ("Q2", "$431,950"),
                    ("Q3", "$492,100"),
                    ("Q4", "$622,450"),
                ]),
                half_yearly: periods(&[("H1", "$965,450"), ("H2", "$1,114,550")]),
                yearly: periods(&[
                    ("2021", "$1,540,000"),
                    ("2022", "$1,760,000"),
                    ("2023", "$2,080,000"),
                ]),
            },
            inventory_report: InventoryReport {
                total_stock: "38,500 units".to_string(),
                warehouses: Some(vec!["Denver, CO".to_string(), "Portland, OR".to_string()]),
                damaged_units: "127".to_string(),
                last_audit: NaiveDate::from_ymd_opt(2023, 12, 1),
            },
            operational_expenses: OperationalExpenses {
                annual: "$610,000".to_string(),
                marketing: Some("$220,000".to_string()),
                rnd: Some("$180,000".to_string()),
                logistics: Some("$210,000".to_string()),
            },
            targets_and_achieved: TargetsAndAchieved {
                annual_target: "$2,000,000".to_string(),
                achieved: "$2,080,000".to_string(),
                quarter_wise: quarter_targets(&[
                    ("Q1", "$533,500", "$500,000"),
                    ("Q2", "$431,950", "$470,000"),
                    ("Q3", "$492,100", "$490,000"),
                    ("Q4", "$622,450", "$540,000"),
                ]),
            },
            head_of_brand: "Tom Okafor".to_string(),
            created_at: Utc.with_ymd_and_hms(2021, 6, 18, 9, 0, 0).unwrap(),
        },
        Brand {
            id: BrandId::new_v4(),
            brand_name: "Cobalt & Co".to_string(),
            logo: Some("/logos/cobalt.svg".to_string()),
            sales_details: SalesDetails {
                total_sales: "$860,000".to_string(),
                top_product: "Cobalt Weekender Bag".to_string(),
                growth_rate: "7.9%".to_string(),
                // Reporting for this brand started mid-year; monthly data is
                // incomplete on purpose so the chart shows the zero-fill.
                month_wise: periods(&[
                    ("Jul", "$61,200"),
                    ("Aug", "$74,800"),
                    ("Sep", "$79,300"),
                    ("Oct", "$83,100"),
                    ("Nov", "$96,500"),
                    ("Dec", "$101,400"),
                ]),
                quarter_wise: periods(&[("Q3", "$215,300"), ("Q4", "$281,000")]),
                half_yearly: periods(&[("H2", "$496,300")]),
                yearly: periods(&[("2022", "$640,000"), ("2023", "$860,000")]),
            },
            inventory_report: InventoryReport {
                total_stock: "21,700 units".to_string(),
                warehouses: Some(vec!["Newark, NJ".to_string()]),
                damaged_units: "58".to_string(),
                last_audit: NaiveDate::from_ymd_opt(2023, 9, 27),
            },
            operational_expenses: OperationalExpenses {
                annual: "$295,000".to_string(),
                marketing: Some("$120,000".to_string()),
                rnd: Some("$40,000".to_string()),
                logistics: Some("$135,000".to_string()),
            },
            targets_and_achieved: TargetsAndAchieved {
                annual_target: "$1,000,000".to_string(),
                achieved: "$860,000".to_string(),
                quarter_wise: quarter_targets(&[
                    ("Q3", "$215,300", "$250,000"),
                    ("Q4", "$281,000", "$300,000"),
                ]),
            },
            head_of_brand: "Priya Raman".to_string(),
            created_at: Utc.with_ymd_and_hms(2022, 5, 9, 9, 0, 0).unwrap(),
        },
        Brand {
            id: BrandId::new_v4(),
            brand_name: "Sundial".to_string(),
            logo: Some("/logos/sundial.svg".to_string()),
            sales_details: SalesDetails {
                total_sales: "$1,540,000".to_string(),
                top_product: "Sundial Field Watch".to_string(),
                growth_rate: "9.4%".to_string(),
                month_wise: periods(&[
                    ("Jan", "$118,000"),
                    ("Feb", "$121,500"),
                    ("Mar", "$126,800"),
                    ("Apr", "$130,200"),
                    ("May", "$134,900"),
                    ("Jun", "$129,300"),
                    ("Jul", "$127,600"),
                    ("Aug", "$131,800"),
                    ("Sep", "$128,400"),
                    ("Oct", "$130,900"),
                    ("Nov", "$132,200"),
                    ("Dec", "$128,400"),
                ]),
                quarter_wise: periods(&[
                    ("Q1", "$366,300"),
                    ("Q2", "$394,400"),
                    ("Q3", "$387,800"),
                    ("Q4", "$391,500"),
                ]),
                half_yearly: periods(&[("H1", "$760,700"), ("H2", "$779,300")]),
                yearly: periods(&[
                    ("2021", "$1,310,000"),
                    ("2022", "$1,408,000"),
                    ("2023", "$1,540,000"),
                ]),
            },
            inventory_report: InventoryReport {
                total_stock: "12,300 units".to_string(),
                warehouses: Some(vec![
                    "Chicago, IL".to_string(),
                    "Atlanta, GA".to_string(),
                ]),
                damaged_units: "19".to_string(),
                last_audit: NaiveDate::from_ymd_opt(2023, 10, 5),
            },
            operational_expenses: OperationalExpenses {
                annual: "$505,000".to_string(),
                marketing: Some("$170,000".to_string()),
                rnd: Some("$205,000".to_string()),
                logistics: Some("$130,000".to_string()),
            },
            targets_and_achieved: TargetsAndAchieved {
                annual_target: "$1,500,000".to_string(),
                achieved: "$1,540,000".to_string(),
                quarter_wise: quarter_targets(&[
                    ("Q1", "$366,300", "$360,000"),
                    ("Q2", "$394,400", "$375,000"),
                    ("Q3", "$387,800", "$380,000"),
                    ("Q4", "$391,500", "$385,000"),
                ]),
            },
            head_of_brand: "Elena Vasquez".to_string(),
            created_at: Utc.with_ymd_and_hms(2020, 11, 23, 9, 0, 0).unwrap(),
        },
    ]
});

/// Fresh copy of the seed list for the page-load view state.
pub fn seed_brands() -> Vec<Brand> {
    SEED.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::analytics::{build_sales_series, Granularity};

    #[test]
    fn seed_has_unique_brand_names() {
        let brands = seed_brands();
        let mut names: Vec<&str> = brands.iter().map(|b| b.brand_name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), brands.len());
    }

    #[test]
    fn seed_aggregates_at_every_granularity() {
        let brands = seed_brands();
        for granularity in Granularity::ALL {
            let series = build_sales_series(&brands, granularity);
            assert_eq!(series.rows.len(), granularity.period_count());
            assert!(series.max_value() > 0.0);
        }
    }

    #[test]
    fn partial_monthly_breakdown_zero_fills() {
        let brands = seed_brands();
        let series = build_sales_series(&brands, Granularity::Monthly);
        let cobalt = series
            .brands
            .iter()
            .position(|name| name == "Cobalt & Co")
            .expect("fixture brand present");
        // No Cobalt reporting before July
        assert_eq!(series.rows[0].values[cobalt], 0.0);
        assert!(series.rows[6].values[cobalt] > 0.0);
    }
}
