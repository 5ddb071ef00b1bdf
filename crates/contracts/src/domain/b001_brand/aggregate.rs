use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analytics::granularity::Granularity;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a brand record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrandId(pub Uuid);

impl BrandId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

// ============================================================================
// Nested records
// ============================================================================

/// One period-labeled sales figure inside a breakdown
/// (`{ period: "Q1", sales: "$120,000" }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSales {
    pub period: String,
    /// Formatted currency string, parsed lazily by the aggregator
    pub sales: String,
}

impl PeriodSales {
    pub fn new(period: impl Into<String>, sales: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            sales: sales.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesDetails {
    pub total_sales: String,
    pub top_product: String,
    pub growth_rate: String,
    /// Per-month breakdown (Jan..Dec labels); absent for brands created in-page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_wise: Option<Vec<PeriodSales>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarter_wise: Option<Vec<PeriodSales>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub half_yearly: Option<Vec<PeriodSales>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly: Option<Vec<PeriodSales>>,
}

impl SalesDetails {
    /// Breakdown for the given granularity, if this brand carries one.
    pub fn breakdown(&self, granularity: Granularity) -> Option<&[PeriodSales]> {
        match granularity {
            Granularity::Monthly => self.month_wise.as_deref(),
            Granularity::Quarterly => self.quarter_wise.as_deref(),
            Granularity::HalfYearly => self.half_yearly.as_deref(),
            Granularity::Yearly => self.yearly.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReport {
    pub total_stock: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouses: Option<Vec<String>>,
    pub damaged_units: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_audit: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalExpenses {
    pub annual: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing: Option<String>,
    #[serde(rename = "RnD", skip_serializing_if = "Option::is_none")]
    pub rnd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logistics: Option<String>,
}

/// One quarter of the achieved-vs-target comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterTarget {
    pub quarter: String,
    pub achieved: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetsAndAchieved {
    pub annual_target: String,
    pub achieved: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarter_wise: Option<Vec<QuarterTarget>>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Brand record. Immutable once in the list; the only mutation the UI
/// performs is append-only insertion of newly submitted brands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: BrandId,

    /// Unique display key; navigation and chart series are keyed by it
    pub brand_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    pub sales_details: SalesDetails,
    pub inventory_report: InventoryReport,
    pub operational_expenses: OperationalExpenses,
    pub targets_and_achieved: TargetsAndAchieved,

    pub head_of_brand: String,

    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_serializes_with_camel_case_keys() {
        let brand = Brand {
            id: BrandId::new_v4(),
            brand_name: "Acme".to_string(),
            logo: None,
            sales_details: SalesDetails {
                total_sales: "$1,000".to_string(),
                top_product: "Widget".to_string(),
                growth_rate: "5%".to_string(),
                month_wise: None,
                quarter_wise: Some(vec![PeriodSales::new("Q1", "$250")]),
                half_yearly: None,
                yearly: None,
            },
            inventory_report: InventoryReport::default(),
            operational_expenses: OperationalExpenses {
                annual: "$400".to_string(),
                marketing: None,
                rnd: Some("$50".to_string()),
                logistics: None,
            },
            targets_and_achieved: TargetsAndAchieved::default(),
            head_of_brand: "J. Doe".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&brand).expect("brand serializes");
        assert_eq!(json["brandName"], "Acme");
        assert_eq!(json["headOfBrand"], "J. Doe");
        assert_eq!(json["salesDetails"]["totalSales"], "$1,000");
        assert_eq!(json["salesDetails"]["quarterWise"][0]["period"], "Q1");
        assert_eq!(json["operationalExpenses"]["RnD"], "$50");
        // Absent breakdowns are omitted, not serialized as null
        assert!(json["salesDetails"].get("monthWise").is_none());
        assert!(json.get("logo").is_none());
    }

    #[test]
    fn breakdown_selects_by_granularity() {
        let details = SalesDetails {
            quarter_wise: Some(vec![PeriodSales::new("Q1", "$250")]),
            ..SalesDetails::default()
        };
        assert!(details.breakdown(Granularity::Monthly).is_none());
        let quarters = details
            .breakdown(Granularity::Quarterly)
            .expect("quarter breakdown present");
        assert_eq!(quarters[0].period, "Q1");
    }
}
