use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::aggregate::{
    Brand, BrandId, InventoryReport, OperationalExpenses, SalesDetails, TargetsAndAchieved,
};

/// Form-shaped DTO for the create-brand dialog.
///
/// Mirrors the nesting of [`Brand`] but keeps every field a plain string so
/// text inputs can bind directly. Fields are addressed by the dotted names
/// the form uses (`salesDetails.totalSales`, `targetsAndAchieved.achieved`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandDto {
    pub brand_name: String,
    pub sales_details: SalesDetailsDto,
    pub inventory_report: InventoryReportDto,
    pub operational_expenses: OperationalExpensesDto,
    pub targets_and_achieved: TargetsAndAchievedDto,
    pub head_of_brand: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesDetailsDto {
    pub total_sales: String,
    pub top_product: String,
    pub growth_rate: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReportDto {
    pub total_stock: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalExpensesDto {
    pub annual: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetsAndAchievedDto {
    pub annual_target: String,
    pub achieved: String,
}

impl BrandDto {
    /// Writes `value` into the field addressed by a dotted form path.
    ///
    /// Unknown paths are ignored silently, keeping the form's
    /// no-error-surface policy.
    pub fn apply_path(&mut self, path: &str, value: String) {
        match path {
            "brandName" => self.brand_name = value,
            "headOfBrand" => self.head_of_brand = value,
            "salesDetails.totalSales" => self.sales_details.total_sales = value,
            "salesDetails.topProduct" => self.sales_details.top_product = value,
            "salesDetails.growthRate" => self.sales_details.growth_rate = value,
            "inventoryReport.totalStock" => self.inventory_report.total_stock = value,
            "operationalExpenses.annual" => self.operational_expenses.annual = value,
            "targetsAndAchieved.annualTarget" => {
                self.targets_and_achieved.annual_target = value
            }
            "targetsAndAchieved.achieved" => self.targets_and_achieved.achieved = value,
            _ => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        self.brand_name.trim().is_empty()
    }

    /// True when another brand already uses this name. Brand names are the
    /// display key for navigation and the chart series, so duplicates are
    /// rejected at submit time.
    pub fn conflicts_with(&self, brands: &[Brand]) -> bool {
        let name = self.brand_name.trim();
        brands.iter().any(|b| b.brand_name.trim() == name)
    }

    /// Builds the brand record to append to the in-memory list.
    ///
    /// Created brands carry no per-period breakdowns, so they aggregate to
    /// zero at every granularity until the fixture is regenerated upstream.
    pub fn into_brand(self) -> Brand {
        Brand {
            id: BrandId::new_v4(),
            brand_name: self.brand_name,
            logo: None,
            sales_details: SalesDetails {
                total_sales: self.sales_details.total_sales,
                top_product: self.sales_details.top_product,
                growth_rate: self.sales_details.growth_rate,
                month_wise: None,
                quarter_wise: None,
                half_yearly: None,
                yearly: None,
            },
            inventory_report: InventoryReport {
                total_stock: self.inventory_report.total_stock,
                warehouses: None,
                damaged_units: String::new(),
                last_audit: None,
            },
            operational_expenses: OperationalExpenses {
                annual: self.operational_expenses.annual,
                marketing: None,
                rnd: None,
                logistics: None,
            },
            targets_and_achieved: TargetsAndAchieved {
                annual_target: self.targets_and_achieved.annual_target,
                achieved: self.targets_and_achieved.achieved,
                quarter_wise: None,
            },
            head_of_brand: self.head_of_brand,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::granularity::Granularity;

    #[test]
    fn apply_path_writes_nested_fields() {
        let mut dto = BrandDto::default();
        dto.apply_path("brandName", "Acme".to_string());
        dto.apply_path("salesDetails.totalSales", "$5M".to_string());
        dto.apply_path("inventoryReport.totalStock", "12,000".to_string());
        dto.apply_path("operationalExpenses.annual", "$1.2M".to_string());
        dto.apply_path("targetsAndAchieved.annualTarget", "$6M".to_string());
        dto.apply_path("targetsAndAchieved.achieved", "$5M".to_string());
        dto.apply_path("headOfBrand", "J. Doe".to_string());

        assert_eq!(dto.brand_name, "Acme");
        assert_eq!(dto.sales_details.total_sales, "$5M");
        assert_eq!(dto.inventory_report.total_stock, "12,000");
        assert_eq!(dto.operational_expenses.annual, "$1.2M");
        assert_eq!(dto.targets_and_achieved.annual_target, "$6M");
        assert_eq!(dto.targets_and_achieved.achieved, "$5M");
        assert_eq!(dto.head_of_brand, "J. Doe");
    }

    #[test]
    fn apply_path_ignores_unknown_paths() {
        let mut dto = BrandDto::default();
        dto.apply_path("salesDetails.nonexistent", "x".to_string());
        dto.apply_path("", "y".to_string());
        assert_eq!(dto, BrandDto::default());
    }

    #[test]
    fn conflicts_with_detects_existing_name() {
        let mut existing = BrandDto::default();
        existing.apply_path("brandName", "Acme".to_string());
        let brands = vec![existing.into_brand()];

        let mut dto = BrandDto::default();
        dto.apply_path("brandName", "  Acme ".to_string());
        assert!(dto.conflicts_with(&brands));

        dto.apply_path("brandName", "Other".to_string());
        assert!(!dto.conflicts_with(&brands));
        assert!(!dto.conflicts_with(&[]));
    }

    #[test]
    fn into_brand_assigns_distinct_ids() {
        let mut dto = BrandDto::default();
        dto.apply_path("brandName", "Acme".to_string());
        let first = dto.clone().into_brand();
        let second = dto.into_brand();
        // Even identical submissions stay distinguishable in keyed lists
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn into_brand_has_no_breakdowns() {
        let mut dto = BrandDto::default();
        dto.apply_path("brandName", "Acme".to_string());
        let brand = dto.into_brand();

        for granularity in Granularity::ALL {
            assert!(brand.sales_details.breakdown(granularity).is_none());
        }
        assert!(brand.targets_and_achieved.quarter_wise.is_none());
        assert_eq!(brand.brand_name, "Acme");
    }
}
