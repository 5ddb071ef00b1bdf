use serde::{Deserialize, Serialize};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const QUARTERS: [&str; 4] = ["Q1", "Q2", "Q3", "Q4"];
const HALF_YEARS: [&str; 2] = ["H1", "H2"];
// The fixture covers exactly these reporting years
const YEARS: [&str; 3] = ["2021", "2022", "2023"];

/// Time-bucketing unit for the sales-performance chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    Monthly,
    Quarterly,
    HalfYearly,
    Yearly,
}

impl Granularity {
    pub const ALL: [Granularity; 4] = [
        Granularity::Monthly,
        Granularity::Quarterly,
        Granularity::HalfYearly,
        Granularity::Yearly,
    ];

    /// Canonical ordered period labels for this granularity. Chart rows
    /// always follow this sequence, never data-dependent ordering.
    pub fn period_labels(&self) -> &'static [&'static str] {
        match self {
            Granularity::Monthly => &MONTHS,
            Granularity::Quarterly => &QUARTERS,
            Granularity::HalfYearly => &HALF_YEARS,
            Granularity::Yearly => &YEARS,
        }
    }

    pub fn period_count(&self) -> usize {
        self.period_labels().len()
    }

    /// Stable code used by the dropdown and the URL query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Monthly => "monthly",
            Granularity::Quarterly => "quarterly",
            Granularity::HalfYearly => "half-yearly",
            Granularity::Yearly => "yearly",
        }
    }

    /// Display title for headings and the selector.
    pub fn title(&self) -> &'static str {
        match self {
            Granularity::Monthly => "Monthly",
            Granularity::Quarterly => "Quarterly",
            Granularity::HalfYearly => "Half-Yearly",
            Granularity::Yearly => "Yearly",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "monthly" => Some(Granularity::Monthly),
            "quarterly" => Some(Granularity::Quarterly),
            "half-yearly" => Some(Granularity::HalfYearly),
            "yearly" => Some(Granularity::Yearly),
            _ => None,
        }
    }
}

impl Default for Granularity {
    fn default() -> Self {
        Granularity::Monthly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_counts_are_fixed() {
        assert_eq!(Granularity::Monthly.period_count(), 12);
        assert_eq!(Granularity::Quarterly.period_count(), 4);
        assert_eq!(Granularity::HalfYearly.period_count(), 2);
        assert_eq!(Granularity::Yearly.period_count(), 3);
    }

    #[test]
    fn labels_are_canonically_ordered() {
        assert_eq!(Granularity::Monthly.period_labels()[0], "Jan");
        assert_eq!(Granularity::Monthly.period_labels()[11], "Dec");
        assert_eq!(
            Granularity::Quarterly.period_labels(),
            &["Q1", "Q2", "Q3", "Q4"]
        );
        assert_eq!(Granularity::HalfYearly.period_labels(), &["H1", "H2"]);
        assert_eq!(
            Granularity::Yearly.period_labels(),
            &["2021", "2022", "2023"]
        );
    }

    #[test]
    fn codes_round_trip() {
        for granularity in Granularity::ALL {
            assert_eq!(Granularity::parse(granularity.as_str()), Some(granularity));
        }
        assert_eq!(Granularity::parse("weekly"), None);
    }
}
