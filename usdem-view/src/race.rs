//! Race categories in display order.

use serde::Serialize;
use usdem_db::StateRecord;

/// One of the five race categories carried by every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RaceCategory {
    White,
    Black,
    Indian,
    Asian,
    Other,
}

impl RaceCategory {
    /// All categories in display order. Charts list bars in exactly this order.
    pub const ALL: [RaceCategory; 5] = [
        RaceCategory::White,
        RaceCategory::Black,
        RaceCategory::Indian,
        RaceCategory::Asian,
        RaceCategory::Other,
    ];

    /// Source column holding the category's head count, used as the bar label.
    pub fn total_column(self) -> &'static str {
        match self {
            Self::White => "WhiteTotal",
            Self::Black => "BlackTotal",
            Self::Indian => "IndianTotal",
            Self::Asian => "AsianTotal",
            Self::Other => "OtherTotal",
        }
    }

    /// Source column holding the category's share of the population.
    pub fn percentage_column(self) -> &'static str {
        match self {
            Self::White => "WhiteTotalPerc",
            Self::Black => "BlackTotalPerc",
            Self::Indian => "IndianTotalPerc",
            Self::Asian => "AsianTotalPerc",
            Self::Other => "OtherTotalPerc",
        }
    }

    pub fn total(self, record: &StateRecord) -> f64 {
        match self {
            Self::White => record.white_total,
            Self::Black => record.black_total,
            Self::Indian => record.indian_total,
            Self::Asian => record.asian_total,
            Self::Other => record.other_total,
        }
    }

    pub fn percentage(self, record: &StateRecord) -> f64 {
        match self {
            Self::White => record.white_total_perc,
            Self::Black => record.black_total_perc,
            Self::Indian => record.indian_total_perc,
            Self::Asian => record.asian_total_perc,
            Self::Other => record.other_total_perc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_order_is_fixed() {
        let columns: Vec<&str> = RaceCategory::ALL.iter().map(|c| c.total_column()).collect();
        assert_eq!(
            columns,
            vec!["WhiteTotal", "BlackTotal", "IndianTotal", "AsianTotal", "OtherTotal"]
        );
    }

    #[test]
    fn percentage_columns_extend_total_columns() {
        for category in RaceCategory::ALL {
            assert_eq!(
                category.percentage_column(),
                format!("{}Perc", category.total_column())
            );
        }
    }
}
