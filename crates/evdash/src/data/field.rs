//! The fixed set of dataset columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// One of the six columns every record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "State")]
    State,
    #[serde(rename = "Population")]
    Population,
    #[serde(rename = "Avg Celcius")]
    AvgCelsius,
    #[serde(rename = "Personal_Income_Millions")]
    PersonalIncomeMillions,
    #[serde(rename = "EV_Charging_Stations")]
    EvChargingStations,
    #[serde(rename = "gas_price_regular")]
    GasPriceRegular,
}

impl Field {
    /// All required columns, in the order the loader projects them.
    pub const ALL: [Field; 6] = [
        Field::State,
        Field::Population,
        Field::AvgCelsius,
        Field::PersonalIncomeMillions,
        Field::EvChargingStations,
        Field::GasPriceRegular,
    ];

    /// Exact header name in the data file.
    pub fn column_name(self) -> &'static str {
        match self {
            Field::State => "State",
            Field::Population => "Population",
            Field::AvgCelsius => "Avg Celcius",
            Field::PersonalIncomeMillions => "Personal_Income_Millions",
            Field::EvChargingStations => "EV_Charging_Stations",
            Field::GasPriceRegular => "gas_price_regular",
        }
    }

    /// Whether the column holds numbers.
    pub fn is_numeric(self) -> bool {
        !matches!(self, Field::State)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Field {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.column_name() == s)
            .ok_or_else(|| DashboardError::InvalidParameter(format!("Unknown column: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column_names() {
        for field in Field::ALL {
            assert_eq!(field.column_name().parse::<Field>().unwrap(), field);
        }
        assert_eq!("Avg Celcius".parse::<Field>().unwrap(), Field::AvgCelsius);
    }

    #[test]
    fn test_parse_unknown_column() {
        let err = "population".parse::<Field>().unwrap_err();
        assert!(matches!(err, DashboardError::InvalidParameter(_)));
    }

    #[test]
    fn test_numeric_fields() {
        assert!(!Field::State.is_numeric());
        assert!(Field::GasPriceRegular.is_numeric());
    }

    #[test]
    fn test_serde_uses_column_names() {
        let json = serde_json::to_string(&Field::AvgCelsius).unwrap();
        assert_eq!(json, "\"Avg Celcius\"");
    }
}
