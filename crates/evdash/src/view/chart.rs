//! Scatter-plot parameterization.
//!
//! Produces a renderer-agnostic description of the chart: data series,
//! labels, title, layout size, and the two special-cased axis ranges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::{Field, Table};
use crate::error::{DashboardError, Result};

/// Y axis of every scatter plot.
pub const Y_FIELD: Field = Field::EvChargingStations;
pub const Y_LABEL: &str = "EV Charging Stations";

/// Fixed X range when plotting gas prices.
pub const GAS_PRICE_RANGE: [f64; 2] = [2.5, 3.2];

/// Headroom applied to data-driven ranges.
const RANGE_PADDING: f64 = 1.1;

pub const CHART_WIDTH: u32 = 1000;
pub const CHART_HEIGHT: u32 = 600;
pub const CHART_TEMPLATE: &str = "plotly_white";

/// Selectable X-axis variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum XAxis {
    #[default]
    Population,
    AvgCelsius,
    PersonalIncome,
    GasPrice,
}

impl XAxis {
    /// Dropdown order.
    pub const ALL: [XAxis; 4] = [
        XAxis::Population,
        XAxis::AvgCelsius,
        XAxis::PersonalIncome,
        XAxis::GasPrice,
    ];

    /// Column plotted on the X axis.
    pub fn field(self) -> Field {
        match self {
            XAxis::Population => Field::Population,
            XAxis::AvgCelsius => Field::AvgCelsius,
            XAxis::PersonalIncome => Field::PersonalIncomeMillions,
            XAxis::GasPrice => Field::GasPriceRegular,
        }
    }

    /// Human label shown in the dropdown.
    pub fn label(self) -> &'static str {
        match self {
            XAxis::Population => "Population",
            XAxis::AvgCelsius => "Average Temperature",
            XAxis::PersonalIncome => "Average Annual Personal Income",
            XAxis::GasPrice => "Gas Price (Regular)",
        }
    }

    /// Value submitted by the dropdown; the column header name.
    pub fn value(self) -> &'static str {
        self.field().column_name()
    }
}

impl fmt::Display for XAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for XAxis {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        XAxis::ALL
            .into_iter()
            .find(|axis| axis.value() == s)
            .ok_or_else(|| {
                DashboardError::InvalidParameter(format!(
                    "Unknown X-axis variable '{}'; expected one of: {}",
                    s,
                    XAxis::ALL.map(XAxis::value).join(", ")
                ))
            })
    }
}

impl TryFrom<String> for XAxis {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<XAxis> for String {
    fn from(axis: XAxis) -> Self {
        axis.value().to_string()
    }
}

/// Renderer-agnostic scatter plot description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_field: Field,
    pub y_field: Field,
    pub x_label: String,
    pub y_label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// State name for each point, for hover text.
    pub labels: Vec<String>,
    /// `None` means auto-scale.
    pub x_range: Option<[f64; 2]>,
    pub y_range: Option<[f64; 2]>,
    pub width: u32,
    pub height: u32,
    pub template: String,
}

/// Build the scatter plot of EV charging stations against `x_axis`.
pub fn scatter_chart(table: &Table, x_axis: XAxis) -> Result<ChartSpec> {
    let x_field = x_axis.field();
    let x = table.column(x_field)?;
    let y = table.column(Y_FIELD)?;
    let labels = table
        .records()
        .iter()
        .map(|record| record.state.clone())
        .collect();

    let (x_range, y_range) = match x_axis {
        XAxis::Population => (
            padded_range(table.max(Field::Population)?),
            padded_range(table.max(Y_FIELD)?),
        ),
        XAxis::GasPrice => (Some(GAS_PRICE_RANGE), None),
        XAxis::AvgCelsius | XAxis::PersonalIncome => (None, None),
    };

    Ok(ChartSpec {
        title: format!("{} vs {}", Y_LABEL, x_field),
        x_field,
        y_field: Y_FIELD,
        x_label: x_field.column_name().to_string(),
        y_label: Y_LABEL.to_string(),
        x,
        y,
        labels,
        x_range,
        y_range,
        width: CHART_WIDTH,
        height: CHART_HEIGHT,
        template: CHART_TEMPLATE.to_string(),
    })
}

fn padded_range(max: Option<f64>) -> Option<[f64; 2]> {
    max.map(|m| [0.0, m * RANGE_PADDING])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::record;

    fn table() -> Table {
        Table::new(vec![
            record("A", 1_000, 40, 2.9),
            record("B", 250, 10, 3.9),
            record("C", 600, 25, 1.2),
        ])
    }

    #[test]
    fn test_population_ranges() {
        let chart = scatter_chart(&table(), XAxis::Population).unwrap();
        let [x0, x1] = chart.x_range.unwrap();
        let [y0, y1] = chart.y_range.unwrap();

        assert_eq!(x0, 0.0);
        assert!((x1 - 1_100.0).abs() < 1e-9);
        assert_eq!(y0, 0.0);
        assert!((y1 - 44.0).abs() < 1e-9);
    }

    #[test]
    fn test_gas_price_range_is_fixed() {
        let chart = scatter_chart(&table(), XAxis::GasPrice).unwrap();
        assert_eq!(chart.x_range, Some([2.5, 3.2]));
        assert_eq!(chart.y_range, None);

        let empty = scatter_chart(&Table::default(), XAxis::GasPrice).unwrap();
        assert_eq!(empty.x_range, Some([2.5, 3.2]));
    }

    #[test]
    fn test_other_axes_auto_scale() {
        for axis in [XAxis::AvgCelsius, XAxis::PersonalIncome] {
            let chart = scatter_chart(&table(), axis).unwrap();
            assert_eq!(chart.x_range, None);
            assert_eq!(chart.y_range, None);
        }
    }

    #[test]
    fn test_series_and_labels() {
        let chart = scatter_chart(&table(), XAxis::GasPrice).unwrap();

        assert_eq!(chart.title, "EV Charging Stations vs gas_price_regular");
        assert_eq!(chart.x_label, "gas_price_regular");
        assert_eq!(chart.y_label, "EV Charging Stations");
        assert_eq!(chart.x, vec![2.9, 3.9, 1.2]);
        assert_eq!(chart.y, vec![40.0, 10.0, 25.0]);
        assert_eq!(chart.labels, vec!["A", "B", "C"]);
        assert_eq!((chart.width, chart.height), (1000, 600));
    }

    #[test]
    fn test_population_range_empty_table() {
        let chart = scatter_chart(&Table::default(), XAxis::Population).unwrap();
        assert_eq!(chart.x_range, None);
        assert!(chart.x.is_empty());
    }

    #[test]
    fn test_parse_x_axis() {
        assert_eq!("Avg Celcius".parse::<XAxis>().unwrap(), XAxis::AvgCelsius);
        assert_eq!(
            "Personal_Income_Millions".parse::<XAxis>().unwrap(),
            XAxis::PersonalIncome
        );
        assert!("EV_Charging_Stations".parse::<XAxis>().is_err());
        assert!("State".parse::<XAxis>().is_err());
    }

    #[test]
    fn test_x_axis_serde() {
        let json = serde_json::to_string(&XAxis::GasPrice).unwrap();
        assert_eq!(json, "\"gas_price_regular\"");
        assert!(serde_json::from_str::<XAxis>("\"bogus\"").is_err());
    }
}
