// Cost breakdown chart model
// Holds the bar values and axis scale; rendering lives in the ui module

use crate::api::FinancialImpact;
use crate::format::{axis_tick_label, tooltip_label};

/// Chart title
pub const CHART_TITLE: &str = "Cost Breakdown";

/// Bar labels, in display order
pub const BAR_LABELS: [&str; 5] = [
    "Direct Costs",
    "Regulatory Fines",
    "Revenue Loss",
    "Reputation Damage",
    "Recovery Cost",
];

/// Bar colours as (r, g, b); fill uses 0.7 alpha, border is opaque
pub const BAR_COLORS: [(u8, u8, u8); 5] = [
    (255, 99, 132),
    (54, 162, 235),
    (255, 206, 86),
    (75, 192, 192),
    (153, 102, 255),
];

/// Alpha applied to bar fills (0.7 of 255)
pub const BAR_FILL_ALPHA: u8 = 178;

/// Approximate number of tick intervals on the y axis
const TARGET_TICK_COUNT: f64 = 5.0;

/// One bar of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Category label
    pub label: &'static str,
    /// Raw value in dollars
    pub value: f64,
    /// Base colour
    pub color: (u8, u8, u8),
}

impl Bar {
    /// Text shown when hovering the bar
    pub fn tooltip(&self) -> String {
        format!("{}: {}", self.label, tooltip_label(self.value))
    }
}

/// A fully built bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct CostChart {
    /// Bars in display order
    pub bars: Vec<Bar>,
    /// Y-axis tick values, ascending from zero
    pub ticks: Vec<f64>,
}

impl CostChart {
    /// Build the chart from the five raw cost components
    pub fn from_values(values: [f64; 5]) -> Self {
        let bars: Vec<Bar> = BAR_LABELS
            .into_iter()
            .zip(BAR_COLORS)
            .zip(values)
            .map(|((label, color), value)| Bar {
                label,
                value,
                color,
            })
            .collect();

        let max = values.iter().copied().fold(0.0_f64, f64::max);
        Self {
            bars,
            ticks: nice_ticks(max),
        }
    }

    /// Build the chart from an assessment's financial impact
    pub fn from_impact(impact: &FinancialImpact) -> Self {
        Self::from_values([
            impact.direct_cost_raw,
            impact.regulatory_fines_raw,
            impact.revenue_loss_raw,
            impact.reputation_damage_raw,
            impact.recovery_cost_raw,
        ])
    }

    /// Top of the y axis
    pub fn axis_max(&self) -> f64 {
        self.ticks.last().copied().unwrap_or(1.0)
    }

    /// Tick labels paired with their values
    pub fn tick_labels(&self) -> Vec<(f64, String)> {
        self.ticks
            .iter()
            .map(|&tick| (tick, axis_tick_label(tick)))
            .collect()
    }

    /// Raw values in display order
    pub fn values(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.value).collect()
    }
}

/// Zero-based ticks with a 1/2/5 x 10^n step covering `max`
fn nice_ticks(max: f64) -> Vec<f64> {
    if !max.is_finite() || max <= 0.0 {
        return vec![0.0, 1.0];
    }

    let rough = max / TARGET_TICK_COUNT;
    let magnitude = 10f64.powi(rough.log10().floor() as i32);
    let normalized = rough / magnitude;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = factor * magnitude;

    let count = (max / step).ceil() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}
