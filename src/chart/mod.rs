use rand::Rng;
use serde::Serialize;

use crate::models::metrics::{Metric, MetricMeans};
use crate::report::MonthlyAverages;

pub const MONTH_LABELS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const PALETTE: [&str; 12] = [
    "rgb(54, 162, 235)",
    "rgb(255, 99, 132)",
    "rgb(75, 192, 192)",
    "rgb(255, 159, 64)",
    "rgb(153, 102, 255)",
    "rgb(255, 205, 86)",
    "rgb(201, 203, 207)",
    "rgb(0, 128, 128)",
    "rgb(220, 20, 60)",
    "rgb(34, 139, 34)",
    "rgb(70, 130, 180)",
    "rgb(218, 112, 214)",
];

pub fn month_label(month: i32) -> String {
    if (1..=12).contains(&month) {
        MONTH_LABELS[(month - 1) as usize].to_string()
    } else {
        format!("Month {}", month)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(rename = "borderColor")]
    pub border_color: String,
    pub fill: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    // Fixed palette cycled by dataset index, stable across renders.
    Indexed,
    // Fresh pseudo-random color per dataset on every call.
    Random,
}

// What to do with months that have no aggregate row: skip them, or emit an
// all-zero series so every month shows up on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingMonths {
    Omit,
    ZeroFill,
}

pub struct SeriesBuilder {
    pub color_mode: ColorMode,
    pub missing_months: MissingMonths,
}

impl Default for SeriesBuilder {
    fn default() -> Self {
        SeriesBuilder {
            color_mode: ColorMode::Indexed,
            missing_months: MissingMonths::Omit,
        }
    }
}

impl SeriesBuilder {
    // One dataset per input row: chart labels are the ten metric names and
    // each dataset's values line up with that order.
    pub fn build<R>(
        &self,
        rows: &[R],
        label: impl Fn(&R) -> String,
        means: impl Fn(&R) -> &MetricMeans,
    ) -> ChartData {
        let datasets = rows
            .iter()
            .enumerate()
            .map(|(index, row)| self.dataset(label(row), means(row).values().to_vec(), index))
            .collect();
        ChartData {
            labels: metric_labels(),
            datasets,
        }
    }

    pub fn monthly(&self, rows: &[MonthlyAverages]) -> ChartData {
        match self.missing_months {
            MissingMonths::Omit => self.build(rows, |row| month_label(row.month), |row| &row.means),
            MissingMonths::ZeroFill => {
                let datasets = (1..=12)
                    .map(|month| {
                        let data = rows
                            .iter()
                            .find(|row| row.month == month)
                            .map(|row| row.means.values().to_vec())
                            .unwrap_or_else(|| vec![0.0; Metric::ALL.len()]);
                        self.dataset(month_label(month), data, (month - 1) as usize)
                    })
                    .collect();
                ChartData {
                    labels: metric_labels(),
                    datasets,
                }
            }
        }
    }

    fn dataset(&self, label: String, data: Vec<f64>, index: usize) -> ChartDataset {
        ChartDataset {
            label,
            data,
            border_color: self.color(index),
            fill: false,
        }
    }

    fn color(&self, index: usize) -> String {
        match self.color_mode {
            ColorMode::Indexed => PALETTE[index % PALETTE.len()].to_string(),
            ColorMode::Random => random_color(),
        }
    }
}

fn metric_labels() -> Vec<&'static str> {
    Metric::ALL.iter().map(|metric| metric.label()).collect()
}

fn random_color() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "rgb({}, {}, {})",
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255)
    )
}
