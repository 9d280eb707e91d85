//! Renderer-facing data: headline figures and chart series.

use serde::Serialize;

/// Label/value series handed to a chart renderer.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            title: title.into(),
            labels,
            values,
        }
    }
}

/// One headline figure shown at the top of a view.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

impl Stat {
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
        }
    }
}
