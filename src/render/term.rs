//! ANSI terminal renderer.

use colored::Colorize;

use crate::app::controller::View;
use crate::domain::trip::TripMetrics;
use crate::dto::charts::{ChartSpec, Stat};
use crate::pagination::PageControl;
use crate::render::{ChartRenderer, TableRenderer, ViewRouter};

const BAR_WIDTH: usize = 40;

/// Renders the dashboard as plain text with ANSI colors.
#[derive(Debug, Default)]
pub struct TermRenderer;

impl TermRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ViewRouter for TermRenderer {
    fn activate(&mut self, view: View) {
        let stamp = chrono::Local::now().format("%H:%M:%S");
        println!();
        println!(
            "{} {}",
            format!("== {} ==", view.title()).bold(),
            format!("(updated {stamp})").dimmed()
        );
    }

    fn stats(&mut self, stats: &[Stat]) {
        for stat in stats {
            println!(":: {:<20}: {}", stat.label, stat.value.as_str().cyan());
        }
    }

    fn notice(&mut self, message: &str) {
        println!("{}", message.yellow());
    }
}

impl ChartRenderer for TermRenderer {
    fn bar_chart(&mut self, chart: &ChartSpec) {
        println!();
        println!("{}", chart.title.as_str().bold());

        let label_width = chart.labels.iter().map(|l| l.len()).max().unwrap_or(0);
        let max_value = chart.values.iter().cloned().fold(0.0f64, f64::max);

        for (label, value) in chart.labels.iter().zip(&chart.values) {
            println!(
                "{label:>label_width$} | {} {}",
                scaled_bar(*value, max_value).blue(),
                format_value(*value).dimmed()
            );
        }
    }
}

impl TableRenderer for TermRenderer {
    fn trip_rows(&mut self, trips: &[TripMetrics]) {
        println!(
            "{}",
            format!(
                "{:<24} {:>10} {:>10} {:>12} {:>11} {:>10}",
                "trip id", "avg km/h", "max km/h", "avg azm chg", "sharp turns", "km"
            )
            .bold()
        );

        for trip in trips {
            println!(
                "{:<24} {:>10.2} {:>10.2} {:>12.2} {:>11} {:>10.2}",
                trip.trip_id.as_str(),
                trip.avg_speed,
                trip.max_speed,
                trip.avg_azimuth_change,
                trip.sharp_turns,
                trip.distance
            );
        }
    }

    fn page_controls(&mut self, controls: &[PageControl]) {
        if controls.is_empty() {
            return;
        }

        let rendered: Vec<String> = controls
            .iter()
            .map(|control| match control {
                PageControl::Ellipsis => "...".to_string(),
                PageControl::Button {
                    number,
                    active: true,
                } => format!("[{number}]").bold().to_string(),
                PageControl::Button { number, .. } => number.to_string(),
            })
            .collect();

        println!();
        println!("pages: {}", rendered.join(" "));
    }
}

fn scaled_bar(value: f64, max_value: f64) -> String {
    if max_value <= 0.0 {
        return String::new();
    }
    let len = ((value / max_value) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.min(BAR_WIDTH))
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_to_the_largest_value() {
        assert_eq!(scaled_bar(10.0, 10.0).chars().count(), BAR_WIDTH);
        assert_eq!(scaled_bar(5.0, 10.0).chars().count(), BAR_WIDTH / 2);
        assert!(scaled_bar(0.0, 10.0).is_empty());
        assert!(scaled_bar(3.0, 0.0).is_empty());
    }

    #[test]
    fn whole_values_drop_the_decimals() {
        assert_eq!(format_value(12.0), "12");
        assert_eq!(format_value(4.25), "4.25");
    }
}
