//! Rendering seams between the dashboard views and the terminal.

pub mod term;

pub use self::term::TermRenderer;

use crate::app::controller::View;
use crate::domain::trip::TripMetrics;
use crate::dto::charts::{ChartSpec, Stat};
use crate::pagination::PageControl;

/// Switches between the mutually exclusive dashboard panes.
pub trait ViewRouter {
    /// Makes `view` the visible pane.
    fn activate(&mut self, view: View);
    /// Headline figures for the active pane.
    fn stats(&mut self, stats: &[Stat]);
    /// One-line message outside the normal pane content.
    fn notice(&mut self, message: &str);
}

/// Draws bar charts from prepared label/value series.
pub trait ChartRenderer {
    fn bar_chart(&mut self, chart: &ChartSpec);
}

/// Writes the trip-details table and its pagination controls.
pub trait TableRenderer {
    fn trip_rows(&mut self, trips: &[TripMetrics]);
    fn page_controls(&mut self, controls: &[PageControl]);
}
