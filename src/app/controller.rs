//! Dashboard state machine: view switching, page selection, and fetch
//! bookkeeping.

use crate::pagination::{self, MAX_VISIBLE_PAGES};

/// One top-level dashboard pane, mutually exclusive with the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Safety,
    Trips,
    Routes,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Safety => "Safety overview",
            View::Trips => "Trip details",
            View::Routes => "Popular routes",
        }
    }
}

/// User-interface event consumed by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    SelectView(View),
    SelectPage(usize),
    SelectLastPage,
    Quit,
}

/// One issued trip-page fetch. The sequence number identifies the fetch
/// when its completion is reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripFetch {
    pub page: usize,
    pub seq: u64,
}

/// Side effect requested by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    LoadSafety,
    LoadTrips(TripFetch),
    LoadRoutes,
    Shutdown,
}

/// Outcome of reporting a fetch completion back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The completion belongs to the latest issued fetch and was applied.
    Applied,
    /// A newer fetch superseded this one; its result must be dropped.
    Stale,
}

/// Owns the current view and the trip-table page state.
///
/// Every trip-page fetch is stamped with a monotonically increasing
/// sequence number; completions reported with an older number are refused,
/// so two rapid page selections can never leave the table showing the
/// slower, earlier response.
#[derive(Debug)]
pub struct DashboardController {
    view: View,
    page: usize,
    per_page: usize,
    total: Option<usize>,
    in_flight: Option<u64>,
    next_seq: u64,
}

impl DashboardController {
    pub fn new(per_page: usize) -> Self {
        Self {
            view: View::Safety,
            page: 1,
            per_page,
            total: None,
            in_flight: None,
            next_seq: 0,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Applies a user-interface event, returning the side effect to run.
    pub fn handle(&mut self, event: UiEvent) -> Option<Command> {
        match event {
            UiEvent::SelectView(view) => {
                self.view = view;
                match view {
                    View::Safety => Some(Command::LoadSafety),
                    View::Routes => Some(Command::LoadRoutes),
                    View::Trips => {
                        // (Re)entering the table always starts from page 1.
                        self.page = 1;
                        Some(Command::LoadTrips(self.issue(1)))
                    }
                }
            }
            UiEvent::SelectPage(page) => {
                if self.view != View::Trips || !self.selectable(page) {
                    return None;
                }
                self.page = page;
                Some(Command::LoadTrips(self.issue(page)))
            }
            UiEvent::SelectLastPage => {
                if self.view != View::Trips {
                    return None;
                }
                let last = self.total_pages().filter(|&pages| pages >= 1)?;
                self.page = last;
                Some(Command::LoadTrips(self.issue(last)))
            }
            UiEvent::Quit => Some(Command::Shutdown),
        }
    }

    /// Records a successful trip-page fetch. A stale completion changes
    /// nothing and the caller must drop its rows.
    pub fn trips_loaded(&mut self, fetch: TripFetch, total: usize) -> FetchOutcome {
        if self.in_flight != Some(fetch.seq) {
            return FetchOutcome::Stale;
        }

        self.in_flight = None;
        self.total = Some(total);
        self.page = fetch.page;
        FetchOutcome::Applied
    }

    /// Records a failed trip-page fetch; previously displayed rows stay.
    pub fn trips_failed(&mut self, fetch: TripFetch) {
        if self.in_flight == Some(fetch.seq) {
            self.in_flight = None;
        }
    }

    fn issue(&mut self, page: usize) -> TripFetch {
        self.next_seq += 1;
        self.in_flight = Some(self.next_seq);
        TripFetch {
            page,
            seq: self.next_seq,
        }
    }

    /// Only pages with a rendered button are reachable: the first
    /// `MAX_VISIBLE_PAGES` pages and the last one.
    fn selectable(&self, page: usize) -> bool {
        match self.total_pages() {
            None => false,
            Some(total_pages) => {
                page >= 1
                    && page <= total_pages
                    && (page <= MAX_VISIBLE_PAGES || page == total_pages)
            }
        }
    }

    fn total_pages(&self) -> Option<usize> {
        self.total
            .map(|total| pagination::total_pages(total, self.per_page))
    }
}
