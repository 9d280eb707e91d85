//! Interactive dashboard application: command parsing, the stdin event
//! loop, and the catch-and-log fetch policy.

pub mod controller;

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::controller::{Command, DashboardController, FetchOutcome, TripFetch, UiEvent, View};
use crate::client::{MetricsApi, TripDetailsQuery};
use crate::dto::trips::TripTableData;
use crate::render::{ChartRenderer, TableRenderer, ViewRouter};
use crate::services::{routes as routes_service, safety as safety_service, trips as trips_service};

const COMMAND_HINT: &str = "commands: safety | trips | routes | page <n> | last | quit";

/// Parses one line of user input into an event.
///
/// Recognized commands: `safety`, `trips`, `routes`, `page <n>`, a bare
/// page number, `last`, and `quit`/`exit`/`q`.
pub fn parse_command(line: &str) -> Option<UiEvent> {
    let mut words = line.split_whitespace();

    let event = match words.next()? {
        "safety" => UiEvent::SelectView(View::Safety),
        "trips" => UiEvent::SelectView(View::Trips),
        "routes" => UiEvent::SelectView(View::Routes),
        "last" => UiEvent::SelectLastPage,
        "page" => UiEvent::SelectPage(words.next()?.parse().ok()?),
        "quit" | "exit" | "q" => UiEvent::Quit,
        word => UiEvent::SelectPage(word.parse::<usize>().ok()?),
    };

    if words.next().is_some() {
        return None;
    }
    Some(event)
}

/// Terminal dashboard: owns the controller, the metrics client, and the
/// renderer.
pub struct DashboardApp<A, R> {
    api: A,
    renderer: R,
    controller: DashboardController,
}

impl<A, R> DashboardApp<A, R>
where
    A: MetricsApi,
    R: ViewRouter + ChartRenderer + TableRenderer,
{
    pub fn new(api: A, renderer: R, per_page: usize) -> Self {
        Self {
            api,
            renderer,
            controller: DashboardController::new(per_page),
        }
    }

    /// Runs the event loop until the user quits or stdin closes.
    pub async fn run(&mut self) -> std::io::Result<()> {
        // The dashboard opens on the safety view.
        self.apply(UiEvent::SelectView(View::Safety)).await;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            prompt()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let Some(event) = parse_command(&line) else {
                if !line.trim().is_empty() {
                    self.renderer.notice(COMMAND_HINT);
                }
                continue;
            };
            if event == UiEvent::Quit {
                break;
            }

            self.apply(event).await;
        }

        Ok(())
    }

    async fn apply(&mut self, event: UiEvent) {
        let Some(command) = self.controller.handle(event) else {
            if let UiEvent::SelectPage(page) = event {
                self.renderer
                    .notice(&format!("page {page} has no button to select"));
            }
            return;
        };

        match command {
            Command::LoadSafety => self.load_safety().await,
            Command::LoadTrips(fetch) => self.load_trips(fetch).await,
            Command::LoadRoutes => self.load_routes().await,
            Command::Shutdown => {}
        }
    }

    // Fetch failures are logged and the previous pane is left in place, with
    // no retry and no error pane.

    async fn load_safety(&mut self) {
        match safety_service::load_safety_view(&self.api).await {
            Ok(data) => {
                self.renderer.activate(View::Safety);
                self.renderer.stats(&data.stats);
                self.renderer.bar_chart(&data.events);
                self.renderer.bar_chart(&data.speeds);
            }
            Err(err) => log::error!("Failed to fetch safety metrics: {err}"),
        }
    }

    async fn load_trips(&mut self, fetch: TripFetch) {
        let query = TripDetailsQuery::new(fetch.page, self.controller.per_page());

        match trips_service::load_trip_page(&self.api, query).await {
            Ok(data) => {
                if self.controller.trips_loaded(fetch, data.total) == FetchOutcome::Stale {
                    return;
                }
                self.render_trips(&data);
            }
            Err(err) => {
                self.controller.trips_failed(fetch);
                log::error!("Failed to fetch trip details: {err}");
            }
        }
    }

    fn render_trips(&mut self, data: &TripTableData) {
        self.renderer.activate(View::Trips);
        self.renderer.trip_rows(&data.trips.items);
        self.renderer.page_controls(&data.trips.controls);
    }

    async fn load_routes(&mut self) {
        match routes_service::load_routes_view(&self.api).await {
            Ok(data) => {
                self.renderer.activate(View::Routes);
                self.renderer.stats(&data.stats);
                self.renderer.bar_chart(&data.starts);
                self.renderer.bar_chart(&data.lengths);
            }
            Err(err) => log::error!("Failed to fetch popular routes: {err}"),
        }
    }
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "tripsight> ")?;
    stdout.flush()
}
