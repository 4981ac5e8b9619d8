use crate::app::handlers::{continents, countries, regions};
use crate::config::EngineConfig;
use crate::core::session::Session;
use crate::domain::events::{Request, Response};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AppError, Result};
use rusqlite::Connection;
use std::path::PathBuf;

#[derive(Debug)]
enum State {
    Disconnected,
    Connected(Session),
    Terminated,
}

/// Routes requests to the entity handlers and owns the one open database.
///
/// Requests are handled one at a time; every request yields its complete
/// list of responses before the next is accepted.
pub struct Engine<C: ConfigProvider = EngineConfig> {
    config: C,
    state: State,
}

impl Default for Engine<EngineConfig> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<C: ConfigProvider> Engine<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            state: State::Disconnected,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.state, State::Connected(_))
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, State::Terminated)
    }

    /// Path of the open database, if any.
    pub fn database_path(&self) -> Option<&std::path::Path> {
        match &self.state {
            State::Connected(session) => Some(session.path()),
            _ => None,
        }
    }

    pub fn process_event(&mut self, request: Request) -> Vec<Response> {
        tracing::debug!("Processing {:?}", request);

        match request {
            Request::OpenDatabase { path } => vec![self.open_database(path)],
            Request::CloseDatabase => {
                self.close_database();
                vec![Response::DatabaseClosed]
            }
            Request::QuitInitiated => {
                self.close_database();
                self.state = State::Terminated;
                vec![Response::EndApplication]
            }

            Request::StartContinentSearch(filter) => {
                self.with_connection(|conn| continents::search(conn, &filter))
            }
            Request::LoadContinent { continent_id } => {
                self.with_connection(|conn| Ok(vec![continents::load(conn, continent_id)]))
            }
            Request::SaveContinent { continent } => {
                self.with_connection(|conn| Ok(vec![continents::save(conn, continent)]))
            }

            Request::StartCountrySearch(filter) => {
                self.with_connection(|conn| countries::search(conn, &filter))
            }
            Request::LoadCountry { country_id } => {
                self.with_connection(|conn| Ok(vec![countries::load(conn, country_id)]))
            }
            Request::SaveCountry { country } => {
                self.with_connection(|conn| Ok(vec![countries::save(conn, country)]))
            }

            Request::StartRegionSearch(filter) => {
                self.with_connection(|conn| regions::search(conn, &filter))
            }
            Request::LoadRegion { region_id } => {
                self.with_connection(|conn| Ok(vec![regions::load(conn, region_id)]))
            }
            Request::SaveRegion { region } => {
                self.with_connection(|conn| Ok(vec![regions::save(conn, region)]))
            }
        }
    }

    /// Opens `path`, replacing any database that is already open.
    fn open_database(&mut self, path: PathBuf) -> Response {
        if self.is_terminated() {
            return error_event(AppError::ApplicationEnded);
        }
        self.close_database();

        match Session::open(&path, &self.config) {
            Ok(session) => {
                self.state = State::Connected(session);
                Response::DatabaseOpened { path }
            }
            Err(e) => {
                tracing::warn!("Opening {} failed: {}", path.display(), e);
                Response::DatabaseOpenFailed {
                    reason: e.user_friendly_message(),
                }
            }
        }
    }

    fn close_database(&mut self) {
        match std::mem::replace(&mut self.state, State::Disconnected) {
            State::Connected(session) => session.close(),
            State::Terminated => self.state = State::Terminated,
            State::Disconnected => {}
        }
    }

    fn with_connection<F>(&self, handle: F) -> Vec<Response>
    where
        F: FnOnce(&Connection) -> Result<Vec<Response>>,
    {
        let outcome = match &self.state {
            State::Connected(session) => handle(session.connection()),
            State::Disconnected => Err(AppError::NotConnected),
            State::Terminated => Err(AppError::ApplicationEnded),
        };

        outcome.unwrap_or_else(|e| {
            tracing::warn!("Request failed: {}", e);
            vec![error_event(e)]
        })
    }
}

fn error_event(e: AppError) -> Response {
    Response::Error {
        message: e.user_friendly_message(),
    }
}
