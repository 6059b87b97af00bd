/// Shared application state for the HTTP front end
use crate::config::ServerConfig;
use crate::roster::Roster;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// State handed to every request handler.
///
/// The roster sits behind a single lock; handlers hold it for the whole of an
/// operation and never across an `.await`.
#[derive(Debug, Default)]
pub struct AppState {
    pub config: ServerConfig,
    roster: Mutex<Roster>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_roster(config, Roster::new())
    }

    pub fn with_roster(config: ServerConfig, roster: Roster) -> Self {
        Self {
            config,
            roster: Mutex::new(roster),
        }
    }

    /// Locks the roster, recovering from poisoning. Every roster mutation is a
    /// single push or remove.
    pub fn roster(&self) -> MutexGuard<'_, Roster> {
        self.roster.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
