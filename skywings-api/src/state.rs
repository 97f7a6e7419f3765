use std::collections::HashMap;
use std::sync::Arc;

use skywings_catalog::FlightGenerator;
use skywings_core::{Clock, SystemClock};
use skywings_order::Session;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::app_config::Config;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub generator: Arc<FlightGenerator>,
    pub clock: Arc<dyn Clock>,
    pub catalog_size: usize,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new(config.sessions.max_sessions, clock.clone())),
            generator: Arc::new(FlightGenerator::new(clock.clone())),
            clock,
            catalog_size: config.catalog.size,
        }
    }
}

/// In-process session container. Each user's bookings live in their own
/// `Session`; nothing is shared between sessions.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
    max_sessions: usize,
    clock: Arc<dyn Clock>,
}

impl SessionStore {
    pub fn new(max_sessions: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions: max_sessions.max(1),
            clock,
        }
    }

    /// Open a new session, evicting the oldest ones once the store is full
    pub async fn create(&self) -> Uuid {
        let session = Session::new(self.clock.now());
        let id = session.id;

        let mut sessions = self.sessions.write().await;
        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .values()
                .min_by_key(|s| s.created_at)
                .map(|s| s.id);
            match oldest {
                Some(oldest) => {
                    tracing::debug!("Evicting session {}", oldest);
                    sessions.remove(&oldest);
                }
                None => break,
            }
        }
        sessions.insert(id, session);
        id
    }

    /// Run `f` against one session; `None` when the session is unknown.
    pub async fn with_session<T>(&self, id: &Uuid, f: impl FnOnce(&mut Session) -> T) -> Option<T> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(id).map(f)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
