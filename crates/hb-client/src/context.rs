use crate::{FetchSession, SessionUser};

use std::sync::Arc;

use tokio::sync::OnceCell;

/// Resolved state of the session context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Fetch not started or still in flight
    Loading,
    /// Fetch succeeded and the caller is authenticated
    Ready(SessionUser),
    /// Fetch succeeded but no identity claims were present.
    /// There is no guest mode: consumers must block authenticated-only UI.
    Unauthenticated,
    /// Network or parse failure. Never retried automatically; recovery
    /// is a full context rebuild (page reload).
    Error(String),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Ready(user) => Some(user),
            _ => None,
        }
    }
}

/// Process-wide, page-lifetime session holder.
///
/// Exactly one fetch of the session endpoint happens per context,
/// no matter how many consumers call [`initialize`](Self::initialize)
/// concurrently: later callers await the same in-flight result through
/// the `OnceCell`. Once resolved, the state is immutable.
pub struct SessionContext {
    fetch: Arc<dyn FetchSession>,
    resolved: OnceCell<SessionState>,
}

impl SessionContext {
    pub fn new(fetch: Arc<dyn FetchSession>) -> Self {
        Self {
            fetch,
            resolved: OnceCell::new(),
        }
    }

    /// Resolve the session, fetching it on the first call.
    ///
    /// A failed fetch resolves to `Error` and stays there: the cell is
    /// filled either way, so no caller can trigger a second fetch.
    pub async fn initialize(&self) -> &SessionState {
        self.resolved
            .get_or_init(|| async {
                match self.fetch.fetch_session().await {
                    Ok(session) => match session.user {
                        Some(user) => SessionState::Ready(user),
                        None => SessionState::Unauthenticated,
                    },
                    Err(e) => SessionState::Error(e.to_string()),
                }
            })
            .await
    }

    /// Current state without awaiting; `Loading` until the first
    /// `initialize` call resolves.
    pub fn state(&self) -> SessionState {
        self.resolved.get().cloned().unwrap_or(SessionState::Loading)
    }

    /// Gate for authenticated-only UI. Idempotent: once the context has
    /// resolved, repeated reads always return the same answer.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.resolved.get(), Some(SessionState::Ready(_)))
    }

    /// The resolved user, when authenticated
    pub fn user(&self) -> Option<SessionUser> {
        self.resolved.get().and_then(|s| s.user().cloned())
    }
}
