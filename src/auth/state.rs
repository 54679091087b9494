use std::sync::RwLock;

use tokio::sync::OnceCell;

use crate::auth::credentials;
use crate::auth::session::SessionStore;
use crate::models::SessionRecord;

/// Current authentication state, as a single sum type rather than parallel
/// booleans so that `is_authenticated` can never drift from the record.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    /// Hydration from durable storage has not finished yet.
    Loading,
    Authenticated(SessionRecord),
    Unauthenticated,
}

/// The auth state machine: one writer path (`login`/`logout`), many readers.
///
/// `Loading -> {Authenticated, Unauthenticated}` happens exactly once, in
/// [`AuthService::hydrate`]; afterwards the state only moves between the two
/// settled variants.
pub struct AuthService {
    store: SessionStore,
    state: RwLock<AuthState>,
    hydrated: OnceCell<()>,
}

impl AuthService {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            state: RwLock::new(AuthState::Loading),
            hydrated: OnceCell::new(),
        }
    }

    /// One-shot initialization gate: read the session store exactly once and
    /// settle the state. Concurrent callers all await the same read; later
    /// calls are no-ops. This is the only suspend point in the auth core.
    ///
    /// An explicit `login`/`logout` also consumes the gate, so a hydrate
    /// that races in afterwards can never overwrite a fresh transition with
    /// whatever storage held before it.
    pub async fn hydrate(&self) {
        self.hydrated
            .get_or_init(|| async {
                let next = match self.store.load() {
                    Some(record) => {
                        log::info!("restored admin session for {}", record.username);
                        AuthState::Authenticated(record)
                    }
                    None => AuthState::Unauthenticated,
                };
                *self.write_state() = next;
            })
            .await;
    }

    /// Attempt a login with the submitted credentials.
    ///
    /// On a match the session is written through to durable storage and the
    /// state transition is fully applied before this returns, so navigation
    /// immediately after a successful login always sees `Authenticated`.
    /// A mismatch returns `false` and leaves the state untouched; failure is
    /// a return value here, never an error.
    pub fn login(&self, username: &str, password: &str) -> bool {
        let Some(record) = credentials::verify(username, password) else {
            return false;
        };

        // Persistence failure does not roll back the in-memory login; the
        // session just won't survive a restart.
        if let Err(e) = self.store.save(&record) {
            log::warn!("failed to persist admin session: {e}");
        }

        let _ = self.hydrated.set(());
        *self.write_state() = AuthState::Authenticated(record);
        true
    }

    /// Log out, clearing durable storage. Idempotent; always succeeds from
    /// the caller's point of view.
    pub fn logout(&self) {
        if let Err(e) = self.store.clear() {
            log::warn!("failed to clear persisted session: {e}");
        }
        let _ = self.hydrated.set(());
        *self.write_state() = AuthState::Unauthenticated;
    }

    pub fn snapshot(&self) -> AuthState {
        self.read_state().clone()
    }

    /// Derived from the current variant, never stored independently.
    pub fn is_authenticated(&self) -> bool {
        matches!(*self.read_state(), AuthState::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.read_state(), AuthState::Loading)
    }

    pub fn current_user(&self) -> Option<SessionRecord> {
        match &*self.read_state() {
            AuthState::Authenticated(record) => Some(record.clone()),
            _ => None,
        }
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, AuthState> {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, AuthState> {
        self.state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
