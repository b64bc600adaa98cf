//! The client-side session: which tokens we hold and where they live.
//!
//! Every reader goes through a [`SessionStore`] rather than touching raw
//! storage, and stores push change notifications to subscribers so the route
//! guard reacts to a login or logout in the same tab instead of polling at
//! navigation time. The frontend's LocalStorage-backed store lives in the
//! frontend crate; [`MemorySessionStore`] here backs the tests.

use std::cell::RefCell;
use std::rc::Rc;

/// Tokens and identity persisted across page reloads.
///
/// Created on a successful sign-in, overwritten by the next one, cleared on
/// logout. The secondary token comes from the external sign-in service that
/// is contacted alongside the primary login.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub secondary_token: Option<String>,
    pub user_id: Option<String>,
}

impl Session {
    /// Token presence is the entire client-side check. An expired or forged
    /// token passes here and is only rejected by the server on the next
    /// authorized call.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty())
    }
}

/// Called with the new session after every store mutation.
pub type SessionListener = Rc<dyn Fn(&Session)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(usize);

/// Single session-management interface: explicit get/set/clear plus
/// lifecycle notifications.
pub trait SessionStore {
    fn get(&self) -> Session;
    fn set(&self, session: &Session);
    fn clear(&self);
    fn subscribe(&self, listener: SessionListener) -> ListenerId;
    fn unsubscribe(&self, id: ListenerId);
}

/// Subscriber bookkeeping shared by the store implementations.
#[derive(Clone, Default)]
pub struct Listeners {
    inner: Rc<RefCell<ListenersInner>>,
}

#[derive(Default)]
struct ListenersInner {
    next_id: usize,
    entries: Vec<(usize, SessionListener)>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, listener: SessionListener) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push((id, listener));
        ListenerId(id)
    }

    pub fn remove(&self, id: ListenerId) {
        self.inner
            .borrow_mut()
            .entries
            .retain(|(entry_id, _)| *entry_id != id.0);
    }

    pub fn notify(&self, session: &Session) {
        // Snapshot first: a listener may subscribe or unsubscribe re-entrantly.
        let listeners: Vec<SessionListener> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(session);
        }
    }
}

/// In-memory [`SessionStore`] used by tests and any non-browser harness.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    session: Rc<RefCell<Session>>,
    listeners: Listeners,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Session {
        self.session.borrow().clone()
    }

    fn set(&self, session: &Session) {
        *self.session.borrow_mut() = session.clone();
        self.listeners.notify(session);
    }

    fn clear(&self) {
        let cleared = Session::default();
        *self.session.borrow_mut() = cleared.clone();
        self.listeners.notify(&cleared);
    }

    fn subscribe(&self, listener: SessionListener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.remove(id);
    }
}
