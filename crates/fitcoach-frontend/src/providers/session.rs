//! The browser-backed session store and the Yew context that exposes it.
//!
//! `LocalSessionStore` persists the tokens in LocalStorage under the same
//! keys every part of the app reads, and `SessionProvider` mirrors store
//! mutations into component state so the route guard re-renders on login and
//! logout instead of only re-checking at navigation.

use gloo_storage::{LocalStorage, Storage};
use std::rc::Rc;
use yew::prelude::*;

use fitcoach::session::{ListenerId, Listeners, Session, SessionListener, SessionStore};

const TOKEN_KEY: &str = "token";
const SECONDARY_TOKEN_KEY: &str = "token2";
const USER_ID_KEY: &str = "userId";

/// [`SessionStore`] over the browser's LocalStorage, so the session survives
/// page reloads. Last write wins on concurrent logins.
#[derive(Clone, Default)]
pub struct LocalSessionStore {
    listeners: Listeners,
}

impl LocalSessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn store_key(key: &str, value: Option<&str>) {
    match value {
        Some(value) => {
            LocalStorage::set(key, value).ok();
        }
        None => LocalStorage::delete(key),
    }
}

impl SessionStore for LocalSessionStore {
    fn get(&self) -> Session {
        Session {
            token: LocalStorage::get(TOKEN_KEY).ok(),
            secondary_token: LocalStorage::get(SECONDARY_TOKEN_KEY).ok(),
            user_id: LocalStorage::get(USER_ID_KEY).ok(),
        }
    }

    fn set(&self, session: &Session) {
        store_key(TOKEN_KEY, session.token.as_deref());
        store_key(SECONDARY_TOKEN_KEY, session.secondary_token.as_deref());
        store_key(USER_ID_KEY, session.user_id.as_deref());
        self.listeners.notify(session);
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(SECONDARY_TOKEN_KEY);
        LocalStorage::delete(USER_ID_KEY);
        self.listeners.notify(&Session::default());
    }

    fn subscribe(&self, listener: SessionListener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.remove(id);
    }
}

/// Read the primary token straight from storage. This is the API client's
/// per-request token source.
pub fn stored_token() -> Option<String> {
    LocalStorage::get(TOKEN_KEY).ok()
}

#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub session: Session,
    pub login: Callback<Session>,
    pub logout: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let store = use_memo((), |_| LocalSessionStore::new());
    let session = use_state(|| store.get());

    // Mirror store mutations into state so consumers re-render.
    use_effect_with((), {
        let store = store.clone();
        let session = session.clone();
        move |_| {
            let listener: SessionListener = Rc::new(move |new_session: &Session| {
                session.set(new_session.clone());
            });
            let id = store.subscribe(listener);
            move || store.unsubscribe(id)
        }
    });

    let login = {
        let store = store.clone();
        Callback::from(move |new_session: Session| store.set(&new_session))
    };

    let logout = {
        let store = store.clone();
        Callback::from(move |_| store.clear())
    };

    let context = SessionContext {
        session: (*session).clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("use_session must be used within a SessionProvider")
}
