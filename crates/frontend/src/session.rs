//! Session context: who is signed in, seeded once at boot
//!
//! The provider reads the stored token on mount and decodes it (without
//! verification) into the current user. Nothing else writes the user for the
//! rest of the session; sign-out clears the token and the user together.

use crate::storage::BrowserTokenStore;
use std::rc::Rc;
use wicket_api::{Identity, TokenStore};
use yew::prelude::*;

/// Session state held in context.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub current_user: Option<Identity>,
    /// True until the boot-time token read has happened.
    pub is_loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_user: None,
            is_loading: true,
        }
    }
}

/// Session state transitions.
pub enum SessionAction {
    /// Boot-time load finished (with or without a user)
    Loaded(Option<Identity>),
    /// Clear the stored token and the current user
    SignOut,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Loaded(current_user) => Rc::new(Self {
                current_user,
                is_loading: false,
            }),
            SessionAction::SignOut => {
                BrowserTokenStore.clear();
                Rc::new(Self {
                    current_user: None,
                    is_loading: false,
                })
            }
        }
    }
}

/// Session context handle
pub type SessionContext = UseReducerHandle<SessionState>;

/// Derive the boot-time user from whatever token the store holds.
///
/// A missing or undecodable token means no user; decode failures are not
/// surfaced (the guard will route to sign-in).
pub fn initial_session(store: &dyn TokenStore) -> Option<Identity> {
    store
        .token()
        .and_then(|token| Identity::decode_unverified(&token).ok())
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Session provider component
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionState::default);

    // Seed the session from the stored token, once, on mount.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            session.dispatch(SessionAction::Loaded(initial_session(&BrowserTokenStore)));
        });
    }

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}
