//! Route guard for signed-in pages

use crate::app::Route;
use crate::session::use_session;
use yew::prelude::*;
use yew_router::prelude::*;

/// RequireUser props
#[derive(Properties, PartialEq)]
pub struct RequireUserProps {
    pub children: Children,
}

/// Guard wrapping protected routes: once the session has loaded, anyone
/// without a current user is sent to `/signin`. The guard only observes the
/// session; it never mutates it.
#[function_component(RequireUser)]
pub fn require_user(props: &RequireUserProps) -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("RequireUser must be rendered inside a router");

    {
        let signed_in = session.current_user.is_some();
        let loading = session.is_loading;
        use_effect_with((loading, signed_in), move |(loading, signed_in)| {
            if !loading && !signed_in {
                navigator.push(&Route::SignIn);
            }
        });
    }

    // Render nothing until the boot-time token read settles, so a valid
    // token never bounces through the sign-in page.
    if session.is_loading || session.current_user.is_none() {
        return html! {};
    }

    html! { <>{ props.children.clone() }</> }
}
