//! Sign-in page
//!
//! The actual sign-in flow lives elsewhere; this page is the fixed redirect
//! target the route guard sends anonymous visitors to.

use yew::prelude::*;

#[function_component(SignIn)]
pub fn signin() -> Html {
    html! {
        <div class="max-w-md mx-auto mt-16 bg-white border border-gray-200 rounded p-8 text-center">
            <h1 class="text-xl font-semibold mb-2">{"Sign in"}</h1>
            <p class="text-gray-600">
                {"You need to sign in before using Wicket."}
            </p>
        </div>
    }
}
