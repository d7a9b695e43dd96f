use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="max-w-md mx-auto mt-16 text-center">
            <h1 class="text-xl font-semibold mb-2">{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                {"Back home"}
            </Link<Route>>
        </div>
    }
}
