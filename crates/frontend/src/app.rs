//! App shell: router, layout, and route table

use crate::components::NoticeProvider;
use crate::guard::RequireUser;
use crate::pages::{Home, NotFound, SignIn};
use crate::session::SessionProvider;
use yew::prelude::*;
use yew_router::prelude::*;

pub const APP_TITLE: &str = "Wicket";

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/signin")]
    SignIn,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <NoticeProvider>
                    <Layout />
                </NoticeProvider>
            </SessionProvider>
        </BrowserRouter>
    }
}

#[function_component(Layout)]
fn layout() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 text-gray-900">
            <nav class="bg-white border-b border-gray-200 px-4 py-3">
                <span class="text-lg font-semibold">{APP_TITLE}</span>
            </nav>
            <main class="p-4">
                <Switch<Route> render={switch} />
            </main>
        </div>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <RequireUser><Home /></RequireUser> },
        Route::SignIn => html! { <SignIn /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
