//! Signed-in landing page

use crate::client::api_client;
use crate::components::{report_error, use_notices};
use crate::session::{use_session, SessionAction};
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use wicket_api::ApiError;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Overview {
    headline: String,
    #[serde(default)]
    items: Vec<String>,
}

async fn fetch_overview() -> Result<Overview, ApiError> {
    api_client()?.get("/api/overview").await
}

#[function_component(Home)]
pub fn home() -> Html {
    let session = use_session();
    let notices = use_notices();
    let overview = use_state(|| None::<Overview>);

    {
        let notices = notices.clone();
        let overview = overview.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_overview().await {
                    Ok(data) => overview.set(Some(data)),
                    Err(err) => report_error(&notices, &err),
                }
            });
        });
    }

    let display_name = session
        .current_user
        .as_ref()
        .and_then(|user| user.name.clone())
        .or_else(|| session.current_user.as_ref().map(|user| user.sub.clone()))
        .unwrap_or_default();

    let on_sign_out = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::SignOut))
    };

    html! {
        <div class="max-w-2xl mx-auto">
            <div class="flex justify-between items-center mb-6">
                <h1 class="text-2xl font-semibold">{format!("Welcome, {display_name}")}</h1>
                <button onclick={on_sign_out} class="text-sm text-gray-600 hover:text-gray-900">
                    {"Sign out"}
                </button>
            </div>
            if let Some(overview) = overview.as_ref() {
                <div class="bg-white border border-gray-200 rounded p-4">
                    <p class="font-medium mb-2">{&overview.headline}</p>
                    <ul class="list-disc pl-5">
                        { for overview.items.iter().map(|item| html! { <li>{item}</li> }) }
                    </ul>
                </div>
            } else {
                <p class="text-gray-500">{"Loading…"}</p>
            }
        </div>
    }
}
