//! Root component, HTML shell and shared state providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the server for every request; `App` provides one
//! signal per state slice so components can reach them with
//! `expect_context`.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use session::map::MapView;

use crate::pages::home::HomePage;
use crate::state::chat::ChatState;
use crate::state::search::SearchState;
use crate::state::ui::UiState;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Server-rendered document around [`App`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="stylesheet" href=LEAFLET_CSS crossorigin="" />
                <script src=LEAFLET_JS crossorigin=""></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(ChatState::default()));
    provide_context(RwSignal::new(SearchState::default()));
    provide_context(RwSignal::new(MapView::new()));
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/floatchat.css" />
        <Title text="FloatChat" />
        <Router>
            <Routes fallback=|| "Not found.">
                <Route path=path!("") view=HomePage />
            </Routes>
        </Router>
    }
}
