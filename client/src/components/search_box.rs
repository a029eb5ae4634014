//! Float search: text input plus a suggestion list.
//!
//! Picking a suggestion flies the map there, drops the search marker and
//! makes the float the chat subject.

use leptos::prelude::*;
use session::Float;
use session::map::{self, MapView};

use crate::state::chat::ChatState;
use crate::state::search::SearchState;

#[component]
pub fn SearchBox() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let map_view = expect_context::<RwSignal<MapView>>();

    let pick = move |float: &'static Float| {
        search.update(|s| s.pick(float));
        map_view.update(|view| chat.update(|c| map::choose(view, &mut c.session, float)));
    };

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        // Any click outside the search container closes the list.
        let _ = window_event_listener(leptos::ev::click, move |ev| {
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(".search-container").ok().flatten())
                .is_some();
            if !inside {
                search.update(SearchState::dismiss);
            }
        });
    }

    view! {
        <div class="search-container">
            <input
                id="location-search"
                type="text"
                placeholder="Search floats..."
                autocomplete="off"
                prop:value=move || search.with(|s| s.query.clone())
                on:input=move |ev| search.update(|s| s.set_query(event_target_value(&ev)))
            />
            <ul
                id="suggestions"
                style:display=move || if search.with(SearchState::list_visible) { "block" } else { "none" }
            >
                {move || {
                    search
                        .with(SearchState::suggestions)
                        .floats()
                        .iter()
                        .map(|&float| {
                            view! { <li on:click=move |_| pick(float)>{float.name}</li> }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
