//! Page header with the search box and a glow that follows the pointer.

use leptos::prelude::*;

use crate::components::search_box::SearchBox;
use crate::state::ui::UiState;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let header_ref = NodeRef::<leptos::html::Header>::new();

    let on_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(header) = header_ref.get() else {
                return;
            };
            let rect = header.get_bounding_client_rect();
            ui.update(|u| u.track_pointer(f64::from(ev.client_x()), f64::from(ev.client_y()), rect.left(), rect.top()));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, header_ref);
    };
    let on_leave = move |_| ui.update(UiState::hide_spotlight);

    view! {
        <header class="site-header" node_ref=header_ref on:mousemove=on_move on:mouseleave=on_leave>
            <div
                id="wave-spotlight"
                style:background=move || ui.with(|u| u.spotlight_background.clone())
                style:opacity=move || ui.with(|u| u.spotlight.opacity())
            ></div>
            <div class="site-header__brand">
                <span class="site-header__logo">"FloatChat"</span>
                <span class="site-header__tagline">"Ask the ocean floats"</span>
            </div>
            <SearchBox />
        </header>
    }
}
