//! The single FloatChat screen: header, map, wave band and chat panel.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::float_map::FloatMap;
use crate::components::glass_panel::GlassPanel;
use crate::components::launcher::{Launcher, close_panel};
use crate::components::site_header::SiteHeader;
use crate::components::wave_canvas::WaveCanvas;
use crate::state::ui::UiState;

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let on_close = Callback::new(move |()| close_panel(ui));

    view! {
        <div class="home-page">
            <SiteHeader />
            <main class="home-page__main">
                <FloatMap />
                <WaveCanvas />
            </main>
            <Launcher />
            <GlassPanel>
                <ChatPanel on_close=on_close />
            </GlassPanel>
        </div>
    }
}
