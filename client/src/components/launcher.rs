//! FloatChat launcher button and the timed open/close transitions.

use leptos::prelude::*;

use crate::state::ui::{CLOSE_DELAY_MS, ChatPanelPhase, OPEN_DELAY_MS, UiState};

/// Start showing the chat panel; it becomes `active` after [`OPEN_DELAY_MS`].
pub fn open_panel(ui: RwSignal<UiState>) {
    if ui.try_update(|u| u.chat_panel.open()).unwrap_or(false) {
        settle_after(ui, ChatPanelPhase::Opening, OPEN_DELAY_MS);
    }
}

/// Start hiding the chat panel; it leaves layout after [`CLOSE_DELAY_MS`].
pub fn close_panel(ui: RwSignal<UiState>) {
    if ui.try_update(|u| u.chat_panel.close()).unwrap_or(false) {
        settle_after(ui, ChatPanelPhase::Closing, CLOSE_DELAY_MS);
    }
}

fn settle_after(ui: RwSignal<UiState>, from: ChatPanelPhase, delay_ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(delay_ms, move || {
            ui.update(|u| u.chat_panel.settle(from));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay_ms;
        ui.update(|u| u.chat_panel.settle(from));
    }
}

#[component]
pub fn Launcher() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            id="floatchat-btn"
            class="launcher"
            class:launcher--hidden=move || ui.with(|u| u.chat_panel.is_active())
            on:click=move |_| open_panel(ui)
        >
            "FloatChat"
        </button>
    }
}
