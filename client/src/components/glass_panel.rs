//! Frosted-glass container for the chat panel.
//!
//! ARCHITECTURE
//! ============
//! The `#glass-filter` SVG is regenerated from the container's measured size
//! whenever the panel becomes visible or the window is resized. The surface
//! mode (SVG backdrop filter or plain blur) is detected once after hydration.

use effects::glass::GlassSettings;
use leptos::prelude::*;

use crate::state::ui::UiState;

/// Size used for the displacement map before the panel is first measured.
const DEFAULT_SIZE: (f64, f64) = (400.0, 200.0);

#[component]
pub fn GlassPanel(children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let map_size = RwSignal::new(DEFAULT_SIZE);
    let settings = GlassSettings::default();

    let measure = move || {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = container_ref.get_untracked() else {
                return;
            };
            let (w, h) = (f64::from(el.offset_width()), f64::from(el.offset_height()));
            if w > 0.0 && h > 0.0 {
                map_size.set((w, h));
            }
        }
    };

    Effect::new(move || {
        if ui.with(|u| u.chat_panel.is_visible()) {
            measure();
        }
    });

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let mode = detect_surface_mode();
            ui.update(|u| u.surface_mode = mode);
        });
        let _ = window_event_listener(leptos::ev::resize, move |_| {
            if ui.with_untracked(|u| u.chat_panel.is_visible()) {
                measure();
            }
        });
    }

    let filter_markup = move || {
        let (w, h) = map_size.get();
        settings.filter_svg(&settings.displacement_map_url(w, h))
    };
    let class = move || {
        let u = ui.get();
        let mut class = format!("glass-surface {}", u.surface_mode.css_class());
        if u.chat_panel.is_active() {
            class.push_str(" active");
        }
        class
    };

    view! {
        <div
            id="glass-surface-container"
            class=class
            style:display=move || ui.with(|u| u.chat_panel.display())
            node_ref=container_ref
        >
            <div class="glass-surface__defs" inner_html=filter_markup></div>
            <div class="glass-surface__content">{children()}</div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn detect_surface_mode() -> effects::glass::SurfaceMode {
    use effects::glass::SurfaceMode;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return SurfaceMode::Fallback;
    };
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let accepts_filter = window
        .document()
        .and_then(|doc| doc.create_element("div").ok())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .is_some_and(|probe| {
            let style = probe.style();
            style.set_property("backdrop-filter", "url(#glass-filter)").is_ok()
                && style.get_property_value("backdrop-filter").is_ok_and(|v| !v.is_empty())
        });
    SurfaceMode::detect(&user_agent, accepts_filter)
}
