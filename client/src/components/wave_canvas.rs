//! Animated ocean background drawn on a canvas that fills its container.

use leptos::prelude::*;

#[component]
pub fn WaveCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        animate(canvas);
        #[cfg(not(feature = "hydrate"))]
        let _ = canvas;
    });

    view! {
        <div class="visual-content-animated">
            <canvas id="oceanCanvas" node_ref=canvas_ref></canvas>
        </div>
    }
}

/// Run the requestAnimationFrame loop until the canvas leaves the document.
#[cfg(feature = "hydrate")]
fn animate(canvas: web_sys::HtmlCanvasElement) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use effects::render;
    use effects::waves::OCEAN_LAYERS;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let ctx = match render::context_2d(&canvas) {
        Ok(ctx) => ctx,
        Err(err) => {
            log::warn!("wave canvas disabled: {err:?}");
            return;
        }
    };
    let Some(window) = web_sys::window() else {
        return;
    };

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let cb = Closure::wrap(Box::new(move |time_ms: f64| {
        if !canvas.is_connected() {
            holder_for_cb.borrow_mut().take();
            return;
        }
        let (width, height) = canvas
            .parent_element()
            .map_or((0, 0), |parent| (parent.client_width(), parent.client_height()));
        let width = u32::try_from(width).unwrap_or(0);
        let height = u32::try_from(height).unwrap_or(0);
        render::resize(&canvas, width, height);
        render::draw(&ctx, &OCEAN_LAYERS, width, height, time_ms);

        if let Some(next) = holder_for_cb.borrow().as_ref() {
            if window_for_cb.request_animation_frame(next.as_ref().unchecked_ref()).is_err() {
                log::warn!("wave animation stopped");
            }
        }
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    }
}
