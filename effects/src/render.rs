//! Rendering: draws wave layers to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads layer geometry from [`crate::waves`] and produces pixels; it keeps
//! no state between frames.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::waves::WaveLayer;

/// Fetch the canvas's 2D context.
///
/// # Errors
///
/// Returns `Err` if the browser refuses the context or returns an object of
/// an unexpected type.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

/// Match the canvas backing store to its container, in CSS pixels.
pub fn resize(canvas: &HtmlCanvasElement, width: u32, height: u32) {
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
}

/// Clear the canvas and paint every layer back to front.
pub fn draw(ctx: &CanvasRenderingContext2d, layers: &[WaveLayer], width: u32, height: u32, time_ms: f64) {
    ctx.clear_rect(0.0, 0.0, f64::from(width), f64::from(height));
    for layer in layers {
        draw_layer(ctx, layer, width, height, time_ms);
    }
}

fn draw_layer(ctx: &CanvasRenderingContext2d, layer: &WaveLayer, width: u32, height: u32, time_ms: f64) {
    let points = layer.outline(width, height, time_ms);
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    ctx.begin_path();
    ctx.set_fill_style_str(layer.color);
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.close_path();
    ctx.fill();
}
