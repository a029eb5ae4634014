//! Decorative effects for the FloatChat page.
//!
//! This crate is compiled to WebAssembly alongside the UI. None of its state
//! feeds the chat session; it only computes what the page looks like. The
//! geometry and markup builders are plain Rust so they can be tested natively;
//! [`render`] is the single module that talks to the canvas API.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`glass`] | Displacement-map SVG and filter parameters for the chat panel |
//! | [`spotlight`] | Mouse-following header glow |
//! | [`waves`] | Layered sine-wave background geometry |
//! | [`render`] | Draws wave layers to a `CanvasRenderingContext2d` |

pub mod glass;
pub mod render;
pub mod spotlight;
pub mod waves;
