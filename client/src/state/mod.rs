//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `search`, `ui`) so components depend on
//! small focused models. Each model is provided once as an `RwSignal` from
//! `App` and read with `expect_context`. The map view model comes straight
//! from `session::map::MapView`.

pub mod chat;
pub mod search;
pub mod ui;
