//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the map page chrome and read/write the shared chat,
//! search, map and UI signals provided by `App`.

pub mod chat_panel;
pub mod float_map;
pub mod glass_panel;
pub mod launcher;
pub mod search_box;
pub mod site_header;
pub mod wave_canvas;
