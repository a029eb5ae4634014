//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` posts questions to the external chat service. Wire bodies come from
//! `session::wire` so the terminal client speaks exactly the same schema.

pub mod api;
