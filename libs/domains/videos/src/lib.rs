//! Videos Domain
//!
//! The video catalogue sibling of the users domain, kept deliberately
//! narrow: validated models, an in-memory store, and two plain-JSON
//! endpoints. No persistence gateway, no pagination, no response envelope.

pub mod handlers;
pub mod models;
pub mod service;

pub use handlers::ApiDoc;
pub use models::{Creator, Video};
pub use service::VideoService;
