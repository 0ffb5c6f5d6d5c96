//! Custom extractors for Axum handlers.
//!
//! This module provides reusable extractors that reduce boilerplate
//! and standardize error handling across your API.

pub mod lenient_uuid;

pub use lenient_uuid::LenientUuid;
