//! Domain layer containing the blog and analytics model.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`charts`] - Typed chart descriptions rendered by Plotly.js
//! - [`election`] - Vote-share aggregation over the UK dataset
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Services in [`crate::application::services`] tie it together.

pub mod charts;
pub mod election;
pub mod entities;
pub mod repositories;
