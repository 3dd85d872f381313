//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin tool.
//!
//! # Available Services
//!
//! - [`services::post_service::PostService`] - Blog post listing and creation
//! - [`services::view_service::ViewService`] - Visit counting and daily summaries
//! - [`services::chart_service::ChartService`] - Dashboard and UK election charts

pub mod services;
