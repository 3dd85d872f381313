//! Web layer for the browser-facing pages.
//!
//! Pages are rendered server-side with Askama templates; charts are embedded
//! as JSON and drawn by Plotly.js.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Page-view counting
//! - [`routes`] - Page route configuration
//! - [`forms`] - Form definitions and validation
//! - [`flash`] - One-shot messages across redirects

pub mod flash;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod routes;
