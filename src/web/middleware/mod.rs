//! Web-specific middleware.

pub mod view_counter;
