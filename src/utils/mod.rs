//! Utility functions for request handling.
//!
//! - [`client_ip`] - Client IP resolution from the socket or proxy headers

pub mod client_ip;
