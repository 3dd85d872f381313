//! One-shot flash messages carried in a cookie across a redirect.
//!
//! The cookie stores a fixed key, never user input; the message text is
//! looked up on read.

use axum::http::{HeaderMap, HeaderValue, header::COOKIE};

pub const FLASH_COOKIE: &str = "flash";

/// Messages that can be flashed to the next page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    PostCreated,
}

impl FlashKind {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "post_created" => Some(FlashKind::PostCreated),
            _ => None,
        }
    }

    fn cookie(self) -> &'static str {
        match self {
            FlashKind::PostCreated => "flash=post_created; Path=/; HttpOnly; SameSite=Lax",
        }
    }

    pub fn flash(self) -> Flash {
        match self {
            FlashKind::PostCreated => Flash {
                message: "Your post has been created!",
                category: "success",
            },
        }
    }
}

/// A message rendered once at the top of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flash {
    pub message: &'static str,
    /// CSS class suffix: `success`, `info`, `danger`.
    pub category: &'static str,
}

/// `Set-Cookie` value scheduling `kind` for the next page.
pub fn set_cookie(kind: FlashKind) -> HeaderValue {
    HeaderValue::from_static(kind.cookie())
}

/// `Set-Cookie` value removing a consumed flash.
pub fn clear_cookie() -> HeaderValue {
    HeaderValue::from_static("flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

/// Reads a pending flash from the request cookies.
///
/// Unknown keys are ignored.
pub fn read(headers: &HeaderMap) -> Option<Flash> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|cookie_header| cookie_header.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(FLASH_COOKIE), Some(value)) => FlashKind::from_key(value),
                _ => None,
            }
        })
        .map(|kind| kind.flash())
}
