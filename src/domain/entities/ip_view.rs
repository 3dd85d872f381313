//! First-visit-per-day records.

use chrono::NaiveDate;

/// Marks the first visit of an IP address on a given date.
///
/// The `(ip, date_id)` pair is unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IpView {
    pub ip: String,
    pub date_id: NaiveDate,
}

impl IpView {
    pub fn new(ip: impl Into<String>, date_id: NaiveDate) -> Self {
        Self {
            ip: ip.into(),
            date_id,
        }
    }
}
