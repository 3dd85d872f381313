//! UK 2019 general election constituency data.

use serde::{Deserialize, Serialize};

/// One constituency row of the static UK election dataset.
///
/// Every measurement is optional: the dataset has gaps and rows with missing
/// values are skipped by the charts instead of being rejected on import.
/// The serde names follow the column headers of the published dataset so
/// exported records can be imported as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UkData {
    pub constituency_name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    /// Share of full-time students in the 2011 census, in percent.
    #[serde(default, rename = "c11FulltimeStudent")]
    pub c11_fulltime_student: Option<f64>,
    #[serde(default, rename = "c11Retired")]
    pub c11_retired: Option<f64>,
    #[serde(default, rename = "c11Female")]
    pub c11_female: Option<f64>,
    #[serde(default, rename = "ConVote19")]
    pub con_vote19: Option<i64>,
    #[serde(default, rename = "LabVote19")]
    pub lab_vote19: Option<i64>,
    #[serde(default, rename = "LDVote19")]
    pub ld_vote19: Option<i64>,
    #[serde(default, rename = "TotalVote19")]
    pub total_vote19: Option<i64>,
    #[serde(default, rename = "Turnout19")]
    pub turnout19: Option<f64>,
}

impl UkData {
    /// Creates a row with only the name set.
    pub fn named(constituency_name: impl Into<String>) -> Self {
        Self {
            constituency_name: constituency_name.into(),
            ..Self::default()
        }
    }
}
