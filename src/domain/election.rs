//! Vote-share aggregation over the UK election dataset.
//!
//! Rows with missing values are skipped without error; the charts only ever
//! show constituencies and regions with complete data.

use std::collections::BTreeMap;

use crate::domain::entities::UkData;

/// Party votes as a percentage of all votes cast.
pub fn vote_share(votes: i64, total: i64) -> f64 {
    votes as f64 * 100.0 / total as f64
}

/// One constituency on the student-population scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentPoint {
    pub constituency: String,
    pub student_percentage: f64,
    pub conservative_share: f64,
}

/// Conservative and Labour shares for one region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionShare {
    pub region: String,
    pub conservative_share: f64,
    pub labour_share: f64,
}

#[derive(Debug, Default, Clone, Copy)]
struct RegionTotals {
    con_votes: i64,
    lab_votes: i64,
    total_votes: i64,
}

/// Builds one point per row with a student percentage, Conservative votes and
/// a positive vote total.
pub fn student_conservative_points(rows: &[UkData]) -> Vec<StudentPoint> {
    rows.iter()
        .filter_map(|row| match (row.c11_fulltime_student, row.con_vote19, row.total_vote19) {
            (Some(students), Some(con), Some(total)) if total > 0 => Some(StudentPoint {
                constituency: row.constituency_name.clone(),
                student_percentage: students,
                conservative_share: vote_share(con, total),
            }),
            _ => None,
        })
        .collect()
}

/// Sums Conservative, Labour and total votes per region in a single pass and
/// converts them to shares.
///
/// Regions come back sorted by name. Regions whose total is zero are dropped.
pub fn regional_party_shares(rows: &[UkData]) -> Vec<RegionShare> {
    let mut totals: BTreeMap<&str, RegionTotals> = BTreeMap::new();

    for row in rows {
        let (Some(region), Some(con), Some(lab), Some(total)) = (
            row.region.as_deref(),
            row.con_vote19,
            row.lab_vote19,
            row.total_vote19,
        ) else {
            continue;
        };

        let entry = totals.entry(region).or_default();
        entry.con_votes += con;
        entry.lab_votes += lab;
        entry.total_votes += total;
    }

    totals
        .into_iter()
        .filter(|(_, t)| t.total_votes > 0)
        .map(|(region, t)| RegionShare {
            region: region.to_string(),
            conservative_share: vote_share(t.con_votes, t.total_votes),
            labour_share: vote_share(t.lab_votes, t.total_votes),
        })
        .collect()
}
