//! # Ranking Aggregator
//!
//! Derives the club and user leaderboards from a snapshot of the User
//! collection. Both functions are pure: they take the current users, sum
//! and sort, and have no side effects, so calling them twice over the same
//! snapshot yields identical results.

use core_types::User;
use serde::Serialize;
use std::collections::HashMap;

/// The club key used for users without a club affiliation.
pub const NO_CLUB: &str = "NoClub";

/// One row of the club leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubRanking {
    pub club_name: String,
    pub total_assets: i64,
}

/// One row of the user leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRanking {
    pub username: String,
    pub total_assets: i64,
}

/// Sums every user's effective asset value grouped by club and sorts the
/// clubs by total, highest first. Users with no club are grouped under
/// [`NO_CLUB`]. Tie order between equal totals is unspecified.
pub fn club_rankings(users: &[User]) -> Vec<ClubRanking> {
    let mut totals: HashMap<String, i64> = HashMap::new();
    for user in users {
        let club = user.club_name.clone().unwrap_or_else(|| NO_CLUB.to_string());
        *totals.entry(club).or_insert(0) += user.effective_assets();
    }

    let mut rankings: Vec<ClubRanking> = totals
        .into_iter()
        .map(|(club_name, total_assets)| ClubRanking {
            club_name,
            total_assets,
        })
        .collect();
    rankings.sort_by(|a, b| b.total_assets.cmp(&a.total_assets));
    rankings
}

/// Ranks every user by effective asset value, highest first. The username
/// is the user's id, verbatim. Tie order is unspecified.
pub fn user_rankings(users: &[User]) -> Vec<UserRanking> {
    let mut rankings: Vec<UserRanking> = users
        .iter()
        .map(|user| UserRanking {
            username: user.id.clone(),
            total_assets: user.effective_assets(),
        })
        .collect();
    rankings.sort_by(|a, b| b.total_assets.cmp(&a.total_assets));
    rankings
}
