use std::collections::BTreeMap;

use uuid::Uuid;

use crate::models::{RosterStats, Status, Team, TeamDistribution, TeamStats, Volunteer};

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn tally<'a>(keys: impl Iterator<Item = &'a str>) -> BTreeMap<String, usize> {
    let mut map = BTreeMap::new();
    for key in keys {
        *map.entry(key.to_string()).or_insert(0) += 1;
    }
    map
}

pub fn summarize_teams(teams: &[Team]) -> TeamStats {
    let member_total: usize = teams.iter().map(Team::size).sum();
    let average_size = if teams.is_empty() {
        0
    } else {
        (member_total as f64 / teams.len() as f64).round() as usize
    };

    TeamStats {
        total: teams.len(),
        active: teams.iter().filter(|t| t.status == Status::Active).count(),
        deployed: teams.iter().filter(|t| t.status == Status::Deployed).count(),
        average_size,
        distribution: teams
            .iter()
            .map(|team| TeamDistribution {
                id: team.id.clone(),
                name: team.name.clone(),
                size: team.size(),
                specializations: team.specializations.clone(),
                categories: tally(team.members.iter().map(|m| m.category.as_str())),
            })
            .collect(),
    }
}

/// Folds both collections into the aggregate view. Nothing is cached.
pub fn compute_stats(snapshot_id: Uuid, volunteers: &[Volunteer], teams: &[Team]) -> RosterStats {
    let total = volunteers.len();
    let rating_sum: f64 = volunteers.iter().map(|v| v.rating).sum();
    let avg_rating = if total == 0 {
        0.0
    } else {
        round_to(rating_sum / total as f64, 2)
    };

    RosterStats {
        snapshot_id,
        total,
        active: volunteers
            .iter()
            .filter(|v| v.status == Status::Active)
            .count(),
        deployed: volunteers
            .iter()
            .filter(|v| v.status == Status::Deployed)
            .count(),
        by_category: tally(volunteers.iter().map(|v| v.category.as_str())),
        by_location: tally(volunteers.iter().map(|v| v.location.as_str())),
        avg_rating,
        total_deployments: volunteers.iter().map(|v| u64::from(v.deployments)).sum(),
        teams: summarize_teams(teams),
    }
}
