use std::collections::{BTreeMap, HashSet};

use rand::Rng;
use tracing::debug;

use crate::models::{Status, Team, Volunteer};

pub const MIN_TEAMS: usize = 12;
pub const MAX_TEAMS: usize = 15;

/// Teams below this size accept volunteers from any location.
const OPEN_TEAM_SIZE: usize = 3;

pub fn team_id(index: usize) -> String {
    format!("TEAM{:02}", index + 1)
}

fn empty_team(index: usize) -> Team {
    Team {
        id: team_id(index),
        name: format!("Rapid Response Team {}", index + 1),
        leader: String::new(),
        leader_id: String::new(),
        members: Vec::new(),
        specializations: BTreeMap::new(),
        location: String::new(),
        status: Status::Active,
    }
}

/// Groups volunteers by category, in order of each category's first appearance.
fn group_by_category(volunteers: &[Volunteer]) -> Vec<(&str, Vec<&Volunteer>)> {
    let mut groups: Vec<(&str, Vec<&Volunteer>)> = Vec::new();

    for volunteer in volunteers {
        match groups
            .iter_mut()
            .find(|(category, _)| *category == volunteer.category)
        {
            Some((_, members)) => members.push(volunteer),
            None => groups.push((volunteer.category.as_str(), vec![volunteer])),
        }
    }

    groups
}

/// Indices of the `count` most deployed volunteers; ties keep generation order.
fn rank_leaders(volunteers: &[Volunteer], count: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..volunteers.len()).collect();
    ranked.sort_by(|&a, &b| volunteers[b].deployments.cmp(&volunteers[a].deployments));
    ranked.truncate(count);
    ranked
}

fn specialization_count(team: &Team, specialization: &str) -> usize {
    team.members
        .iter()
        .filter(|member| member.specialization == specialization)
        .count()
}

/// Picks the team a volunteer should join.
///
/// Candidates are teams in the volunteer's city plus any team still under
/// [`OPEN_TEAM_SIZE`] members. Among those, the fewest members sharing the
/// volunteer's specialization wins, then the smallest team, then the lowest
/// index. With no candidate the globally smallest team is used.
fn choose_team(teams: &[Team], volunteer: &Volunteer) -> Option<usize> {
    let candidate = teams
        .iter()
        .enumerate()
        .filter(|(_, team)| team.location == volunteer.location || team.size() < OPEN_TEAM_SIZE)
        .min_by_key(|(index, team)| {
            (
                specialization_count(team, &volunteer.specialization),
                team.size(),
                *index,
            )
        })
        .map(|(index, _)| index);

    candidate.or_else(|| {
        teams
            .iter()
            .enumerate()
            .min_by_key(|(index, team)| (team.size(), *index))
            .map(|(index, _)| index)
    })
}

/// Partitions the volunteer pool into between [`MIN_TEAMS`] and [`MAX_TEAMS`]
/// teams, clamped to the pool size so every team gets a leader.
pub fn balance_teams<R: Rng + ?Sized>(rng: &mut R, volunteers: &[Volunteer]) -> Vec<Team> {
    let drawn = rng.gen_range(MIN_TEAMS..=MAX_TEAMS);
    let team_count = drawn.min(volunteers.len());
    let groups = group_by_category(volunteers);

    let mut teams: Vec<Team> = (0..team_count).map(empty_team).collect();

    let leaders = rank_leaders(volunteers, team_count);
    let leader_ids: HashSet<&str> = leaders
        .iter()
        .map(|&index| volunteers[index].id.as_str())
        .collect();

    for (team, &index) in teams.iter_mut().zip(&leaders) {
        let leader = &volunteers[index];
        team.leader = leader.name.clone();
        team.leader_id = leader.id.clone();
        team.location = leader.location.clone();
        team.status = leader.status;
        team.members.push(leader.clone());
    }

    let mut fallbacks = 0usize;
    for (_, members) in &groups {
        for volunteer in members
            .iter()
            .filter(|volunteer| !leader_ids.contains(volunteer.id.as_str()))
        {
            let Some(target) = choose_team(&teams, volunteer) else {
                continue;
            };
            let team = &mut teams[target];
            if team.location != volunteer.location && team.size() >= OPEN_TEAM_SIZE {
                fallbacks += 1;
            }
            team.members.push((*volunteer).clone());
            *team
                .specializations
                .entry(volunteer.specialization.clone())
                .or_insert(0) += 1;
        }
    }

    if fallbacks > 0 {
        debug!(fallbacks, "placed volunteers on the smallest team");
    }
    for team in &teams {
        let mut categories: BTreeMap<&str, usize> = BTreeMap::new();
        for member in &team.members {
            *categories.entry(member.category.as_str()).or_insert(0) += 1;
        }
        debug!(team = %team.id, size = team.size(), ?categories, "team balanced");
    }

    teams
}
