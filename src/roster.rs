use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use uuid::Uuid;

use crate::config::RosterConfig;
use crate::error::RosterError;
use crate::filter::{self, TeamFilter, VolunteerFilter};
use crate::generator::generate_volunteers;
use crate::models::{
    RosterStats, SpecializationGroup, Team, TeamDetail, Volunteer, VolunteerDetail,
};
use crate::stats::compute_stats;
use crate::teams::balance_teams;

/// An immutable volunteer pool and its team partition.
///
/// Built once at startup and shared by reference with every consumer.
#[derive(Debug, Clone)]
pub struct Roster {
    id: Uuid,
    volunteers: Vec<Volunteer>,
    teams: Vec<Team>,
}

impl Roster {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: &RosterConfig) -> Self {
        let id = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();
        let volunteers = generate_volunteers(rng, config.volunteer_count);
        let teams = balance_teams(rng, &volunteers);

        info!(
            snapshot = %id,
            volunteers = volunteers.len(),
            teams = teams.len(),
            "roster generated"
        );

        Self {
            id,
            volunteers,
            teams,
        }
    }

    pub fn from_config(config: &RosterConfig) -> Result<Self, RosterError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::generate(&mut rng, config))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn volunteers(&self) -> &[Volunteer] {
        &self.volunteers
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn stats(&self) -> RosterStats {
        compute_stats(self.id, &self.volunteers, &self.teams)
    }

    pub fn filter_volunteers(&self, filter: &VolunteerFilter) -> Vec<&Volunteer> {
        filter::filter_volunteers(&self.volunteers, filter)
    }

    pub fn filter_teams(&self, filter: &TeamFilter) -> Vec<&Team> {
        filter::filter_teams(&self.teams, filter)
    }

    pub fn volunteer(&self, id: &str) -> Option<&Volunteer> {
        self.volunteers
            .iter()
            .find(|volunteer| volunteer.id.eq_ignore_ascii_case(id))
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.id.eq_ignore_ascii_case(id))
    }

    /// The team a volunteer was placed on.
    pub fn team_of(&self, volunteer_id: &str) -> Option<&Team> {
        self.teams.iter().find(|team| {
            team.members
                .iter()
                .any(|member| member.id.eq_ignore_ascii_case(volunteer_id))
        })
    }

    /// A volunteer together with the team they were placed on.
    pub fn volunteer_detail(&self, id: &str) -> Result<VolunteerDetail<'_>, RosterError> {
        let volunteer = self
            .volunteer(id)
            .ok_or_else(|| RosterError::UnknownVolunteer(id.to_string()))?;

        Ok(VolunteerDetail {
            volunteer,
            team: self.team_of(&volunteer.id),
        })
    }

    /// Members grouped by specialization, groups ordered by first member.
    pub fn team_detail(&self, id: &str) -> Result<TeamDetail<'_>, RosterError> {
        let team = self
            .team(id)
            .ok_or_else(|| RosterError::UnknownTeam(id.to_string()))?;

        let mut groups: Vec<SpecializationGroup<'_>> = Vec::new();
        for member in &team.members {
            match groups
                .iter_mut()
                .find(|group| group.specialization == member.specialization)
            {
                Some(group) => group.members.push(member),
                None => groups.push(SpecializationGroup {
                    specialization: &member.specialization,
                    members: vec![member],
                }),
            }
        }

        Ok(TeamDetail { team, groups })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64, count: usize) -> Roster {
        Roster::from_config(&RosterConfig {
            volunteer_count: count,
            seed: Some(seed),
        })
        .unwrap()
    }

    #[test]
    fn seeded_snapshot_scenario() {
        let roster = seeded(2024, 500);
        let stats = roster.stats();

        assert_eq!(stats.total, 500);
        assert!((12..=15).contains(&stats.teams.total));
        assert!(roster.teams().iter().all(|team| !team.members.is_empty()));
        assert_eq!(stats.snapshot_id, roster.id());
    }

    #[test]
    fn same_seed_gives_same_snapshot() {
        let first = seeded(77, 150);
        let second = seeded(77, 150);
        assert_eq!(first.id(), second.id());
        assert_eq!(first.volunteers(), second.volunteers());
        assert_eq!(first.teams(), second.teams());
    }

    #[test]
    fn status_queries_are_disjoint_and_complete() {
        let roster = seeded(5, 500);
        let active = roster.filter_volunteers(&VolunteerFilter {
            status: Some("Active".to_string()),
            ..Default::default()
        });
        let deployed = roster.filter_volunteers(&VolunteerFilter {
            status: Some("Deployed".to_string()),
            ..Default::default()
        });
        assert_eq!(active.len() + deployed.len(), roster.stats().total);
    }

    #[test]
    fn every_volunteer_has_exactly_one_team() {
        let roster = seeded(31, 300);
        for volunteer in roster.volunteers() {
            let homes = roster
                .teams()
                .iter()
                .filter(|team| team.members.iter().any(|m| m.id == volunteer.id))
                .count();
            assert_eq!(homes, 1, "{}", volunteer.id);
            assert!(roster.team_of(&volunteer.id).is_some());
        }
    }

    #[test]
    fn team_detail_groups_by_specialization() {
        let roster = seeded(8, 500);
        let team_id = roster.teams()[0].id.clone();
        let detail = roster.team_detail(&team_id.to_lowercase()).unwrap();

        let grouped: usize = detail.groups.iter().map(|g| g.members.len()).sum();
        assert_eq!(grouped, detail.team.size());
        assert_eq!(detail.groups[0].members[0].id, detail.team.leader_id);
        for group in &detail.groups {
            assert!(group
                .members
                .iter()
                .all(|m| m.specialization == group.specialization));
            assert!(group.members.iter().all(|m| !m.assigned_tasks.is_empty()));
        }

        assert!(matches!(
            roster.team_detail("TEAM99"),
            Err(RosterError::UnknownTeam(_))
        ));
    }

    #[test]
    fn volunteer_detail_includes_team() {
        let roster = seeded(19, 200);
        let detail = roster.volunteer_detail("vol0123").unwrap();
        assert_eq!(detail.volunteer.id, "VOL0123");

        let team = detail.team.unwrap();
        assert!(team.members.iter().any(|m| m.id == "VOL0123"));

        assert!(matches!(
            roster.volunteer_detail("VOL9999"),
            Err(RosterError::UnknownVolunteer(_))
        ));
    }

    #[test]
    fn lookups_resolve_ids() {
        let roster = seeded(1, 50);
        assert_eq!(roster.volunteer("vol0007").map(|v| v.id.as_str()), Some("VOL0007"));
        assert!(roster.volunteer("VOL9999").is_none());
        assert!(roster.team("TEAM01").is_some());
    }

    #[test]
    fn rejects_empty_pool() {
        let config = RosterConfig {
            volunteer_count: 0,
            seed: Some(1),
        };
        assert!(Roster::from_config(&config).is_err());
    }
}
