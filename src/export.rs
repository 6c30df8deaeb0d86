use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::error::RosterError;
use crate::roster::Roster;

#[derive(Serialize)]
struct VolunteerRow<'a> {
    id: &'a str,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    category: &'a str,
    specialization: &'a str,
    location: &'a str,
    status: &'a str,
    availability: &'a str,
    joined_date: NaiveDate,
    deployments: u32,
    rating: f64,
    assigned_tasks: String,
    current_task: &'a str,
    task_status: &'a str,
    team_id: &'a str,
}

#[derive(Serialize)]
struct TeamRow<'a> {
    id: &'a str,
    name: &'a str,
    leader: &'a str,
    leader_id: &'a str,
    location: &'a str,
    status: &'a str,
    size: usize,
    specializations: String,
}

pub fn write_volunteers<W: Write>(roster: &Roster, writer: W) -> Result<usize, RosterError> {
    let placements: HashMap<&str, &str> = roster
        .teams()
        .iter()
        .flat_map(|team| {
            team.members
                .iter()
                .map(move |member| (member.id.as_str(), team.id.as_str()))
        })
        .collect();

    let mut csv = csv::Writer::from_writer(writer);
    let mut written = 0usize;

    for volunteer in roster.volunteers() {
        csv.serialize(VolunteerRow {
            id: &volunteer.id,
            name: &volunteer.name,
            email: &volunteer.email,
            phone: &volunteer.phone,
            category: &volunteer.category,
            specialization: &volunteer.specialization,
            location: &volunteer.location,
            status: volunteer.status.as_str(),
            availability: &volunteer.availability,
            joined_date: volunteer.joined_date,
            deployments: volunteer.deployments,
            rating: volunteer.rating,
            assigned_tasks: volunteer.assigned_tasks.join("; "),
            current_task: &volunteer.current_task,
            task_status: volunteer.task_status.as_str(),
            team_id: placements
                .get(volunteer.id.as_str())
                .copied()
                .unwrap_or_default(),
        })?;
        written += 1;
    }

    csv.flush()?;
    Ok(written)
}

pub fn write_teams<W: Write>(roster: &Roster, writer: W) -> Result<usize, RosterError> {
    let mut csv = csv::Writer::from_writer(writer);
    let mut written = 0usize;

    for team in roster.teams() {
        let specializations = team
            .specializations
            .iter()
            .map(|(name, count)| format!("{name}={count}"))
            .collect::<Vec<_>>()
            .join("; ");

        csv.serialize(TeamRow {
            id: &team.id,
            name: &team.name,
            leader: &team.leader,
            leader_id: &team.leader_id,
            location: &team.location,
            status: team.status.as_str(),
            size: team.size(),
            specializations,
        })?;
        written += 1;
    }

    csv.flush()?;
    Ok(written)
}

/// Writes both CSV files and returns the row counts.
pub fn export_csv(
    roster: &Roster,
    volunteers_path: &Path,
    teams_path: &Path,
) -> Result<(usize, usize), RosterError> {
    let volunteers = write_volunteers(roster, std::fs::File::create(volunteers_path)?)?;
    let teams = write_teams(roster, std::fs::File::create(teams_path)?)?;
    info!(
        volunteers,
        teams,
        volunteers_path = %volunteers_path.display(),
        teams_path = %teams_path.display(),
        "csv export written"
    );
    Ok((volunteers, teams))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RosterConfig;

    fn roster() -> Roster {
        Roster::from_config(&RosterConfig {
            volunteer_count: 60,
            seed: Some(3),
        })
        .unwrap()
    }

    #[test]
    fn volunteer_export_has_header_and_one_row_each() {
        let roster = roster();
        let mut buffer = Vec::new();
        let written = write_volunteers(&roster, &mut buffer).unwrap();
        assert_eq!(written, 60);

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "id");
        assert_eq!(&headers[15], "team_id");

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 60);
        assert!(rows.iter().all(|row| row[15].starts_with("TEAM")));
    }

    #[test]
    fn export_writes_both_files() {
        let roster = roster();
        let dir = tempfile::tempdir().unwrap();
        let volunteers_path = dir.path().join("volunteers.csv");
        let teams_path = dir.path().join("teams.csv");

        let (volunteers, teams) = export_csv(&roster, &volunteers_path, &teams_path).unwrap();
        assert_eq!(volunteers, 60);
        assert_eq!(teams, roster.teams().len());

        let contents = std::fs::read_to_string(&volunteers_path).unwrap();
        assert_eq!(contents.lines().count(), 61);
        let contents = std::fs::read_to_string(&teams_path).unwrap();
        assert_eq!(contents.lines().count(), roster.teams().len() + 1);
    }
}
