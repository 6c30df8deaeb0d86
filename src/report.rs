use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::{TaskStatus, Volunteer};
use crate::roster::Roster;

fn top_rated(volunteers: &[Volunteer], limit: usize) -> Vec<&Volunteer> {
    let mut ranked: Vec<&Volunteer> = volunteers.iter().collect();
    ranked.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(b.deployments.cmp(&a.deployments))
    });
    ranked.truncate(limit);
    ranked
}

pub fn build_report(roster: &Roster, generated_on: NaiveDate) -> String {
    let stats = roster.stats();
    let mut output = String::new();

    let _ = writeln!(output, "# Relief Roster Report");
    let _ = writeln!(
        output,
        "Snapshot {} generated on {}",
        stats.snapshot_id, generated_on
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Volunteers");
    let _ = writeln!(
        output,
        "- {} volunteers ({} active, {} deployed)",
        stats.total, stats.active, stats.deployed
    );
    let _ = writeln!(output, "- Average rating {:.2}", stats.avg_rating);
    let _ = writeln!(output, "- {} deployments logged", stats.total_deployments);

    let in_progress = roster
        .volunteers()
        .iter()
        .filter(|v| v.task_status == TaskStatus::InProgress)
        .count();
    let _ = writeln!(
        output,
        "- {} tasks in progress, {} completed",
        in_progress,
        stats.total - in_progress
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "## By Category");
    let mut categories: Vec<(&String, &usize)> = stats.by_category.iter().collect();
    categories.sort_by(|a, b| b.1.cmp(a.1));
    for (category, count) in categories {
        let _ = writeln!(output, "- {category}: {count}");
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## By Location");
    let mut locations: Vec<(&String, &usize)> = stats.by_location.iter().collect();
    locations.sort_by(|a, b| b.1.cmp(a.1));
    for (location, count) in locations {
        let _ = writeln!(output, "- {location}: {count}");
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Teams");
    let _ = writeln!(
        output,
        "{} teams ({} active, {} deployed), average size {}",
        stats.teams.total, stats.teams.active, stats.teams.deployed, stats.teams.average_size
    );
    let _ = writeln!(output);

    if roster.teams().is_empty() {
        let _ = writeln!(output, "No teams formed.");
    } else {
        let _ = writeln!(output, "| Team | Name | Leader | Location | Status | Size |");
        let _ = writeln!(output, "| --- | --- | --- | --- | --- | --- |");
        for team in roster.teams() {
            let _ = writeln!(
                output,
                "| {} | {} | {} | {} | {} | {} |",
                team.id,
                team.name,
                team.leader,
                team.location,
                team.status,
                team.size()
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Top Rated Volunteers");

    let top = top_rated(roster.volunteers(), 10);
    if top.is_empty() {
        let _ = writeln!(output, "No volunteers in this snapshot.");
    } else {
        for volunteer in top {
            let _ = writeln!(
                output,
                "- {} ({}, {}) rating {:.1} across {} deployments",
                volunteer.name,
                volunteer.id,
                volunteer.specialization,
                volunteer.rating,
                volunteer.deployments
            );
        }
    }

    output
}
