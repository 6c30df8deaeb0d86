use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use relief_roster::filter::paginate;
use relief_roster::{export, report, Roster, RosterConfig, TeamFilter, VolunteerFilter};

#[derive(Parser)]
#[command(name = "relief-roster")]
#[command(about = "Synthetic volunteer roster and team balancer for disaster relief", long_about = None)]
struct Cli {
    /// Seed for reproducible rosters (falls back to RELIEF_ROSTER_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Number of volunteers to generate (falls back to RELIEF_ROSTER_COUNT)
    #[arg(long, global = true)]
    count: Option<usize>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print aggregate statistics
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// List volunteers matching the given filters
    Volunteers {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        availability: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = 10)]
        per_page: usize,
    },
    /// List teams matching the given filters
    Teams {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one volunteer and the team they belong to
    Volunteer { id: String },
    /// Show one team's members grouped by specialization
    Team { id: String },
    /// Generate a markdown report
    Report {
        #[arg(long, default_value = "roster-report.md")]
        out: PathBuf,
    },
    /// Export volunteers and teams as CSV
    Export {
        #[arg(long, default_value = "volunteers.csv")]
        volunteers: PathBuf,
        #[arg(long, default_value = "teams.csv")]
        teams: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relief_roster=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config =
        RosterConfig::resolve(cli.count, cli.seed).context("failed to resolve configuration")?;
    let roster = Roster::from_config(&config).context("failed to generate roster")?;

    match cli.command {
        Commands::Stats { json } => {
            let stats = roster.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }

            println!(
                "{} volunteers ({} active, {} deployed), average rating {:.2}, {} deployments",
                stats.total, stats.active, stats.deployed, stats.avg_rating, stats.total_deployments
            );
            println!("By category:");
            for (category, count) in &stats.by_category {
                println!("- {category}: {count}");
            }
            println!("By location:");
            for (location, count) in &stats.by_location {
                println!("- {location}: {count}");
            }
            println!(
                "{} teams ({} active, {} deployed), average size {}",
                stats.teams.total,
                stats.teams.active,
                stats.teams.deployed,
                stats.teams.average_size
            );
            for entry in &stats.teams.distribution {
                println!("- {} {}: {} members", entry.id, entry.name, entry.size);
            }
        }
        Commands::Volunteers {
            search,
            category,
            location,
            status,
            availability,
            page,
            per_page,
        } => {
            let filter = VolunteerFilter {
                search,
                category,
                location,
                status,
                availability,
            };
            let matches = roster.filter_volunteers(&filter);
            if matches.is_empty() {
                println!("No volunteers match these filters.");
                return Ok(());
            }

            let page = paginate(&matches, page, per_page)?;
            println!(
                "Page {} of {} ({} volunteers):",
                page.page, page.total_pages, page.total_items
            );
            for volunteer in page.items {
                println!(
                    "- {} {} ({}, {}) {} | {} | rating {:.1}",
                    volunteer.id,
                    volunteer.name,
                    volunteer.specialization,
                    volunteer.location,
                    volunteer.status,
                    volunteer.availability,
                    volunteer.rating
                );
            }
        }
        Commands::Teams {
            search,
            location,
            status,
        } => {
            let filter = TeamFilter {
                search,
                location,
                status,
            };
            let matches = roster.filter_teams(&filter);
            if matches.is_empty() {
                println!("No teams match these filters.");
                return Ok(());
            }

            for team in matches {
                println!(
                    "- {} {} led by {} ({}, {}) {} members",
                    team.id,
                    team.name,
                    team.leader,
                    team.location,
                    team.status,
                    team.size()
                );
            }
        }
        Commands::Volunteer { id } => {
            let detail = roster.volunteer_detail(&id)?;
            let volunteer = detail.volunteer;
            println!("{} {}", volunteer.id, volunteer.name);
            println!("{} | {}", volunteer.email, volunteer.phone);
            println!("{} / {}", volunteer.category, volunteer.specialization);
            println!(
                "{} | {} | {} | joined {}",
                volunteer.location, volunteer.status, volunteer.availability, volunteer.joined_date
            );
            println!(
                "Rating {:.1} across {} deployments",
                volunteer.rating, volunteer.deployments
            );
            match detail.team {
                Some(team) => println!("Team {} {}", team.id, team.name),
                None => println!("Not assigned to a team"),
            }
            println!(
                "Current task [{}]: {}",
                volunteer.task_status, volunteer.current_task
            );
            println!("Assigned responsibilities:");
            for task in &volunteer.assigned_tasks {
                println!("  - {task}");
            }
        }
        Commands::Team { id } => {
            let detail = roster.team_detail(&id)?;
            let team = detail.team;
            println!("{} {}", team.id, team.name);
            println!(
                "Leader {} | {} | {} | {} members",
                team.leader,
                team.location,
                team.status,
                team.size()
            );
            for group in &detail.groups {
                println!();
                println!("{} ({})", group.specialization, group.members.len());
                for member in &group.members {
                    println!(
                        "- {} {} [{}] {}",
                        member.id, member.name, member.task_status, member.current_task
                    );
                    for task in &member.assigned_tasks {
                        println!("    * {task}");
                    }
                }
            }
        }
        Commands::Report { out } => {
            let report = report::build_report(&roster, Utc::now().date_naive());
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Export { volunteers, teams } => {
            let (volunteer_rows, team_rows) = export::export_csv(&roster, &volunteers, &teams)?;
            println!(
                "Exported {volunteer_rows} volunteers to {} and {team_rows} teams to {}.",
                volunteers.display(),
                teams.display()
            );
        }
    }

    Ok(())
}
