use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Active,
    Deployed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Deployed => "Deployed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub specialization: String,
    pub location: String,
    pub status: Status,
    pub availability: String,
    pub joined_date: NaiveDate,
    pub deployments: u32,
    pub rating: f64,
    pub assigned_tasks: Vec<String>,
    pub current_task: String,
    pub task_status: TaskStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub leader: String,
    pub leader_id: String,
    /// Leader first, then assigned members in placement order.
    pub members: Vec<Volunteer>,
    /// Counts non-leader members only.
    pub specializations: BTreeMap<String, usize>,
    pub location: String,
    pub status: Status,
}

impl Team {
    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn leader_member(&self) -> Option<&Volunteer> {
        self.members.iter().find(|member| member.id == self.leader_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterStats {
    pub snapshot_id: uuid::Uuid,
    pub total: usize,
    pub active: usize,
    pub deployed: usize,
    pub by_category: BTreeMap<String, usize>,
    pub by_location: BTreeMap<String, usize>,
    pub avg_rating: f64,
    pub total_deployments: u64,
    pub teams: TeamStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamStats {
    pub total: usize,
    pub active: usize,
    pub deployed: usize,
    pub average_size: usize,
    pub distribution: Vec<TeamDistribution>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamDistribution {
    pub id: String,
    pub name: String,
    pub size: usize,
    pub specializations: BTreeMap<String, usize>,
    pub categories: BTreeMap<String, usize>,
}

/// Team members grouped by specialization, for the team detail view.
#[derive(Debug, Clone)]
pub struct SpecializationGroup<'a> {
    pub specialization: &'a str,
    pub members: Vec<&'a Volunteer>,
}

#[derive(Debug, Clone)]
pub struct VolunteerDetail<'a> {
    pub volunteer: &'a Volunteer,
    pub team: Option<&'a Team>,
}

#[derive(Debug, Clone)]
pub struct TeamDetail<'a> {
    pub team: &'a Team,
    pub groups: Vec<SpecializationGroup<'a>>,
}
