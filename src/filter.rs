use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::models::{Team, Volunteer};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolunteerFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub availability: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamFilter {
    pub search: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
}

/// An unset or empty option places no constraint.
fn active(option: &Option<String>) -> Option<&str> {
    option.as_deref().filter(|value| !value.is_empty())
}

fn matches_exact(option: &Option<String>, value: &str) -> bool {
    active(option).map_or(true, |wanted| wanted == value)
}

fn matches_search(option: &Option<String>, fields: &[&str]) -> bool {
    match active(option) {
        None => true,
        Some(needle) => {
            let needle = needle.to_lowercase();
            fields
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        }
    }
}

impl VolunteerFilter {
    pub fn matches(&self, volunteer: &Volunteer) -> bool {
        matches_search(
            &self.search,
            &[
                volunteer.name.as_str(),
                volunteer.email.as_str(),
                volunteer.id.as_str(),
            ],
        ) && matches_exact(&self.category, &volunteer.category)
            && matches_exact(&self.location, &volunteer.location)
            && matches_exact(&self.status, volunteer.status.as_str())
            && matches_exact(&self.availability, &volunteer.availability)
    }
}

impl TeamFilter {
    pub fn matches(&self, team: &Team) -> bool {
        matches_search(
            &self.search,
            &[team.name.as_str(), team.leader.as_str(), team.id.as_str()],
        ) && matches_exact(&self.location, &team.location)
            && matches_exact(&self.status, team.status.as_str())
    }
}

/// Matching volunteers in generation order.
pub fn filter_volunteers<'a>(
    volunteers: &'a [Volunteer],
    filter: &VolunteerFilter,
) -> Vec<&'a Volunteer> {
    volunteers.iter().filter(|v| filter.matches(v)).collect()
}

pub fn filter_teams<'a>(teams: &'a [Team], filter: &TeamFilter) -> Vec<&'a Team> {
    teams.iter().filter(|t| filter.matches(t)).collect()
}

#[derive(Debug, Clone)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// One-based pagination. Out of range pages clamp to the nearest valid page.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Result<Page<'_, T>, RosterError> {
    if per_page == 0 {
        return Err(RosterError::InvalidConfig(
            "per_page must be at least 1".to_string(),
        ));
    }

    let total_pages = items.len().div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let start = ((page - 1) * per_page).min(items.len());
    let end = (start + per_page).min(items.len());

    Ok(Page {
        items: &items[start..end],
        page,
        total_pages,
        total_items: items.len(),
    })
}
