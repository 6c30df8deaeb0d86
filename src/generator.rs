use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::catalog::{self, AVAILABILITIES, CATEGORIES, CITIES, FIRST_NAMES, LAST_NAMES};
use crate::models::{Status, TaskStatus, Volunteer};

const ACTIVE_PROBABILITY: f64 = 0.7;
const IN_PROGRESS_PROBABILITY: f64 = 0.7;
const MAX_DEPLOYMENTS: u32 = 19;

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

/// Join dates fall in [2020-01-01, 2024-01-01).
fn join_window() -> (NaiveDate, i64) {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default();
    let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    (start, (end - start).num_days().max(1))
}

pub fn volunteer_id(sequence: usize) -> String {
    format!("VOL{sequence:04}")
}

pub fn generate_volunteer<R: Rng + ?Sized>(rng: &mut R, sequence: usize) -> Volunteer {
    let (category, roles) = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
    let specialization = pick(rng, roles);

    let first_name = pick(rng, FIRST_NAMES);
    let last_name = pick(rng, LAST_NAMES);
    let email = format!(
        "{}.{}{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        rng.gen_range(0..999)
    );
    let phone = format!("+91{}", rng.gen_range(1_000_000_000u64..=9_999_999_999));

    let location = pick(rng, CITIES);
    let status = if rng.gen_bool(ACTIVE_PROBABILITY) {
        Status::Active
    } else {
        Status::Deployed
    };
    let availability = pick(rng, AVAILABILITIES);

    let (window_start, window_days) = join_window();
    let joined_date = window_start + Duration::days(rng.gen_range(0..window_days));

    let deployments = rng.gen_range(0..=MAX_DEPLOYMENTS);
    let rating = f64::from(rng.gen_range(30u32..=50)) / 10.0;

    let tasks = catalog::tasks_for(specialization);
    let current_task = pick(rng, tasks);
    let task_status = if rng.gen_bool(IN_PROGRESS_PROBABILITY) {
        TaskStatus::InProgress
    } else {
        TaskStatus::Completed
    };

    Volunteer {
        id: volunteer_id(sequence),
        name: format!("{first_name} {last_name}"),
        email,
        phone,
        category: category.to_string(),
        specialization: specialization.to_string(),
        location: location.to_string(),
        status,
        availability: availability.to_string(),
        joined_date,
        deployments,
        rating,
        assigned_tasks: tasks.iter().map(|task| task.to_string()).collect(),
        current_task: current_task.to_string(),
        task_status,
    }
}

/// Generates `count` volunteers with sequence numbers starting at 1.
pub fn generate_volunteers<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Volunteer> {
    (1..=count)
        .map(|sequence| generate_volunteer(rng, sequence))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample(count: usize) -> Vec<Volunteer> {
        let mut rng = StdRng::seed_from_u64(7);
        generate_volunteers(&mut rng, count)
    }

    #[test]
    fn specialization_belongs_to_category() {
        for volunteer in sample(500) {
            let roles = catalog::roles_for(&volunteer.category).unwrap_or_default();
            assert!(
                roles.contains(&volunteer.specialization.as_str()),
                "{} is not a {} role",
                volunteer.specialization,
                volunteer.category
            );
        }
    }

    #[test]
    fn ids_are_sequential_and_padded() {
        let volunteers = sample(12);
        assert_eq!(volunteers[0].id, "VOL0001");
        assert_eq!(volunteers[11].id, "VOL0012");
    }

    #[test]
    fn active_fraction_is_close_to_seventy_percent() {
        let volunteers = sample(500);
        let active = volunteers
            .iter()
            .filter(|v| v.status == Status::Active)
            .count();
        let fraction = active as f64 / volunteers.len() as f64;
        assert!((0.6..=0.8).contains(&fraction), "active fraction {fraction}");
    }

    #[test]
    fn numeric_fields_stay_in_bounds() {
        let (start, days) = join_window();
        let end = start + Duration::days(days);
        for volunteer in sample(500) {
            assert!(volunteer.deployments <= MAX_DEPLOYMENTS);
            assert!((3.0..=5.0).contains(&volunteer.rating));
            let tenths = volunteer.rating * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-9);
            assert!(volunteer.joined_date >= start && volunteer.joined_date < end);
            assert_eq!(volunteer.phone.len(), 13);
        }
    }

    #[test]
    fn current_task_comes_from_assigned_tasks() {
        for volunteer in sample(200) {
            assert!(volunteer.assigned_tasks.contains(&volunteer.current_task));
            let expected: Vec<String> = catalog::tasks_for(&volunteer.specialization)
                .iter()
                .map(|task| task.to_string())
                .collect();
            assert_eq!(volunteer.assigned_tasks, expected);
        }
    }

    #[test]
    fn email_is_derived_from_name() {
        for volunteer in sample(50) {
            let local = volunteer.name.to_lowercase().replace(' ', ".");
            assert!(volunteer.email.starts_with(&local));
            assert!(volunteer.email.ends_with("@example.com"));
        }
    }

    #[test]
    fn same_seed_reproduces_the_pool() {
        let mut first = StdRng::seed_from_u64(99);
        let mut second = StdRng::seed_from_u64(99);
        assert_eq!(
            generate_volunteers(&mut first, 40),
            generate_volunteers(&mut second, 40)
        );
    }
}
