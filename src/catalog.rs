//! Fixed domains the generator draws from.

pub const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Government & Policy Roles",
        &[
            "Disaster Management Officer",
            "Emergency Management Specialist",
            "Civil Defense Officer",
            "Urban Planner",
            "NDRF Officer",
            "RAF Officer",
        ],
    ),
    (
        "Medical & Health Response Roles",
        &[
            "Doctor (Emergency & Trauma)",
            "Paramedic",
            "Emergency Medical Technician",
            "Public Health Coordinator",
            "Field Nurse",
            "Mental Health Counselor",
        ],
    ),
    (
        "First Responders & Search & Rescue Roles",
        &[
            "Firefighter",
            "Police Officer",
            "Search and Rescue Specialist",
            "K9 Handler",
            "Swift Water Rescue Technician",
            "Urban Search and Rescue Technician",
        ],
    ),
    (
        "Relief & Humanitarian Aid Roles",
        &[
            "Humanitarian Aid Worker",
            "Relief Coordinator",
            "Shelter Manager",
            "Food Security Specialist",
            "Community Coordinator",
            "Crisis Communication Specialist",
        ],
    ),
    (
        "Engineering & Technical Roles",
        &[
            "Structural Engineer",
            "Seismologist",
            "Fire Protection Engineer",
            "GIS Specialist",
            "Environmental Scientist",
            "Remote Sensing Specialist",
        ],
    ),
];

pub const CITIES: &[&str] = &[
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Chennai",
    "Kolkata",
    "Hyderabad",
    "Pune",
    "Ahmedabad",
    "Jaipur",
    "Lucknow",
];

pub const AVAILABILITIES: &[&str] = &["Full-time", "Part-time", "Weekends", "On-call"];

pub const FIRST_NAMES: &[&str] = &[
    "Aarav", "Arjun", "Advait", "Bharat", "Chirag", "Dev", "Esha", "Gaurav", "Hari", "Ishaan",
    "Jaya", "Kavya", "Lakshmi", "Manav", "Neha", "Ojas", "Priya", "Rahul", "Sarika", "Tanvi",
];

pub const LAST_NAMES: &[&str] = &[
    "Kumar", "Singh", "Patel", "Shah", "Sharma", "Verma", "Gupta", "Malhotra", "Reddy", "Nair",
    "Pillai", "Desai", "Mehta", "Joshi", "Kapoor",
];

/// Used for any specialization without its own entry in [`SPECIALIZATION_TASKS`].
pub const GENERIC_TASKS: &[&str] = &["Support team operations", "Assist in general duties"];

pub const SPECIALIZATION_TASKS: &[(&str, &[&str])] = &[
    (
        "Disaster Management Officer",
        &[
            "Coordinate overall disaster response",
            "Develop emergency response plans",
            "Lead team deployment strategies",
            "Conduct risk assessments",
        ],
    ),
    (
        "Emergency Management Specialist",
        &[
            "Monitor emergency situations",
            "Implement response protocols",
            "Coordinate with local authorities",
            "Manage resource allocation",
        ],
    ),
    (
        "Doctor (Emergency & Trauma)",
        &[
            "Provide emergency medical care",
            "Triage disaster victims",
            "Supervise medical team",
            "Coordinate with hospitals",
        ],
    ),
    (
        "Paramedic",
        &[
            "Provide first aid and life support",
            "Transport critical patients",
            "Assist in field medical procedures",
            "Document patient conditions",
        ],
    ),
    (
        "Firefighter",
        &[
            "Execute search and rescue operations",
            "Control and extinguish fires",
            "Perform emergency evacuations",
            "Handle hazardous materials",
        ],
    ),
    (
        "Search and Rescue Specialist",
        &[
            "Conduct search operations",
            "Perform technical rescues",
            "Operate specialized equipment",
            "Navigate difficult terrain",
        ],
    ),
];

pub fn roles_for(category: &str) -> Option<&'static [&'static str]> {
    CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, roles)| *roles)
}

/// Task menu for a specialization, falling back to [`GENERIC_TASKS`].
pub fn tasks_for(specialization: &str) -> &'static [&'static str] {
    SPECIALIZATION_TASKS
        .iter()
        .find(|(name, _)| *name == specialization)
        .map(|(_, tasks)| *tasks)
        .unwrap_or(GENERIC_TASKS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_domain_is_non_empty() {
        assert_eq!(CATEGORIES.len(), 5);
        assert!(CATEGORIES.iter().all(|(_, roles)| !roles.is_empty()));
        assert!(!CITIES.is_empty());
        assert!(!AVAILABILITIES.is_empty());
        assert!(!FIRST_NAMES.is_empty());
        assert!(!LAST_NAMES.is_empty());
    }

    #[test]
    fn task_lookup_falls_back_to_generic_pair() {
        assert_eq!(tasks_for("Paramedic").len(), 4);
        assert_eq!(tasks_for("Seismologist"), GENERIC_TASKS);
        assert_eq!(tasks_for("Astronaut"), GENERIC_TASKS);
    }

    #[test]
    fn roles_resolve_by_category_name() {
        let roles = roles_for("Engineering & Technical Roles").unwrap_or_default();
        assert!(roles.contains(&"GIS Specialist"));
        assert!(roles_for("Unknown Roles").is_none());
    }

    #[test]
    fn task_lists_only_name_catalog_roles() {
        for (specialization, _) in SPECIALIZATION_TASKS {
            assert!(CATEGORIES
                .iter()
                .any(|(_, roles)| roles.contains(specialization)));
        }
    }
}
