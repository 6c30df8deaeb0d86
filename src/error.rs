use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown team: {0}")]
    UnknownTeam(String),

    #[error("unknown volunteer: {0}")]
    UnknownVolunteer(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
