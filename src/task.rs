use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A single to-do record: what to do, who does it, and whether it is done.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub tasker: String,
    pub completed: bool,
    pub created_at: DateTime<Local>,
}

impl Task {
    pub fn new(id: u64, description: String, tasker: String) -> Self {
        Self {
            id,
            description,
            tasker,
            completed: false,
            created_at: Local::now(),
        }
    }
}
