use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of entity a weekly schedule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerKind {
    Company,
    Queue,
}

impl OwnerKind {
    /// Value stored in the `owner_kind` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerKind::Company => "company",
            OwnerKind::Queue => "queue",
        }
    }

    /// Resolves the plural collection name used in API paths.
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        match segment {
            "companies" => Some(OwnerKind::Company),
            "queues" => Some(OwnerKind::Queue),
            _ => None,
        }
    }
}

/// The tenant or queue a [`WeeklySchedule`](crate::models::schedule::WeeklySchedule) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Owner {
    pub kind: OwnerKind,
    pub id: Uuid,
}

impl Owner {
    pub fn company(id: Uuid) -> Self {
        Self {
            kind: OwnerKind::Company,
            id,
        }
    }

    pub fn queue(id: Uuid) -> Self {
        Self {
            kind: OwnerKind::Queue,
            id,
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.id)
    }
}
