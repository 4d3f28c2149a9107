//! Crew member entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use skybook_core::types::{DbId, Timestamp};

/// A row from the `crew_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CrewMember {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub created_at: Timestamp,
}

impl CrewMember {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn into_response(self) -> CrewMemberResponse {
        let full_name = self.full_name();
        CrewMemberResponse {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            full_name,
        }
    }
}

/// Crew member representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct CrewMemberResponse {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
}

/// DTO for creating a new crew member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCrewMember {
    pub first_name: String,
    pub last_name: String,
}

/// DTO for updating an existing crew member. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCrewMember {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
