//! Closed enumerations shared across the CRM crates.
//!
//! Object types and statuses stay plain strings on the records themselves,
//! because the server may introduce new codes at any time. Only the concepts
//! the client has to reason about exhaustively are modelled here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Which enumeration a label dictionary translates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DictionaryKind {
    /// Building/site category (MKD, SCHOOL, ...).
    ObjectType,
    /// Sales pipeline state of an object (NEW, INTEREST, ...).
    ObjectStatus,
    /// Lifecycle of an engineer visit (PLANNED, DONE, ...).
    VisitStatus,
    /// Service a customer showed interest in.
    Interest,
    /// User role shown next to account names.
    Role,
}

impl DictionaryKind {
    /// All kinds in display order.
    pub const ALL: [DictionaryKind; 5] = [
        DictionaryKind::ObjectType,
        DictionaryKind::ObjectStatus,
        DictionaryKind::VisitStatus,
        DictionaryKind::Interest,
        DictionaryKind::Role,
    ];

    /// Returns the kebab-case name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            DictionaryKind::ObjectType => "object-type",
            DictionaryKind::ObjectStatus => "object-status",
            DictionaryKind::VisitStatus => "visit-status",
            DictionaryKind::Interest => "interest",
            DictionaryKind::Role => "role",
        }
    }
}

impl fmt::Display for DictionaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DictionaryKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");

        match normalized.as_str() {
            "object-type" | "type" => Ok(DictionaryKind::ObjectType),
            "object-status" | "status" => Ok(DictionaryKind::ObjectStatus),
            "visit-status" => Ok(DictionaryKind::VisitStatus),
            "interest" | "interests" => Ok(DictionaryKind::Interest),
            "role" | "roles" => Ok(DictionaryKind::Role),
            _ => Err(ModelError::UnknownDictionary(s.to_string())),
        }
    }
}

/// Account role as issued by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Supervisor,
    Engineer,
}

impl UserRole {
    /// Returns the wire code (`ADMIN`, `SUPERVISOR`, `ENGINEER`).
    pub fn as_code(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Supervisor => "SUPERVISOR",
            UserRole::Engineer => "ENGINEER",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for UserRole {
    type Err = ModelError;

    /// Parse a role code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ADMIN" => Ok(UserRole::Admin),
            "SUPERVISOR" => Ok(UserRole::Supervisor),
            "ENGINEER" => Ok(UserRole::Engineer),
            _ => Err(ModelError::UnknownRole(s.to_string())),
        }
    }
}
