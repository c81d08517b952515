//! Account roles.
//!
//! The role is resolved once by the auth store and decides the wizard's step
//! sequence, its schemas and its endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_JOBSEEKER: &str = "jobseeker";
pub const ROLE_STUDENT: &str = "student";
pub const ROLE_EMPLOYER: &str = "employer";
pub const ROLE_ACADEME: &str = "academe";
pub const ROLE_ADMIN: &str = "admin";

/// Every account role known to the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Jobseeker,
    Student,
    Employer,
    Academe,
    Admin,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Jobseeker,
        Role::Student,
        Role::Employer,
        Role::Academe,
        Role::Admin,
    ];

    /// Parse the role string handed over by the auth store.
    ///
    /// Matching ignores case and surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_ascii_lowercase().as_str() {
            ROLE_JOBSEEKER => Ok(Self::Jobseeker),
            ROLE_STUDENT => Ok(Self::Student),
            ROLE_EMPLOYER => Ok(Self::Employer),
            ROLE_ACADEME => Ok(Self::Academe),
            ROLE_ADMIN => Ok(Self::Admin),
            _ => Err(CoreError::UnknownRole(s.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jobseeker => ROLE_JOBSEEKER,
            Self::Student => ROLE_STUDENT,
            Self::Employer => ROLE_EMPLOYER,
            Self::Academe => ROLE_ACADEME,
            Self::Admin => ROLE_ADMIN,
        }
    }

    /// Jobseekers and students share one profile shape and one set of
    /// backend endpoints.
    pub fn is_jobseeker_or_student(self) -> bool {
        matches!(self, Self::Jobseeker | Self::Student)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
