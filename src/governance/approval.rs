use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GovernanceError;

pub const UNRESTRICTED: u8 = 100;
pub const SENIOR_REVIEW_THRESHOLD: u8 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    EditorInChief,
    SeniorEditor,
    JuniorEditor,
    Viewer,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::EditorInChief,
        Role::SeniorEditor,
        Role::JuniorEditor,
        Role::Viewer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::EditorInChief => "editor_in_chief",
            Role::SeniorEditor => "senior_editor",
            Role::JuniorEditor => "junior_editor",
            Role::Viewer => "viewer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::EditorInChief => "Editor-in-Chief",
            Role::SeniorEditor => "Senior Editor",
            Role::JuniorEditor => "Junior Editor",
            Role::Viewer => "Viewer",
        }
    }

    /// Highest overall score this role may approve.
    pub fn approval_limit(self) -> u8 {
        match self {
            Role::JuniorEditor => 20,
            Role::SeniorEditor => SENIOR_REVIEW_THRESHOLD,
            Role::EditorInChief | Role::Admin => UNRESTRICTED,
            Role::Viewer => 0,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = GovernanceError;

    /// Accepts the snake_case identifier or the display label, any case.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized: String = name
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| GovernanceError::InvalidRole(name.to_string()))
    }
}

/// Limit for a role name coming from an external system; unknown names get 0.
pub fn approval_limit_for(role_name: &str) -> u8 {
    role_name
        .parse::<Role>()
        .map(Role::approval_limit)
        .unwrap_or(0)
}

/// What a caller may approve once all of their roles are taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authority {
    pub limit: u8,
    pub superuser: bool,
}

impl Authority {
    pub fn permits(&self, overall_score: u8) -> bool {
        self.superuser || self.limit >= overall_score
    }

    pub fn can_decide(&self) -> bool {
        self.superuser || self.limit > 0
    }

    /// Holds a 100 limit or is a superuser.
    pub fn is_unrestricted(&self) -> bool {
        self.superuser || self.limit >= UNRESTRICTED
    }
}

/// Single capability resolution over every role a user holds.
pub fn effective_authority(roles: &[Role], is_superuser: bool) -> Authority {
    Authority {
        limit: roles
            .iter()
            .map(|role| role.approval_limit())
            .max()
            .unwrap_or(0),
        superuser: is_superuser,
    }
}

pub fn can_approve(role: Role, overall_score: u8, is_superuser: bool) -> bool {
    effective_authority(&[role], is_superuser).permits(overall_score)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalLevel {
    JuniorEditor,
    SeniorEditor,
    EditorInChief,
    EditorInChiefWithLegalReview,
}

impl ApprovalLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalLevel::JuniorEditor => "Junior Editor",
            ApprovalLevel::SeniorEditor => "Senior Editor",
            ApprovalLevel::EditorInChief => "Editor in Chief",
            ApprovalLevel::EditorInChiefWithLegalReview => "Editor in Chief + Legal Review",
        }
    }
}

impl fmt::Display for ApprovalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display lookup: the least senior sign-off an overall score needs.
pub fn required_approval_level(overall_score: u8) -> ApprovalLevel {
    match overall_score {
        0..=20 => ApprovalLevel::JuniorEditor,
        21..=40 => ApprovalLevel::SeniorEditor,
        41..=60 => ApprovalLevel::EditorInChief,
        _ => ApprovalLevel::EditorInChiefWithLegalReview,
    }
}

pub fn requires_senior_review(overall_score: u8) -> bool {
    overall_score > SENIOR_REVIEW_THRESHOLD
}

/// An authenticated user acting on an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approver {
    pub id: Uuid,
    pub roles: Vec<Role>,
    #[serde(default)]
    pub is_superuser: bool,
}

impl Approver {
    pub fn new(id: Uuid, role: Role) -> Self {
        Approver {
            id,
            roles: vec![role],
            is_superuser: false,
        }
    }

    pub fn superuser(id: Uuid) -> Self {
        Approver {
            id,
            roles: Vec::new(),
            is_superuser: true,
        }
    }

    /// Unknown role names are dropped, which can only lower the authority.
    pub fn from_role_names<S: AsRef<str>>(id: Uuid, names: &[S], is_superuser: bool) -> Self {
        let roles = names
            .iter()
            .filter_map(|name| match name.as_ref().parse::<Role>() {
                Ok(role) => Some(role),
                Err(_) => {
                    log::debug!("ignoring unknown role {:?} for {}", name.as_ref(), id);
                    None
                }
            })
            .collect();
        Approver {
            id,
            roles,
            is_superuser,
        }
    }

    pub fn authority(&self) -> Authority {
        effective_authority(&self.roles, self.is_superuser)
    }
}
