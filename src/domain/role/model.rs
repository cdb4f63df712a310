//! Role domain entity

use std::fmt;

/// Base roles known to the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleName {
    Admin,
    Teacher,
    Student,
}

impl RoleName {
    pub const ALL: [RoleName; 3] = [RoleName::Admin, RoleName::Teacher, RoleName::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Teacher => "TEACHER",
            Self::Student => "STUDENT",
        }
    }

    /// Case-insensitive lookup
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "ADMIN" => Some(Self::Admin),
            "TEACHER" => Some(Self::Teacher),
            "STUDENT" => Some(Self::Student),
            _ => None,
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role definition referenced by users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: String,
    pub name: RoleName,
}

impl Role {
    pub fn new(id: impl Into<String>, name: RoleName) -> Self {
        Self {
            id: id.into(),
            name,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.name == RoleName::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(RoleName::parse("admin"), Some(RoleName::Admin));
        assert_eq!(RoleName::parse(" Teacher "), Some(RoleName::Teacher));
        assert_eq!(RoleName::parse("STUDENT"), Some(RoleName::Student));
        assert_eq!(RoleName::parse("janitor"), None);
    }

    #[test]
    fn as_str_is_upper_case() {
        for name in RoleName::ALL {
            assert_eq!(name.as_str(), name.as_str().to_uppercase());
            assert_eq!(RoleName::parse(name.as_str()), Some(name));
        }
    }

    #[test]
    fn only_admin_role_is_admin() {
        assert!(Role::new("r1", RoleName::Admin).is_admin());
        assert!(!Role::new("r2", RoleName::Teacher).is_admin());
    }
}
