//! Access roles and the role → dashboard mapping
//!
//! Every authenticated session carries exactly one role, issued by the
//! backend inside the token payload. The dashboard mapping here drives both
//! the post-login redirect and the misrouting correction in the route guard.

use serde::{Deserialize, Serialize};

/// Access tier for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Staff,
    Finance,
    Patient,
}

impl Role {
    /// Map a raw role claim to a `Role`.
    ///
    /// Unrecognized values fall back to `Patient` rather than failing, so a
    /// token with a role the client does not know still lands somewhere
    /// navigable. The backend remains the authority on what the role can
    /// actually do.
    pub fn from_claim(value: &str) -> Self {
        match value {
            "ADMIN" => Role::Admin,
            "STAFF" => Role::Staff,
            "FINANCE" => Role::Finance,
            _ => Role::Patient,
        }
    }

    /// Home dashboard path for this role
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Admin => "/dashboard/admin",
            Role::Staff => "/dashboard/staff",
            Role::Finance => "/dashboard/financial",
            Role::Patient => "/dashboard/patient",
        }
    }

    /// Wire representation of the role
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Staff => "STAFF",
            Role::Finance => "FINANCE",
            Role::Patient => "PATIENT",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ADMIN", Role::Admin, "/dashboard/admin")]
    #[case("STAFF", Role::Staff, "/dashboard/staff")]
    #[case("FINANCE", Role::Finance, "/dashboard/financial")]
    #[case("PATIENT", Role::Patient, "/dashboard/patient")]
    fn known_roles_map_to_their_dashboards(
        #[case] claim: &str,
        #[case] expected: Role,
        #[case] path: &str,
    ) {
        let role = Role::from_claim(claim);
        assert_eq!(role, expected);
        assert_eq!(role.dashboard_path(), path);
    }

    #[rstest]
    #[case("SUPERUSER")]
    #[case("admin")]
    #[case("")]
    #[case("NURSE")]
    fn unrecognized_roles_fall_back_to_patient(#[case] claim: &str) {
        assert_eq!(Role::from_claim(claim), Role::Patient);
        assert_eq!(Role::from_claim(claim).dashboard_path(), "/dashboard/patient");
    }

    #[test]
    fn serde_uses_wire_casing() {
        let json = serde_json::to_string(&Role::Finance).unwrap();
        assert_eq!(json, "\"FINANCE\"");

        let role: Role = serde_json::from_str("\"STAFF\"").unwrap();
        assert_eq!(role, Role::Staff);
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(Role::Admin.to_string(), "ADMIN");
    }
}
