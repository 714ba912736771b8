//! Audience selection for announcements and meeting attendee resolution.

use crate::models::{Domain, Role};

/// Decide whether a user belongs to the audience described by
/// `target_roles`/`target_domains`.
///
/// An empty list leaves that dimension unconstrained, so two empty lists
/// match everyone. When both lists are populated the user must satisfy
/// both (role AND domain) — "animators in sports" means exactly that,
/// not "animators, plus everyone in sports".
pub fn is_targeted(
    role: Role,
    domain: Option<Domain>,
    target_roles: &[Role],
    target_domains: &[Domain],
) -> bool {
    let role_matches = target_roles.is_empty() || target_roles.contains(&role);
    let domain_matches = target_domains.is_empty()
        || domain.is_some_and(|d| target_domains.contains(&d));

    role_matches && domain_matches
}

/// A meeting attendee group, parsed from its wire token.
///
/// Tokens come in three shapes: `all`, `<role>_all` (e.g. `jga_all`) and
/// `<role>_<domain>` (e.g. `jga_sports`). Parsing happens once here so the
/// rest of the code never matches on substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendeeGroup {
    AllUsers,
    RoleOnly(Role),
    RoleDomain(Role, Domain),
}

impl AttendeeGroup {
    pub fn parse(token: &str) -> Option<AttendeeGroup> {
        if token == "all" {
            return Some(AttendeeGroup::AllUsers);
        }

        // Role tokens contain no underscore, so the first segment is the
        // role and the remainder is either "all" or a domain token
        // (domains themselves may contain underscores).
        let (role_token, rest) = token.split_once('_')?;
        let role = Role::from_token(role_token)?;

        if rest == "all" {
            return Some(AttendeeGroup::RoleOnly(role));
        }

        Domain::from_token(rest).map(|domain| AttendeeGroup::RoleDomain(role, domain))
    }

    /// Parse a token list, dropping anything unrecognized.
    pub fn parse_all(tokens: &[String]) -> Vec<AttendeeGroup> {
        tokens
            .iter()
            .filter_map(|token| AttendeeGroup::parse(token))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_targets_match_everyone() {
        for role in Role::ALL {
            assert!(is_targeted(role, None, &[], &[]));
            assert!(is_targeted(role, Some(Domain::Club), &[], &[]));
        }
    }

    #[test]
    fn test_role_only_targeting() {
        let targets = [Role::Jga, Role::Animator];
        assert!(is_targeted(Role::Jga, Some(Domain::Literary), &targets, &[]));
        assert!(is_targeted(Role::Animator, None, &targets, &[]));
        assert!(!is_targeted(Role::Student, Some(Domain::Sports), &targets, &[]));
    }

    #[test]
    fn test_domain_only_targeting() {
        let targets = [Domain::Sports];
        assert!(is_targeted(Role::Student, Some(Domain::Sports), &[], &targets));
        assert!(!is_targeted(Role::Student, Some(Domain::Literary), &[], &targets));
        // A user with no domain never matches a domain-constrained audience.
        assert!(!is_targeted(Role::Ga, None, &[], &targets));
    }

    #[test]
    fn test_both_dimensions_are_conjunctive() {
        let roles = [Role::Jga];
        let domains = [Domain::Sports];
        assert!(is_targeted(Role::Jga, Some(Domain::Sports), &roles, &domains));
        // Right role, wrong domain: excluded, not unioned in.
        assert!(!is_targeted(Role::Jga, Some(Domain::Literary), &roles, &domains));
        // Right domain, wrong role: also excluded.
        assert!(!is_targeted(Role::Animator, Some(Domain::Sports), &roles, &domains));
    }

    #[test]
    fn test_parse_all_users_token() {
        assert_eq!(AttendeeGroup::parse("all"), Some(AttendeeGroup::AllUsers));
    }

    #[test]
    fn test_parse_role_only_tokens() {
        assert_eq!(
            AttendeeGroup::parse("jga_all"),
            Some(AttendeeGroup::RoleOnly(Role::Jga))
        );
        assert_eq!(
            AttendeeGroup::parse("volunteer_all"),
            Some(AttendeeGroup::RoleOnly(Role::Volunteer))
        );
    }

    #[test]
    fn test_parse_role_domain_tokens() {
        assert_eq!(
            AttendeeGroup::parse("jga_sports"),
            Some(AttendeeGroup::RoleDomain(Role::Jga, Domain::Sports))
        );
        // Domains with underscores must survive the split.
        assert_eq!(
            AttendeeGroup::parse("animator_performing_creative_arts"),
            Some(AttendeeGroup::RoleDomain(
                Role::Animator,
                Domain::PerformingCreativeArts
            ))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        assert_eq!(AttendeeGroup::parse("everyone"), None);
        assert_eq!(AttendeeGroup::parse("jga_"), None);
        assert_eq!(AttendeeGroup::parse("jga_sport"), None);
        assert_eq!(AttendeeGroup::parse("captain_sports"), None);
    }

    #[test]
    fn test_parse_all_drops_unrecognized() {
        let tokens = vec![
            "jga_all".to_string(),
            "bogus".to_string(),
            "ga_literary".to_string(),
        ];
        assert_eq!(
            AttendeeGroup::parse_all(&tokens),
            vec![
                AttendeeGroup::RoleOnly(Role::Jga),
                AttendeeGroup::RoleDomain(Role::Ga, Domain::Literary),
            ]
        );
    }
}
