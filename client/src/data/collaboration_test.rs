use super::*;

#[test]
fn team_has_one_admin() {
    let admins = TEAM_MEMBERS.iter().filter(|m| m.permission == Permission::Admin).count();
    assert_eq!(admins, 1);
    assert_eq!(TEAM_MEMBERS.len(), 4);
}

#[test]
fn every_role_has_a_permission_card() {
    for perm in [Permission::Admin, Permission::Scientist, Permission::PolicyMaker] {
        assert!(ROLE_PERMISSIONS.iter().any(|(p, _, caps)| *p == perm && caps.len() == 4));
    }
}

#[test]
fn comment_authors_are_team_members() {
    for comment in RECENT_COMMENTS {
        assert!(TEAM_MEMBERS.iter().any(|m| m.name == comment.author && m.initials == comment.initials));
    }
}

#[test]
fn shared_report_scopes_have_labels() {
    let labels: Vec<_> = SHARED_REPORTS.iter().map(|r| r.shared.label()).collect();
    assert_eq!(labels, vec!["Public", "Team Only", "Institution"]);
}

#[test]
fn export_and_api_lists_are_populated() {
    assert_eq!(EXPORT_FORMATS.len(), 4);
    assert_eq!(API_ENDPOINTS.len(), 4);
    assert!(API_ENDPOINTS.iter().all(|e| e.starts_with("/api/v1/")));
    assert_eq!(NOTIFICATION_FREQUENCIES[0].value, "immediate");
}
