use super::*;

#[test]
fn permission_badges_follow_role_rank() {
    assert_eq!(permission_variant(Permission::Admin), BadgeVariant::Default);
    assert_eq!(permission_variant(Permission::Scientist), BadgeVariant::Secondary);
    assert_eq!(permission_variant(Permission::PolicyMaker), BadgeVariant::Outline);
}

#[test]
fn shared_report_scope_badges() {
    let variants: Vec<_> = SHARED_REPORTS.iter().map(|r| scope_variant(r.shared)).collect();
    assert_eq!(variants, vec![BadgeVariant::Default, BadgeVariant::Secondary, BadgeVariant::Outline]);
}

#[test]
fn pending_export_reads_as_processing() {
    let pending: Vec<_> = RECENT_EXPORTS.iter().filter(|(_, _, ready)| !ready).collect();
    assert_eq!(pending.len(), 1);
    assert_eq!(export_status(false), "Processing");
    assert_eq!(export_variant(false), BadgeVariant::Secondary);
    assert_eq!(export_status(true), "Ready");
}

#[test]
fn reply_count_label() {
    assert_eq!(reply_label(2), "2 replies");
}
