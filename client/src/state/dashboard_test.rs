use super::*;

#[test]
fn grade_thresholds() {
    assert_eq!(HealthGrade::from_score(100), HealthGrade::Excellent);
    assert_eq!(HealthGrade::from_score(90), HealthGrade::Excellent);
    assert_eq!(HealthGrade::from_score(89), HealthGrade::Good);
    assert_eq!(HealthGrade::from_score(80), HealthGrade::Good);
    assert_eq!(HealthGrade::from_score(79), HealthGrade::Fair);
    assert_eq!(HealthGrade::from_score(70), HealthGrade::Fair);
    assert_eq!(HealthGrade::from_score(69), HealthGrade::Poor);
    assert_eq!(HealthGrade::from_score(0), HealthGrade::Poor);
}

#[test]
fn default_view_shows_global_ocean_graded_good() {
    let view = DashboardView::default();
    assert_eq!(view.region, RegionId::Global);
    assert_eq!(view.data().name, "Global Ocean");
    assert_eq!(view.health_grade().label(), "Good");
}

#[test]
fn selecting_southern_ocean_grades_excellent() {
    let mut view = DashboardView::default();
    assert_eq!(view.select_region("southern"), RegionId::Southern);
    assert_eq!(view.health_grade(), HealthGrade::Excellent);
}

#[test]
fn selecting_arctic_grades_fair() {
    let mut view = DashboardView::default();
    view.select_region("arctic");
    assert_eq!(view.health_grade(), HealthGrade::Fair);
}

#[test]
fn unknown_region_falls_back_to_global() {
    let mut view = DashboardView::default();
    view.select_region("pacific");
    assert_eq!(view.select_region("atlantis"), RegionId::Global);
    assert_eq!(view.data().name, "Global Ocean");
}
