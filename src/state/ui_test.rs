use super::*;

#[test]
fn teacher_tab_defaults_to_courses() {
    assert_eq!(TeacherTab::default(), TeacherTab::Courses);
}

#[test]
fn teacher_tab_variants_are_distinct() {
    assert_ne!(TeacherTab::Courses, TeacherTab::Assignments);
}
