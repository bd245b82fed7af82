use super::*;

#[test]
fn dialog_starts_hidden() {
    let d: Dialog<String> = Dialog::default();
    assert!(!d.is_shown());
    assert!(d.data().is_none());
}

#[test]
fn present_with_current_token_shows_data() {
    let mut d = Dialog::default();
    let token = d.begin_open();
    assert!(d.present(token, "course 1".to_owned()));
    assert!(d.is_shown());
    assert_eq!(d.data().map(String::as_str), Some("course 1"));
}

#[test]
fn close_hides_and_invalidates_inflight_token() {
    let mut d = Dialog::default();
    let token = d.begin_open();
    d.close();

    // The chain started before close completes late: nothing changes.
    assert!(!d.present(token, "stale".to_owned()));
    assert!(!d.is_shown());
}

#[test]
fn reopen_invalidates_previous_open() {
    let mut d = Dialog::default();
    let first = d.begin_open();
    let second = d.begin_open();

    assert!(!d.is_current(first));
    assert!(!d.present(first, "old".to_owned()));
    assert!(d.present(second, "new".to_owned()));
    assert_eq!(d.data().map(String::as_str), Some("new"));
}

#[test]
fn close_discards_data_for_next_open() {
    let mut d = Dialog::default();
    let token = d.begin_open();
    d.present(token, 42);
    d.close();

    // A reopen presents only what its own fetch delivers.
    assert!(d.data().is_none());
    let token = d.begin_open();
    assert!(d.present(token, 7));
    assert_eq!(d.data(), Some(&7));
}
