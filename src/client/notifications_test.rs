use super::*;

#[test]
fn fire_creates_toast_and_history_with_shared_id() {
    let mut center = NotificationCenter::new();
    let id = center.fire(75, 1_000);

    assert_eq!(center.toasts().len(), 1);
    assert_eq!(center.history().len(), 1);
    assert_eq!(center.toasts()[0].id, id);

    let entry = center.entry(id).expect("history entry");
    assert_eq!(entry.id, id);
    assert_eq!(entry.threshold, 75);
    assert_eq!(entry.timestamp, 1_000);
    assert!(!entry.was_snoozed);
    assert!(!entry.activity_performed);
    assert!(entry.chosen_activity.is_none());
}

#[test]
fn fire_formats_message_and_picks_suggestion() {
    let mut center = NotificationCenter::new();
    let low = center.fire(25, 0);
    let mid = center.fire(50, 0);
    let high = center.fire(100, 0);

    assert_eq!(center.entry(low).expect("entry").message, "Stress level reached 25%!");
    assert_eq!(center.entry(low).expect("entry").suggested_activity, "Walk");
    assert_eq!(center.entry(mid).expect("entry").suggested_activity, "Listen to music");
    assert_eq!(center.entry(high).expect("entry").suggested_activity, "Breathe");
}

#[test]
fn ids_are_unique_and_increasing() {
    let mut center = NotificationCenter::new();
    let first = center.fire(25, 0);
    let second = center.fire(50, 0);
    assert!(second > first);
}

#[test]
fn only_most_recent_toast_is_visible() {
    let mut center = NotificationCenter::new();
    center.fire(25, 0);
    let second = center.fire(50, 0);

    assert_eq!(center.toasts().len(), 2);
    assert_eq!(center.visible_toast().expect("visible toast").id, second);
}

#[test]
fn snooze_flags_entry_and_removes_toast_only() {
    let mut center = NotificationCenter::new();
    let id = center.fire(50, 0);

    assert!(center.snooze(id));

    assert!(center.toasts().is_empty());
    let entry = center.entry(id).expect("entry survives snooze");
    assert!(entry.was_snoozed);
    assert!(!entry.activity_performed);
}

#[test]
fn completing_after_snooze_still_marks_performed() {
    let mut center = NotificationCenter::new();
    let id = center.fire(50, 0);
    center.snooze(id);

    assert!(center.mark_completed(id, "Draw"));

    let entry = center.entry(id).expect("entry");
    assert!(entry.was_snoozed);
    assert!(entry.activity_performed);
    assert_eq!(entry.chosen_activity, Some("Draw"));
}

#[test]
fn expire_removes_toast_silently_and_late_expire_is_noop() {
    let mut center = NotificationCenter::new();
    let id = center.fire(25, 0);

    assert!(center.expire(id));
    assert!(center.toasts().is_empty());

    let entry = center.entry(id).expect("entry persists");
    assert!(!entry.was_snoozed);
    assert!(!entry.activity_performed);

    // The scheduled timer may still fire after a user action removed the
    // toast; that must be harmless.
    assert!(!center.expire(id));
}

#[test]
fn snooze_unknown_id_is_noop() {
    let mut center = NotificationCenter::new();
    assert!(!center.snooze(7));
    assert!(!center.mark_completed(7, "Walk"));
}

#[test]
fn dismiss_keeps_history_flags_untouched() {
    let mut center = NotificationCenter::new();
    let id = center.fire(75, 0);

    assert!(center.dismiss_toast(id));
    let entry = center.entry(id).expect("entry");
    assert!(!entry.was_snoozed);
    assert!(!entry.activity_performed);
}
