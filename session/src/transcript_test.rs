use super::*;

// =============================================================
// DisplayTime
// =============================================================

#[test]
fn display_time_pads_to_two_digits() {
    let t = DisplayTime::new(7, 5).expect("valid time");
    assert_eq!(t.to_string(), "07:05");
}

#[test]
fn display_time_rejects_out_of_range() {
    assert!(DisplayTime::new(24, 0).is_none());
    assert!(DisplayTime::new(0, 60).is_none());
    assert!(DisplayTime::new(23, 59).is_some());
}

// =============================================================
// Transcript
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut t = Transcript::new();
    let a = t.push(Role::User, Content::Text("a".into()), None);
    let b = t.push(Role::Bot, Content::Pending, None);
    assert!(a < b);
    assert_eq!(t.len(), 2);
    assert_eq!(t.get(b).map(|m| m.role), Some(Role::Bot));
}

#[test]
fn settle_replaces_pending_in_place() {
    let mut t = Transcript::new();
    t.push(Role::User, Content::Text("q".into()), None);
    let id = t.push(Role::Bot, Content::Pending, None);
    t.push(Role::System, Content::Text("note".into()), None);

    assert!(t.settle(id, Content::Markup("<b>a</b>".into()), DisplayTime::new(9, 30)));

    assert_eq!(t.len(), 3);
    let msg = &t.messages()[1];
    assert_eq!(msg.id, id);
    assert_eq!(msg.content, Content::Markup("<b>a</b>".into()));
    assert_eq!(msg.timestamp.map(|ts| ts.to_string()).as_deref(), Some("09:30"));
}

#[test]
fn settle_only_once() {
    let mut t = Transcript::new();
    let id = t.push(Role::Bot, Content::Pending, None);
    assert!(t.settle(id, Content::Text("first".into()), None));
    assert!(!t.settle(id, Content::Text("second".into()), None));
    assert_eq!(t.get(id).map(|m| m.content.as_str()), Some("first"));
}

#[test]
fn settle_rejects_non_placeholder() {
    let mut t = Transcript::new();
    let id = t.push(Role::User, Content::Text("hello".into()), None);
    assert!(!t.settle(id, Content::Text("overwritten".into()), None));
}

#[test]
fn settle_unknown_id_is_ignored() {
    let mut t = Transcript::new();
    assert!(!t.settle(MessageId(42), Content::Text("x".into()), None));
    assert!(t.is_empty());
}

#[test]
fn pending_ids_lists_unsettled_placeholders() {
    let mut t = Transcript::new();
    let a = t.push(Role::Bot, Content::Pending, None);
    let b = t.push(Role::Bot, Content::Pending, None);
    t.settle(a, Content::Text("done".into()), None);
    assert_eq!(t.pending_ids().collect::<Vec<_>>(), vec![b]);
}

#[test]
fn role_css_classes() {
    assert_eq!(Role::User.css_class(), "user-message");
    assert_eq!(Role::Bot.css_class(), "bot-message");
    assert_eq!(Role::System.css_class(), "bot-message system-notification");
}
