use super::*;

fn ok(markup: &str) -> Result<ChatResponse, ChatError> {
    Ok(ChatResponse { response: markup.to_owned() })
}

fn at(hour: u8, minute: u8) -> Option<DisplayTime> {
    DisplayTime::new(hour, minute)
}

// =============================================================
// select
// =============================================================

#[test]
fn select_sets_context_and_appends_one_notice() {
    let mut s = ChatSession::new();
    s.select("Konkan Coast Float");

    assert_eq!(s.current(), Some("Konkan Coast Float"));
    assert_eq!(s.transcript().len(), 1);
    let msg = &s.transcript().messages()[0];
    assert_eq!(msg.role, Role::System);
    assert!(msg.content.as_str().contains("Konkan Coast Float"));
    assert_eq!(
        msg.content.as_str(),
        "Now chatting about: Konkan Coast Float. Ask me a question about it!"
    );
}

#[test]
fn selecting_again_overwrites_and_notifies_again() {
    let mut s = ChatSession::new();
    s.select("Konkan Coast Float");
    s.select("Konkan Coast Float");
    s.select("Andaman Sea Float");
    assert_eq!(s.current(), Some("Andaman Sea Float"));
    assert_eq!(s.transcript().len(), 3);
}

// =============================================================
// submit
// =============================================================

#[test]
fn empty_or_whitespace_submit_is_noop() {
    let mut s = ChatSession::new();
    assert!(s.submit("", None).is_none());
    assert!(s.submit("   \t\n", None).is_none());
    assert!(s.transcript().is_empty());
}

#[test]
fn submit_appends_user_then_pending_bot() {
    let mut s = ChatSession::new();
    let pending = s.submit("  hello  ", at(10, 4)).expect("request");

    let msgs = s.transcript().messages();
    assert_eq!(msgs.len(), 2);
    assert_eq!(msgs[0].role, Role::User);
    assert_eq!(msgs[0].content, Content::Text("hello".into()));
    assert_eq!(msgs[0].timestamp, at(10, 4));
    assert_eq!(msgs[1].role, Role::Bot);
    assert!(msgs[1].is_pending());
    assert_eq!(pending.placeholder, msgs[1].id);
    assert_eq!(pending.body.message, "hello");
    assert_eq!(s.in_flight(), 1);
}

#[test]
fn submit_without_selection_sends_null_float() {
    let mut s = ChatSession::new();
    let pending = s.submit("What is the salinity?", None).expect("request");
    assert_eq!(
        pending.body,
        ChatRequest { message: "What is the salinity?".into(), selected_float: None }
    );
}

#[test]
fn submit_after_selection_sends_float_name() {
    let mut s = ChatSession::new();
    s.select("Gujarat Coast Float");
    let pending = s.submit("depth trend", None).expect("request");
    assert_eq!(
        pending.body,
        ChatRequest { message: "depth trend".into(), selected_float: Some("Gujarat Coast Float".into()) }
    );
}

#[test]
fn selection_change_after_submit_does_not_touch_in_flight_request() {
    let mut s = ChatSession::new();
    s.select("Gujarat Coast Float");
    let pending = s.submit("depth trend", None).expect("request");
    s.select("Malabar Coast Float");

    assert_eq!(pending.body.selected_float.as_deref(), Some("Gujarat Coast Float"));
    let next = s.submit("and here?", None).expect("request");
    assert_eq!(next.body.selected_float.as_deref(), Some("Malabar Coast Float"));
}

// =============================================================
// resolve
// =============================================================

#[test]
fn success_inserts_markup_verbatim() {
    let mut s = ChatSession::new();
    let pending = s.submit("q", None).expect("request");
    let markup = "<table><tr><th>depth</th></tr><tr><td>10</td></tr></table>";

    assert!(s.resolve(pending.placeholder, ok(markup), at(11, 0)));

    let bot = s.transcript().get(pending.placeholder).expect("bot message");
    assert_eq!(bot.content, Content::Markup(markup.into()));
    assert_eq!(bot.timestamp, at(11, 0));
    assert_eq!(s.in_flight(), 0);
}

#[test]
fn failure_replaces_placeholder_with_apology_in_place() {
    let mut s = ChatSession::new();
    let pending = s.submit("q", None).expect("request");
    let len_before = s.transcript().len();

    assert!(s.resolve(pending.placeholder, Err(ChatError::Transport("connection refused".into())), None));

    assert_eq!(s.transcript().len(), len_before);
    let bot = s.transcript().get(pending.placeholder).expect("bot message");
    assert_eq!(bot.content, Content::Text(APOLOGY.into()));
}

#[test]
fn status_and_decode_failures_use_same_apology() {
    let mut s = ChatSession::new();
    let a = s.submit("a", None).expect("request");
    let b = s.submit("b", None).expect("request");
    s.resolve(a.placeholder, Err(ChatError::Status(500)), None);
    s.resolve(b.placeholder, Err(ChatError::Decode("eof".into())), None);

    for id in [a.placeholder, b.placeholder] {
        assert_eq!(s.transcript().get(id).map(|m| m.content.as_str()), Some(APOLOGY));
    }
}

#[test]
fn overlapping_requests_resolve_out_of_order_into_own_placeholders() {
    let mut s = ChatSession::new();
    let first = s.submit("first", None).expect("request");
    let second = s.submit("second", None).expect("request");
    assert_eq!(s.in_flight(), 2);

    s.resolve(second.placeholder, ok("answer two"), None);
    assert_eq!(s.in_flight(), 1);
    s.resolve(first.placeholder, ok("answer one"), None);

    let contents = s
        .transcript()
        .iter()
        .map(|m| (m.role, m.content.as_str().to_owned()))
        .collect::<Vec<_>>();
    assert_eq!(
        contents,
        vec![
            (Role::User, "first".to_owned()),
            (Role::Bot, "answer one".to_owned()),
            (Role::User, "second".to_owned()),
            (Role::Bot, "answer two".to_owned()),
        ]
    );
}

#[test]
fn resolving_twice_is_ignored() {
    let mut s = ChatSession::new();
    let pending = s.submit("q", None).expect("request");
    assert!(s.resolve(pending.placeholder, ok("one"), None));
    assert!(!s.resolve(pending.placeholder, Err(ChatError::Status(500)), None));
    assert_eq!(
        s.transcript().get(pending.placeholder).map(|m| m.content.clone()),
        Some(Content::Markup("one".into()))
    );
}

#[test]
fn every_submit_adds_exactly_two_messages() {
    let mut s = ChatSession::new();
    for (i, text) in ["a", " b ", "c\n"].iter().enumerate() {
        let pending = s.submit(text, None).expect("request");
        assert_eq!(s.transcript().len(), (i + 1) * 2);
        s.resolve(pending.placeholder, ok("x"), None);
        assert_eq!(s.transcript().len(), (i + 1) * 2);
    }
}
