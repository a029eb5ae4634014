use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_panel_closed() {
    let state = UiState::default();
    assert_eq!(state.chat_panel, ChatPanelPhase::Closed);
    assert_eq!(state.chat_panel.display(), "none");
}

#[test]
fn ui_state_default_spotlight_hidden() {
    let state = UiState::default();
    assert_eq!(state.spotlight, Spotlight::Hidden);
    assert!(state.spotlight_background.is_empty());
}

#[test]
fn ui_state_default_surface_is_fallback() {
    assert_eq!(UiState::default().surface_mode, SurfaceMode::Fallback);
}

// =============================================================
// ChatPanelPhase
// =============================================================

#[test]
fn open_then_settle_becomes_active() {
    let mut phase = ChatPanelPhase::default();
    assert!(phase.open());
    assert_eq!(phase, ChatPanelPhase::Opening);
    assert_eq!(phase.display(), "flex");
    assert!(!phase.is_active());

    phase.settle(ChatPanelPhase::Opening);
    assert_eq!(phase, ChatPanelPhase::Open);
    assert!(phase.is_active());
}

#[test]
fn close_then_settle_leaves_layout() {
    let mut phase = ChatPanelPhase::Open;
    assert!(phase.close());
    assert!(!phase.is_active());
    assert_eq!(phase.display(), "flex");

    phase.settle(ChatPanelPhase::Closing);
    assert_eq!(phase, ChatPanelPhase::Closed);
    assert_eq!(phase.display(), "none");
}

#[test]
fn open_is_idempotent() {
    let mut phase = ChatPanelPhase::Open;
    assert!(!phase.open());
    assert_eq!(phase, ChatPanelPhase::Open);
}

#[test]
fn close_when_closed_is_noop() {
    let mut phase = ChatPanelPhase::Closed;
    assert!(!phase.close());
    assert_eq!(phase, ChatPanelPhase::Closed);
}

#[test]
fn stale_close_timer_does_not_hide_reopened_panel() {
    let mut phase = ChatPanelPhase::Open;
    phase.close();
    phase.open();
    phase.settle(ChatPanelPhase::Closing);
    assert_eq!(phase, ChatPanelPhase::Opening);
    phase.settle(ChatPanelPhase::Opening);
    assert_eq!(phase, ChatPanelPhase::Open);
}

#[test]
fn stale_open_timer_does_not_activate_closing_panel() {
    let mut phase = ChatPanelPhase::Closed;
    phase.open();
    phase.close();
    phase.settle(ChatPanelPhase::Opening);
    assert_eq!(phase, ChatPanelPhase::Closing);
}

// =============================================================
// Spotlight
// =============================================================

#[test]
fn track_pointer_updates_gradient() {
    let mut state = UiState::default();
    state.track_pointer(120.0, 60.0, 20.0, 10.0);
    assert_eq!(state.spotlight.opacity(), "1");
    assert!(state.spotlight_background.starts_with("radial-gradient(circle at 100px 50px"));
}

#[test]
fn hide_keeps_last_gradient_for_fade() {
    let mut state = UiState::default();
    state.track_pointer(5.0, 5.0, 0.0, 0.0);
    let bg = state.spotlight_background.clone();
    state.hide_spotlight();
    assert_eq!(state.spotlight.opacity(), "0");
    assert_eq!(state.spotlight_background, bg);
}
