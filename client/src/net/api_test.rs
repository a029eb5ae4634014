use super::*;

#[cfg(not(feature = "hydrate"))]
#[test]
fn send_chat_outside_browser_reports_transport_error() {
    let body = ChatRequest { message: "hi".into(), selected_float: None };
    let result = futures::executor::block_on(send_chat("http://127.0.0.1:5000/chat", &body));
    assert_eq!(result, Err(ChatError::Transport(NOT_IN_BROWSER.to_owned())));
}

