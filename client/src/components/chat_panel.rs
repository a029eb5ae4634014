//! Chat transcript, input and send button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting records the question and a pending reply in `ChatState`, then
//! posts to the chat service on a local task. The reply (or the apology) is
//! written back into the same placeholder when the task finishes; several
//! questions may be in flight at once.

use leptos::prelude::*;
use session::{ChatMessage, Content};

use crate::net::api::send_chat;
use crate::state::chat::ChatState;
use crate::util::time;

#[component]
pub fn ChatPanel(on_close: Callback<()>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| (c.session.transcript().len(), c.session.in_flight()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let Some(pending) = chat.try_update(|c| c.submit(&text, time::now())).flatten() else {
            return;
        };
        input.set(String::new());

        let endpoint = chat.with_untracked(|c| c.endpoint.clone());
        leptos::task::spawn_local(async move {
            let outcome = send_chat(&endpoint, &pending.body).await;
            chat.update(|c| c.resolve(&pending, outcome, time::now()));
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chatbox">
            <div class="chatbox__header">
                <span class="chatbox__title">"FloatChat"</span>
                <span class="chatbox__subject">
                    {move || chat.with(|c| c.session.current().map(str::to_owned)).unwrap_or_else(|| "No float selected".to_owned())}
                </span>
                <button id="close-chat" class="chatbox__close" title="Close" on:click=move |_| on_close.run(())>
                    "×"
                </button>
            </div>
            <div id="chatbox-messages" class="chatbox__messages" node_ref=messages_ref>
                <Show when=move || chat.with(ChatState::is_empty)>
                    <div class="chatbox__empty">"Pick a float on the map, then ask about it."</div>
                </Show>
                {move || {
                    chat.with(|c| {
                        c.session
                            .transcript()
                            .iter()
                            .map(|msg| view! { <MessageRow msg=msg.clone() /> })
                            .collect_view()
                    })
                }}
            </div>
            <div class="chatbox__input">
                <input
                    id="chat-input"
                    type="text"
                    placeholder="Ask about salinity, temperature, depth..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    id="send-btn"
                    disabled=move || input.with(|t| t.trim().is_empty())
                    on:click=move |_| do_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

/// One transcript entry. Bot replies are service markup and are inserted as
/// HTML; everything else is text.
#[component]
fn MessageRow(msg: ChatMessage) -> impl IntoView {
    let class = msg.role.css_class();
    let stamp = msg.timestamp.map(|t| t.to_string());
    let body = match msg.content {
        Content::Text(text) => view! { <div class="message-content">{text}</div> }.into_any(),
        Content::Markup(html) => view! { <div class="message-content" inner_html=html></div> }.into_any(),
        Content::Pending => view! {
            <div class="message-content">
                <span class="thinking"></span>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class=class>
            {body}
            {stamp.map(|s| view! { <div class="message-time">{s}</div> })}
        </div>
    }
}
