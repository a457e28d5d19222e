//! Floating assistant button and its scripted chat dialog.
//!
//! The conversation is fixed copy; the input and Send button are inert.

use leptos::prelude::*;

use crate::state::shell::ShellState;

#[derive(Clone, Copy)]
struct ScriptedMessage {
    from_assistant: bool,
    text: &'static str,
    bullets: &'static [&'static str],
}

const SCRIPT: &[ScriptedMessage] = &[
    ScriptedMessage {
        from_assistant: true,
        text: "Welcome to Blue Nexus! I can help you with:",
        bullets: &["Data analysis guidance", "Species identification tips", "Platform navigation", "Research methodology"],
    },
    ScriptedMessage { from_assistant: false, text: "How can I start analyzing my oceanographic data?", bullets: &[] },
    ScriptedMessage {
        from_assistant: true,
        text: "Great question! Start with the Data Integration module to upload your datasets, then use \
               Interactive Visualization for preliminary analysis. Would you like specific guidance on data formats?",
        bullets: &[],
    },
];

#[component]
pub fn ChatDialog() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let is_open = move || shell.with(|s| s.chat_open);
    let on_fab = move |_| shell.update(ShellState::toggle_chat);
    let close = move || shell.update(|s| s.set_chat_open(false));

    view! {
        <div class="chat">
            <button class="chat__fab" on:click=on_fab title="Ocean AI Assistant">
                <span class="chat__fab-icon"></span>
                <span class="chat__fab-pulse"></span>
            </button>
            <Show when=is_open>
                <div class="chat__backdrop" on:click=move |_| close()></div>
                <div
                    class="chat__dialog"
                    role="dialog"
                    tabindex="0"
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            close();
                        }
                    }
                >
                    <div class="chat__header">
                        <h2 class="chat__title">"Ocean AI Assistant"</h2>
                        <p class="chat__subtitle">"Your intelligent marine research companion"</p>
                        <button class="chat__close" on:click=move |_| close() title="Close assistant">
                            "✕"
                        </button>
                    </div>
                    <div class="chat__messages">
                        {SCRIPT
                            .iter()
                            .map(|msg| {
                                let speaker = if msg.from_assistant { "AI Assistant:" } else { "You:" };
                                view! {
                                    <div class="chat__message" class:chat__message--user={!msg.from_assistant}>
                                        <p>
                                            <strong>{speaker}</strong>
                                            " "
                                            {msg.text}
                                        </p>
                                        <ul class="chat__bullets">
                                            {msg.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="chat__input-row">
                        <input class="chat__input" type="text" placeholder="Ask about marine data analysis..."/>
                        <button class="btn btn--sm">"Send"</button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
