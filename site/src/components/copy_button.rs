use std::time::Duration;

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio::SiteConfig;

use crate::dom;

/// Copies `text` to the clipboard with short "copied" feedback.
///
/// When the clipboard is unavailable the button is replaced by a read-only
/// field holding the value, selected so the visitor can copy it by hand.
#[component]
pub fn CopyButton(
    #[prop(into)] text: String,
    #[prop(default = "Copy")] label: &'static str,
) -> impl IntoView {
    let feedback = Duration::from_millis(expect_context::<SiteConfig>().contact.copy_feedback_ms);
    let (copied, set_copied) = signal(false);
    let (manual, set_manual) = signal(false);
    let field = NodeRef::<html::Input>::new();

    let value = StoredValue::new(text);

    let copy = move |_| {
        let text = value.get_value();
        spawn_local(async move {
            match dom::copy_text(&text).await {
                Ok(()) => {
                    set_copied.set(true);
                    set_timeout(move || set_copied.set(false), feedback);
                }
                Err(e) => {
                    tracing::warn!(%e, "clipboard write failed, offering manual copy");
                    set_manual.set(true);
                }
            }
        });
    };

    Effect::new(move || {
        if manual.get() {
            if let Some(input) = field.get() {
                let _ = input.focus();
                input.select();
            }
        }
    });

    view! {
        <Show
            when=move || manual.get()
            fallback=move || {
                view! {
                    <button type="button" class="copy-btn" on:click=copy>
                        {move || if copied.get() { "Copied!" } else { label }}
                    </button>
                }
            }
        >
            <input
                node_ref=field
                class="copy-manual"
                readonly=true
                value=value.get_value()
                aria-label="Select and copy"
                on:focus=move |_| {
                    if let Some(input) = field.get_untracked() {
                        input.select();
                    }
                }
            />
        </Show>
    }
}
