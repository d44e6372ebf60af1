use leptos::prelude::*;

use crate::config::chatbot_url;

/// Floating launcher for the external chat assistant.
///
/// The assistant lives elsewhere and is only framed here; nothing is
/// exchanged with the rest of the page. Renders nothing unless
/// `PORTFOLIO_CHATBOT_URL` was set at build time.
#[component]
pub fn Chatbot() -> impl IntoView {
    chatbot_url().map(|url| view! { <ChatbotFrame url /> })
}

#[component]
fn ChatbotFrame(url: &'static str) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="fixed bottom-6 right-6 z-50 flex flex-col items-end gap-3">
            <Show when=move || open.get()>
                <iframe
                    src=url
                    title="Portfolio assistant"
                    class="w-80 sm:w-96 h-[28rem] rounded-2xl glass border border-border/50 shadow-2xl"
                ></iframe>
            </Show>
            <button
                class="w-14 h-14 rounded-full btn-hero text-2xl shadow-lg"
                aria-label="Toggle chat assistant"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {move || if open.get() { "✕" } else { "💬" }}
            </button>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;

    #[test]
    fn test_launcher_follows_configuration() {
        let html = render_html(|| view! { <Chatbot /> });
        match chatbot_url() {
            Some(url) => {
                assert!(html.contains("Toggle chat assistant"));
                assert!(!html.contains(url));
            }
            None => {
                assert!(!html.contains("Toggle chat assistant"));
                assert!(!html.contains("<iframe"));
            }
        }
    }

    #[test]
    fn test_frame_starts_closed() {
        let html = render_html(|| view! { <ChatbotFrame url="https://chat.example.com" /> });
        assert!(!html.contains("<iframe"));
        assert!(html.contains("💬"));
    }
}
