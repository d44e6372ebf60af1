use leptos::{ev::SubmitEvent, prelude::*};

use super::{reveal::use_reveal, IconView, SectionHeader};
use crate::{
    config::{chatbot_url, NOTICE_DURATION, SUBMIT_DELAY},
    contact::{Confirmation, ContactError, ContactForm, Field},
    content::{Anchor, ContactMethod, CONTACT_METHODS},
    reveal::{Reveal, SECTION_THRESHOLD},
};

#[component]
pub fn ContactSection() -> impl IntoView {
    let (section, visible) = use_reveal(Anchor::Contact, SECTION_THRESHOLD);

    view! {
        <section id=Anchor::Contact.id() node_ref=section class="py-32 relative bg-secondary/20">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto">
                    <SectionHeader
                        visible
                        eyebrow="GET IN TOUCH"
                        title="Let's Work"
                        accent="Together"
                        subtitle="Have a project in mind? I'd love to hear about it. Let's create something amazing together."
                    />
                    <div class=move || {
                        format!(
                            "grid md:grid-cols-2 gap-8 transition-all duration-700 delay-200 {}",
                            Reveal::FadeUp.classes(visible.get()),
                        )
                    }>
                        <div class="flex flex-col gap-8">
                            <div class="glass p-8 rounded-2xl flex flex-col justify-center">
                                <h3 class="text-2xl font-semibold mb-6">"Contact Information"</h3>
                                <div class="space-y-6">
                                    {CONTACT_METHODS
                                        .iter()
                                        .map(|method| view! { <ContactMethodRow method /> })
                                        .collect_view()}
                                </div>
                            </div>
                            <ChatPromo assistant=chatbot_url() />
                        </div>
                        <MessageForm />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactMethodRow(method: &'static ContactMethod) -> impl IntoView {
    let body = view! {
        <div class="w-12 h-12 rounded-xl bg-primary/10 flex items-center justify-center group-hover:bg-primary/20 transition-colors">
            <IconView icon=method.icon class="text-xl" />
        </div>
        <div>
            <p class="text-sm text-muted-foreground">{method.label}</p>
            <p class="text-foreground font-medium group-hover:text-primary transition-colors">
                {method.value}
            </p>
        </div>
    };
    match method.link {
        Some(href) => view! {
            <a href=href class="flex items-center gap-4 group">
                {body}
            </a>
        }
        .into_any(),
        None => view! { <div class="flex items-center gap-4 group">{body}</div> }.into_any(),
    }
}

/// Pointer to the chat launcher, shown only when an assistant is configured.
#[component]
fn ChatPromo(assistant: Option<&'static str>) -> impl IntoView {
    assistant.map(|_| {
        view! {
            <div class="chat-promo glass p-8 rounded-2xl flex flex-col">
                <h3 class="text-xl font-semibold mb-4">"Prefer a quick chat?"</h3>
                <p class="text-muted-foreground mb-4">
                    "Use the assistant in the corner to ask about my experience, skills, or availability. It knows this portfolio and answers right away."
                </p>
                <div class="flex items-center gap-2 text-primary mt-auto">
                    <span class="w-2 h-2 bg-primary rounded-full animate-pulse" />
                    <span class="text-sm font-medium">"AI Assistant is online"</span>
                </div>
            </div>
        }
    })
}

/// Contact form with a simulated send: no request leaves the browser.
#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let error = RwSignal::new(None::<ContactError>);
    let notice = RwSignal::new(None::<Confirmation>);
    let submitting = Memo::new(move |_| form.with(ContactForm::submitting));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(ContactForm::begin_submit) {
            Some(Ok(msg)) => {
                error.set(None);
                match msg.to_json() {
                    Ok(payload) => log::info!(
                        "contact form: sending {} byte payload from {}",
                        payload.len(),
                        msg.name
                    ),
                    Err(e) => log::warn!("contact form: payload not encodable: {e}"),
                }
                set_timeout(
                    move || {
                        let Some(Some(done)) = form.try_update(ContactForm::complete) else {
                            return;
                        };
                        log::info!("contact form: confirmation #{}", done.id);
                        let id = done.id;
                        notice.try_set(Some(done));
                        set_timeout(
                            move || {
                                notice.try_update(|n| {
                                    if n.as_ref().is_some_and(|c| c.id == id) {
                                        *n = None;
                                    }
                                });
                            },
                            NOTICE_DURATION,
                        );
                    },
                    SUBMIT_DELAY,
                );
            }
            Some(Err(e)) => {
                log::warn!("contact form rejected: {e}");
                error.set(Some(e));
            }
            None => {}
        }
    };

    let edit = move |field: Field, value: String| {
        form.update(|f| f.set(field, value));
        error.set(None);
    };

    view! {
        <form class="glass p-8 rounded-2xl h-full flex flex-col gap-4" on:submit=on_submit>
            <h3 class="text-2xl font-semibold mb-2">"Send a Message"</h3>
            <label class="flex flex-col gap-2 text-sm text-muted-foreground">
                "Name"
                <input
                    type="text"
                    name="name"
                    required
                    autocomplete="name"
                    placeholder="Your name"
                    class="form-input"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| edit(Field::Name, event_target_value(&ev))
                    disabled=move || submitting.get()
                />
            </label>
            <label class="flex flex-col gap-2 text-sm text-muted-foreground">
                "Email"
                <input
                    type="email"
                    name="email"
                    required
                    autocomplete="email"
                    placeholder="you@example.com"
                    class="form-input"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| edit(Field::Email, event_target_value(&ev))
                    disabled=move || submitting.get()
                />
            </label>
            <label class="flex flex-col gap-2 text-sm text-muted-foreground">
                "Message"
                <textarea
                    name="message"
                    required
                    rows="5"
                    placeholder="Tell me about your project"
                    class="form-input resize-none"
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| edit(Field::Message, event_target_value(&ev))
                    disabled=move || submitting.get()
                ></textarea>
            </label>
            {move || {
                error
                    .get()
                    .map(|e| view! { <p class="form-error text-sm text-red-400">{e.to_string()}</p> })
            }}
            <button type="submit" class="btn-hero w-full" disabled=move || submitting.get()>
                {move || if submitting.get() { "Sending..." } else { "Send Message" }}
            </button>
            {move || {
                notice
                    .get()
                    .map(|c| {
                        view! {
                            <div
                                role="status"
                                class="form-notice rounded-xl border border-primary/30 bg-primary/10 p-4 text-sm text-foreground"
                            >
                                {format!("Thanks, {}! Your message has been sent.", c.sender)}
                            </div>
                        }
                    })
            }}
        </form>
    }
}
