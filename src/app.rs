mod about;
mod certificates;
mod chatbot;
mod contact;
mod experience;
mod footer;
mod hero;
mod navigation;
mod projects;
mod reveal;
mod skills;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{person_json_ld, Anchor, Icon, IconGlyph, PROFILE};
use about::AboutSection;
use certificates::CertificatesSection;
use chatbot::Chatbot;
use contact::ContactSection;
use experience::ExperienceSection;
use footer::Footer;
use hero::HeroSection;
use navigation::Navigation;
use projects::ProjectsSection;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.summary />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole site: every section stacked in page order.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text=PROFILE.headline />
        <script type="application/ld+json" inner_html=person_json_ld()></script>
        <div class="min-h-screen overflow-x-hidden">
            <Navigation />
            <main>
                <HeroSection />
                <AboutSection />
                <ExperienceSection />
                <SkillsSection />
                <ProjectsSection />
                <CertificatesSection />
                <ContactSection />
            </main>
            <Footer />
            <Chatbot />
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <div class="min-h-screen flex flex-col items-center justify-center gap-6 text-center px-6">
            <h1 class="text-6xl font-bold gradient-text">"404"</h1>
            <p class="text-muted-foreground text-lg">"There is nothing at this address."</p>
            <a href="/" class="btn-hero">
                "Back to the portfolio"
            </a>
        </div>
    }
}

#[component]
pub(crate) fn IconView(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    match icon.glyph() {
        IconGlyph::Font(font) => Either::Left(view! {
            <i class=format!("{font} {class}") aria-hidden="true"></i>
        }),
        IconGlyph::Text(glyph) => Either::Right(view! {
            <span class=class aria-hidden="true">
                {glyph}
            </span>
        }),
    }
}

/// Eyebrow, title and optional subtitle shared by every revealed section.
#[component]
pub(crate) fn SectionHeader(
    visible: Signal<bool>,
    eyebrow: &'static str,
    title: &'static str,
    accent: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    use crate::reveal::Reveal;

    view! {
        <div class=move || {
            format!(
                "text-center mb-16 transition-all duration-700 {}",
                Reveal::FadeUp.classes(visible.get()),
            )
        }>
            <span class="text-primary font-mono text-sm tracking-wider">{eyebrow}</span>
            <h2 class="text-4xl md:text-5xl font-bold mt-4 mb-6">
                {title} " " <span class="gradient-text">{accent}</span>
            </h2>
            {subtitle
                .map(|s| {
                    view! { <p class="text-muted-foreground max-w-2xl mx-auto text-lg">{s}</p> }
                })}
        </div>
    }
}

/// Bring a section into view. The page sets `scroll-behavior: smooth`.
pub(crate) fn scroll_to(anchor: Anchor) {
    match document().get_element_by_id(anchor.id()) {
        Some(el) => el.scroll_into_view(),
        None => log::warn!("no section with id {}", anchor.id()),
    }
}

#[cfg(all(test, feature = "ssr"))]
pub(crate) fn render_html<F, V>(f: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    use leptos::tachys::view::RenderHtml;

    Owner::new().with(|| f().into_view().to_html())
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_icon_view_font_and_text() {
        let github = render_html(|| view! { <IconView icon=Icon::Github class="text-xl" /> });
        assert!(github.contains("devicon-github-plain text-xl"));

        let mail = render_html(|| view! { <IconView icon=Icon::Mail /> });
        assert!(mail.contains("📧"));
    }

    #[test]
    fn test_section_header_hidden_until_visible() {
        let hidden = render_html(|| {
            let visible = Signal::derive(|| false);
            view! { <SectionHeader visible eyebrow="MY WORK" title="Featured" accent="Projects" /> }
        });
        assert!(hidden.contains("opacity-0 translate-y-10"));
        assert!(hidden.contains("MY WORK"));

        let shown = render_html(|| {
            let visible = Signal::derive(|| true);
            view! {
                <SectionHeader
                    visible
                    eyebrow="MY WORK"
                    title="Featured"
                    accent="Projects"
                    subtitle="A selection"
                />
            }
        });
        assert!(shown.contains("opacity-100 translate-y-0"));
        assert!(shown.contains("A selection"));
    }
}
