use leptos::prelude::*;

use super::{scroll_to, IconView};
use crate::content::{Anchor, Icon, PROFILE, SOCIAL_LINKS};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center justify-center relative overflow-hidden">
            <div class="absolute inset-0 bg-hero-gradient" />
            <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-primary/10 rounded-full blur-3xl animate-float" />
            <div
                class="absolute bottom-1/4 right-1/4 w-80 h-80 bg-accent/5 rounded-full blur-3xl animate-float"
                style="animation-delay: 2s"
            />
            <div class="absolute inset-0 opacity-[0.02] bg-grid" />

            <div class="container mx-auto px-6 relative z-10">
                <div class="max-w-4xl mx-auto text-center">
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full glass mb-8 opacity-0 animate-fade-up">
                        <span class="w-2 h-2 bg-green-500 rounded-full animate-pulse" />
                        <span class="text-sm text-muted-foreground">"Available for work"</span>
                    </div>

                    <h1 class="text-5xl md:text-7xl lg:text-8xl font-bold mb-6 opacity-0 animate-fade-up animation-delay-100">
                        "Hi, I'm " <span class="gradient-text">{PROFILE.name}</span>
                    </h1>

                    <p class="text-xl md:text-2xl text-muted-foreground mb-4 opacity-0 animate-fade-up animation-delay-200">
                        {PROFILE.headline}
                    </p>

                    <p class="text-lg text-muted-foreground/80 max-w-2xl mx-auto mb-10 opacity-0 animate-fade-up animation-delay-300">
                        {PROFILE.summary}
                    </p>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-12 opacity-0 animate-fade-up animation-delay-400">
                        <button class="btn-hero btn-lg" on:click=move |_| scroll_to(Anchor::Projects)>
                            "View My Work"
                        </button>
                        <button
                            class="btn-hero-outline btn-lg"
                            on:click=move |_| scroll_to(Anchor::Contact)
                        >
                            "Get In Touch"
                        </button>
                    </div>

                    <div class="flex items-center justify-center gap-4 opacity-0 animate-fade-up animation-delay-500">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                let external = link.href.starts_with("https://");
                                view! {
                                    <a
                                        href=link.href
                                        target=external.then_some("_blank")
                                        rel=external.then_some("noopener noreferrer")
                                        aria-label=link.label
                                        class="p-3 rounded-full glass hover:bg-secondary/50 transition-all duration-300 hover:-translate-y-1 text-xl"
                                    >
                                        <IconView icon=link.icon />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="absolute bottom-10 left-1/2 -translate-x-1/2 opacity-0 animate-fade-in animation-delay-600">
                    <a
                        href=Anchor::About.href()
                        class="flex flex-col items-center gap-2 text-muted-foreground hover:text-foreground transition-colors"
                    >
                        <span class="text-sm">"Scroll to explore"</span>
                        <IconView icon=Icon::ArrowDown class="animate-bounce-subtle" />
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;

    #[test]
    fn test_hero_ctas_and_scroll_hint() {
        let html = render_html(|| view! { <HeroSection /> });
        assert!(html.contains("View My Work"));
        assert!(html.contains("Get In Touch"));
        assert!(html.contains(r##"href="#about""##));
        assert!(html.contains("Scroll to explore"));
        assert!(html.contains(PROFILE.name));
        for link in SOCIAL_LINKS {
            assert!(html.contains(link.href));
        }
    }
}
