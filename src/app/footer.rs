use leptos::prelude::*;

use super::IconView;
use crate::{
    config::copyright_year,
    content::{NAV_ITEMS, PROFILE, SOCIAL_LINKS},
};

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = match copyright_year() {
        Some(year) => format!("© {year} {}. Built with Rust & Leptos.", PROFILE.name),
        None => format!("© {}. Built with Rust & Leptos.", PROFILE.name),
    };

    view! {
        <footer class="border-t border-border/50 py-12">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row items-center justify-between gap-8">
                    <a href="#" class="text-xl font-bold gradient-text">
                        {PROFILE.name}
                    </a>
                    <nav class="flex flex-wrap justify-center gap-6 text-sm">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.anchor.href()
                                        class="text-muted-foreground hover:text-foreground transition-colors"
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <div class="flex gap-4 text-xl">
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
                                        class="text-muted-foreground hover:text-primary transition-colors"
                                    >
                                        <IconView icon=link.icon />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <p class="mt-8 text-center text-sm text-muted-foreground">{copyright}</p>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;

    #[test]
    fn test_footer_links_and_year() {
        let html = render_html(|| view! { <Footer /> });
        for item in NAV_ITEMS {
            assert!(html.contains(item.anchor.href()));
        }
        let year = copyright_year().expect("build time should be stamped");
        assert!(html.contains(&format!("© {year}")));
    }

    #[test]
    fn test_external_socials_open_in_new_tab() {
        let html = render_html(|| view! { <Footer /> });
        let external = SOCIAL_LINKS
            .iter()
            .filter(|l| l.href.starts_with("https://"))
            .count();
        assert!(external > 0);
        assert_eq!(html.matches(r#"target="_blank""#).count(), external);
        assert_eq!(html.matches(r#"rel="noopener noreferrer""#).count(), external);
    }
}
