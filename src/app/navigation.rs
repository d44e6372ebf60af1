use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::{scroll_to, IconView};
use crate::{
    content::{Anchor, Icon, NAV_ITEMS},
    nav::NavState,
    reveal::stagger_ms,
};

#[component]
pub fn Navigation() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let (_, scroll_y) = use_window_scroll();

    Effect::new(move |_| {
        let y = scroll_y.get();
        nav.update(|n| n.on_scroll(y));
    });

    let follow = move |anchor: Anchor| {
        if let Some(target) = nav.try_update(|n| n.activate(anchor)) {
            scroll_to(target);
        }
    };

    view! {
        <nav class=move || {
            if nav.get().scrolled() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-500 glass py-4"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-500 py-6"
            }
        }>
            <div class="container mx-auto px-6 flex items-center justify-between">
                <a href="#" class="text-xl font-bold gradient-text animate-fade-in">
                    "Portfolio"
                </a>

                <div class="hidden md:flex items-center gap-8">
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            view! {
                                <a
                                    href=item.anchor.href()
                                    class="text-muted-foreground hover:text-foreground transition-colors duration-300 relative group opacity-0 animate-fade-in"
                                    style=format!(
                                        "animation-delay: {}ms; animation-fill-mode: forwards",
                                        stagger_ms(i + 1, 100),
                                    )
                                >
                                    {item.label}
                                    <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-primary transition-all duration-300 group-hover:w-full" />
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        class="btn-hero btn-sm opacity-0 animate-fade-in"
                        style="animation-delay: 500ms; animation-fill-mode: forwards"
                        on:click=move |_| scroll_to(Anchor::Contact)
                    >
                        "Hire Me"
                    </button>
                </div>

                <button
                    class="md:hidden p-2 rounded-md hover:bg-secondary/50 text-xl"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || nav.get().menu_open().to_string()
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {move || {
                        let icon = if nav.get().menu_open() { Icon::Close } else { Icon::Menu };
                        view! { <IconView icon /> }
                    }}
                </button>
            </div>

            <div class=move || {
                if nav.get().menu_open() {
                    "md:hidden absolute top-full left-0 right-0 glass overflow-hidden transition-all duration-300 max-h-80 opacity-100"
                } else {
                    "md:hidden absolute top-full left-0 right-0 glass overflow-hidden transition-all duration-300 max-h-0 opacity-0"
                }
            }>
                <div class="container mx-auto px-6 py-4 flex flex-col gap-4">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let anchor = item.anchor;
                            view! {
                                <a
                                    href=anchor.href()
                                    class="text-muted-foreground hover:text-foreground transition-colors py-2"
                                    on:click=move |_| {
                                        nav.update(|n| {
                                            n.activate(anchor);
                                        })
                                    }
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button class="btn-hero btn-sm" on:click=move |_| follow(Anchor::Contact)>
                        "Hire Me"
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;

    #[test]
    fn test_renders_every_nav_item_twice() {
        let html = render_html(|| view! { <Navigation /> });
        for item in NAV_ITEMS {
            // desktop and mobile menus
            assert_eq!(html.matches(item.anchor.href()).count(), 2, "{}", item.label);
        }
    }

    #[test]
    fn test_starts_unscrolled_with_menu_closed() {
        let html = render_html(|| view! { <Navigation /> });
        assert!(html.contains("duration-500 py-6"));
        assert!(html.contains("max-h-0 opacity-0"));
        assert!(!html.contains("max-h-80"));
    }
}
