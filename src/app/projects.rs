use leptos::prelude::*;

use super::{reveal::use_reveal, IconView, SectionHeader};
use crate::{
    content::{Anchor, Icon, Project, PROFILE, PROJECTS},
    reveal::{stagger, Reveal, GRID_THRESHOLD},
};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let (section, visible) = use_reveal(Anchor::Projects, GRID_THRESHOLD);

    view! {
        <section id=Anchor::Projects.id() node_ref=section class="py-32 relative">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <SectionHeader
                        visible
                        eyebrow="MY WORK"
                        title="Featured"
                        accent="Projects"
                        subtitle="A selection of projects that showcase my skills and passion for building"
                    />

                    <div class="grid md:grid-cols-2 gap-8">
                        {PROJECTS
                            .iter()
                            .enumerate()
                            .map(|(index, project)| {
                                view! { <ProjectCard project index visible /> }
                            })
                            .collect_view()}
                    </div>

                    <div class=move || {
                        format!(
                            "text-center mt-12 transition-all duration-700 delay-500 {}",
                            Reveal::FadeUp.classes(visible.get()),
                        )
                    }>
                        <a
                            href=PROFILE.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn-hero-outline btn-lg group inline-flex items-center gap-2"
                        >
                            "View All Projects"
                            <IconView
                                icon=Icon::ArrowRight
                                class="group-hover:translate-x-1 transition-transform"
                            />
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize, visible: Signal<bool>) -> impl IntoView {
    let has_links = project.live_url.is_some() || project.source_url.is_some();

    view! {
        <div
            class=move || {
                format!(
                    "group glass rounded-2xl overflow-hidden hover-lift transition-all duration-700 {}",
                    Reveal::FadeUp.classes(visible.get()),
                )
            }
            style=stagger(index, 150)
        >
            <div class="relative h-56 overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    loading="lazy"
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-card to-transparent opacity-60" />

                {project
                    .featured
                    .then(|| {
                        view! {
                            <div class="featured-badge absolute top-4 left-4 px-3 py-1 rounded-full bg-primary/90 text-primary-foreground text-xs font-medium">
                                "Featured"
                            </div>
                        }
                    })}

                {has_links
                    .then(|| {
                        view! {
                            <div class="absolute inset-0 bg-primary/20 opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-center justify-center gap-4">
                                {project
                                    .live_url
                                    .map(|href| view! { <OverlayLink href icon=Icon::ExternalLink label="Live demo" /> })}
                                {project
                                    .source_url
                                    .map(|href| view! { <OverlayLink href icon=Icon::Github label="Source code" /> })}
                            </div>
                        }
                    })}
            </div>

            <div class="p-6">
                <h3 class="text-xl font-semibold mb-3 group-hover:text-primary transition-colors">
                    {project.title}
                </h3>
                <p class="text-muted-foreground mb-4 line-clamp-2">{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-3 py-1 rounded-full bg-secondary text-secondary-foreground text-xs font-medium">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn OverlayLink(href: &'static str, icon: Icon, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            aria-label=label
            class="p-3 rounded-full bg-foreground/90 text-background hover:scale-110 transition-transform"
        >
            <IconView icon />
        </a>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;

    static LINKED: Project = Project {
        title: "Linked",
        description: "Has both links",
        image: "https://images.example.com/linked.png",
        tags: &["Rust", "Leptos"],
        live_url: Some("https://linked.example.com"),
        source_url: Some("https://github.com/example/linked"),
        featured: true,
    };

    static PLAIN: Project = Project {
        title: "Plain",
        description: "No links",
        image: "https://images.example.com/plain.png",
        tags: &["Rust"],
        live_url: None,
        source_url: None,
        featured: false,
    };

    fn card(project: &'static Project, index: usize) -> String {
        render_html(move || {
            let visible = Signal::derive(|| true);
            view! { <ProjectCard project index visible /> }
        })
    }

    #[test]
    fn test_featured_project_has_badge_and_links() {
        let html = card(&LINKED, 0);
        assert!(html.contains("featured-badge"));
        assert!(html.contains("https://linked.example.com"));
        assert!(html.contains("https://github.com/example/linked"));
        assert!(html.contains("Leptos"));
    }

    #[test]
    fn test_plain_project_has_no_badge_or_overlay() {
        let html = card(&PLAIN, 2);
        assert!(!html.contains("featured-badge"));
        assert!(!html.contains("Live demo"));
        assert!(html.contains("transition-delay: 300ms"));
    }

    #[test]
    fn test_section_starts_hidden() {
        let html = render_html(|| view! { <ProjectsSection /> });
        assert!(html.contains(r#"id="projects""#));
        assert_eq!(
            html.matches("opacity-0 translate-y-10").count(),
            PROJECTS.len() + 2
        );
    }
}
