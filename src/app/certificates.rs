use leptos::prelude::*;

use super::{reveal::use_reveal, IconView, SectionHeader};
use crate::{
    content::{Anchor, Certificate, Icon, CERTIFICATES},
    reveal::{stagger, Reveal, GRID_THRESHOLD},
};

#[component]
pub fn CertificatesSection() -> impl IntoView {
    let (section, visible) = use_reveal(Anchor::Certificates, GRID_THRESHOLD);

    view! {
        <section
            id=Anchor::Certificates.id()
            node_ref=section
            class="py-32 relative bg-secondary/20"
        >
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <SectionHeader
                        visible
                        eyebrow="ACHIEVEMENTS"
                        title="Certifications &"
                        accent="Badges"
                    />
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {CERTIFICATES
                            .iter()
                            .enumerate()
                            .map(|(index, certificate)| {
                                view! { <CertificateCard certificate index visible /> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CertificateCard(
    certificate: &'static Certificate,
    index: usize,
    visible: Signal<bool>,
) -> impl IntoView {
    view! {
        <div
            class=move || {
                format!(
                    "glass p-6 rounded-2xl transition-all duration-700 hover-lift group flex flex-col h-full {}",
                    Reveal::FadeUp.classes(visible.get()),
                )
            }
            style=stagger(index, 150)
        >
            <div class="flex items-start justify-between mb-4">
                <div class="p-3 bg-primary/10 rounded-xl group-hover:bg-primary/20 transition-colors">
                    <IconView icon=Icon::Award class="text-3xl" />
                </div>
                {certificate
                    .link
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="View credential"
                                class="credential-link text-muted-foreground hover:text-primary transition-colors"
                            >
                                <IconView icon=Icon::ExternalLink />
                            </a>
                        }
                    })}
            </div>

            <h3 class="text-xl font-bold mb-2 group-hover:text-primary transition-colors">
                {certificate.title}
            </h3>

            <div class="flex flex-wrap gap-2 text-sm text-muted-foreground mb-4">
                <span class="flex items-center gap-1">
                    <IconView icon=Icon::Check class="text-green-500 text-xs" />
                    {certificate.issuer}
                </span>
                <span class="flex items-center gap-1">
                    <IconView icon=Icon::Calendar class="text-xs" />
                    {certificate.date}
                </span>
                <span class="px-2 rounded-full bg-secondary text-secondary-foreground text-xs">
                    {certificate.category}
                </span>
            </div>

            <p class="text-muted-foreground text-sm flex-grow mb-4">{certificate.description}</p>

            {certificate
                .credential_id
                .map(|id| {
                    view! {
                        <div class="mt-auto pt-4 border-t border-border/50">
                            <p class="text-xs text-muted-foreground font-mono">"ID: " {id}</p>
                        </div>
                    }
                })}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;

    static UNLINKED: Certificate = Certificate {
        title: "Unlinked",
        issuer: "Somewhere",
        date: "Nov 2025",
        category: "Course Certification",
        link: None,
        description: "No public verification page.",
        credential_id: None,
    };

    static VERIFIED: Certificate = Certificate {
        title: "Verified",
        issuer: "Issuer",
        date: "Oct 2024",
        category: "Skill Badge",
        link: Some("https://verify.example.com/abc"),
        description: "Has a credential.",
        credential_id: Some("ABC123"),
    };

    fn card(certificate: &'static Certificate) -> String {
        render_html(move || {
            let visible = Signal::derive(|| false);
            view! { <CertificateCard certificate index=1 visible /> }
        })
    }

    #[test]
    fn test_unlinked_certificate_hides_link_and_id() {
        let html = card(&UNLINKED);
        assert!(!html.contains("credential-link"));
        assert!(!html.contains("ID: "));
        assert!(html.contains("transition-delay: 150ms"));
    }

    #[test]
    fn test_verified_certificate_shows_link_and_id() {
        let html = card(&VERIFIED);
        assert!(html.contains("https://verify.example.com/abc"));
        assert!(html.contains("ABC123"));
        assert!(html.contains("Skill Badge"));
    }
}
