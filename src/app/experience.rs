use leptos::prelude::*;

use super::{reveal::use_reveal, IconView, SectionHeader};
use crate::{
    content::{Anchor, Experience, Icon, Role, EXPERIENCES},
    reveal::{stagger, Reveal, SECTION_THRESHOLD},
};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let (section, visible) = use_reveal(Anchor::Experience, SECTION_THRESHOLD);

    view! {
        <section id=Anchor::Experience.id() node_ref=section class="py-32 relative">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto">
                    <SectionHeader
                        visible
                        eyebrow="MY JOURNEY"
                        title="Professional"
                        accent="Experience"
                    />
                    <div class="space-y-12">
                        {EXPERIENCES
                            .iter()
                            .enumerate()
                            .map(|(index, experience)| {
                                view! { <ExperienceCard experience index visible /> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// One employer. Several roles at the same company are drawn on a timeline.
#[component]
fn ExperienceCard(
    experience: &'static Experience,
    index: usize,
    visible: Signal<bool>,
) -> impl IntoView {
    let timeline = experience.has_timeline();

    view! {
        <div
            class=move || {
                format!(
                    "glass p-8 rounded-2xl transition-all duration-700 hover-lift {}",
                    Reveal::FromLeft.classes(visible.get()),
                )
            }
            style=stagger(index, 200)
        >
            <div class="flex items-center gap-3 mb-6 border-b border-border/50 pb-4">
                <IconView icon=Icon::Building class="text-2xl" />
                <h3 class="text-2xl font-bold text-foreground">{experience.company}</h3>
            </div>

            <div class="space-y-8 relative">
                {timeline
                    .then(|| {
                        view! {
                            <div class="timeline-connector absolute left-2.5 top-3 bottom-3 w-0.5 bg-border/50" />
                        }
                    })}
                {experience
                    .roles
                    .iter()
                    .map(|role| view! { <RoleEntry role timeline /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn RoleEntry(role: &'static Role, timeline: bool) -> impl IntoView {
    let body_class = if timeline { "pl-8" } else { "" };

    view! {
        <div class="relative">
            {timeline
                .then(|| {
                    view! {
                        <div class="timeline-marker absolute left-0 top-2 w-5 h-5 rounded-full bg-secondary border-2 border-primary z-10" />
                    }
                })}
            <div class=body_class>
                <div class="flex flex-col md:flex-row md:items-center justify-between gap-2 mb-2">
                    <h4 class="text-xl font-bold text-foreground flex items-center gap-2">
                        {(!timeline).then(|| view! { <IconView icon=Icon::Briefcase /> })}
                        {role.title}
                    </h4>
                    <div class="flex items-center gap-2 text-muted-foreground text-sm bg-secondary/50 px-3 py-1 rounded-full w-fit">
                        <IconView icon=Icon::Calendar />
                        {role.date}
                    </div>
                </div>
                <ul class="space-y-2 mt-3 ml-4 list-disc marker:text-primary">
                    {role
                        .bullets
                        .iter()
                        .map(|item| view! { <li class="text-muted-foreground">{*item}</li> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;

    static SINGLE: Experience = Experience {
        company: "Solo Co",
        roles: &[Role {
            title: "Founder",
            date: "2025 - Present",
            bullets: &["Started it"],
        }],
    };

    static MULTI: Experience = Experience {
        company: "Ladder Inc",
        roles: &[
            Role {
                title: "Lead",
                date: "2025 - Present",
                bullets: &["Leads"],
            },
            Role {
                title: "Member",
                date: "2024 - 2025",
                bullets: &["Helped"],
            },
        ],
    };

    fn card(experience: &'static Experience) -> String {
        render_html(move || {
            let visible = Signal::derive(|| true);
            view! { <ExperienceCard experience index=0 visible /> }
        })
    }

    #[test]
    fn test_single_role_has_no_timeline() {
        let html = card(&SINGLE);
        assert!(!html.contains("timeline-connector"));
        assert_eq!(html.matches("timeline-marker").count(), 0);
        assert!(html.contains("💼"));
    }

    #[test]
    fn test_multiple_roles_draw_timeline_in_order() {
        let html = card(&MULTI);
        assert_eq!(html.matches("timeline-connector").count(), 1);
        assert_eq!(html.matches("timeline-marker").count(), 2);
        let lead = html.find("Lead").expect("first role");
        let member = html.find("Member").expect("second role");
        assert!(lead < member);
    }

    #[test]
    fn test_section_lists_every_company() {
        let html = render_html(|| view! { <ExperienceSection /> });
        assert!(html.contains(r#"id="experience""#));
        for exp in EXPERIENCES {
            assert!(html.contains(&exp.company.replace('&', "&amp;")));
        }
    }
}
