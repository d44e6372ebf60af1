use leptos::prelude::*;

use super::{reveal::use_reveal, SectionHeader};
use crate::{
    content::{Anchor, SkillCategory, SKILL_CATEGORIES},
    reveal::{bar_style, stagger, Reveal, SECTION_THRESHOLD},
};

#[component]
pub fn SkillsSection() -> impl IntoView {
    let (section, visible) = use_reveal(Anchor::Skills, SECTION_THRESHOLD);

    view! {
        <section id=Anchor::Skills.id() node_ref=section class="py-32 relative bg-secondary/20">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <SectionHeader
                        visible
                        eyebrow="MY EXPERTISE"
                        title="Skills &"
                        accent="Technologies"
                        subtitle="A comprehensive toolkit built through years of hands-on experience"
                    />
                    <div class="grid md:grid-cols-2 gap-8">
                        {SKILL_CATEGORIES
                            .iter()
                            .enumerate()
                            .map(|(index, category)| {
                                view! { <SkillCard category index visible /> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// A category card. Each bar grows from empty to its level once visible.
#[component]
fn SkillCard(category: &'static SkillCategory, index: usize, visible: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class=move || {
                format!(
                    "glass p-8 rounded-2xl transition-all duration-700 {}",
                    Reveal::FadeUp.classes(visible.get()),
                )
            }
            style=stagger(index, 150)
        >
            <h3 class="text-xl font-semibold mb-6 flex items-center gap-3">
                <span class="w-2 h-2 bg-primary rounded-full" />
                {category.title}
            </h3>
            <div class="space-y-5">
                {category
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(skill_index, skill)| {
                        view! {
                            <div>
                                <div class="flex justify-between mb-2">
                                    <span class="text-foreground font-medium">{skill.name}</span>
                                    <span class="text-muted-foreground text-sm">
                                        {format!("{}%", skill.level.get())}
                                    </span>
                                </div>
                                <div class="h-2 bg-secondary rounded-full overflow-hidden">
                                    <div
                                        class="skill-bar h-full rounded-full transition-all duration-1000 ease-out bg-gradient-primary"
                                        style=move || {
                                            bar_style(&skill.bar_width(visible.get()), index, skill_index)
                                        }
                                    />
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::{
        app::render_html,
        content::{Level, Skill},
    };

    static EDGES: SkillCategory = SkillCategory {
        title: "Edges",
        skills: &[
            Skill {
                name: "X",
                level: Level::new(0),
            },
            Skill {
                name: "Y",
                level: Level::new(100),
            },
        ],
    };

    fn card(shown: bool) -> String {
        render_html(move || {
            let visible = Signal::derive(move || shown);
            view! { <SkillCard category=&EDGES index=0 visible /> }
        })
    }

    #[test]
    fn test_bars_empty_before_visible() {
        let html = card(false);
        assert_eq!(html.matches("width: 0%").count(), 2);
        assert!(!html.contains("width: 100%"));
    }

    #[test]
    fn test_bars_fill_to_level_once_visible() {
        let html = card(true);
        assert!(html.contains("width: 0%; transition-delay: 0ms"));
        assert!(html.contains("width: 100%; transition-delay: 100ms"));
    }

    #[test]
    fn test_section_renders_all_bars_empty_on_server() {
        let html = render_html(|| view! { <SkillsSection /> });
        let total = SKILL_CATEGORIES.iter().map(|c| c.skills.len()).sum::<usize>();
        assert_eq!(html.matches("width: 0%").count(), total);
        assert!(html.contains(r#"id="skills""#));
    }
}
