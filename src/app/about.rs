use leptos::prelude::*;

use super::{reveal::use_reveal, IconView, SectionHeader};
use crate::{
    content::{render_markdown, Anchor, ABOUT_PARAGRAPHS, ABOUT_QUOTE, STATS},
    reveal::{stagger, Reveal, SECTION_THRESHOLD},
};

#[component]
pub fn AboutSection() -> impl IntoView {
    let (section, visible) = use_reveal(Anchor::About, SECTION_THRESHOLD);

    view! {
        <section id=Anchor::About.id() node_ref=section class="py-32 relative">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <SectionHeader
                        visible
                        eyebrow="ABOUT ME"
                        title="Turning Ideas Into"
                        accent="Reality"
                        subtitle="A passionate developer dedicated to crafting exceptional digital experiences"
                    />

                    <div class="grid lg:grid-cols-2 gap-16 items-center">
                        <div class=move || {
                            format!(
                                "space-y-6 transition-all duration-700 delay-200 {}",
                                Reveal::FromLeft.classes(visible.get()),
                            )
                        }>
                            {ABOUT_PARAGRAPHS
                                .iter()
                                .map(|p| {
                                    view! {
                                        <div
                                            class="text-lg text-muted-foreground leading-relaxed prose-strong"
                                            inner_html=render_markdown(p)
                                        ></div>
                                    }
                                })
                                .collect_view()}
                            <div class="glass p-6 rounded-xl mt-8">
                                <p class="text-foreground font-medium">{ABOUT_QUOTE}</p>
                            </div>
                        </div>

                        <div class=move || {
                            format!(
                                "grid grid-cols-2 gap-6 transition-all duration-700 delay-400 {}",
                                Reveal::FromRight.classes(visible.get()),
                            )
                        }>
                            {STATS
                                .iter()
                                .enumerate()
                                .map(|(i, stat)| {
                                    view! {
                                        <div
                                            class="glass p-8 rounded-2xl hover-lift group"
                                            style=stagger(i, 100)
                                        >
                                            <IconView
                                                icon=stat.icon
                                                class="block text-3xl mb-4 group-hover:scale-110 transition-transform duration-300"
                                            />
                                            <div class="text-4xl font-bold gradient-text mb-2">
                                                {stat.value}
                                            </div>
                                            <div class="text-muted-foreground text-sm">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
