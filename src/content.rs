mod data;

use pulldown_cmark::{html, Parser};
use serde_json::json;

pub use data::{
    ABOUT_PARAGRAPHS, ABOUT_QUOTE, CERTIFICATES, CONTACT_METHODS, EXPERIENCES, NAV_ITEMS,
    PROFILE, PROJECTS, SKILL_CATEGORIES, SOCIAL_LINKS, STATS,
};

/// Sections of the page that can be scrolled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    About,
    Experience,
    Skills,
    Projects,
    Certificates,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 6] = [
        Anchor::About,
        Anchor::Experience,
        Anchor::Skills,
        Anchor::Projects,
        Anchor::Certificates,
        Anchor::Contact,
    ];

    /// Element id of the section root.
    pub const fn id(self) -> &'static str {
        match self {
            Anchor::About => "about",
            Anchor::Experience => "experience",
            Anchor::Skills => "skills",
            Anchor::Projects => "projects",
            Anchor::Certificates => "certificates",
            Anchor::Contact => "contact",
        }
    }

    pub const fn href(self) -> &'static str {
        match self {
            Anchor::About => "#about",
            Anchor::Experience => "#experience",
            Anchor::Skills => "#skills",
            Anchor::Projects => "#projects",
            Anchor::Certificates => "#certificates",
            Anchor::Contact => "#contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Code,
    Rocket,
    Users,
    Zap,
    Mail,
    Phone,
    MapPin,
    Github,
    Linkedin,
    Briefcase,
    Calendar,
    Building,
    Award,
    Check,
    ExternalLink,
    ArrowDown,
    ArrowRight,
    Menu,
    Close,
}

/// How an [`Icon`] is drawn: either a devicon font class or a plain glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconGlyph {
    Font(&'static str),
    Text(&'static str),
}

impl Icon {
    pub const fn glyph(self) -> IconGlyph {
        match self {
            Icon::Github => IconGlyph::Font("devicon-github-plain"),
            Icon::Linkedin => IconGlyph::Font("devicon-linkedin-plain"),
            Icon::Code => IconGlyph::Text("⌨️"),
            Icon::Rocket => IconGlyph::Text("🚀"),
            Icon::Users => IconGlyph::Text("👥"),
            Icon::Zap => IconGlyph::Text("⚡"),
            Icon::Mail => IconGlyph::Text("📧"),
            Icon::Phone => IconGlyph::Text("📞"),
            Icon::MapPin => IconGlyph::Text("📍"),
            Icon::Briefcase => IconGlyph::Text("💼"),
            Icon::Calendar => IconGlyph::Text("📅"),
            Icon::Building => IconGlyph::Text("🏢"),
            Icon::Award => IconGlyph::Text("🏆"),
            Icon::Check => IconGlyph::Text("✔"),
            Icon::ExternalLink => IconGlyph::Text("↗"),
            Icon::ArrowDown => IconGlyph::Text("↓"),
            Icon::ArrowRight => IconGlyph::Text("→"),
            Icon::Menu => IconGlyph::Text("☰"),
            Icon::Close => IconGlyph::Text("✕"),
        }
    }
}

/// Proficiency percentage, bounded to `0..=100`.
///
/// The constructor is `const`, so an out-of-range level in the static skill
/// table is a compile error rather than a rendering bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Level(u8);

impl Level {
    pub const MAX: Level = Level(100);

    pub const fn new(value: u8) -> Level {
        assert!(value <= 100, "skill level must be within 0..=100");
        Level(value)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTile {
    pub icon: Icon,
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub title: &'static str,
    pub date: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub roles: &'static [Role],
}

impl Experience {
    /// Companies with more than one role render their roles on a timeline.
    pub fn has_timeline(&self) -> bool {
        self.roles.len() > 1
    }

    /// Number of timeline markers drawn, one per role when on a timeline.
    pub fn timeline_markers(&self) -> usize {
        if self.has_timeline() {
            self.roles.len()
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certificate {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub link: Option<&'static str>,
    pub description: &'static str,
    pub credential_id: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub source_url: Option<&'static str>,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: Level,
}

impl Skill {
    /// Rendered bar width: empty until the section is visible.
    pub fn bar_width(&self, visible: bool) -> String {
        if visible {
            format!("{}%", self.level.get())
        } else {
            "0%".to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

/// Render a short Markdown snippet to HTML.
pub fn render_markdown(src: &str) -> String {
    let parser = Parser::new(src);
    let mut out = String::with_capacity(src.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// schema.org `Person` description of the site owner, as JSON-LD.
pub fn person_json_ld() -> String {
    let same_as = SOCIAL_LINKS
        .iter()
        .filter(|l| l.href.starts_with("https://"))
        .map(|l| l.href)
        .collect::<Vec<_>>();
    let skills = SKILL_CATEGORIES
        .iter()
        .flat_map(|c| c.skills.iter().map(|s| s.name))
        .collect::<Vec<_>>();
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": PROFILE.name,
        "jobTitle": PROFILE.headline,
        "email": format!("mailto:{}", PROFILE.email),
        "address": PROFILE.location,
        "sameAs": same_as,
        "knowsAbout": skills,
    })
    .to_string()
}
