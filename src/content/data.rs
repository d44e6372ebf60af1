use super::{
    Anchor, Certificate, ContactMethod, Experience, Icon, Level, NavItem, Profile, Project, Role,
    Skill, SkillCategory, SocialLink, StatTile,
};

pub static PROFILE: Profile = Profile {
    name: "Hardik Jain",
    headline: "AI Engineer & Backend Developer",
    summary: "B.Tech CSE (AIML) Student at VIT-Bhopal. Passionate about AI/ML, C/C++, and building scalable backend systems. TCS CodeVita AIR 5774 (Global Rank).",
    email: "hardikjain0083@gmail.com",
    location: "Bhiwadi, Rajasthan",
    github: "https://github.com",
    linkedin: "https://linkedin.com",
};

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "About",
        anchor: Anchor::About,
    },
    NavItem {
        label: "Experience",
        anchor: Anchor::Experience,
    },
    NavItem {
        label: "Skills",
        anchor: Anchor::Skills,
    },
    NavItem {
        label: "Projects",
        anchor: Anchor::Projects,
    },
    NavItem {
        label: "Certificates",
        anchor: Anchor::Certificates,
    },
    NavItem {
        label: "Contact",
        anchor: Anchor::Contact,
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: Icon::Github,
        label: "GitHub Profile",
        href: "https://github.com",
    },
    SocialLink {
        icon: Icon::Linkedin,
        label: "LinkedIn Profile",
        href: "https://linkedin.com",
    },
    SocialLink {
        icon: Icon::Mail,
        label: "Email",
        href: "mailto:hardikjain0083@gmail.com",
    },
];

pub static ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a Second Year B.Tech Computer Science student specializing in AI and Machine Learning at VIT-Bhopal University. I have a strong foundation in Python, C, and C++, with a keen interest in building intelligent backend systems.",
    "Currently, I serve as the **Co-Founder of CertiFLEX**, a startup validating educational content, and as the **Treasurer of the Entrepreneurship Cell (E-Cell)** at my university. I previously served as a Core Member of the Finance and Sponsorship team at E-Cell.",
    "My technical journey is marked by achievements like securing a **Global Rank of 5774** in TCS CodeVita Season 12 (Top 1%) and publishing research on AI-driven recruitment.",
];

pub static ABOUT_QUOTE: &str = "\"I believe in the power of AI to solve real-world problems, from educational verification to healthcare accessibility.\"";

pub static STATS: &[StatTile] = &[
    StatTile {
        icon: Icon::Code,
        value: "2nd",
        label: "Year Student",
    },
    StatTile {
        icon: Icon::Rocket,
        value: "500k+",
        label: "Participants Beaten (CodeVita)",
    },
    StatTile {
        icon: Icon::Users,
        value: "2+",
        label: "Leadership Roles",
    },
    StatTile {
        icon: Icon::Zap,
        value: "AIML",
        label: "Specialization",
    },
];

pub static EXPERIENCES: &[Experience] = &[
    Experience {
        company: "Entrepreneurship Cell (E-Cell), VIT-Bhopal",
        roles: &[
            Role {
                title: "Treasurer",
                date: "Sep 2025 - Present",
                bullets: &[
                    "Managing financial operations, budget allocation, and funding strategies.",
                    "Leading the financial planning for upcoming events and club activities.",
                ],
            },
            Role {
                title: "Core Member (Finance & Sponsorship)",
                date: "Sep 2024 - Aug 2025",
                bullets: &[
                    "Facilitated sponsorships and managed financial logistics for events.",
                    "Collaborated with the team to secure funding for club initiatives.",
                ],
            },
        ],
    },
    Experience {
        company: "CertiFLEX",
        roles: &[Role {
            title: "Co-Founder",
            date: "Aug 2025 - Present",
            bullets: &[
                "Building a browser extension to validate educational content consumption on YouTube.",
                "Implemented features for timestamp verification and random attention checks.",
                "Pitched startup idea at 'Parichat X Illuminate 2025'.",
            ],
        }],
    },
    Experience {
        company: "Edunet Foundation",
        roles: &[Role {
            title: "Virtual Intern (AI)",
            date: "Jun 2025 - Jul 2025",
            bullets: &[
                "Completed 4-week intensive internship focused on AI pipelines.",
                "Developed a 'Garbage Classifier' using Transfer Learning as a capstone project.",
            ],
        }],
    },
];

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill {
        name,
        level: Level::new(level),
    }
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        skills: &[
            skill("React", 95),
            skill("TypeScript", 90),
            skill("Next.js", 85),
            skill("Tailwind CSS", 95),
            skill("Vue.js", 75),
        ],
    },
    SkillCategory {
        title: "Backend",
        skills: &[
            skill("Node.js", 90),
            skill("Python", 85),
            skill("PostgreSQL", 85),
            skill("GraphQL", 80),
            skill("Redis", 75),
        ],
    },
    SkillCategory {
        title: "DevOps & Tools",
        skills: &[
            skill("Docker", 85),
            skill("AWS", 80),
            skill("Git", 95),
            skill("CI/CD", 85),
            skill("Kubernetes", 70),
        ],
    },
    SkillCategory {
        title: "AI & ML",
        skills: &[
            skill("OpenAI API", 90),
            skill("LangChain", 85),
            skill("Vector DBs", 80),
            skill("TensorFlow", 70),
            skill("RAG Systems", 85),
        ],
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "AI-Powered Analytics Dashboard",
        description: "A comprehensive analytics platform with AI-driven insights, real-time data visualization, and predictive modeling capabilities.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop",
        tags: &["React", "TypeScript", "Python", "TensorFlow"],
        live_url: None,
        source_url: None,
        featured: true,
    },
    Project {
        title: "E-Commerce Platform",
        description: "Modern e-commerce solution with seamless checkout, inventory management, and personalized recommendations.",
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&h=600&fit=crop",
        tags: &["Next.js", "Stripe", "PostgreSQL", "Redis"],
        live_url: None,
        source_url: None,
        featured: true,
    },
    Project {
        title: "Real-Time Collaboration Tool",
        description: "Collaborative workspace with real-time editing, video conferencing, and project management features.",
        image: "https://images.unsplash.com/photo-1552664730-d307ca884978?w=800&h=600&fit=crop",
        tags: &["React", "WebSocket", "Node.js", "MongoDB"],
        live_url: None,
        source_url: None,
        featured: false,
    },
    Project {
        title: "Smart Home IoT Dashboard",
        description: "Centralized control system for smart home devices with automation rules and energy monitoring.",
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800&h=600&fit=crop",
        tags: &["React", "MQTT", "InfluxDB", "Grafana"],
        live_url: None,
        source_url: None,
        featured: false,
    },
];

pub static CERTIFICATES: &[Certificate] = &[
    Certificate {
        title: "Applied Machine Learning in Python",
        issuer: "University of Michigan (Coursera)",
        date: "Dec 2025",
        category: "Course Certification",
        link: Some("https://www.coursera.org/account/accomplishments/verify/R9L8Z0J5POUA"),
        description: "Applied machine learning techniques using Python (scikit-learn).",
        credential_id: None,
    },
    Certificate {
        title: "Prepare Data for ML APIs on Google Cloud",
        issuer: "Google Cloud",
        date: "Dec 2025",
        category: "Skill Badge",
        link: Some("https://www.credly.com/badges/fd9ea153-c656-4038-b855-ff9a39e0a804/linked_in_profile"),
        description: "Validated ability to build data processing pipelines using Google Cloud tools including Dataprep, Dataflow, Dataproc, and BigQuery.",
        credential_id: None,
    },
    Certificate {
        title: "Programming With Generative AI",
        issuer: "NPTEL (IISc Bangalore)",
        date: "Nov 2025",
        category: "Course Certification",
        link: None,
        description: "Comprehensive course on leveraging LLMs, Prompt Engineering, RAG applications, and AI tool efficiency.",
        credential_id: None,
    },
    Certificate {
        title: "Python for Data Science, AI & Development",
        issuer: "Coursera (IBM)",
        date: "Oct 2024",
        category: "Course Certification",
        link: Some("https://www.coursera.org/account/accomplishments/verify/HJ9U7P0UJTVM"),
        description: "Foundational training in Data Science ecosystem (Pandas, NumPy, Web Scraping) and API interaction.",
        credential_id: Some("HJ9U7P0UJTVM"),
    },
];

pub static CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        icon: Icon::Mail,
        label: "Email",
        value: "hardikjain0083@gmail.com",
        link: Some("mailto:hardikjain0083@gmail.com"),
    },
    ContactMethod {
        icon: Icon::Phone,
        label: "Phone",
        value: "+91 9680500881",
        link: Some("tel:+919680500881"),
    },
    ContactMethod {
        icon: Icon::MapPin,
        label: "Location",
        value: "Bhiwadi, Rajasthan",
        link: None,
    },
];
