//! Static page content: projects, skills, experience and contact details.
//!
//! Everything here is compiled in; the page has no content backend.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const OWNER_NAME: &str = "Victor Chukwuma";
pub const BRAND: &str = "Vichie";
pub const RESUME_PATH: &str = "/resume.pdf";
pub const RESUME_FILE_NAME: &str = "Victor_Chukwuma_Resume.pdf";
pub const CONTACT_EMAIL: &str = "victorchukwuma@proton.me";
pub const LOCATION: &str = "Ebonyi state, Nigeria";
pub const MAP_CAPTION: &str = "Abakaliki, Nigeria";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d63449.14627712487!2d8.059713918210862!3d6.319858829309671!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x105ca0692143e095%3A0xe38f8845a6d5a3ae!2sAbakaliki%2C%20Ebonyi!5e0!3m2!1sen!2sng!4v1746486463339!5m2!1sen!2sng";
pub const MAP_FALLBACK_IMAGE: &str = "/images/map-abakaliki.svg";

// =============================================================================
// NAVIGATION
// =============================================================================

/// Page sections reachable from the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    About,
    Projects,
    Skills,
    Experience,
    Contact,
}

impl Section {
    pub const NAV: [Section; 5] = [Self::About, Self::Projects, Self::Skills, Self::Experience, Self::Contact];

    /// DOM id of the section element.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Contact => "Contact",
        }
    }
}

// =============================================================================
// HERO + ABOUT
// =============================================================================

pub struct HeroWord {
    pub text: &'static str,
    pub icon: &'static str,
}

pub const HERO_WORDS: [HeroWord; 4] = [
    HeroWord { text: "Ideas", icon: "/images/ideas.svg" },
    HeroWord { text: "Concepts", icon: "/images/concepts.svg" },
    HeroWord { text: "Designs", icon: "/images/designs.svg" },
    HeroWord { text: "Code", icon: "/images/code.svg" },
];

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm a passionate Frontend Developer with over 3 years of experience creating modern web applications. \
     I specialize in Next, React, Node.js, and cloud technologies, with a strong focus on creating performant \
     and accessible user experiences.",
    "My approach combines technical excellence with creative problem-solving. I'm constantly learning new \
     technologies and techniques to stay at the forefront of Software development.",
];

pub const PROFILE_IMAGE: &str = "/images/profile.svg";

/// A labeled percentage bar in the About section.
pub struct CoreSkill {
    pub name: &'static str,
    pub percent: u8,
}

pub const CORE_SKILLS: [CoreSkill; 3] = [
    CoreSkill { name: "UI Development", percent: 95 },
    CoreSkill { name: "API Integration", percent: 85 },
    CoreSkill { name: "Version Control", percent: 80 },
];

// =============================================================================
// PROJECTS
// =============================================================================

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub demo_url: &'static str,
    pub source_url: &'static str,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "Admin UI development",
        description: "A full-featured financial tracking User Interface for administrators",
        image: "/images/projects/admin-ui.svg",
        tags: &["Next", "Node.js", "Typescript"],
        demo_url: "https://dashboard-lac-six-40.vercel.app/dashboard",
        source_url: "https://github.com/vichie34/dashboard",
    },
    Project {
        title: "Vision Testing Application",
        description: "A mobile-first AI-powered web app with decentralized payment method and authenticaton.",
        image: "/images/projects/opticheck.svg",
        tags: &["React", "Tailwindcss", "Typescript", "API Integration"],
        demo_url: "https://opticheck.netlify.app",
        source_url: "https://github.com/vichie34/opticalTech",
    },
    Project {
        title: "Wistop virtual top-up application",
        description: "A virtual top-up application with a responsive design and user-friendly interface.",
        image: "/images/projects/wistop.svg",
        tags: &["Javascript", "Jquery", "Css3", "Html5"],
        demo_url: "https://wistopup-demo.netlify.app/",
        source_url: "https://github.com/vichie34/wistopVtu",
    },
    Project {
        title: "Real Estate Website",
        description: "A Real Estate landing page with login/Sign up.",
        image: "/images/projects/real-estate.svg",
        tags: &["React", "API Integration", "Node", "Figma"],
        demo_url: "https://vermillion-entremet-129645.netlify.app/",
        source_url: "https://github.com/vichie34/real-estate",
    },
    Project {
        title: "Social Media Platform",
        description: "A social networking platform with messaging and content sharing on mobile app.",
        image: "/images/projects/social.svg",
        tags: &["React", "API Integration", "Figma"],
        demo_url: "https://hilarious-heliotrope-cbb8c9.netlify.app/",
        source_url: "https://github.com/Confide",
    },
    Project {
        title: "Vehicle security Dashboard",
        description: "A vehicle application with theft report, Vehicle Identification retrival/Issuance.",
        image: "/images/projects/vehicle-security.svg",
        tags: &["Vanilla JS", "API Integration", "Local Storage"],
        demo_url: "https://spacev7.netlify.app",
        source_url: "https://github.com/vichie34/kelli_project",
    },
];

// =============================================================================
// SKILLS
// =============================================================================

pub struct Skill {
    pub name: &'static str,
    pub level: &'static str,
    pub years: u8,
    pub icon: &'static str,
}

/// Skills tab. `Frontend` is selected first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkillCategory {
    #[default]
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [Self::Frontend, Self::Backend, Self::Tools];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Tools => "Tools",
        }
    }

    #[must_use]
    pub fn skills(self) -> &'static [Skill] {
        match self {
            Self::Frontend => &FRONTEND_SKILLS,
            Self::Backend => &BACKEND_SKILLS,
            Self::Tools => &TOOL_SKILLS,
        }
    }
}

const fn skill(name: &'static str, level: &'static str, years: u8, icon: &'static str) -> Skill {
    Skill { name, level, years, icon }
}

const FRONTEND_SKILLS: [Skill; 8] = [
    skill("React", "Intermediate", 3, "⚛️"),
    skill("JavaScript", "Expert", 4, "🟨"),
    skill("TypeScript", "Intermediate", 2, "🔷"),
    skill("HTML/CSS", "Expert", 4, "🌐"),
    skill("Tailwind CSS", "Intermediate", 2, "🎨"),
    skill("Next.js", "Intermediate", 1, "▲"),
    skill("Three.js", "Intermediate", 1, "🧊"),
    skill("GSAP", "Intermediate", 1, "🎭"),
];

const BACKEND_SKILLS: [Skill; 4] = [
    skill("Node.js", "Intermediate", 2, "🟢"),
    skill("Express", "Intermediate", 2, "🚂"),
    skill("MongoDB", "Intermediate", 3, "🍃"),
    skill("REST API", "Expert", 4, "🔄"),
];

const TOOL_SKILLS: [Skill; 8] = [
    skill("Git/Github", "Expert", 3, "🔄"),
    skill("Docker", "Intermediate", 2, "🐳"),
    skill("AWS", "Intermediate", 3, "☁️"),
    skill("Vercel", "Intermediate", 3, "▲"),
    skill("Figma", "Intermediate", 3, "🎨"),
    skill("Supabase", "Intermediate", 2, "⚡"),
    skill("Webpack", "Intermediate", 4, "📦"),
    skill("Vite", "Intermediate", 2, "⚡"),
];

// =============================================================================
// EXPERIENCE
// =============================================================================

pub struct Experience {
    pub company: &'static str,
    pub position: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub logo: &'static str,
}

pub const EXPERIENCES: [Experience; 3] = [
    Experience {
        company: "Coders Triangle",
        position: "Junior Frontend Developer",
        period: "2021 - 2023",
        description: "Created responsive web applications for various clients. Worked closely with designers to \
                      implement pixel-perfect UIs and smooth animations.",
        achievements: &[
            "Developed 15+ client websites with responsive designs",
            "Implemented accessibility improvements across all projects",
            "Created a reusable component library reducing development time by 30%",
        ],
        logo: "/images/logos/coders-triangle.svg",
    },
    Experience {
        company: "Goodisoft Technologies",
        position: "Developer Intern",
        period: "2024 - 2025",
        description: "Developed and maintained multiple client projects using React, Node.js, and Git. \
                      Collaborated with design and product teams to deliver high-quality web applications.",
        achievements: &[
            "Built a real-time dashboard that increased client efficiency by 35%",
            "Implemented authentication system with multi-factor authentication",
            "Optimized database queries resulting in 50% faster response times",
        ],
        logo: "/images/logos/goodisoft.svg",
    },
    Experience {
        company: "Brooch Real Estate",
        position: "Frontend Engineer",
        period: "2025 - Present",
        description: "Led the development of the company's flagship product, improving performance by 40%. \
                      Mentored junior developers and implemented best practices for code quality.",
        achievements: &[
            "Reduced load time by 60% through code optimization",
            "Implemented CI/CD pipeline reducing deployment time by 70%",
            "Led a team of 5 developers for a major product launch",
        ],
        logo: "/placeholder.svg",
    },
];

// =============================================================================
// CONTACT
// =============================================================================

pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "GitHub", url: "https://github.com/vichie34" },
    SocialLink { label: "LinkedIn", url: "https://linkedin.com/in/victor-chukwuma" },
    SocialLink { label: "Twitter", url: "https://twitter.com/" },
];
