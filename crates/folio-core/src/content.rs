//! Content store: the static records every view renders.
//!
//! Everything here is fixed at build time. Views borrow `&'static` records
//! and render them in declaration order.

/// Biographical profile shown on Home, About and Contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    /// Current position, shown under the name on Home.
    pub headline: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    /// Primary social profile (LinkedIn).
    pub social_url: &'static str,
    pub resume_path: &'static str,
    pub image_path: &'static str,
    /// Multi-line summary; line breaks are preserved on About.
    pub summary: &'static str,
}

impl Profile {
    /// `mailto:` link for the profile email.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// The first `lines` lines of the summary joined into one paragraph.
    pub fn summary_lead(&self, lines: usize) -> String {
        self.summary
            .lines()
            .map(str::trim)
            .take(lines)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// An outbound profile link on the Home hero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    /// CSS modifier for the button accent.
    pub accent: &'static str,
}

/// A headline number on the Home hero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

/// One position on the Experience view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub organisation: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

/// A project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub tags: &'static [&'static str],
    pub description: &'static str,
}

/// Aggregate of all site content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub profile: Profile,
    pub roles: &'static [&'static str],
    pub social_links: &'static [SocialLink],
    pub metrics: &'static [Metric],
    pub experience: &'static [ExperienceEntry],
    pub projects: &'static [Project],
    pub skills: &'static [&'static str],
}

impl SiteContent {
    /// The content compiled into the site.
    pub fn builtin() -> &'static SiteContent {
        &BUILTIN
    }

    /// Owned copy of the role list, ready for the typewriter.
    pub fn role_list(&self) -> Vec<String> {
        self.roles.iter().map(|r| r.to_string()).collect()
    }
}

static BUILTIN: SiteContent = SiteContent {
    profile: Profile {
        name: "Maya Okafor",
        headline: "Associate Systems Engineer @ Northwind",
        location: "Hyderabad, India",
        phone: "+91 90000 00000",
        email: "hello@mayaokafor.dev",
        social_url: "https://www.linkedin.com/in/maya-okafor/",
        resume_path: "/resume.pdf",
        image_path: "/profile.svg",
        summary: "Detail-oriented software engineer with a solid foundation in Java and the web platform.
Currently an Associate Systems Engineer at Northwind Consulting, building and supporting
internal tooling, including a footer generator used across client applications.
Experienced in end-to-end application support, incident triage and working with
cross-functional teams to ship reliable software. Comfortable with ServiceNow for
incident tracking and monitoring. Always learning, with 250+ data structures and
algorithms problems solved so far.",
    },
    roles: &[
        "Frontend Developer",
        "Java Developer",
        "Problem Solver",
        "React.js Enthusiast",
    ],
    social_links: &[
        SocialLink {
            label: "LinkedIn",
            url: "https://www.linkedin.com/in/maya-okafor/",
            accent: "blue",
        },
        SocialLink {
            label: "LeetCode",
            url: "https://leetcode.com/u/mayaokafor/",
            accent: "orange",
        },
        SocialLink {
            label: "GFG",
            url: "https://www.geeksforgeeks.org/user/mayaokafor/",
            accent: "green",
        },
    ],
    metrics: &[
        Metric { label: "Experience", value: "1+ yrs" },
        Metric { label: "DSA Problems", value: "250+" },
        Metric { label: "Projects", value: "5+" },
    ],
    experience: &[ExperienceEntry {
        organisation: "Northwind Consulting",
        role: "Associate Systems Engineer",
        period: "Oct 2024 - Present",
        highlights: &[
            "Maintaining the footer generator for client applications, producing dynamic footers in both expert and standard modes.",
            "Providing end-to-end application support and resolving user-reported tickets within SLAs.",
            "Monitoring ServiceNow dashboards and running scheduled server recycles for stability.",
        ],
    }],
    projects: &[
        Project {
            id: 1,
            title: "Banking Management System",
            tags: &["Java", "JSP", "Servlets", "JDBC"],
            description: "Full-stack banking application with role-based auth, CRUD operations for customers and accounts, a responsive frontend and a secure backend.",
        },
        Project {
            id: 2,
            title: "Footer Generator",
            tags: &["React", ".NET", "UI/UX"],
            description: "Dynamic footer generation tool producing standardized footers for client applications in Standard and Expert modes.",
        },
    ],
    skills: &[
        "React.js",
        "HTML5",
        "CSS3",
        "Tailwind CSS",
        "JavaScript (ES6+)",
        "Java",
        "Spring (basic)",
        "JSP & Servlets",
        "JDBC & MySQL",
        "Git",
        "ServiceNow",
        "Problem Solving (DSA)",
    ],
};
