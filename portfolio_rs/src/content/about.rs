use super::IconKind;

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Achievement {
    pub metric: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Pillar {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
}

pub const HEADLINE: &str = "Reimagining Financial Futures with";
pub const HEADLINE_ACCENT: &str = "Intelligence and Impact";
pub const INTRO: &str = "I fuse CPA expertise with data science precision to help fintech companies \
evolve from reactive accounting to predictive, AI-powered finance. Through intelligent automation and \
advanced analytics, I architect financial ecosystems that scale, comply, and outperform.";
pub const BADGES: &[&str] = &["CPA Certified", "Data Scientist", "Fintech Specialist"];

pub const TIMELINE: &[Milestone] = &[
    Milestone {
        year: "2025",
        title: "Advanced Fintech Specialization",
        description: "Focused on integrating AI and machine learning into financial services",
    },
    Milestone {
        year: "2024",
        title: "Data Science Certification",
        description: "Completed advanced certifications in Python, machine learning, and data visualization",
    },
    Milestone {
        year: "2023",
        title: "CPA Licensure",
        description: "Obtained Certified Public Accountant license with specialization in fintech",
    },
    Milestone {
        year: "2021",
        title: "Financial Technology Focus",
        description: "Began specializing in the intersection of finance and technology",
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        metric: "30% Efficiency Gain",
        title: "Enhanced Fintech Reporting Efficiency",
        description: "Improved financial reporting processes by 30% through automated analytics",
    },
    Achievement {
        metric: "89% Accuracy",
        title: "Predictive Model Accuracy",
        description: "Achieved 89% accuracy in machine learning models for financial forecasting",
    },
    Achievement {
        metric: "$500K+ Saved",
        title: "Cost Optimization",
        description: "Generated over $500K in cost savings through data-driven insights",
    },
];

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Financial Expertise",
        skills: &[
            "CPA Certified",
            "Financial Analysis",
            "Tax Strategy",
            "Risk Management",
            "Audit & Compliance",
        ],
    },
    SkillGroup {
        category: "Data Science",
        skills: &[
            "Python",
            "Machine Learning",
            "Statistical Analysis",
            "Predictive Modeling",
            "Data Visualization",
        ],
    },
    SkillGroup {
        category: "Fintech Tools",
        skills: &["Power BI", "Tableau", "SQL", "Django", "FastAPI", "Financial APIs"],
    },
    SkillGroup {
        category: "Technologies",
        skills: &["React", "TypeScript", "PostgreSQL", "MongoDB", "AWS", "Git"],
    },
];

pub const MISSION: &str = "To empower decision-makers with tools that scale, systems that adapt, \
and insights that convert complexity into clarity.";

pub const PILLARS: &[Pillar] = &[
    Pillar {
        title: "Innovation",
        description: "Pushing the boundaries of what's possible in fintech",
        icon: IconKind::TrendingUp,
    },
    Pillar {
        title: "Collaboration",
        description: "Building partnerships that drive mutual success",
        icon: IconKind::Users,
    },
    Pillar {
        title: "Impact",
        description: "Creating solutions that transform businesses globally",
        icon: IconKind::Globe,
    },
];
