use super::{Accent, IconKind};

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: IconKind,
}

pub struct FeaturedService {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
    pub accent: Accent,
}

pub const BADGE: &str = "Fintech CPA + Data Scientist";
pub const HEADLINE: &str = "Transforming Finance Through";
pub const HEADLINE_ACCENT: &str = "Data-Driven Insights";
pub const INTRO: &str = "Bridging traditional accounting with cutting-edge data science to deliver \
innovative fintech solutions that drive growth and efficiency.";
pub const PORTRAIT: &str = "uploads/portrait.png";

pub const STATS: &[Stat] = &[
    Stat {
        number: "50+",
        label: "Projects Completed",
        icon: IconKind::Target,
    },
    Stat {
        number: "89%",
        label: "ML Model Accuracy",
        icon: IconKind::Brain,
    },
    Stat {
        number: "$500K+",
        label: "Cost Savings Generated",
        icon: IconKind::TrendingUp,
    },
    Stat {
        number: "24/7",
        label: "Real-time Monitoring",
        icon: IconKind::BarChart,
    },
];

pub const FEATURED_SERVICES: &[FeaturedService] = &[
    FeaturedService {
        title: "Real-Time Financial Dashboards",
        description: "Custom business intelligence solutions with interactive visualizations for instant insights.",
        icon: IconKind::BarChart,
        accent: Accent::Primary,
    },
    FeaturedService {
        title: "Predictive Financial Modeling",
        description: "Advanced machine learning models for risk management and financial forecasting.",
        icon: IconKind::Brain,
        accent: Accent::Success,
    },
    FeaturedService {
        title: "Fraud Detection Analytics",
        description: "AI-powered security systems to protect your financial operations from threats.",
        icon: IconKind::Shield,
        accent: Accent::Warning,
    },
];

pub const CERTIFICATIONS: &[&str] = &[
    "Certified Public Accountant (CPA)",
    "Python for Data Science",
    "Tableau Certified",
    "Power BI Expert",
    "Financial Risk Management",
];
