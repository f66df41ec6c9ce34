use super::{Accent, IconKind};

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// Headline outcome shown in the highlighted box.
    pub value: &'static str,
    pub ideal_for: &'static [&'static str],
    pub icon: IconKind,
    pub accent: Accent,
}

pub struct AddOn {
    pub title: &'static str,
    pub description: &'static str,
    pub value: &'static str,
    pub icon: IconKind,
}

pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HEADLINE: &str = "Fintech CPA & Data Science";
pub const HEADLINE_ACCENT: &str = "Services";
pub const INTRO: &str = "I deliver specialized solutions that fuse CPA precision with advanced data \
science, transforming operations, optimizing compliance, and accelerating growth across today's \
dynamic financial landscape.";

pub const MAIN_SERVICES: &[Service] = &[
    Service {
        title: "Real-Time Financial Dashboards & Business Intelligence",
        description: "Transform raw financial data into actionable insights with custom dashboards that \
provide real-time visibility into your business performance.",
        features: &[
            "Interactive Power BI and Tableau dashboards",
            "Real-time KPI monitoring",
            "Automated reporting systems",
            "Cross-platform data integration",
            "Mobile-responsive analytics",
        ],
        value: "Reduce manual reporting time by 70% and improve decision-making speed",
        ideal_for: &["Fintech startups", "Financial institutions", "Investment firms"],
        icon: IconKind::BarChart,
        accent: Accent::Primary,
    },
    Service {
        title: "Predictive Financial Modeling for Risk Management",
        description: "Leverage machine learning algorithms to forecast market trends, assess risks, and \
optimize investment strategies with unprecedented accuracy.",
        features: &[
            "GARCH volatility forecasting",
            "Random Forest risk modeling",
            "Time series analysis",
            "Monte Carlo simulations",
            "Stress testing frameworks",
        ],
        value: "Improve risk-adjusted returns by 15-25% through predictive insights",
        ideal_for: &["Hedge funds", "Asset managers", "Risk departments"],
        icon: IconKind::Brain,
        accent: Accent::Success,
    },
    Service {
        title: "Fraud Detection & Financial Security Analytics",
        description: "Protect your financial operations with AI-powered fraud detection systems that \
identify anomalies and prevent fraudulent activities in real-time.",
        features: &[
            "Anomaly detection algorithms",
            "Transaction pattern analysis",
            "Real-time alert systems",
            "Compliance monitoring",
            "Behavioral analytics",
        ],
        value: "Prevent fraud losses and ensure regulatory compliance with 95%+ accuracy",
        ideal_for: &["Payment processors", "Banks", "E-commerce platforms"],
        icon: IconKind::Shield,
        accent: Accent::Warning,
    },
    Service {
        title: "Fintech CPA Services",
        description: "Specialized accounting services for fintech companies including tax \
optimization, compliance, and financial strategy consulting.",
        features: &["Tax Optimization", "Regulatory Compliance", "Financial Planning", "Audit Support"],
        value: "Streamline financial operations and reduce tax liabilities by up to 30%",
        ideal_for: &["Fintech startups", "Crypto exchanges", "Payment platforms", "Digital banks"],
        icon: IconKind::Calculator,
        accent: Accent::Info,
    },
];

pub const ADD_ONS: &[AddOn] = &[
    AddOn {
        title: "Data Infrastructure Setup",
        description: "Design and implement scalable data pipelines for financial analytics.",
        value: "Reduce data processing time by 60%",
        icon: IconKind::Database,
    },
    AddOn {
        title: "API Development",
        description: "Custom financial APIs for seamless integration and automation.",
        value: "Accelerate integration timelines",
        icon: IconKind::Zap,
    },
    AddOn {
        title: "Performance Optimization",
        description: "Analyze and optimize financial processes for maximum efficiency.",
        value: "Increase operational efficiency by 40%",
        icon: IconKind::Target,
    },
];

pub const PROCESS: &[ProcessStep] = &[
    ProcessStep {
        step: "01",
        title: "Discovery & Analysis",
        description: "Comprehensive assessment of your current financial processes and data infrastructure",
    },
    ProcessStep {
        step: "02",
        title: "Strategy Development",
        description: "Custom solution design tailored to your specific business needs and goals",
    },
    ProcessStep {
        step: "03",
        title: "Implementation",
        description: "Agile development and deployment with continuous testing and optimization",
    },
    ProcessStep {
        step: "04",
        title: "Training & Support",
        description: "Comprehensive training and ongoing support to ensure successful adoption",
    },
];

/// Options of the "Service Interest" select on the contact form.
pub const SERVICE_INTERESTS: &[&str] = &[
    "Real-Time Financial Dashboards",
    "Predictive Financial Modeling",
    "Fraud Detection & Security Analytics",
    "Fintech Tax Optimization",
    "Data Infrastructure Setup",
    "API Development",
    "General Consultation",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_steps_are_numbered_in_order() {
        for (i, step) in PROCESS.iter().enumerate() {
            assert_eq!(step.step, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn every_service_lists_features_and_audience() {
        for service in MAIN_SERVICES {
            assert!(!service.features.is_empty(), "{}", service.title);
            assert!(!service.ideal_for.is_empty(), "{}", service.title);
        }
    }
}
