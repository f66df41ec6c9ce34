use super::IconKind;

pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

/// A portfolio case study.
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: &'static str,
    pub technologies: &'static [&'static str],
    pub metrics: &'static [Metric],
    /// Business impact summary.
    pub results: &'static str,
    pub live_link: Option<&'static str>,
    pub source_link: Option<&'static str>,
    pub icon: IconKind,
}

pub const HEADING: &str = "Featured Portfolio";
pub const INTRO: &str =
    "Real-world projects demonstrating the power of fintech CPA expertise combined with data science";
pub const ALL_PROJECTS: &str = "https://github.com/BigTime5";

pub const PROJECTS: &[Project] = &[
    Project {
        slug: "youtube-analytics",
        title: "YouTube Analytics Dashboard",
        subtitle: "Excel to Power BI Data Pipeline",
        description: "Comprehensive analytics dashboard analyzing top UK YouTubers for marketing \
campaign optimization. Built end-to-end ETL pipeline and interactive visualizations.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop",
        category: "Business Intelligence",
        technologies: &["Power BI", "SQL Server", "Excel", "DAX"],
        metrics: &[
            Metric {
                label: "ROI Increase",
                value: "280%",
            },
            Metric {
                label: "Data Processing",
                value: "100K+ records",
            },
            Metric {
                label: "Dashboard Users",
                value: "50+",
            },
        ],
        results: "Enabled marketing team to identify optimal YouTuber partnerships, resulting in \
$1.2M additional revenue",
        live_link: Some("https://bigtime5.github.io/"),
        source_link: None,
        icon: IconKind::BarChart,
    },
    Project {
        slug: "telecom-churn",
        title: "Telecom Churn Prediction",
        subtitle: "Machine Learning & Analytics Platform",
        description: "End-to-end churn analysis solution combining SQL ETL, Python ML models, and \
Power BI visualizations. Achieved 99.2% prediction accuracy.",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600&h=400&fit=crop",
        category: "Predictive Analytics",
        technologies: &["Python", "Random Forest", "SQL Server", "Power BI"],
        metrics: &[
            Metric {
                label: "Prediction Accuracy",
                value: "99.2%",
            },
            Metric {
                label: "Churn Reduction",
                value: "27%",
            },
            Metric {
                label: "Revenue Saved",
                value: "$2.5M+",
            },
        ],
        results: "Random Forest model identified 378 at-risk customers, enabling proactive \
retention campaigns",
        live_link: Some("https://bigtime5.github.io/churn-analytics-powerbi-sql-ml/"),
        source_link: None,
        icon: IconKind::Users,
    },
    Project {
        slug: "safarihub",
        title: "SafariHub Data Platform",
        subtitle: "Django Web Application",
        description: "Full-stack data platform built with Django, featuring machine learning \
integration and advanced analytics capabilities for financial data processing.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop",
        category: "Full-Stack Development",
        technologies: &["Django", "Python", "scikit-learn", "NumPy", "Pandas"],
        metrics: &[
            Metric {
                label: "Data Processing",
                value: "Real-time",
            },
            Metric {
                label: "ML Models",
                value: "5+",
            },
            Metric {
                label: "API Endpoints",
                value: "25+",
            },
        ],
        results: "Scalable platform supporting multiple ML models with robust data processing \
capabilities",
        live_link: None,
        source_link: Some("https://github.com/BigTime5/SafariHub"),
        icon: IconKind::Shield,
    },
    Project {
        slug: "stock-volatility",
        title: "Stock Volatility API",
        subtitle: "Financial Forecasting System",
        description: "Advanced stock volatility prediction API using machine learning algorithms for \
real-time financial market analysis and risk assessment.",
        image: "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=600&h=400&fit=crop",
        category: "Financial Analytics",
        technologies: &["Python", "FastAPI", "Time Series Analysis", "ML Algorithms"],
        metrics: &[
            Metric {
                label: "Prediction Accuracy",
                value: "94.5%",
            },
            Metric {
                label: "API Response Time",
                value: "<200ms",
            },
            Metric {
                label: "Stocks Tracked",
                value: "500+",
            },
        ],
        results: "Real-time volatility predictions enabling better risk management for financial \
portfolios",
        live_link: None,
        source_link: Some("https://github.com/BigTime5/stock-forecasting-api"),
        icon: IconKind::TrendingUp,
    },
    Project {
        slug: "pizza-sales",
        title: "Pizza Sales Analytics",
        subtitle: "End-to-End Business Intelligence",
        description: "Comprehensive sales analytics dashboard providing insights into customer \
behavior, product performance, and revenue optimization strategies.",
        image: "https://images.unsplash.com/photo-1574071318508-1cdbab80d002?w=600&h=400&fit=crop",
        category: "Business Intelligence",
        technologies: &["Power BI", "SQL", "Data Modeling", "DAX"],
        metrics: &[
            Metric {
                label: "Revenue Increase",
                value: "23%",
            },
            Metric {
                label: "Customer Insights",
                value: "15K+ profiles",
            },
            Metric {
                label: "Report Automation",
                value: "100%",
            },
        ],
        results: "Automated reporting system reducing manual analysis time by 80% and identifying \
key growth opportunities",
        live_link: Some("https://bigtime5.github.io/end-to-end-pizza-report/"),
        source_link: None,
        icon: IconKind::PieChart,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_project_links_somewhere() {
        for project in PROJECTS {
            assert!(
                project.live_link.is_some() || project.source_link.is_some(),
                "{} has no link",
                project.slug
            );
            assert_eq!(project.metrics.len(), 3, "{}", project.slug);
        }
    }

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = PROJECTS.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), PROJECTS.len());
    }
}
