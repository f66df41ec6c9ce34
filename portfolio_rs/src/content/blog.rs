use super::{Accent, IconKind};

/// An article published on Medium.
pub struct Article {
    pub title: &'static str,
    pub description: &'static str,
    pub excerpt: &'static str,
    pub read_time: &'static str,
    pub published: &'static str,
    pub category: &'static str,
    pub accent: Accent,
    pub url: &'static str,
    pub icon: IconKind,
}

pub struct UpcomingTopic {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const HEADLINE: &str = "Insights & Thought Leadership";
pub const INTRO: &str = "Exploring the intersection of finance, technology, and data science \
through actionable insights and proven strategies for wealth building and business growth.";
pub const MEDIUM_PROFILE: &str = "https://medium.com/@phinidy.george";

pub const TOPICS: &[&str] = &[
    "Fintech Innovation",
    "Data Science in Finance",
    "AI-Driven Tax Optimization",
    "Blockchain Accounting",
    "Predictive Analytics",
    "Wealth Building",
    "Financial Technology",
    "Investment Strategies",
];

pub const FEATURED_ARTICLES: &[Article] = &[
    Article {
        title: "13 Ruthlessly Effective Wealth-Building Principles",
        description: "A comprehensive guide to building lasting wealth through proven financial \
strategies and mindset shifts that separate the wealthy from the average.",
        excerpt: "Discover the fundamental principles that drive wealth creation, from compound \
interest mastery to strategic risk-taking and tax optimization...",
        read_time: "12 min read",
        published: "2024",
        category: "Wealth Building",
        accent: Accent::Success,
        url: "https://medium.com/@phinidy.george/13-ruthlessly-effective-wealth-building-principles-cdc2cb88dfdf",
        icon: IconKind::TrendingUp,
    },
    Article {
        title: "17 Money Skills the Rich Master That You Were Never Taught",
        description: "Essential financial skills that aren't taught in schools but are crucial for \
building and maintaining wealth in the modern economy.",
        excerpt: "Learn the hidden money skills that wealthy individuals use to multiply their \
wealth, from advanced tax strategies to investment psychology...",
        read_time: "15 min read",
        published: "2024",
        category: "Financial Education",
        accent: Accent::Primary,
        url: "https://medium.com/@phinidy.george/17-money-skills-the-rich-master-that-you-were-never-taught-171c35ca1e1a",
        icon: IconKind::Dollar,
    },
    Article {
        title: "Breaking Into Elite Circles: A Strategic Guide",
        description: "A practical roadmap for building valuable networks and gaining access to \
exclusive opportunities that can accelerate your career and business.",
        excerpt: "Networking strategies used by successful entrepreneurs and executives to build \
meaningful relationships that open doors to new opportunities...",
        read_time: "10 min read",
        published: "2024",
        category: "Professional Growth",
        accent: Accent::Warning,
        url: "https://medium.com/@phinidy.george/breaking-into-elite-circles-a-strategic-guide-8e4fe6242bfa",
        icon: IconKind::Users,
    },
];

pub const UPCOMING: &[UpcomingTopic] = &[
    UpcomingTopic {
        title: "Machine Learning for Financial Fraud Detection",
        description: "How AI algorithms are revolutionizing fraud prevention in fintech",
        category: "AI & Security",
    },
    UpcomingTopic {
        title: "The Future of Accounting: Automation and Analytics",
        description: "Exploring how data science is transforming traditional accounting practices",
        category: "Industry Trends",
    },
    UpcomingTopic {
        title: "Building Profitable Fintech Startups: A Data-Driven Approach",
        description: "Using analytics to validate, launch, and scale fintech ventures",
        category: "Entrepreneurship",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn articles_live_under_the_medium_profile() {
        for article in FEATURED_ARTICLES {
            assert!(article.url.starts_with(MEDIUM_PROFILE), "{}", article.title);
        }
    }
}
