use super::IconKind;

/// One row of the "Get In Touch" list.
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    /// `mailto:` / `tel:` link, if the value is actionable.
    pub href: Option<&'static str>,
    pub icon: IconKind,
}

pub struct TrustSignal {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HEADLINE: &str = "Let's Transform Your";
pub const HEADLINE_ACCENT: &str = "Financial Operations";
pub const INTRO: &str = "Ready to leverage the power of fintech CPA expertise and data science? \
Let's discuss how we can optimize your business operations and drive growth.";

pub const DETAILS: &[ContactDetail] = &[
    ContactDetail {
        label: "Email",
        value: "phinidygeorge01@gmail.com",
        href: Some("mailto:phinidygeorge01@gmail.com"),
        icon: IconKind::Mail,
    },
    ContactDetail {
        label: "Phone",
        value: "+254 757 390 844",
        href: Some("tel:+254757390844"),
        icon: IconKind::Phone,
    },
    ContactDetail {
        label: "Location",
        value: "Kenya (Serving clients globally)",
        href: None,
        icon: IconKind::MapPin,
    },
    ContactDetail {
        label: "Response Time",
        value: "Within 24 hours",
        href: None,
        icon: IconKind::Clock,
    },
];

pub const TRUST_SIGNALS: &[TrustSignal] = &[
    TrustSignal {
        title: "Proven Results",
        description: "Track record of delivering measurable business impact across multiple industries",
    },
    TrustSignal {
        title: "Dual Expertise",
        description: "Unique combination of CPA certification and advanced data science skills",
    },
    TrustSignal {
        title: "Client-Focused",
        description: "Dedicated to understanding your business and delivering tailored solutions",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actionable_details_use_mail_or_phone_links() {
        for detail in DETAILS {
            if let Some(href) = detail.href {
                assert!(href.starts_with("mailto:") || href.starts_with("tel:"), "{href}");
            }
        }
    }
}
