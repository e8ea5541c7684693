//! Static copy rendered by the landing page.
//!
//! Everything here is `'static` so the view layer can iterate without cloning.

use crate::pricing::DEFAULT_TIERS;

/// Placeholder image used wherever real artwork is pending.
pub const PLACEHOLDER: &str = "/placeholder.svg";

/// Icons available to feature cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// Lightning bolt
    Zap,
    /// Shield
    Shield,
    /// People
    Users,
    /// Bar chart
    BarChart,
    /// Globe
    Globe,
    /// Phone
    Smartphone,
}

/// One tile of the features grid.
#[derive(Debug)]
pub struct Feature {
    /// Glyph above the title
    pub icon: IconKind,
    /// Card title
    pub title: &'static str,
    /// One-sentence pitch
    pub description: &'static str,
}

/// Six selling points.
pub const FEATURES: &[Feature] = &[
    Feature {
        icon: IconKind::Zap,
        title: "Lightning Fast",
        description: "Built for speed with optimized performance and instant loading times.",
    },
    Feature {
        icon: IconKind::Shield,
        title: "Enterprise Security",
        description: "Bank-level security with end-to-end encryption and compliance.",
    },
    Feature {
        icon: IconKind::Users,
        title: "Team Collaboration",
        description: "Work together seamlessly with real-time collaboration tools.",
    },
    Feature {
        icon: IconKind::BarChart,
        title: "Advanced Analytics",
        description: "Get insights with powerful analytics and reporting features.",
    },
    Feature {
        icon: IconKind::Globe,
        title: "Global Scale",
        description: "Deploy worldwide with our global infrastructure and CDN.",
    },
    Feature {
        icon: IconKind::Smartphone,
        title: "Mobile First",
        description: "Responsive design that works perfectly on all devices.",
    },
];

/// Customer quote for the carousel.
#[derive(Debug)]
pub struct Testimonial {
    /// Avatar URL
    pub photo: &'static str,
    /// Customer name
    pub name: &'static str,
    /// Title and company
    pub role: &'static str,
    /// The quote
    pub content: &'static str,
}

/// Carousel slides. The rotation length is fixed at load from this table.
pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        photo: "/placeholder.svg?height=60&width=60",
        name: "Sarah Johnson",
        role: "CEO at TechCorp",
        content: "This platform has transformed how we work. The intuitive interface and powerful features have increased our productivity by 300%.",
    },
    Testimonial {
        photo: "/placeholder.svg?height=60&width=60",
        name: "Michael Chen",
        role: "CTO at StartupXYZ",
        content: "The best investment we've made for our team. The collaboration features are game-changing and the support is outstanding.",
    },
    Testimonial {
        photo: "/placeholder.svg?height=60&width=60",
        name: "Emily Rodriguez",
        role: "Product Manager at InnovateCo",
        content: "Incredible platform with amazing features. Our team efficiency has improved dramatically since we started using it.",
    },
];

/// Question and answer for the FAQ accordion.
#[derive(Debug)]
pub struct FaqItem {
    /// Panel header
    pub title: &'static str,
    /// Panel body
    pub content: &'static str,
}

/// FAQ panels, in display order.
pub const FAQ: &[FaqItem] = &[
    FaqItem {
        title: "How does the free trial work?",
        content: "You get full access to all features for 14 days, no credit card required. You can upgrade anytime during or after the trial.",
    },
    FaqItem {
        title: "Can I change my plan later?",
        content: "Yes, you can upgrade or downgrade your plan at any time. Changes take effect immediately and billing is prorated.",
    },
    FaqItem {
        title: "What kind of support do you offer?",
        content: "We offer 24/7 email support for all plans, with priority phone support for Pro and Enterprise customers.",
    },
    FaqItem {
        title: "Is my data secure?",
        content: "Absolutely. We use enterprise-grade security with end-to-end encryption, regular backups, and SOC 2 compliance.",
    },
    FaqItem {
        title: "Do you offer refunds?",
        content: "Yes, we offer a 30-day money-back guarantee for all paid plans. No questions asked.",
    },
];

/// Blog teaser card.
#[derive(Debug)]
pub struct BlogPost {
    /// Headline
    pub title: &'static str,
    /// Teaser text
    pub description: &'static str,
    /// Byline
    pub author: &'static str,
    /// Display date
    pub date: &'static str,
    /// Cover image URL
    pub image: &'static str,
}

/// Latest posts.
pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "10 Ways to Boost Team Productivity",
        description: "Discover proven strategies to enhance your team's efficiency and collaboration.",
        author: "John Smith",
        date: "Dec 15, 2024",
        image: "/placeholder.svg?height=200&width=300",
    },
    BlogPost {
        title: "The Future of Remote Work",
        description: "Exploring trends and technologies shaping the future of distributed teams.",
        author: "Jane Doe",
        date: "Dec 12, 2024",
        image: "/placeholder.svg?height=200&width=300",
    },
    BlogPost {
        title: "Security Best Practices for SaaS",
        description: "Essential security measures every SaaS company should implement.",
        author: "Mike Johnson",
        date: "Dec 10, 2024",
        image: "/placeholder.svg?height=200&width=300",
    },
];

/// Pricing card data. Prices come from the calculator tiers so the two never drift.
#[derive(Debug)]
pub struct Plan {
    /// Plan name
    pub name: &'static str,
    /// Monthly price in whole currency units
    pub monthly_price: u32,
    /// Bullet list
    pub features: &'static [&'static str],
    /// "Most Popular" badge and primary button
    pub highlighted: bool,
}

impl Plan {
    /// Price as shown on the card (`$79`).
    pub fn price_label(&self) -> String {
        format!("${}", self.monthly_price)
    }
}

/// Starter, Professional, Enterprise.
pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        monthly_price: DEFAULT_TIERS[0].base,
        features: &[
            "Up to 5 team members",
            "Basic analytics",
            "Email support",
            "10GB storage",
            "Standard integrations",
        ],
        highlighted: false,
    },
    Plan {
        name: "Professional",
        monthly_price: DEFAULT_TIERS[1].base,
        features: &[
            "Up to 20 team members",
            "Advanced analytics",
            "Priority support",
            "100GB storage",
            "All integrations",
            "Custom workflows",
        ],
        highlighted: true,
    },
    Plan {
        name: "Enterprise",
        monthly_price: DEFAULT_TIERS[2].base,
        features: &[
            "Unlimited team members",
            "Custom analytics",
            "24/7 phone support",
            "Unlimited storage",
            "Custom integrations",
            "Dedicated account manager",
        ],
        highlighted: false,
    },
];

/// Log a pricing card click. Checkout is out of scope for the page.
pub fn select_plan(plan: &Plan) {
    tracing::info!(plan = plan.name, price = plan.monthly_price, "plan selected");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{BillingPeriod, calculate_price};

    #[test]
    fn catalog_sizes() {
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(FAQ.len(), 5);
        assert_eq!(BLOG_POSTS.len(), 3);
        assert_eq!(PLANS.len(), 3);
    }

    #[test]
    fn exactly_one_plan_is_highlighted() {
        let highlighted: Vec<_> = PLANS.iter().filter(|p| p.highlighted).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].name, "Professional");
    }

    #[test]
    fn plan_prices_follow_calculator_tiers() {
        assert_eq!(PLANS[0].monthly_price, calculate_price(5, BillingPeriod::Monthly));
        assert_eq!(PLANS[1].monthly_price, calculate_price(20, BillingPeriod::Monthly));
        assert_eq!(PLANS[2].monthly_price, calculate_price(100, BillingPeriod::Monthly));
        assert_eq!(PLANS[1].price_label(), "$79");
    }
}
