//! Copy for every page. Nothing here is computed at runtime.

use crate::components::icon::Icon;

pub struct FeatureEntry {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct StepEntry {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// Colour tag, resolved to a theme class by the metrics section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Green,
    Blue,
    Purple,
}

impl Tone {
    pub fn text_class(self) -> &'static str {
        match self {
            Tone::Primary => "tone-primary",
            Tone::Green => "tone-green",
            Tone::Blue => "tone-blue",
            Tone::Purple => "tone-purple",
        }
    }

    pub fn fill_class(self) -> &'static str {
        match self {
            Tone::Primary => "fill-primary",
            Tone::Green => "fill-green",
            Tone::Blue => "fill-blue",
            Tone::Purple => "fill-purple",
        }
    }
}

pub struct MetricEntry {
    pub value: f64,
    pub suffix: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

impl MetricEntry {
    /// Multipliers ("4.2x") keep one decimal, percentages and hours none.
    pub fn decimals(&self) -> usize {
        if self.suffix == "x" {
            1
        } else {
            0
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct TestimonialEntry {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub metric: &'static str,
    pub avatar: &'static str,
}

pub struct PricingPlan {
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
}

pub struct ProductFeature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: [&'static str; 3],
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct DecisionEntry {
    pub action: &'static str,
    pub impact: &'static str,
}

pub struct HealthBar {
    pub label: &'static str,
    pub value: u8,
    pub tone: Tone,
}

pub struct HeroStat {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

impl HeroStat {
    pub fn is_gain(&self) -> bool {
        self.change.starts_with('+')
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub type FooterLink = NavLink;

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Product", href: "/product" },
    NavLink { name: "Pricing", href: "/pricing" },
    NavLink { name: "About", href: "/about" },
    NavLink { name: "Blog", href: "/blog" },
];

pub const LOGIN_LINK: NavLink = NavLink { name: "Log in", href: "/login" };
pub const GET_STARTED_LINK: NavLink = NavLink { name: "Get Started", href: "/get-started" };
pub const CONTACT_HREF: &str = "/contact";

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Product",
        links: &[
            FooterLink { name: "Features", href: "/product" },
            FooterLink { name: "Pricing", href: "/pricing" },
            FooterLink { name: "Integrations", href: "/integrations" },
            FooterLink { name: "Changelog", href: "/changelog" },
        ],
    },
    FooterColumn {
        title: "Company",
        links: &[
            FooterLink { name: "About", href: "/about" },
            FooterLink { name: "Blog", href: "/blog" },
            FooterLink { name: "Careers", href: "/careers" },
            FooterLink { name: "Contact", href: "/contact" },
        ],
    },
    FooterColumn {
        title: "Resources",
        links: &[
            FooterLink { name: "Documentation", href: "/docs" },
            FooterLink { name: "Help Center", href: "/help" },
            FooterLink { name: "API Reference", href: "/api" },
            FooterLink { name: "Status", href: "/status" },
        ],
    },
    FooterColumn {
        title: "Legal",
        links: &[
            FooterLink { name: "Privacy", href: "/privacy" },
            FooterLink { name: "Terms", href: "/terms" },
            FooterLink { name: "Security", href: "/security" },
        ],
    },
];

pub const SOCIAL_LINKS: &[NavLink] = &[
    NavLink { name: "Twitter", href: "https://twitter.com" },
    NavLink { name: "LinkedIn", href: "https://www.linkedin.com/company/get-ryze-ai/" },
    NavLink { name: "GitHub", href: "https://github.com" },
];

pub const TRUSTED_BY: &[&str] = &["Stripe", "Notion", "Figma", "Linear"];

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat { label: "ROAS", value: "4.2x", change: "+23%" },
    HeroStat { label: "CTR", value: "3.8%", change: "+12%" },
    HeroStat { label: "CPA", value: "$12", change: "-18%" },
];

pub const HERO_CHART: &[u8] = &[40, 65, 45, 80, 55, 90, 75, 95, 70, 85];

pub const STEPS: &[StepEntry] = &[
    StepEntry {
        icon: Icon::Zap,
        title: "Connect Your Accounts",
        description: "Link your Google Ads, Meta, TikTok, and other ad platforms in seconds. No code required.",
    },
    StepEntry {
        icon: Icon::Brain,
        title: "AI Analyzes Everything",
        description: "Our AI audits your campaigns, identifies inefficiencies, and builds optimization strategies.",
    },
    StepEntry {
        icon: Icon::TrendingUp,
        title: "Watch Performance Soar",
        description: "Ryze automatically applies changes and continuously learns to maximize your ROAS.",
    },
];

pub const FEATURES: &[FeatureEntry] = &[
    FeatureEntry {
        icon: Icon::BarChart,
        title: "Real-Time Analytics",
        description: "Track every metric that matters with live dashboards and instant insights across all platforms.",
    },
    FeatureEntry {
        icon: Icon::Shield,
        title: "Budget Protection",
        description: "AI-powered spending guards prevent wasted ad spend and automatically pause underperforming ads.",
    },
    FeatureEntry {
        icon: Icon::Zap,
        title: "Instant Optimization",
        description: "Automatic bid adjustments, audience refinements, and creative recommendations in real-time.",
    },
    FeatureEntry {
        icon: Icon::Globe,
        title: "Multi-Platform Support",
        description: "Manage Google, Meta, TikTok, LinkedIn, and more from a single unified dashboard.",
    },
    FeatureEntry {
        icon: Icon::Layers,
        title: "Creative Intelligence",
        description: "AI analyzes ad creative performance and suggests improvements for higher engagement.",
    },
    FeatureEntry {
        icon: Icon::RefreshCw,
        title: "Automated A/B Testing",
        description: "Continuously test variations and automatically scale winners across campaigns.",
    },
    FeatureEntry {
        icon: Icon::Target,
        title: "Audience Discovery",
        description: "Find new high-value audiences using AI-powered lookalike modeling and insights.",
    },
    FeatureEntry {
        icon: Icon::LineChart,
        title: "Predictive Forecasting",
        description: "See projected performance and get recommendations before you commit budget.",
    },
];

pub const METRICS: &[MetricEntry] = &[
    MetricEntry {
        value: 4.2,
        suffix: "x",
        label: "Average ROAS",
        description: "Return on ad spend improvement",
        tone: Tone::Primary,
    },
    MetricEntry {
        value: 47.0,
        suffix: "%",
        label: "CTR Increase",
        description: "Click-through rate improvement",
        tone: Tone::Green,
    },
    MetricEntry {
        value: 32.0,
        suffix: "%",
        label: "Lower CPA",
        description: "Cost per acquisition reduction",
        tone: Tone::Blue,
    },
    MetricEntry {
        value: 15.0,
        suffix: "hrs",
        label: "Saved Weekly",
        description: "Time saved on campaign management",
        tone: Tone::Purple,
    },
];

pub const DECISIONS: &[DecisionEntry] = &[
    DecisionEntry { action: "Paused underperforming ad", impact: "Saved $340/day" },
    DecisionEntry { action: "Increased bid on high-intent audience", impact: "+23% conversions" },
    DecisionEntry { action: "Reallocated budget to winning creative", impact: "+18% ROAS" },
];

pub const HEALTH_BARS: &[HealthBar] = &[
    HealthBar { label: "Campaign Health", value: 94, tone: Tone::Green },
    HealthBar { label: "Budget Efficiency", value: 87, tone: Tone::Primary },
    HealthBar { label: "Audience Relevance", value: 91, tone: Tone::Blue },
];

pub const TESTIMONIALS: &[TestimonialEntry] = &[
    TestimonialEntry {
        quote: "Ryze transformed how we manage ads. We cut our CPA by 40% in the first month while actually spending less time in the platform.",
        author: "Sarah Chen",
        role: "Head of Growth",
        company: "TechFlow",
        metric: "40% lower CPA",
        avatar: "SC",
    },
    TestimonialEntry {
        quote: "The AI recommendations are incredibly accurate. It's like having a senior media buyer working 24/7 on our campaigns.",
        author: "Marcus Johnson",
        role: "Marketing Director",
        company: "Elevate",
        metric: "3.8x ROAS",
        avatar: "MJ",
    },
    TestimonialEntry {
        quote: "We scaled from $50k to $500k monthly ad spend without adding headcount. Ryze handles the optimization automatically.",
        author: "Emily Rodriguez",
        role: "CEO",
        company: "GrowthLabs",
        metric: "10x scale",
        avatar: "ER",
    },
    TestimonialEntry {
        quote: "Finally, a tool that actually delivers on its promises. Our team saves 20+ hours per week on campaign management.",
        author: "David Park",
        role: "Performance Lead",
        company: "Velocity",
        metric: "20hrs saved/week",
        avatar: "DP",
    },
];

pub const PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Starter",
        description: "Perfect for small teams getting started with AI optimization.",
        price: 299,
        period: "/month",
        features: &[
            "Up to $10k monthly ad spend",
            "2 ad platforms",
            "Basic AI optimization",
            "Weekly reports",
            "Email support",
        ],
        cta: "Start Free Trial",
        popular: false,
    },
    PricingPlan {
        name: "Growth",
        description: "For growing teams that need advanced optimization features.",
        price: 599,
        period: "/month",
        features: &[
            "Up to $50k monthly ad spend",
            "5 ad platforms",
            "Advanced AI optimization",
            "Daily reports & alerts",
            "Creative recommendations",
            "Priority support",
            "Custom dashboards",
        ],
        cta: "Start Free Trial",
        popular: true,
    },
    PricingPlan {
        name: "Scale",
        description: "For established teams managing significant ad budgets.",
        price: 1299,
        period: "/month",
        features: &[
            "Up to $250k monthly ad spend",
            "Unlimited ad platforms",
            "Enterprise AI features",
            "Real-time optimization",
            "Dedicated success manager",
            "Custom integrations",
            "SLA guarantee",
            "White-label reports",
        ],
        cta: "Contact Sales",
        popular: false,
    },
];

pub const PRICING_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Can I switch plans later?",
        answer: "Yes, you can upgrade or downgrade your plan at any time. Changes take effect at the start of your next billing cycle.",
    },
    FaqEntry {
        question: "What happens if I exceed my ad spend limit?",
        answer: "We'll notify you when you're approaching your limit. You can choose to upgrade or continue on your current plan with reduced optimization.",
    },
    FaqEntry {
        question: "Do you offer annual billing?",
        answer: "Yes, annual billing is available with a 20% discount. Contact our sales team for details.",
    },
    FaqEntry {
        question: "Is there a setup fee?",
        answer: "No, there are no setup fees. You can start your free trial immediately after signing up.",
    },
];

pub const PRODUCT_FEATURES: &[ProductFeature] = &[
    ProductFeature {
        icon: Icon::Brain,
        title: "AI Campaign Optimization",
        description: "Our machine learning models analyze millions of data points to make real-time bidding and targeting decisions that maximize your ROAS.",
        benefits: ["Automated bid adjustments", "Audience optimization", "Budget reallocation"],
    },
    ProductFeature {
        icon: Icon::BarChart,
        title: "Unified Analytics Dashboard",
        description: "See all your ad platforms in one place with real-time metrics, custom reports, and actionable insights powered by AI.",
        benefits: ["Cross-platform reporting", "Custom dashboards", "Automated insights"],
    },
    ProductFeature {
        icon: Icon::Shield,
        title: "Budget Protection",
        description: "Set spending limits and let AI automatically pause underperforming campaigns before they drain your budget.",
        benefits: ["Spending alerts", "Auto-pause rules", "Fraud detection"],
    },
    ProductFeature {
        icon: Icon::Layers,
        title: "Creative Intelligence",
        description: "Get AI-powered recommendations for your ad creatives based on performance data and industry benchmarks.",
        benefits: ["Creative scoring", "A/B test automation", "Performance predictions"],
    },
];

pub const INTEGRATIONS: &[&str] = &[
    "Google Ads",
    "Meta Ads",
    "TikTok Ads",
    "LinkedIn Ads",
    "Twitter Ads",
    "Pinterest Ads",
    "Snapchat Ads",
    "Amazon Ads",
];

/// "$1,299" style price label.
pub fn format_price(price: u32) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_list_sizes() {
        assert_eq!(STEPS.len(), 3);
        assert_eq!(METRICS.len(), 4);
        assert_eq!(TESTIMONIALS.len(), 4);
        assert_eq!(PLANS.len(), 3);
        assert_eq!(PRICING_FAQ.len(), 4);
        assert_eq!(PRODUCT_FEATURES.len(), 4);
    }

    #[test]
    fn exactly_one_popular_plan() {
        let popular: Vec<_> = PLANS.iter().filter(|p| p.popular).map(|p| p.name).collect();
        assert_eq!(popular, vec!["Growth"]);
    }

    #[test]
    fn only_multiplier_metrics_show_a_decimal() {
        let decimals: Vec<usize> = METRICS.iter().map(MetricEntry::decimals).collect();
        assert_eq!(decimals, vec![1, 0, 0, 0]);
    }

    #[test]
    fn internal_links_are_absolute_paths() {
        let footer = FOOTER_COLUMNS.iter().flat_map(|c| c.links.iter());
        for link in NAV_LINKS.iter().chain(footer) {
            assert!(link.href.starts_with('/'), "{} has href {}", link.name, link.href);
        }
    }

    #[test]
    fn hero_stat_direction() {
        assert!(HERO_STATS[0].is_gain());
        assert!(!HERO_STATS[2].is_gain());
    }

    #[test]
    fn price_labels() {
        assert_eq!(format_price(299), "$299");
        assert_eq!(format_price(1299), "$1,299");
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(1_000_000), "$1,000,000");
    }
}
