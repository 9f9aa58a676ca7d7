//! Default content written the first time a collection is read.
//!
//! Each collection is seeded at most once (see `content_seeds` in the
//! database layer); after that the admin dashboard owns the data.

use crate::chatbot::DEFAULT_FALLBACK;

// ---------------------------------------------------------------------------
// Collection names (keys in `content_seeds`)
// ---------------------------------------------------------------------------

pub const COLLECTION_SERVICES: &str = "services";
pub const COLLECTION_STATS: &str = "stats";
pub const COLLECTION_FAQS: &str = "faqs";
pub const COLLECTION_CHATBOT_RULES: &str = "chatbot_rules";

// ---------------------------------------------------------------------------
// Site settings
// ---------------------------------------------------------------------------

pub const SITE_NAME: &str = "Northwind Digital";
pub const SITE_TAGLINE: &str = "Software, cloud and IT support for growing businesses";
pub const SITE_DESCRIPTION: &str = "We are a small team of engineers building web platforms, \
     mobile apps and reliable infrastructure for companies that want technology to just work.";
pub const CONTACT_EMAIL: &str = "hello@northwind.example";
pub const CONTACT_PHONE: &str = "+1 (555) 010-2030";
pub const BUSINESS_HOURS: &str = "Mon-Fri, 9:00-18:00";
pub const CHATBOT_GREETING: &str =
    "Hi there! Ask me about our services, pricing, timelines or how to get in touch.";
pub const CHATBOT_FALLBACK: &str = DEFAULT_FALLBACK;

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

pub struct DefaultService {
    pub title: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: &[DefaultService] = &[
    DefaultService {
        title: "Web Development",
        slug: "web-development",
        description: "Fast, accessible websites and web applications built on modern stacks.",
        icon: "code",
        features: &["Responsive design", "Content management", "Performance tuning"],
    },
    DefaultService {
        title: "Mobile Apps",
        slug: "mobile-apps",
        description: "Native and cross-platform apps for iOS and Android.",
        icon: "smartphone",
        features: &["iOS and Android", "Offline support", "App store publishing"],
    },
    DefaultService {
        title: "Cloud & DevOps",
        slug: "cloud-devops",
        description: "Migrations, CI/CD pipelines and infrastructure you can rely on.",
        icon: "cloud",
        features: &["Cloud migration", "CI/CD pipelines", "Monitoring"],
    },
    DefaultService {
        title: "IT Support",
        slug: "it-support",
        description: "Helpdesk, device management and network support for your team.",
        icon: "life-buoy",
        features: &["Helpdesk", "Network setup", "Security audits"],
    },
];

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

pub struct DefaultStat {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

pub const STATS: &[DefaultStat] = &[
    DefaultStat {
        label: "Projects delivered",
        value: "120+",
        icon: "briefcase",
    },
    DefaultStat {
        label: "Happy clients",
        value: "50+",
        icon: "smile",
    },
    DefaultStat {
        label: "Client satisfaction",
        value: "99%",
        icon: "star",
    },
    DefaultStat {
        label: "Years in business",
        value: "8",
        icon: "calendar",
    },
];

// ---------------------------------------------------------------------------
// FAQs
// ---------------------------------------------------------------------------

pub struct DefaultFaq {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

pub const FAQS: &[DefaultFaq] = &[
    DefaultFaq {
        question: "How long does a typical project take?",
        answer: "Most websites ship in four to eight weeks; larger applications are planned in milestones.",
        category: "Projects",
    },
    DefaultFaq {
        question: "Do you offer ongoing maintenance?",
        answer: "Yes. Every project can continue on a monthly support plan covering updates and monitoring.",
        category: "Support",
    },
    DefaultFaq {
        question: "How is pricing calculated?",
        answer: "We quote fixed prices for well-defined scopes and hourly rates for open-ended work.",
        category: "Pricing",
    },
    DefaultFaq {
        question: "Can you work with our existing team?",
        answer: "Absolutely. We regularly embed with in-house developers and follow your processes.",
        category: "Projects",
    },
];

// ---------------------------------------------------------------------------
// Chatbot rules
// ---------------------------------------------------------------------------

pub struct DefaultRule {
    pub keywords: &'static [&'static str],
    pub response: &'static str,
    pub priority: i32,
}

pub const CHATBOT_RULES: &[DefaultRule] = &[
    DefaultRule {
        keywords: &["hello", "hi", "hey"],
        response: "Hello! How can we help you today?",
        priority: 1,
    },
    DefaultRule {
        keywords: &["contact", "email", "phone", "call"],
        response: "You can reach us through the contact page, by email or by phone during business hours.",
        priority: 5,
    },
    DefaultRule {
        keywords: &["price", "pricing", "cost", "quote", "budget"],
        response: "Pricing depends on scope. Send us a service inquiry and we will reply with a quote within two business days.",
        priority: 5,
    },
    DefaultRule {
        keywords: &["service", "services", "offer"],
        response: "We offer web development, mobile apps, cloud & DevOps and IT support. See the services page for details.",
        priority: 10,
    },
    DefaultRule {
        keywords: &["hours", "open"],
        response: "We are available Monday to Friday, 9:00 to 18:00.",
        priority: 10,
    },
];
