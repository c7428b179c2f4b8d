//! Static site content for Galo Logistics, plus the baked-in fallbacks for
//! the two remotely sourced payloads.
//!
//! Marketing copy changes with the business, not with the code, so it is kept
//! in one place here rather than scattered through the section views.

use once_cell::sync::Lazy;

use super::model::{CompanyStats, Testimonial};

pub const COMPANY_NAME: &str = "Galo Logistics";
pub const COMPANY_TAGLINE: &str = "DSP Partner";
pub const COMPANY_PHONE: &str = "(561) 555-0123";
pub const COMPANY_EMAIL: &str = "info@galologistics.com";
pub const SERVICE_AREA: &str = "Boca Raton to West Palm Beach";

/// Acknowledgment shown after the (simulated) contact form submission.
pub const CONTACT_ACK_TITLE: &str = "Message Sent!";
pub const CONTACT_ACK_BODY: &str =
    "Thank you for contacting Galo Logistics. We'll get back to you within 24 hours.";

/// Stats shown when `GET /api/stats` fails.
pub static FALLBACK_STATS: Lazy<CompanyStats> = Lazy::new(|| CompanyStats {
    team_members: "40+".into(),
    years_experience: "5+".into(),
    on_time_delivery: "99.2%".into(),
    customer_rating: "4.9★".into(),
});

/// Testimonials shown when `GET /api/testimonials` fails.
pub static FALLBACK_TESTIMONIALS: Lazy<Vec<Testimonial>> = Lazy::new(|| {
    vec![
        Testimonial {
            name: "Maria Rodriguez".into(),
            location: "Boca Raton, FL".into(),
            quote: "Galo Logistics always delivers on time and with a smile. Best DSP in South Florida!".into(),
            rating: 5,
        },
        Testimonial {
            name: "James Thompson".into(),
            location: "West Palm Beach, FL".into(),
            quote: "Professional, reliable, and truly care about the community they serve.".into(),
            rating: 5,
        },
    ]
});

/// Labels for the four stat cards, paired positionally with the four fields
/// of [`CompanyStats`].
pub const STAT_LABELS: [&str; 4] = [
    "Team Members",
    "Years Experience",
    "On-Time Delivery",
    "Customer Rating",
];

pub fn stat_cards(stats: &CompanyStats) -> [(&'static str, &str); 4] {
    [
        (STAT_LABELS[0], stats.team_members.as_str()),
        (STAT_LABELS[1], stats.years_experience.as_str()),
        (STAT_LABELS[2], stats.on_time_delivery.as_str()),
        (STAT_LABELS[3], stats.customer_rating.as_str()),
    ]
}

pub const COVERAGE_AREAS: [&str; 6] = [
    "Boca Raton",
    "Delray Beach",
    "Boynton Beach",
    "Lake Worth",
    "Wellington",
    "West Palm Beach",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

pub struct GalleryItem {
    pub kind: MediaKind,
    pub src: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const GALLERY_ITEMS: [GalleryItem; 6] = [
    GalleryItem {
        kind: MediaKind::Image,
        src: "https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        title: "Morning Route Prep",
        description: "Our team starts each day with thorough route planning and vehicle inspection",
        tags: &["Morning Routine", "Safety First"],
    },
    GalleryItem {
        kind: MediaKind::Image,
        src: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        title: "Loading the Fleet",
        description: "Careful loading ensures packages arrive in perfect condition",
        tags: &["Loading", "Organization"],
    },
    GalleryItem {
        kind: MediaKind::Video,
        src: "https://images.unsplash.com/photo-1521318951415-df55a9b796e7?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        title: "On the Road",
        description: "Following our routes through beautiful South Florida neighborhoods",
        tags: &["Delivery", "Community"],
    },
    GalleryItem {
        kind: MediaKind::Image,
        src: "https://images.unsplash.com/photo-1516644246113-4052bd2d3ddf?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        title: "Customer Service",
        description: "Personal touch - we treat every delivery with care and respect",
        tags: &["Customer Care", "Service"],
    },
    GalleryItem {
        kind: MediaKind::Image,
        src: "https://images.unsplash.com/photo-1578836537282-3171d77f8632?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        title: "Team Meeting",
        description: "Daily briefings keep our team aligned and motivated",
        tags: &["Teamwork", "Communication"],
    },
    GalleryItem {
        kind: MediaKind::Image,
        src: "https://images.unsplash.com/photo-1525598912003-663126343e1f?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        title: "End of Day",
        description: "Celebrating another successful day of deliveries",
        tags: &["Success", "Satisfaction"],
    },
];

pub struct ImpactStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const DAILY_IMPACT: [ImpactStat; 3] = [
    ImpactStat {
        value: "200+",
        label: "Packages Delivered Daily",
    },
    ImpactStat {
        value: "150+",
        label: "Miles Covered Daily",
    },
    ImpactStat {
        value: "7",
        label: "Days a Week Service",
    },
];

pub struct ContactCard {
    pub title: &'static str,
    pub details: &'static str,
    pub subtext: &'static str,
}

pub const CONTACT_CARDS: [ContactCard; 4] = [
    ContactCard {
        title: "Phone",
        details: COMPANY_PHONE,
        subtext: "Monday - Friday, 8AM - 6PM",
    },
    ContactCard {
        title: "Email",
        details: COMPANY_EMAIL,
        subtext: "We respond within 24 hours",
    },
    ContactCard {
        title: "Service Area",
        details: SERVICE_AREA,
        subtext: "Complete Palm Beach County coverage",
    },
    ContactCard {
        title: "Operating Hours",
        details: "Monday - Sunday",
        subtext: "6AM - 9PM delivery window",
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 6] = [
    Faq {
        question: "What areas do you service?",
        answer: "We provide delivery services throughout Palm Beach County, including Boca Raton, Delray Beach, Boynton Beach, Lake Worth, Wellington, and West Palm Beach. If you're unsure if we serve your area, please contact us!",
    },
    Faq {
        question: "What are your delivery hours?",
        answer: "Our delivery window is from 6AM to 9PM, Monday through Sunday. Most deliveries are completed between 10AM and 8PM, but we work extended hours during peak seasons to ensure all packages are delivered on time.",
    },
    Faq {
        question: "How can I track my package?",
        answer: "All packages are tracked through Amazon's tracking system. You'll receive notifications with tracking information when your package is out for delivery. You can also track your package directly through your Amazon account or the Amazon app.",
    },
    Faq {
        question: "What if I'm not home for delivery?",
        answer: "We follow Amazon's delivery protocols. If you're not home, we'll attempt to deliver to a safe location on your property or follow any specific delivery instructions you've provided. For packages requiring a signature, we'll attempt redelivery or leave a notice.",
    },
    Faq {
        question: "Do you handle special delivery requests?",
        answer: "Yes! We accommodate special delivery instructions whenever possible. You can add delivery notes in your Amazon account, or contact us directly for specific requirements. We're committed to making sure your packages are delivered safely and conveniently.",
    },
    Faq {
        question: "How do I report an issue with my delivery?",
        answer: "If you experience any issues with your delivery, please contact us immediately at (561) 555-0123 or email info@galologistics.com. We take all delivery concerns seriously and will work quickly to resolve any problems.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_stats_match_documented_values() {
        assert_eq!(FALLBACK_STATS.team_members, "40+");
        assert_eq!(FALLBACK_STATS.years_experience, "5+");
        assert_eq!(FALLBACK_STATS.on_time_delivery, "99.2%");
        assert_eq!(FALLBACK_STATS.customer_rating, "4.9★");
    }

    #[test]
    fn fallback_testimonials_are_the_fixed_pair() {
        assert_eq!(FALLBACK_TESTIMONIALS.len(), 2);
        assert!(FALLBACK_TESTIMONIALS
            .iter()
            .all(|t| (1..=5).contains(&t.rating)));
        assert_eq!(FALLBACK_TESTIMONIALS[0].name, "Maria Rodriguez");
        assert_eq!(FALLBACK_TESTIMONIALS[1].name, "James Thompson");
    }

    #[test]
    fn stat_cards_pair_labels_with_fields() {
        let cards = stat_cards(&FALLBACK_STATS);
        assert_eq!(cards[0], ("Team Members", "40+"));
        assert_eq!(cards[3], ("Customer Rating", "4.9★"));
    }
}
