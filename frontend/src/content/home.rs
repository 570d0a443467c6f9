use crate::content::locations::{Benefit, BenefitIcon, Stat};

pub const TITLE: &str = "Dodgy Garage - Mobile DPF Cleaning Service in Bridgwater";
pub const META_DESCRIPTION: &str = "Professional mobile DPF cleaning service in Bridgwater, Somerset. Expert diesel particulate filter cleaning, AdBlue diagnostics, and EGR cooler repairs. Same-day service, no garage needed. Call 07983 361554.";
pub const KEYWORDS: &str = "DPF cleaning, mobile DPF cleaning, DPF cleaning near me, DPF filter cleaning, diesel particulate filter, AdBlue delete, EGR cleaning, Bridgwater, Somerset";

pub static STATS: &[Stat] = &[
    Stat { label: "Complete Service", value: "£245" },
    Stat { label: "Average Job Time", value: "1 Hour" },
    Stat { label: "You Save vs Replacement", value: "£2000+" },
    Stat { label: "Customer Rating", value: "5.0★" },
];

pub static FEATURES: &[Benefit] = &[
    Benefit {
        icon: BenefitIcon::MapPin,
        title: "We Come to You",
        description: "No need to waste time driving to a garage. We arrive at your location with all the equipment needed.",
    },
    Benefit {
        icon: BenefitIcon::Zap,
        title: "Quick & Efficient",
        description: "Most jobs done in about an hour. You'll be back on the road while other garages are still quoting.",
    },
    Benefit {
        icon: BenefitIcon::TrendingUp,
        title: "Save Thousands",
        description: "New DPFs cost £2,500+. We clean yours for £245. Same result, fraction of the cost.",
    },
    Benefit {
        icon: BenefitIcon::Clock,
        title: "No Downtime",
        description: "Work done on-site. No waiting for parts or sending your car away for weeks.",
    },
    Benefit {
        icon: BenefitIcon::Users,
        title: "Expert Technicians",
        description: "Years of experience with all diesel engine types and emissions systems.",
    },
    Benefit {
        icon: BenefitIcon::Zap,
        title: "Diagnostics Included",
        description: "Full diagnostic scan included in the service. We'll identify all issues, not just the DPF.",
    },
];

/// One bookable service, rendered as a card with a call button and a link
/// to the matching article.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceCard {
    pub slot: &'static str,
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: String,
    pub price: Option<&'static str>,
    pub article_id: &'static str,
}

/// Service cards, worded for a city when one is given.
pub fn service_cards(location: Option<&str>) -> Vec<ServiceCard> {
    let (dpf, adblue, egr) = match location {
        Some(city) => (
            format!("Professional diesel particulate filter cleaning for {} vehicles. Remove soot buildup without replacement.", city),
            format!("Expert AdBlue system diagnosis and repair for {} area. Get warning lights cleared quickly.", city),
            format!("Professional EGR cooler cleaning and repair in {}. Improve engine performance.", city),
        ),
        None => (
            "Remove soot buildup from your Diesel Particulate Filter without replacement. Restore performance and fuel economy.".to_string(),
            "Fault code diagnosis and repair for AdBlue system issues. Get your warning lights cleared quickly.".to_string(),
            "Clean or repair your EGR cooler without costly replacement. Improve engine performance and reduce emissions.".to_string(),
        ),
    };

    vec![
        ServiceCard {
            slot: "dpf_card_phone",
            emoji: "🔧",
            title: "DPF Cleaning",
            description: dpf,
            price: Some("£245"),
            article_id: "dpf-signs",
        },
        ServiceCard {
            slot: "adblue_card_phone",
            emoji: "🔍",
            title: "AdBlue Diagnostics",
            description: adblue,
            price: None,
            article_id: "adblue-faults",
        },
        ServiceCard {
            slot: "egr_card_phone",
            emoji: "⚙️",
            title: "EGR Cooler Cleaning",
            description: egr,
            price: None,
            article_id: "egr-cooler-problems",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::articles;

    #[test]
    fn cards_link_to_real_articles() {
        for card in service_cards(None) {
            assert!(articles::find(card.article_id).is_some(), "{}", card.article_id);
        }
    }

    #[test]
    fn city_cards_mention_the_city() {
        let cards = service_cards(Some("Exeter"));
        assert!(cards.iter().all(|c| c.description.contains("Exeter")));
        assert!(service_cards(None).iter().all(|c| !c.description.contains("Exeter")));
        assert_eq!(cards[0].price, Some("£245"));
        assert_eq!(cards[1].price, None);
    }
}
