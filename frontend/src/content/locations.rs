//! Per-city landing page copy. Each entry drives one route through the
//! location page template.

use serde_json::{json, Value};

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BenefitIcon {
    MapPin,
    Zap,
    TrendingUp,
    Users,
    Clock,
}

impl BenefitIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            BenefitIcon::MapPin => "📍",
            BenefitIcon::Zap => "⚡",
            BenefitIcon::TrendingUp => "📈",
            BenefitIcon::Users => "👥",
            BenefitIcon::Clock => "⏱",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Benefit {
    pub icon: BenefitIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct LocationConfig {
    /// Display name, also stored on leads from this page.
    pub location: &'static str,
    /// Route segment and analytics prefix. Must stay unique and stable.
    pub code: &'static str,
    pub title: &'static str,
    pub meta_description: &'static str,
    pub keywords: &'static str,
    pub hero_headline: &'static str,
    pub hero_subheading: &'static str,
    pub service_radius: &'static str,
    pub region: &'static str,
    pub postal_code: &'static str,
    pub stats: &'static [Stat],
    pub benefits: &'static [Benefit],
}

impl LocationConfig {
    pub fn form_id(&self) -> String {
        format!("contact_form_{}", self.code)
    }

    pub fn schema(&self) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "LocalBusiness",
            "name": format!("{} - {} DPF Cleaning", config::BUSINESS_NAME, self.location),
            "description": format!(
                "Professional mobile DPF cleaning service in {}. Expert diesel particulate filter cleaning, AdBlue diagnostics, and EGR cooler repairs.",
                self.location
            ),
            "url": format!("{}/{}", config::SITE_URL, self.code),
            "telephone": "07983361554",
            "address": {
                "@type": "PostalAddress",
                "addressLocality": self.location,
                "addressRegion": self.region,
                "postalCode": self.postal_code,
                "addressCountry": "GB"
            },
            "areaServed": { "@type": "City", "name": self.location },
            "priceRange": "£245",
            "aggregateRating": {
                "@type": "AggregateRating",
                "ratingValue": "4.9",
                "ratingCount": "500"
            }
        })
    }
}

pub static BRISTOL: LocationConfig = LocationConfig {
    location: "Bristol",
    code: "bristol",
    title: "DPF Cleaning Bristol - Mobile Service | Dodgy Garage",
    meta_description: "Professional mobile DPF cleaning in Bristol. Expert diesel particulate filter cleaning, AdBlue diagnostics, and EGR cooler repairs. Same-day service, £245. Call 07983 361554.",
    keywords: "DPF cleaning Bristol, mobile DPF cleaning Bristol, DPF filter cleaning Bristol, diesel particulate filter Bristol, DPF cleaning service Bristol, DPF specialist Bristol, AdBlue Bristol, EGR cleaning Bristol",
    hero_headline: "Your DPF Sorted in Bristol - No Garage Needed",
    hero_subheading: "Professional mobile DPF cleaning service in Bristol. We come to you. Diagnose, clean, and regenerate your DPF right on your driveway. Same-day service available.",
    service_radius: "15-25 miles",
    region: "Gloucestershire",
    postal_code: "BS1",
    stats: &[
        Stat { label: "Years Serving Bristol", value: "10+" },
        Stat { label: "Bristol Customers", value: "200+" },
        Stat { label: "Average Response Time", value: "1 Hour" },
        Stat { label: "Customer Rating", value: "4.9★" },
    ],
    benefits: &[
        Benefit {
            icon: BenefitIcon::MapPin,
            title: "Bristol-Based Service",
            description: "We know Bristol roads and traffic patterns. Quick response times and local expertise for Bristol residents.",
        },
        Benefit {
            icon: BenefitIcon::Zap,
            title: "Fast Bristol Turnaround",
            description: "Most DPF jobs completed within 1 hour. Get back on Bristol roads quickly without garage delays.",
        },
        Benefit {
            icon: BenefitIcon::TrendingUp,
            title: "Bristol Savings",
            description: "Save £2,000+ vs replacement. Affordable DPF cleaning for Bristol drivers at just £245.",
        },
        Benefit {
            icon: BenefitIcon::Users,
            title: "Bristol Trusted",
            description: "200+ satisfied Bristol customers. Trusted by Bristol residents for professional, reliable service.",
        },
        Benefit {
            icon: BenefitIcon::MapPin,
            title: "No Garage Needed",
            description: "We come to you in Bristol. Work done on-site at your home or workplace.",
        },
        Benefit {
            icon: BenefitIcon::Zap,
            title: "Expert Technicians",
            description: "Certified specialists with 20+ years experience in Bristol diesel engine diagnostics and repair.",
        },
    ],
};

pub static EXETER: LocationConfig = LocationConfig {
    location: "Exeter",
    code: "exeter",
    title: "DPF Cleaning Exeter - Mobile Service | Dodgy Garage",
    meta_description: "Professional mobile DPF cleaning in Exeter. Expert diesel particulate filter cleaning, AdBlue diagnostics, and EGR cooler repairs. Same-day service, £245. Call 07983 361554.",
    keywords: "DPF cleaning Exeter, mobile DPF cleaning Exeter, DPF filter cleaning Exeter, diesel particulate filter Exeter, DPF cleaning service Exeter, DPF specialist Exeter, AdBlue Exeter, EGR cleaning Exeter",
    hero_headline: "Your DPF Sorted in Exeter - Mobile Service",
    hero_subheading: "Professional mobile DPF cleaning service in Exeter. We come to you. Diagnose, clean, and regenerate your DPF right on your driveway. Same-day service available.",
    service_radius: "20-30 miles",
    region: "Devon",
    postal_code: "EX1",
    stats: &[
        Stat { label: "Years Serving Exeter", value: "8+" },
        Stat { label: "Exeter Customers", value: "180+" },
        Stat { label: "Average Response Time", value: "1 Hour" },
        Stat { label: "Customer Rating", value: "4.9★" },
    ],
    benefits: &[
        Benefit {
            icon: BenefitIcon::MapPin,
            title: "Exeter Local Experts",
            description: "Serving Exeter and East Devon for years. We know the local roads and can reach you quickly.",
        },
        Benefit {
            icon: BenefitIcon::Zap,
            title: "Fast Exeter Service",
            description: "Most jobs completed within 1 hour. Get your vehicle back on Exeter roads without long garage waits.",
        },
        Benefit {
            icon: BenefitIcon::TrendingUp,
            title: "Exeter Value",
            description: "Save up to £2,000 compared to DPF replacement. Professional cleaning at just £245.",
        },
        Benefit {
            icon: BenefitIcon::Users,
            title: "Exeter Trusted",
            description: "180+ satisfied Exeter customers. Recommended by local residents for reliable, professional service.",
        },
        Benefit {
            icon: BenefitIcon::MapPin,
            title: "Mobile Service",
            description: "We come to your location in Exeter. Work done at your home, workplace, or roadside.",
        },
        Benefit {
            icon: BenefitIcon::Zap,
            title: "Expert Team",
            description: "Certified diesel specialists with 20+ years experience serving Exeter and Devon drivers.",
        },
    ],
};

pub static TAUNTON: LocationConfig = LocationConfig {
    location: "Taunton",
    code: "taunton",
    title: "DPF Cleaning Taunton - Mobile Service | Dodgy Garage",
    meta_description: "Professional mobile DPF cleaning in Taunton. Expert diesel particulate filter cleaning, AdBlue diagnostics, and EGR cooler repairs. Same-day service, £245. Call 07983 361554.",
    keywords: "DPF cleaning Taunton, mobile DPF cleaning Taunton, DPF filter cleaning Taunton, diesel particulate filter Taunton, DPF cleaning service Taunton, DPF specialist Taunton, AdBlue Taunton, EGR cleaning Taunton, Somerset DPF cleaning",
    hero_headline: "Your DPF Sorted in Taunton - Fast & Reliable",
    hero_subheading: "Professional mobile DPF cleaning service in Taunton. We come to you. Diagnose, clean, and regenerate your DPF right on your driveway. Same-day service available.",
    service_radius: "25-35 miles",
    region: "Somerset",
    postal_code: "TA1",
    stats: &[
        Stat { label: "Years Serving Taunton", value: "12+" },
        Stat { label: "Taunton Customers", value: "250+" },
        Stat { label: "Average Response Time", value: "45 mins" },
        Stat { label: "Customer Rating", value: "4.9★" },
    ],
    benefits: &[
        Benefit {
            icon: BenefitIcon::MapPin,
            title: "Taunton-Based Service",
            description: "Based in Somerset, serving Taunton and surrounding areas. Local knowledge and quick response times.",
        },
        Benefit {
            icon: BenefitIcon::Zap,
            title: "Fast Taunton Response",
            description: "Average response time just 45 minutes. Get your DPF sorted quickly without long garage waits.",
        },
        Benefit {
            icon: BenefitIcon::TrendingUp,
            title: "Taunton Savings",
            description: "Save £2,000+ vs DPF replacement. Professional cleaning for Taunton residents at just £245.",
        },
        Benefit {
            icon: BenefitIcon::Users,
            title: "Taunton Trusted",
            description: "250+ satisfied Taunton and Somerset customers. Recommended by local residents and businesses.",
        },
        Benefit {
            icon: BenefitIcon::MapPin,
            title: "Mobile Convenience",
            description: "We come to you in Taunton. Work done at your home, workplace, or anywhere convenient.",
        },
        Benefit {
            icon: BenefitIcon::Zap,
            title: "Certified Experts",
            description: "Certified diesel specialists with 20+ years experience in DPF, AdBlue, and EGR systems.",
        },
    ],
};

pub fn all() -> [&'static LocationConfig; 3] {
    [&BRISTOL, &EXETER, &TAUNTON]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique_and_lowercase() {
        let codes: HashSet<_> = all().iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), all().len());
        for config in all() {
            assert_eq!(config.code, config.location.to_lowercase());
            assert_eq!(config.form_id(), format!("contact_form_{}", config.code));
        }
    }

    #[test]
    fn every_city_has_full_copy() {
        for config in all() {
            assert_eq!(config.stats.len(), 4);
            assert_eq!(config.benefits.len(), 6);
            assert!(config.hero_headline.contains(config.location));
            assert!(config.title.starts_with(&format!("DPF Cleaning {}", config.location)));
        }
    }

    #[test]
    fn schema_names_the_city() {
        let schema = TAUNTON.schema();
        assert_eq!(schema["address"]["postalCode"], "TA1");
        assert_eq!(schema["areaServed"]["name"], "Taunton");
        assert_eq!(schema["url"], "https://dodgy-garage.manus.space/taunton");
    }
}
