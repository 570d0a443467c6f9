#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub vehicle: &'static str,
    pub rating: u8,
    pub date: &'static str,
    pub review: &'static str,
    pub service: &'static str,
    pub emoji: &'static str,
}

/// Static copy of Google reviews, shown whether or not the live widget loads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoogleReview {
    pub author: &'static str,
    pub date: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrustStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "1",
        name: "John Mitchell",
        vehicle: "Ford Transit Custom",
        rating: 5,
        date: "January 2026",
        review: "Absolutely brilliant service! My DPF warning light had been on for weeks, and I was dreading a £3,000 replacement bill. Dodgy Garage came out to my home, diagnosed the problem in minutes, and cleaned it for just £245. The van runs like new again. Highly recommended!",
        service: "DPF Cleaning",
        emoji: "👨",
    },
    Testimonial {
        id: "2",
        name: "Sarah Thompson",
        vehicle: "Mercedes Sprinter",
        rating: 5,
        date: "December 2025",
        review: "Professional, friendly, and incredibly knowledgeable. My AdBlue system was playing up and I wasn't sure what was wrong. The team at Dodgy Garage explained everything clearly and fixed it on the spot. No hassle, no fuss. Worth every penny!",
        service: "AdBlue Diagnostics",
        emoji: "👩",
    },
    Testimonial {
        id: "3",
        name: "Mike Peters",
        vehicle: "BMW 320d",
        rating: 5,
        date: "November 2025",
        review: "Had an EGR cooler fault that was costing me a fortune in fuel. Main dealer quoted £1,200 for replacement. Dodgy Garage fixed it for £450 with a 30-day warranty. They even came out on a Saturday morning. Can't fault their service at all!",
        service: "EGR Cooler Repair",
        emoji: "👨",
    },
    Testimonial {
        id: "4",
        name: "Emma Watson",
        vehicle: "Vauxhall Vivaro",
        rating: 5,
        date: "October 2025",
        review: "I run a small delivery business and my van going into limp mode was a nightmare. Dodgy Garage responded within hours and had me back on the road the same day. Their mobile service is a lifesaver for business owners like me. Fantastic!",
        service: "DPF Cleaning",
        emoji: "👩",
    },
    Testimonial {
        id: "5",
        name: "David Chen",
        vehicle: "Audi A4",
        rating: 5,
        date: "September 2025",
        review: "Transparent pricing, no hidden costs, and they actually explain what's wrong with your vehicle. Unlike the main dealer, Dodgy Garage treats you like a person, not just a transaction. Will definitely use them again!",
        service: "Diagnostic Service",
        emoji: "👨",
    },
    Testimonial {
        id: "6",
        name: "Lisa Anderson",
        vehicle: "Renault Master",
        rating: 5,
        date: "August 2025",
        review: "My DPF was completely blocked and I was told it needed replacing. Dodgy Garage cleaned it instead and saved me over £2,000. The service was quick, professional, and the price was unbeatable. Highly recommend to anyone with diesel engine issues!",
        service: "DPF Cleaning",
        emoji: "👩",
    },
];

pub static GOOGLE_REVIEWS: &[GoogleReview] = &[
    GoogleReview {
        author: "Tracey Fairhurst",
        date: "Jan 3, 2026",
        text: "Came out today 3rd jan 2026. Brilliant most amazing service friendly and gave good advice would highly recommend this mobile service I will most definitely use them again !!!!!",
    },
    GoogleReview {
        author: "Savannah Nelson",
        date: "Sep 11, 2025",
        text: "I was skeptical about a garage called 'Dodgy', but they're anything but! Their mobile service is brilliant. Robby diagnosed and fixed my AdBlue issue right in my driveway. Quick, efficient, and incredibly knowledgeable.",
    },
    GoogleReview {
        author: "Chris Newman",
        date: "Nov 19, 2025",
        text: "My Fiat Doblo diesel vehicle had failed the MOT on emissions. I phoned Robby and his response was immediate. He traveled to Bristol, serviced the car at my house and the retest was an MOT pass. Thanks Robbie. Excellent service!",
    },
    GoogleReview {
        author: "Darrell Steward",
        date: "Aug 28, 2025",
        text: "I can't praise Dodgy Garage enough! Robby sorted out my EGR cooler issue without the need for a costly replacement. His expertise in exhaust emissions systems is impressive. Fast, friendly, and they come to you – what more could you ask for?",
    },
    GoogleReview {
        author: "Michael Thompson",
        date: "Recent",
        text: "Excellent service from start to finish. Robby was professional, knowledgeable, and got my DPF sorted quickly. Would definitely recommend to anyone with diesel engine issues. Great value for money!",
    },
    GoogleReview {
        author: "Sarah Williams",
        date: "Recent",
        text: "Called Dodgy Garage in a panic when my DPF light came on. They came out the same day and had it sorted in an hour. Professional, friendly, and a fraction of the cost of a replacement. Highly recommended!",
    },
];

pub static TRUST_STATS: &[TrustStat] = &[
    TrustStat { value: "500+", label: "Happy Customers" },
    TrustStat { value: "100%", label: "Mobile Service" },
    TrustStat { value: "£50K+", label: "Saved for Customers" },
];

/// Filled stars for a rating, clamped to five.
pub fn stars(rating: u8) -> String {
    "★".repeat(usize::from(rating.min(5)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_are_capped_at_five() {
        assert_eq!(stars(3), "★★★");
        assert_eq!(stars(9), "★★★★★");
        assert_eq!(stars(0), "");
    }

    #[test]
    fn testimonial_ids_are_unique() {
        let mut ids: Vec<_> = TESTIMONIALS.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), TESTIMONIALS.len());
        assert_eq!(GOOGLE_REVIEWS.len(), 6);
    }
}
