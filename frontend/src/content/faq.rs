//! Frequently asked questions shown on the home page accordion.

/// One accordion entry. `answer` is trusted inline HTML authored here, never
/// user input, because it is injected without escaping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqItem {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        id: "dpf-warning-light",
        question: "What does the DPF warning light mean?",
        answer: "The DPF (Diesel Particulate Filter) warning light indicates that your filter has become clogged with soot and ash. This is a safety mechanism to alert you that your engine's emissions system needs attention. When ignored, it can lead to reduced engine performance, increased fuel consumption, and potential engine damage. The good news is that we can clean it quickly without replacement. Learn more in our detailed guide: <a href='/blog/dpf-signs' class='faq-link'>5 Signs Your DPF Needs a Professional Clean</a>.",
    },
    FaqItem {
        id: "how-long-service",
        question: "How long does the DPF cleaning service take?",
        answer: "Most DPF cleaning jobs take about 1 hour from start to finish. This includes diagnostics, cleaning, and regeneration of your filter. We work on-site at your location, so there's no need to drop your car off at a garage. Once we're done, you're back on the road immediately. Some complex cases may take slightly longer, but we'll always give you an estimate upfront.",
    },
    FaqItem {
        id: "cost-comparison",
        question: "Why is your service only £245 when other garages charge £2,500+?",
        answer: "Most garages replace the entire DPF unit, which costs £2,500 or more. We clean and regenerate your existing filter using professional diagnostic equipment. Since we're not replacing parts, just cleaning them, our costs are significantly lower. You get the same result—a working DPF—for a fraction of the price. Plus, we come to you, saving you time and hassle.",
    },
    FaqItem {
        id: "will-light-go-off",
        question: "Will the warning light go off after the service?",
        answer: "Yes! Once we've cleaned and regenerated your DPF, we reset your engine's computer system to clear the warning light. The light should disappear immediately after the service. If it comes back later, it usually means the filter is clogging again, which could be due to driving habits (short journeys, lots of idling) or a deeper issue we can diagnose.",
    },
    FaqItem {
        id: "how-often-cleaning",
        question: "How often do I need DPF cleaning?",
        answer: "This depends on your driving habits. If you mainly do short journeys around town with lots of idling, your DPF may need cleaning every 12-18 months. If you do longer motorway drives regularly, it could be 2-3 years or more. We'll advise you based on your specific situation. Regular motorway driving helps regenerate the filter naturally, so it clogs less often.",
    },
    FaqItem {
        id: "all-diesel-cars",
        question: "Do you service all types of diesel vehicles?",
        answer: "Yes! We work on all diesel vehicles—vans, cars, 4x4s, trucks, and everything in between. We have experience with all major brands including Ford, Vauxhall, Mercedes, BMW, Audi, Volkswagen, and more. Whether it's a DPF issue, AdBlue fault, or EGR cooler problem, we've got the expertise and equipment to sort it. Check out our guides on <a href='/blog/adblue-faults' class='faq-link'>AdBlue diagnostics</a> and <a href='/blog/egr-cooler-problems' class='faq-link'>EGR cooler problems</a> for more information. Just give us a call with your vehicle details.",
    },
    FaqItem {
        id: "warranty",
        question: "Is there a warranty on the cleaning service?",
        answer: "We stand behind our work. If your DPF warning light comes back within 30 days due to our service not being effective, we'll reclean it for free. However, if the light returns later due to your driving habits or other issues, that's normal wear and tear. We also provide full diagnostics, so if there's a deeper problem (like a faulty sensor or exhaust leak), we'll identify it and advise you.",
    },
    FaqItem {
        id: "emergency-service",
        question: "Can you do emergency callouts?",
        answer: "Absolutely! If your DPF light comes on and you need it sorted urgently, give us a call. We offer emergency callouts outside normal hours (8am-6pm Mon-Fri) for an additional fee. We'll do our best to fit you in quickly. Just call 07983 361554 and explain your situation—we'll see what we can do to get you back on the road.",
    },
    FaqItem {
        id: "payment-methods",
        question: "What payment methods do you accept?",
        answer: "We accept cash, card (Visa, Mastercard, American Express), and bank transfers. Payment is due once the service is complete. We'll provide you with an invoice for your records. For larger jobs or fleet services, we can arrange payment terms—just ask when you call.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = FAQ_ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), FAQ_ITEMS.len());
        assert_eq!(FAQ_ITEMS.len(), 9);
    }

    #[test]
    fn answers_link_to_existing_articles() {
        for item in FAQ_ITEMS {
            for (start, _) in item.answer.match_indices("href='/blog/") {
                let rest = &item.answer[start + "href='/blog/".len()..];
                let id = &rest[..rest.find('\'').unwrap()];
                assert!(
                    crate::content::articles::find(id).is_some(),
                    "{} links to missing article {}",
                    item.id,
                    id
                );
            }
        }
    }
}
