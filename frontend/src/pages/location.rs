use log::info;
use yew::prelude::*;

use crate::components::layout::{Footer, Header};
use crate::components::scroll_to_top::{scroll_window_to_top, ScrollToTop};
use crate::components::sections::{BenefitsGrid, CallToAction, Hero, ServicesGrid, StatsBar};
use crate::components::whatsapp_button::WhatsAppButton;
use crate::content::locations::{Benefit, LocationConfig, Stat};
use crate::leads::form::ContactForm;
use crate::seo::{use_page_meta, PageMeta};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    Stats,
    Benefits,
    Services,
    ContactForm,
    CallToAction,
    Footer,
}

impl SectionKind {
    /// Stable key for the section wrapper, also used in its class name.
    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Stats => "stats",
            SectionKind::Benefits => "benefits",
            SectionKind::Services => "services",
            SectionKind::ContactForm => "contact",
            SectionKind::CallToAction => "cta",
            SectionKind::Footer => "footer",
        }
    }
}

/// One block of a city landing page with its copy already filled in.
#[derive(Clone, Debug, PartialEq)]
pub enum PageSection {
    Hero {
        badge: String,
        headline: &'static str,
        subheading: &'static str,
        footnote: String,
    },
    Stats(&'static [Stat]),
    Benefits {
        heading: String,
        intro: String,
        benefits: &'static [Benefit],
    },
    Services {
        heading: String,
    },
    ContactForm {
        form_id: String,
        heading: String,
        intro: &'static str,
    },
    CallToAction {
        heading: String,
    },
    Footer,
}

impl PageSection {
    pub fn kind(&self) -> SectionKind {
        match self {
            PageSection::Hero { .. } => SectionKind::Hero,
            PageSection::Stats(_) => SectionKind::Stats,
            PageSection::Benefits { .. } => SectionKind::Benefits,
            PageSection::Services { .. } => SectionKind::Services,
            PageSection::ContactForm { .. } => SectionKind::ContactForm,
            PageSection::CallToAction { .. } => SectionKind::CallToAction,
            PageSection::Footer => SectionKind::Footer,
        }
    }
}

/// Every city page is the same template; only the copy differs.
pub fn location_sections(config: &'static LocationConfig) -> Vec<PageSection> {
    let city = config.location;
    vec![
        PageSection::Hero {
            badge: format!("Local Service • {}", city),
            headline: config.hero_headline,
            subheading: config.hero_subheading,
            footnote: format!(
                "Serving {} and surrounding areas within {}",
                city, config.service_radius
            ),
        },
        PageSection::Stats(config.stats),
        PageSection::Benefits {
            heading: format!("Why Choose Dodgy Garage in {}?", city),
            intro: format!(
                "Local expertise, fast response times, and professional service for {} drivers.",
                city
            ),
            benefits: config.benefits,
        },
        PageSection::Services {
            heading: format!("DPF Services in {}", city),
        },
        PageSection::ContactForm {
            form_id: config.form_id(),
            heading: format!("Get Your {} DPF Sorted Today", city),
            intro: "Fill out the form below or call us directly. We'll get back to you within 1 hour.",
        },
        PageSection::CallToAction {
            heading: format!("Ready to Get Your DPF Sorted in {}?", city),
        },
        PageSection::Footer,
    ]
}

pub fn location_meta(config: &LocationConfig) -> PageMeta {
    PageMeta::new(config.title, config.meta_description)
        .keywords(config.keywords)
        .structured_data(config.schema())
}

fn render_section(section: &PageSection, config: &'static LocationConfig) -> Html {
    let location = AttrValue::Static(config.location);
    let prefix = AttrValue::Static(config.code);

    match section {
        PageSection::Hero { badge, headline, subheading, footnote } => html! {
            <Hero
                badge={badge.clone()}
                headline={*headline}
                subheading={*subheading}
                footnote={footnote.clone()}
                label_prefix={prefix}
            />
        },
        PageSection::Stats(stats) => html! { <StatsBar stats={*stats} /> },
        PageSection::Benefits { heading, intro, benefits } => html! {
            <BenefitsGrid heading={heading.clone()} intro={intro.clone()} benefits={*benefits} />
        },
        PageSection::Services { heading } => html! {
            <ServicesGrid heading={heading.clone()} location={location} label_prefix={prefix} />
        },
        PageSection::ContactForm { form_id, heading, intro } => html! {
            <ContactForm
                form_id={form_id.clone()}
                heading={heading.clone()}
                intro={*intro}
                location={location}
                label_prefix={prefix}
                phone_required={true}
            />
        },
        PageSection::CallToAction { heading } => html! {
            <CallToAction heading={heading.clone()} location={location} label_prefix={prefix} />
        },
        PageSection::Footer => html! { <Footer location={location} label_prefix={prefix} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct LocationPageProps {
    pub config: &'static LocationConfig,
}

#[function_component(LocationPage)]
pub fn location_page(props: &LocationPageProps) -> Html {
    let config = props.config;

    use_page_meta(location_meta(config));

    use_effect_with_deps(
        |code| {
            info!("Showing {} landing page", code);
            scroll_window_to_top();
            || ()
        },
        config.code,
    );

    let sections = location_sections(config);

    html! {
        <div class="location-page">
            <Header label_prefix={AttrValue::Static(config.code)} />
            { for sections.iter().map(|section| {
                let kind = section.kind().name();
                html! {
                    <div key={kind} class={classes!("location-section", format!("location-section-{}", kind))}>
                        { render_section(section, config) }
                    </div>
                }
            }) }
            <WhatsAppButton />
            <ScrollToTop />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::locations::{BRISTOL, EXETER, TAUNTON};

    #[test]
    fn cities_share_one_layout() {
        let bristol = location_sections(&BRISTOL);
        let exeter = location_sections(&EXETER);

        let kinds = |sections: &[PageSection]| sections.iter().map(PageSection::kind).collect::<Vec<_>>();
        assert_eq!(kinds(&bristol), kinds(&exeter));
        assert_eq!(
            kinds(&bristol),
            [
                SectionKind::Hero,
                SectionKind::Stats,
                SectionKind::Benefits,
                SectionKind::Services,
                SectionKind::ContactForm,
                SectionKind::CallToAction,
                SectionKind::Footer,
            ]
        );
        assert_ne!(bristol, exeter);
    }

    #[test]
    fn cities_get_their_own_metadata() {
        let bristol = location_meta(&BRISTOL);
        let exeter = location_meta(&EXETER);

        assert_eq!(bristol.title, BRISTOL.title);
        assert_eq!(bristol.description, BRISTOL.meta_description);
        assert_ne!(bristol.title, exeter.title);
        assert_ne!(bristol.description, exeter.description);
        assert_ne!(bristol.keywords, exeter.keywords);
        assert_ne!(bristol.structured_data, exeter.structured_data);
    }

    #[test]
    fn section_keys_are_unique() {
        let mut names: Vec<_> = location_sections(&BRISTOL).iter().map(|s| s.kind().name()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn copy_comes_from_the_city() {
        let sections = location_sections(&TAUNTON);
        match &sections[0] {
            PageSection::Hero { badge, headline, footnote, .. } => {
                assert_eq!(badge, "Local Service • Taunton");
                assert_eq!(*headline, TAUNTON.hero_headline);
                assert_eq!(footnote, "Serving Taunton and surrounding areas within 25-35 miles");
            }
            other => panic!("expected hero, got {:?}", other),
        }
        match &sections[4] {
            PageSection::ContactForm { form_id, heading, .. } => {
                assert_eq!(form_id, "contact_form_taunton");
                assert_eq!(heading, "Get Your Taunton DPF Sorted Today");
            }
            other => panic!("expected contact form, got {:?}", other),
        }
        assert_eq!(sections[1], PageSection::Stats(TAUNTON.stats));
    }
}
