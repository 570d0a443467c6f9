use std::rc::Rc;

use chrono::{DateTime, Utc};
use gloo_timers::callback::Timeout;
use log::{error, info};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::analytics::{click_label, use_analytics, Analytics, ConversionEvent};
use crate::config;
use crate::leads::model::{Lead, LeadField, LeadFields};
use crate::leads::store::{use_lead_store, LeadRepository};
use crate::links;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadFormState {
    pub fields: LeadFields,
    pub submitting: bool,
    pub submitted: bool,
}

pub enum LeadFormAction {
    Edit(LeadField, String),
    Begin,
    Saved,
    Finish,
    DismissBanner,
}

impl Reducible for LeadFormState {
    type Action = LeadFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LeadFormAction::Edit(field, value) => next.fields.set(field, value),
            LeadFormAction::Begin => next.submitting = true,
            LeadFormAction::Saved => {
                next.fields = LeadFields::default();
                next.submitted = true;
            }
            LeadFormAction::Finish => next.submitting = false,
            LeadFormAction::DismissBanner => next.submitted = false,
        }
        Rc::new(next)
    }
}

/// Which form a lead came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormTarget {
    pub form_id: String,
    pub location: Option<String>,
}

/// Runs one submission: track, persist, then settle the flags. Storage
/// failures are logged and swallowed so a broken store never takes the page
/// down; the caller only learns whether a lead was saved.
pub fn process_submission(
    fields: &LeadFields,
    target: &FormTarget,
    repository: &dyn LeadRepository,
    analytics: &dyn Analytics,
    now: DateTime<Utc>,
    dispatch: impl Fn(LeadFormAction),
) -> Option<Lead> {
    dispatch(LeadFormAction::Begin);
    analytics.track(&ConversionEvent::form(target.form_id.clone()));

    let lead = Lead::from_fields(fields, target.location.as_deref(), now);
    let saved = match repository.append(lead.clone()) {
        Ok(()) => {
            info!("Lead captured from {}", target.form_id);
            dispatch(LeadFormAction::Saved);
            Some(lead)
        }
        Err(e) => {
            error!("Form submission error: {}", e);
            None
        }
    };

    dispatch(LeadFormAction::Finish);
    saved
}

/// Arms the banner dismissal after a save; a failed submission schedules nothing.
pub fn schedule_banner_dismissal<T>(saved: Option<&Lead>, schedule: impl FnOnce(u32) -> T) -> Option<T> {
    saved.map(|_| schedule(config::SUCCESS_BANNER_MS))
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub form_id: AttrValue,
    pub heading: AttrValue,
    pub intro: AttrValue,
    #[prop_or_default]
    pub location: Option<AttrValue>,
    #[prop_or_default]
    pub label_prefix: Option<AttrValue>,
    #[prop_or(false)]
    pub phone_required: bool,
    #[prop_or_default]
    pub footnote: Option<AttrValue>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let state = use_reducer(LeadFormState::default);
    let store = use_lead_store();
    let analytics = use_analytics();
    // Dropping the handle cancels a pending dismissal if the page unmounts.
    let banner_timeout = use_mut_ref(|| None::<Timeout>);

    let onsubmit = {
        let state = state.clone();
        let store = store.clone();
        let analytics = analytics.clone();
        let banner_timeout = banner_timeout.clone();
        let target = FormTarget {
            form_id: props.form_id.to_string(),
            location: props.location.as_ref().map(|l| l.to_string()),
        };
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.submitting {
                return;
            }
            let dispatcher = state.dispatcher();
            let saved = process_submission(
                &state.fields,
                &target,
                store.repository(),
                analytics.sink(),
                Utc::now(),
                |action| dispatcher.dispatch(action),
            );
            let timeout = schedule_banner_dismissal(saved.as_ref(), |delay| {
                let dispatcher = state.dispatcher();
                Timeout::new(delay, move || dispatcher.dispatch(LeadFormAction::DismissBanner))
            });
            if timeout.is_some() {
                *banner_timeout.borrow_mut() = timeout;
            }
        })
    };

    let on_input = |field: LeadField| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(LeadFormAction::Edit(field, input.value()));
        })
    };
    let on_issue_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            state.dispatch(LeadFormAction::Edit(LeadField::CarIssue, input.value()));
        })
    };

    let prefix = props.label_prefix.as_deref();
    let phone_label = if props.phone_required { "Phone Number *" } else { "Phone Number (Optional)" };

    html! {
        <section id="contact-form" class="contact-section">
            <div class="contact-inner">
                <div class="contact-header">
                    <h2>{&props.heading}</h2>
                    <p>{&props.intro}</p>
                </div>
                if state.submitted {
                    <div class="form-success">
                        <div class="form-success-icon">{"✓"}</div>
                        <h3>{"Message Received!"}</h3>
                        <p>{"Thanks for getting in touch. We'll review your message and contact you shortly."}</p>
                        <p class="form-success-call">
                            {"In the meantime, feel free to call us on "}
                            <a
                                href={links::business_tel_uri()}
                                onclick={analytics.phone_callback(click_label(prefix, "form_success_phone"))}
                            >
                                {config::PHONE_DISPLAY}
                            </a>
                        </p>
                    </div>
                } else {
                    <form class="contact-form" onsubmit={onsubmit}>
                        <div class="form-row">
                            <div class="form-field">
                                <label for="name">{"Your Name *"}</label>
                                <input
                                    type="text"
                                    id="name"
                                    name="name"
                                    required=true
                                    placeholder="John Smith"
                                    value={state.fields.get(LeadField::Name).to_owned()}
                                    oninput={on_input(LeadField::Name)}
                                />
                            </div>
                            <div class="form-field">
                                <label for="email">{"Email Address *"}</label>
                                <input
                                    type="email"
                                    id="email"
                                    name="email"
                                    required=true
                                    placeholder="john@example.com"
                                    value={state.fields.get(LeadField::Email).to_owned()}
                                    oninput={on_input(LeadField::Email)}
                                />
                            </div>
                        </div>
                        <div class="form-field">
                            <label for="phone">{phone_label}</label>
                            <input
                                type="tel"
                                id="phone"
                                name="phone"
                                required={props.phone_required}
                                placeholder="07123 456789"
                                value={state.fields.get(LeadField::Phone).to_owned()}
                                oninput={on_input(LeadField::Phone)}
                            />
                        </div>
                        <div class="form-field">
                            <label for="carIssue">{"What's the issue with your vehicle? *"}</label>
                            <textarea
                                id="carIssue"
                                name="carIssue"
                                required=true
                                rows="5"
                                placeholder="E.g., DPF warning light on my 2018 Ford Transit, car is losing power..."
                                value={state.fields.get(LeadField::CarIssue).to_owned()}
                                oninput={on_issue_input}
                            />
                        </div>
                        <button type="submit" class="form-submit" disabled={state.submitting}>
                            { if state.submitting { "Sending..." } else { "Send Message" } }
                        </button>
                        if let Some(footnote) = &props.footnote {
                            <p class="form-footnote">{footnote}</p>
                        }
                    </form>
                }
            </div>
            <style>
                {r#"
                .contact-section {
                    padding: 5rem 1rem;
                    background: linear-gradient(135deg, #1a1a1a, #2d2d2d);
                    color: #ffffff;
                }
                .contact-inner {
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .contact-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .contact-header h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                .contact-header p {
                    color: #d1d5db;
                    font-size: 1.15rem;
                }
                .contact-form {
                    background: #ffffff;
                    color: #111827;
                    border-radius: 12px;
                    padding: 2rem;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.25);
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .form-field {
                    margin-bottom: 1.5rem;
                }
                .form-field label {
                    display: block;
                    font-weight: 700;
                    font-size: 0.9rem;
                    margin-bottom: 0.5rem;
                }
                .form-field input,
                .form-field textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    font: inherit;
                    box-sizing: border-box;
                }
                .form-field input:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: #FF9500;
                    box-shadow: 0 0 0 2px rgba(255, 149, 0, 0.4);
                }
                .form-submit {
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 8px;
                    background: #FF9500;
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .form-submit:disabled {
                    opacity: 0.5;
                    cursor: default;
                }
                .form-footnote {
                    text-align: center;
                    font-size: 0.75rem;
                    color: #6b7280;
                    margin-top: 1rem;
                }
                .form-success {
                    background: #f0fdf4;
                    border: 2px solid #22c55e;
                    border-radius: 12px;
                    padding: 2rem;
                    text-align: center;
                    color: #14532d;
                }
                .form-success-icon {
                    font-size: 3rem;
                    color: #22c55e;
                }
                .form-success-call a {
                    font-weight: 700;
                    color: inherit;
                }
                @media (max-width: 768px) {
                    .form-row {
                        grid-template-columns: 1fr;
                        gap: 0;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::analytics::testing::RecordingAnalytics;
    use crate::leads::store::testing::{FailingLeads, MemoryLeads};

    fn filled() -> LeadFields {
        LeadFields {
            name: "John Smith".into(),
            email: "john@example.com".into(),
            phone: "07123 456789".into(),
            car_issue: "DPF light on".into(),
        }
    }

    fn bristol() -> FormTarget {
        FormTarget {
            form_id: "contact_form_bristol".into(),
            location: Some("Bristol".into()),
        }
    }

    /// Applies actions the way `use_reducer` would, one after another.
    struct Harness {
        state: RefCell<Rc<LeadFormState>>,
        seen_submitting: RefCell<Vec<bool>>,
    }

    impl Harness {
        fn with_fields(fields: LeadFields) -> Self {
            Self {
                state: RefCell::new(Rc::new(LeadFormState {
                    fields,
                    ..Default::default()
                })),
                seen_submitting: RefCell::new(Vec::new()),
            }
        }

        fn dispatch(&self, action: LeadFormAction) {
            let current = self.state.borrow().clone();
            let next = current.reduce(action);
            self.seen_submitting.borrow_mut().push(next.submitting);
            *self.state.borrow_mut() = next;
        }

        fn state(&self) -> Rc<LeadFormState> {
            self.state.borrow().clone()
        }
    }

    #[test]
    fn submission_appends_exactly_one_matching_lead() {
        let store = MemoryLeads::default();
        let analytics = RecordingAnalytics::default();
        let harness = Harness::with_fields(filled());
        let started = Utc::now();

        let saved = process_submission(&filled(), &bristol(), &store, &analytics, Utc::now(), |a| {
            harness.dispatch(a)
        });

        let leads = store.list().unwrap();
        assert_eq!(leads.len(), 1);
        let lead = &leads[0];
        assert_eq!(lead.name, "John Smith");
        assert_eq!(lead.email, "john@example.com");
        assert_eq!(lead.phone, "07123 456789");
        assert_eq!(lead.car_issue, "DPF light on");
        assert_eq!(lead.location.as_deref(), Some("Bristol"));
        assert!(lead.timestamp >= started);
        assert_eq!(saved.as_ref(), Some(lead));
    }

    #[test]
    fn submission_tracks_form_id() {
        let analytics = RecordingAnalytics::default();
        process_submission(
            &filled(),
            &bristol(),
            &MemoryLeads::default(),
            &analytics,
            Utc::now(),
            |_| {},
        );
        assert_eq!(
            *analytics.events.borrow(),
            vec![ConversionEvent::form("contact_form_bristol")]
        );
    }

    #[test]
    fn success_clears_fields_and_shows_banner() {
        let harness = Harness::with_fields(filled());
        process_submission(
            &filled(),
            &bristol(),
            &MemoryLeads::default(),
            &RecordingAnalytics::default(),
            Utc::now(),
            |a| harness.dispatch(a),
        );

        let state = harness.state();
        assert!(state.submitted);
        assert!(!state.submitting);
        assert_eq!(state.fields, LeadFields::default());
        assert_eq!(*harness.seen_submitting.borrow(), vec![true, true, false]);
    }

    #[test]
    fn saved_lead_schedules_banner_dismissal() {
        let harness = Harness::with_fields(filled());
        let saved = process_submission(
            &filled(),
            &bristol(),
            &MemoryLeads::default(),
            &RecordingAnalytics::default(),
            Utc::now(),
            |a| harness.dispatch(a),
        );

        let delays = RefCell::new(Vec::new());
        let scheduled = schedule_banner_dismissal(saved.as_ref(), |delay| {
            delays.borrow_mut().push(delay);
            delay
        });
        assert_eq!(scheduled, Some(5_000));
        assert_eq!(*delays.borrow(), vec![config::SUCCESS_BANNER_MS]);

        // What the timer runs once it fires.
        harness.dispatch(LeadFormAction::DismissBanner);
        assert!(!harness.state().submitted);
    }

    #[test]
    fn failed_save_schedules_nothing() {
        let saved = process_submission(
            &filled(),
            &bristol(),
            &FailingLeads::default(),
            &RecordingAnalytics::default(),
            Utc::now(),
            |_| {},
        );

        let calls = RefCell::new(0);
        let scheduled = schedule_banner_dismissal(saved.as_ref(), |_| *calls.borrow_mut() += 1);
        assert_eq!(scheduled, None);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn banner_is_gone_after_dismissal() {
        let harness = Harness::with_fields(filled());
        harness.dispatch(LeadFormAction::Saved);
        assert!(harness.state().submitted);

        harness.dispatch(LeadFormAction::DismissBanner);
        assert!(!harness.state().submitted);
        assert_eq!(config::SUCCESS_BANNER_MS, 5_000);
    }

    #[test]
    fn failing_store_is_swallowed_and_clears_submitting() {
        let store = FailingLeads::default();
        let harness = Harness::with_fields(filled());

        let saved = process_submission(
            &filled(),
            &bristol(),
            &store,
            &RecordingAnalytics::default(),
            Utc::now(),
            |a| harness.dispatch(a),
        );

        assert!(saved.is_none());
        assert_eq!(store.attempts.get(), 1);
        let state = harness.state();
        assert!(!state.submitting);
        assert!(!state.submitted);
        assert_eq!(state.fields, filled());
    }

    #[test]
    fn corrupt_store_does_not_show_banner() {
        let store = MemoryLeads::with_raw("not json");
        let harness = Harness::with_fields(filled());
        let saved = process_submission(
            &filled(),
            &FormTarget { form_id: "contact_form".into(), location: None },
            &store,
            &RecordingAnalytics::default(),
            Utc::now(),
            |a| harness.dispatch(a),
        );
        assert!(saved.is_none());
        assert!(!harness.state().submitted);
        assert!(!harness.state().submitting);
    }

    #[test]
    fn home_form_leads_have_no_location() {
        let store = MemoryLeads::default();
        let target = FormTarget { form_id: "contact_form".into(), location: None };
        let mut fields = filled();
        fields.phone.clear();
        process_submission(&fields, &target, &store, &RecordingAnalytics::default(), Utc::now(), |_| {});
        let leads = store.list().unwrap();
        assert_eq!(leads[0].location, None);
        assert_eq!(leads[0].phone, "");
    }

    #[test]
    fn edits_only_touch_their_field() {
        let state = Rc::new(LeadFormState::default());
        let state = state.reduce(LeadFormAction::Edit(LeadField::Name, "Jo".into()));
        let state = state.reduce(LeadFormAction::Edit(LeadField::Phone, "0700".into()));
        assert_eq!(state.fields.name, "Jo");
        assert_eq!(state.fields.phone, "0700");
        assert!(state.fields.email.is_empty());
        assert!(!state.submitting && !state.submitted);
    }
}
