//! Contact page
//!
//! The form posts back to `/contact` and is validated synchronously.
//! Per-submission states: idle → submitting → success | failure.
//! Success and failure are terminal for that submission; resubmitting
//! starts a fresh cycle. The served script only toggles the disabled
//! state while the request is in flight - there are no retries and no
//! partial submissions.
//!
//! Delivery is deliberately a stub: a valid submission is logged and
//! acknowledged, nothing is persisted or dispatched.

use axum::{Form, Router, extract::State, response::Html, routing::get};
use maud::{Markup, html};
use serde::Deserialize;

use crate::core::ServerState;
use crate::render::format::phone_href;
use crate::render::{Chrome, layout};
use crate::utils::validation::{
    MAX_MESSAGE_LEN, MIN_MESSAGE_LEN, is_present, is_valid_email, message_len_ok,
};

pub fn router() -> Router<ServerState> {
    Router::new().route("/contact", get(page_handler).post(submit_handler))
}

// ── Contact details (static; not store-managed) ─────────────────────

const CONTACT_EMAIL: &str = "hello@emberandoak.coffee";
const CONTACT_PHONE: &str = "(503) 555-0147";
const CONTACT_ADDRESS: [&str; 2] = ["3847 SE Division Street", "Portland, OR 97202"];

const SUBJECTS: &[(&str, &str)] = &[
    ("general", "General Question"),
    ("feedback", "Feedback"),
    ("catering", "Catering Inquiry"),
    ("events", "Event / Partnership"),
    ("press", "Press / Media"),
    ("jobs", "Jobs / Careers"),
    ("other", "Something Else"),
];

const FAQS: &[(&str, &str)] = &[
    (
        "Do you do catering?",
        "Yes! We can do coffee service for events, meetings, and private parties. Email us \
         at catering@emberandoak.coffee with details about your event and we'll put together \
         a quote.",
    ),
    (
        "Can I buy your beans online?",
        "Not yet, but we're working on it. For now, you can pick them up at either location. \
         We rotate our single-origins monthly and always have The Division blend in stock.",
    ),
    (
        "Do you have dairy-free options?",
        "Absolutely. We have oat milk (Misty Morning from Willamette Valley), almond milk, \
         and coconut milk. Oat is our favorite for lattes. No extra charge.",
    ),
    (
        "Are you hiring?",
        "We're always looking for good people. Drop off a resume at either location or email \
         jobs@emberandoak.coffee. Coffee experience helps but isn't required—we can teach you \
         to pull shots.",
    ),
];

// ── Submission handling ─────────────────────────────────────────────

/// Raw form fields; everything defaults so missing inputs validate
/// rather than failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// Outcome surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

impl SubmissionResult {
    fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

/// Validate a submission. Checks run in a fixed order and the first
/// failure wins, so the user always sees one specific message.
pub fn validate_submission(submission: &ContactSubmission) -> SubmissionResult {
    let name = submission.name.trim();
    let email = submission.email.trim();
    let message = submission.message.trim();

    if !is_present(name) || !is_present(email) || !is_present(message) {
        return SubmissionResult::failure("Please fill in all required fields.");
    }
    if !is_valid_email(email) {
        return SubmissionResult::failure("Please enter a valid email address.");
    }
    if message.chars().count() < MIN_MESSAGE_LEN {
        return SubmissionResult::failure(
            "Please enter a longer message (at least 10 characters).",
        );
    }
    if !message_len_ok(message) {
        return SubmissionResult::failure("Message is too long (maximum 5000 characters).");
    }

    SubmissionResult {
        success: true,
        message: "Thanks for reaching out! We'll get back to you within a day or two.".to_string(),
    }
}

async fn page_handler(State(state): State<ServerState>) -> Html<String> {
    let chrome = Chrome::load(&state.content).await;
    render(&chrome, None)
}

async fn submit_handler(
    State(state): State<ServerState>,
    Form(submission): Form<ContactSubmission>,
) -> Html<String> {
    let chrome = Chrome::load(&state.content).await;

    let result = validate_submission(&submission);
    if result.success {
        // Real delivery (email service / CRM) is intentionally absent.
        tracing::info!(
            name = %submission.name.trim(),
            email = %submission.email.trim(),
            subject = %submission.subject.trim(),
            message_len = submission.message.trim().chars().count(),
            "Contact form submission"
        );
    }

    render(&chrome, Some(result))
}

// ── Rendering ───────────────────────────────────────────────────────

fn render(chrome: &Chrome, result: Option<SubmissionResult>) -> Html<String> {
    let body = html! {
        div class="contact-grid" {
            div {
                h1 { "Get in Touch" }
                p class="page-head__lede" {
                    "Questions, feedback, or just want to say hi? We read everything and try \
                     to respond within a day or two."
                }
                (form_section(result.as_ref()))
            }
            div class="contact-aside" {
                (direct_contact())
                (faq())
            }
        }
    };

    let markup = layout::page(
        &layout::page_title("Contact"),
        "Get in touch with Ember & Oak Coffee. Questions, feedback, catering, or just want to say hi.",
        "/contact",
        chrome,
        body,
    );
    Html(markup.into_string())
}

fn form_section(result: Option<&SubmissionResult>) -> Markup {
    // A successful submission replaces the form entirely; failures keep
    // the form with the error banner above it.
    if let Some(result) = result
        && result.success
    {
        return html! {
            div class="form-success" {
                h3 { "Message Sent!" }
                p { (result.message) }
            }
        };
    }

    html! {
        form class="contact-form" method="post" action="/contact" data-contact-form {
            @if let Some(result) = result {
                div class="form-error" { (result.message) }
            }

            div class="field-row" {
                div class="field" {
                    label for="name" { "Name" }
                    input type="text" id="name" name="name" required placeholder="Your name";
                }
                div class="field" {
                    label for="email" { "Email" }
                    input type="email" id="email" name="email" required placeholder="you@example.com";
                }
            }

            div class="field" {
                label for="subject" { "What's this about?" }
                select id="subject" name="subject" {
                    @for (value, label) in SUBJECTS {
                        option value=(value) { (label) }
                    }
                }
            }

            div class="field" {
                label for="message" { "Message" }
                textarea id="message" name="message" rows="6" required
                    placeholder="Tell us what's on your mind..." {}
            }

            button type="submit" class="button button--lg" data-submit-label="Sending..." {
                "Send Message"
            }
        }
    }
}

fn direct_contact() -> Markup {
    html! {
        div {
            h2 { "Or Reach Out Directly" }
            div class="contact-channels" {
                div class="contact-channel" {
                    p class="contact-channel__label" { "Email" }
                    a href={ "mailto:" (CONTACT_EMAIL) } { (CONTACT_EMAIL) }
                }
                div class="contact-channel" {
                    p class="contact-channel__label" { "Phone" }
                    a href=(phone_href(CONTACT_PHONE)) { (CONTACT_PHONE) }
                    p class="contact-channel__hint" { "Division Street location" }
                }
                div class="contact-channel" {
                    p class="contact-channel__label" { "Visit Us" }
                    p {
                        (CONTACT_ADDRESS[0])
                        br;
                        (CONTACT_ADDRESS[1])
                    }
                    a class="text-link" href="/locations" { "All Locations →" }
                }
            }
        }
    }
}

fn faq() -> Markup {
    html! {
        div {
            h2 { "Common Questions" }
            div class="faq-list" {
                @for (question, answer) in FAQS {
                    div class="faq" {
                        h3 { (question) }
                        p { (answer) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            subject: "general".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn missing_required_fields_fail() {
        let result = validate_submission(&submission("", "foo@bar.com", "long enough text"));
        assert!(!result.success);
        assert_eq!(result.message, "Please fill in all required fields.");

        let result = validate_submission(&submission("Maya", "   ", "long enough text"));
        assert_eq!(result.message, "Please fill in all required fields.");
    }

    #[test]
    fn email_without_tld_fails() {
        let result = validate_submission(&submission("Maya", "foo@bar", "long enough text"));
        assert!(!result.success);
        assert_eq!(result.message, "Please enter a valid email address.");
    }

    #[test]
    fn message_length_boundaries() {
        let short = "a".repeat(9);
        let result = validate_submission(&submission("Maya", "foo@bar.com", &short));
        assert_eq!(
            result.message,
            "Please enter a longer message (at least 10 characters)."
        );

        let exactly_min = "a".repeat(10);
        assert!(validate_submission(&submission("Maya", "foo@bar.com", &exactly_min)).success);

        let exactly_max = "a".repeat(MAX_MESSAGE_LEN);
        assert!(validate_submission(&submission("Maya", "foo@bar.com", &exactly_max)).success);

        let too_long = "a".repeat(MAX_MESSAGE_LEN + 1);
        let result = validate_submission(&submission("Maya", "foo@bar.com", &too_long));
        assert_eq!(result.message, "Message is too long (maximum 5000 characters).");
    }

    #[test]
    fn valid_submission_succeeds_without_subject() {
        let result = validate_submission(&ContactSubmission {
            name: "Maya".to_string(),
            email: "maya@emberandoak.coffee".to_string(),
            subject: String::new(),
            message: "I would like to talk about beans.".to_string(),
        });
        assert!(result.success);
        assert_eq!(
            result.message,
            "Thanks for reaching out! We'll get back to you within a day or two."
        );
    }

    #[test]
    fn fields_are_trimmed_before_validation() {
        let result = validate_submission(&submission(
            "  Maya  ",
            "  maya@emberandoak.coffee  ",
            "  plenty of message here  ",
        ));
        assert!(result.success);
    }
}
