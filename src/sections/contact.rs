//! Contact form with a details sidebar.
//!
//! [`ContactForm`] owns the field values and the submit lifecycle:
//! `Editing` until a submit with every required field filled, then the
//! handler is called with a snapshot of the values, the fields are cleared
//! and the form settles in `Submitted`, where the button is replaced by the
//! thank-you note. In the browser `site.js` runs the same sequence, posting
//! the values as JSON when the section has an `endpoint`, and always
//! reaches the success state after [`SUBMIT_DELAY_MS`].

use crate::components::button::{Button, Size, Variant};
use crate::components::icons::{Icon, spinner};
use crate::components::section::{Background, SectionWrapper};
use crate::sections::{list_or, section_header};
use crate::types::{Business, BusinessHours, ContactFormData};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const DEFAULT_PHONE: &str = "(555) 123-4567";
pub const DEFAULT_EMAIL: &str = "info@example.com";
pub const DEFAULT_ADDRESS: &str = "123 Main Street, Anytown, ST 12345";
pub const SUCCESS_MESSAGE: &str = "Thank you! We'll be in touch soon.";
/// Pause between calling the handler and showing the success note.
pub const SUBMIT_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactProps {
    pub business_hours: Vec<BusinessHours>,
    /// URL the browser POSTs the form values to as JSON.
    pub endpoint: Option<String>,
}

pub fn default_hours() -> Vec<BusinessHours> {
    [
        ("Monday - Friday", "8:00 AM - 6:00 PM"),
        ("Saturday", "9:00 AM - 4:00 PM"),
        ("Sunday", "Closed"),
    ]
    .into_iter()
    .map(|(day, hours)| BusinessHours {
        day: day.into(),
        hours: hours.into(),
    })
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// The input's `name` attribute and JSON key.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    pub fn required(self) -> bool {
        !matches!(self, Field::Phone)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("required field '{0}' is empty")]
    MissingField(Field),
}

/// Receives the form values on submit.
pub trait SubmitHandler {
    fn submit(&mut self, data: &ContactFormData);
}

impl<F: FnMut(&ContactFormData)> SubmitHandler for F {
    fn submit(&mut self, data: &ContactFormData) {
        self(data)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    data: ContactFormData,
    status: FormStatus,
}

impl ContactForm {
    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.data.name,
            Field::Email => &self.data.email,
            Field::Phone => &self.data.phone,
            Field::Message => &self.data.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.data.name,
            Field::Email => &mut self.data.email,
            Field::Phone => &mut self.data.phone,
            Field::Message => &mut self.data.message,
        };
        *slot = value.into();
    }

    /// First required field left empty, in form order.
    pub fn validate(&self) -> Result<(), FormError> {
        match Field::ALL
            .into_iter()
            .find(|f| f.required() && self.field(*f).is_empty())
        {
            Some(field) => Err(FormError::MissingField(field)),
            None => Ok(()),
        }
    }

    /// Validate and enter `Submitting`, returning the values to send.
    pub fn begin_submit(&mut self) -> Result<ContactFormData, FormError> {
        self.validate()?;
        self.status = FormStatus::Submitting;
        Ok(self.data.clone())
    }

    /// Clear every field and show the success note.
    pub fn finish_submit(&mut self) {
        self.data = ContactFormData::default();
        self.status = FormStatus::Submitted;
    }

    /// The whole lifecycle in one step: validate, hand the values to
    /// `handler`, then clear and settle in `Submitted`.
    pub fn submit(&mut self, handler: &mut impl SubmitHandler) -> Result<(), FormError> {
        let data = self.begin_submit()?;
        handler.submit(&data);
        self.finish_submit();
        Ok(())
    }
}

pub fn render_contact(business: &Business, props: &ContactProps, form: &ContactForm) -> Markup {
    let hours = list_or(&props.business_hours, default_hours);
    let phone = business.phone.as_deref().unwrap_or(DEFAULT_PHONE);
    let email = business.email.as_deref().unwrap_or(DEFAULT_EMAIL);
    let address = business.address.as_deref().unwrap_or(DEFAULT_ADDRESS);
    let endpoint = props.endpoint.as_deref().filter(|e| !e.is_empty());
    let actions = match form.status() {
        FormStatus::Editing => submit_button(false),
        FormStatus::Submitting => submit_button(true),
        FormStatus::Submitted => success_note(),
    };

    SectionWrapper::new("contact", Background::White).render(html! {
        (section_header(
            "Get In Touch",
            "Contact Us",
            "Ready to get started? Reach out to us today for a free consultation and quote. We're here to help!",
        ))
        div.contact-grid {
            div.contact-form-card {
                form.contact-form data-contact-form data-endpoint=[endpoint] {
                    div.form-row {
                        (text_input(form, Field::Name, "text", "Full Name", "John Doe"))
                        (text_input(form, Field::Email, "email", "Email Address", "john@example.com"))
                    }
                    (text_input(form, Field::Phone, "tel", "Phone Number", "(555) 123-4567"))
                    div.form-field {
                        label for="contact-message" { "Message " span.required { "*" } }
                        textarea id="contact-message" name="message" required rows="5" tabindex="0"
                            placeholder="Tell us about your project or how we can help..." {
                            (form.field(Field::Message))
                        }
                    }
                    div.form-actions data-form-actions { (actions) }
                    template data-template="sending" { (sending_label()) }
                    template data-template="success" { (success_note()) }
                }
            }

            aside.contact-sidebar {
                div.contact-info-card {
                    h3 { "Contact Information" }
                    (info_row(Icon::Phone, "Phone", html! {
                        a href=(format!("tel:{phone}")) tabindex="0" { (phone) }
                    }))
                    (info_row(Icon::Mail, "Email", html! {
                        a href=(format!("mailto:{email}")) tabindex="0" { (email) }
                    }))
                    (info_row(Icon::MapPin, "Address", html! { span { (address) } }))
                }
                div.contact-hours-card {
                    h4 {
                        (Icon::Clock.svg("icon icon-md"))
                        "Business Hours"
                    }
                    ul.hours-list {
                        @for item in hours.iter() {
                            li {
                                span.hours-day { (item.day) }
                                span.hours-time { (item.hours) }
                            }
                        }
                    }
                }
                div.contact-urgent {
                    p.contact-urgent-title { "Need urgent assistance?" }
                    p { "Call us directly for same-day service availability." }
                    a.contact-urgent-phone href=(format!("tel:{phone}")) tabindex="0" {
                        (Icon::Phone.svg("icon icon-sm"))
                        (phone)
                    }
                }
            }
        }
    })
}

fn text_input(form: &ContactForm, field: Field, kind: &str, label: &str, placeholder: &str) -> Markup {
    let id = format!("contact-{}", field.name());
    html! {
        div.form-field {
            label for=(id) {
                (label)
                @if field.required() { " " span.required { "*" } }
            }
            input id=(id) type=(kind) name=(field.name()) value=(form.field(field))
                required[field.required()] placeholder=(placeholder) tabindex="0";
        }
    }
}

fn submit_button(submitting: bool) -> Markup {
    if submitting {
        html! {
            button.btn.btn--primary.btn--lg.btn--block type="submit" disabled { (sending_label()) }
        }
    } else {
        html! {
            (Button::new("Send Message")
                .variant(Variant::Primary)
                .size(Size::Lg)
                .button_type("submit")
                .class("btn--block")
                .trailing(Icon::ArrowRightLong.svg("btn-icon")))
        }
    }
}

fn sending_label() -> Markup {
    html! {
        (spinner("btn-icon spinner"))
        span.btn-label { "Sending..." }
    }
}

fn success_note() -> Markup {
    html! {
        div.form-success role="status" {
            (Icon::CheckCircle.svg("icon icon-md"))
            span { (SUCCESS_MESSAGE) }
        }
    }
}

fn info_row(icon: Icon, label: &str, value: Markup) -> Markup {
    html! {
        div.contact-info-row {
            div.contact-info-icon { (icon.svg("icon icon-md")) }
            div {
                p.contact-info-label { (label) }
                (value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::escaped;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Jane");
        form.set_field(Field::Email, "jane@example.com");
        form.set_field(Field::Message, "Leaky tap");
        form
    }

    #[test]
    fn submit_calls_handler_then_clears() {
        let mut form = filled();
        form.set_field(Field::Phone, "555-0100");
        let mut received = Vec::new();
        form.submit(&mut |data: &ContactFormData| received.push(data.clone()))
            .unwrap();

        assert_eq!(received.len(), 1);
        assert_eq!(received[0].name, "Jane");
        assert_eq!(received[0].phone, "555-0100");
        assert!(form.data().is_empty());
        assert_eq!(form.status(), FormStatus::Submitted);
    }

    #[test]
    fn missing_required_field_blocks_submit() {
        let mut form = filled();
        form.set_field(Field::Email, "");
        let mut calls = 0;
        let err = form.submit(&mut |_: &ContactFormData| calls += 1).unwrap_err();
        assert_eq!(err, FormError::MissingField(Field::Email));
        assert_eq!(calls, 0);
        assert_eq!(form.status(), FormStatus::Editing);
        assert_eq!(form.field(Field::Name), "Jane");
    }

    #[test]
    fn phone_is_optional() {
        assert!(filled().validate().is_ok());
        assert_eq!(
            ContactForm::default().validate(),
            Err(FormError::MissingField(Field::Name))
        );
    }

    #[test]
    fn begin_submit_enters_submitting() {
        let mut form = filled();
        let data = form.begin_submit().unwrap();
        assert_eq!(form.status(), FormStatus::Submitting);
        assert_eq!(data.message, "Leaky tap");
        form.finish_submit();
        assert_eq!(form.status(), FormStatus::Submitted);
    }

    #[test]
    fn error_message_names_field() {
        assert_eq!(
            FormError::MissingField(Field::Message).to_string(),
            "required field 'message' is empty"
        );
    }

    #[test]
    fn default_render() {
        let html = render_contact(&Business::named("Acme"), &ContactProps::default(), &ContactForm::default())
            .into_string();
        assert!(html.contains(DEFAULT_PHONE));
        assert!(html.contains(DEFAULT_EMAIL));
        assert!(html.contains(DEFAULT_ADDRESS));
        assert!(html.contains("Monday - Friday"));
        assert!(html.contains("8:00 AM - 6:00 PM"));
        assert!(html.contains("Closed"));
        assert!(html.contains("Get In Touch"));
        assert!(html.contains(&escaped(
            "Ready to get started? Reach out to us today for a free consultation and quote. We're here to help!"
        )));
        assert!(html.contains("Need urgent assistance?"));
        assert!(html.contains(">Send Message</span>"));
        assert!(!html.contains("data-endpoint"));
    }

    #[test]
    fn required_fields_marked() {
        let html = render_contact(&Business::named("Acme"), &ContactProps::default(), &ContactForm::default())
            .into_string();
        // name, email and the textarea.
        assert_eq!(html.matches(" required").count(), 3);
        assert!(html.contains(r#"type="tel""#));
    }

    #[test]
    fn field_values_are_rendered() {
        let html = render_contact(&Business::named("Acme"), &ContactProps::default(), &filled())
            .into_string();
        assert!(html.contains(r#"value="Jane""#));
        assert!(html.contains(">Leaky tap</textarea>"));
    }

    #[test]
    fn submitting_and_submitted_states() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let html = render_contact(&Business::named("Acme"), &ContactProps::default(), &form)
            .into_string();
        assert!(html.contains("disabled"));

        form.finish_submit();
        let html = render_contact(&Business::named("Acme"), &ContactProps::default(), &form)
            .into_string();
        assert!(!html.contains(">Send Message</span>"));
        // One in the actions slot, one in the template.
        assert_eq!(html.matches(&escaped(SUCCESS_MESSAGE)).count(), 2);
    }

    #[test]
    fn business_details_and_endpoint() {
        let business = Business {
            phone: Some("555-0199".into()),
            ..Business::named("Acme")
        };
        let props = ContactProps {
            endpoint: Some("/api/contact".into()),
            ..Default::default()
        };
        let html = render_contact(&business, &props, &ContactForm::default()).into_string();
        assert!(html.contains(r#"href="tel:555-0199""#));
        assert!(html.contains(r#"data-endpoint="/api/contact""#));
    }
}
