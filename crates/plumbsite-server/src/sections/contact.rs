use askama::Template;

use super::RenderContext;
use crate::contact_form::{ContactSubmission, FieldErrors, SERVICE_OPTIONS};

/// Values and errors to re-populate the form with after a submission.
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    pub values: ContactSubmission,
    pub errors: FieldErrors,
}

impl ContactFormState {
    #[must_use]
    pub fn rejected(values: ContactSubmission, errors: FieldErrors) -> Self {
        Self { values, errors }
    }
}

struct ServiceOption {
    value: &'static str,
    selected: bool,
}

#[derive(Template)]
#[template(path = "sections/contact.html")]
struct ContactTemplate<'a> {
    name: &'a str,
    action: String,
    values: &'a ContactSubmission,
    errors: &'a FieldErrors,
    services: Vec<ServiceOption>,
}

pub fn render(ctx: &RenderContext<'_>, form: &ContactFormState) -> askama::Result<String> {
    let chosen = form.values.service.trim();
    let services = SERVICE_OPTIONS
        .iter()
        .map(|&value| ServiceOption {
            value,
            selected: value == chosen,
        })
        .collect();

    ContactTemplate {
        name: &ctx.data.basic_info.name,
        action: ctx.site.link("/contact"),
        values: &form.values,
        errors: &form.errors,
        services,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use plumbsite_core::SiteContext;

    use super::*;
    use crate::sections::test_support::{context, sample};

    #[test]
    fn form_posts_with_site_id_and_lists_services() {
        let data = sample();
        let site = SiteContext::new(Some("acme"));
        let html = render(&context(&data, &site), &ContactFormState::default()).unwrap();
        assert!(html.contains(r#"action="/contact?site_id=acme""#), "{html}");
        for option in SERVICE_OPTIONS {
            assert!(html.contains(option), "missing {option}");
        }
        assert!(!html.contains("field-error"));
    }

    #[test]
    fn rejected_submission_keeps_values_and_shows_errors() {
        let data = sample();
        let site = SiteContext::new(None);
        let values = ContactSubmission {
            name: "J".to_string(),
            service: "Water Heater".to_string(),
            ..ContactSubmission::default()
        };
        let errors = values.validate().unwrap_err();
        let html = render(
            &context(&data, &site),
            &ContactFormState::rejected(values, errors),
        )
        .unwrap();
        assert!(html.contains("Name is required"));
        assert!(html.contains(r#"value="J""#));
        assert!(html.contains(r#"<option value="Water Heater" selected>"#), "{html}");
    }
}
