use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use super::{page_title, render_document, PageContext};
use crate::contact::{ContactForm, FormErrors};

/// State of the contact form being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactView {
    /// Fresh, empty form
    Blank,

    /// Rejected submission, re-rendered with its values and errors
    Invalid { form: ContactForm, errors: FormErrors },

    /// Accepted submission
    Submitted,
}

fn field(
    name: &str,
    label: &str,
    value: &str,
    error: Option<&str>,
    multiline: bool,
) -> String {
    let input = if multiline {
        format!(r#"<textarea id="{name}" name="{name}" rows="5">{}</textarea>"#, text(value))
    } else {
        let kind = if name == "email" { "email" } else { "text" };
        format!(
            r#"<input id="{name}" name="{name}" type="{kind}" value="{}">"#,
            attr(value)
        )
    };
    let error = error
        .map(|message| format!(r#"<p class="field-error">{}</p>"#, text(message)))
        .unwrap_or_default();

    format!(
        "<div class=\"field\">\n<label for=\"{name}\">{} *</label>\n{input}\n{error}</div>\n",
        text(label)
    )
}

fn render_form(ctx: &PageContext<'_>, form: &ContactForm, errors: &FormErrors) -> String {
    let labels = &ctx.dict.pages.contact.form;
    format!(
        r#"<form class="contact-form" method="post" action="/{locale}/contact">
{name}{email}{subject}{message}<button type="submit">{submit}</button>
</form>"#,
        locale = ctx.locale,
        name = field("name", &labels.name, &form.name, errors.name.as_deref(), false),
        email = field("email", &labels.email, &form.email, errors.email.as_deref(), false),
        subject = field("subject", &labels.subject, &form.subject, errors.subject.as_deref(), false),
        message = field("message", &labels.message, &form.message, errors.message.as_deref(), true),
        submit = text(&labels.submit),
    )
}

pub fn render_contact(ctx: &PageContext<'_>, view: &ContactView) -> String {
    let contact = &ctx.dict.pages.contact;
    let info = &contact.info;

    let panel = match view {
        ContactView::Blank => render_form(ctx, &ContactForm::default(), &FormErrors::default()),
        ContactView::Invalid { form, errors } => render_form(ctx, form, errors),
        ContactView::Submitted => format!(
            r#"<div class="contact-success">
<h3>{success}</h3>
<a class="btn" href="/{locale}/contact">{send_another}</a>
</div>"#,
            success = text(&contact.success),
            locale = ctx.locale,
            send_another = text(&contact.form.send_another),
        ),
    };

    let body = format!(
        r#"<div class="page-intro">
<h1>{title}</h1>
<p class="subtitle">{subtitle}</p>
</div>
<aside class="contact-info">
<h2>{info_title}</h2>
<h3>{address}</h3><p>{address_value}</p>
<h3>{email}</h3><p>{email_value}</p>
<h3>{phone}</h3><p>{phone_value}</p>
</aside>
{panel}"#,
        title = text(&contact.title),
        subtitle = text(&contact.subtitle),
        info_title = text(&info.title),
        address = text(&info.address),
        address_value = text(&info.address_value),
        email = text(&info.email),
        email_value = text(&info.email_value),
        phone = text(&info.phone),
        phone_value = text(&info.phone_value),
    );

    render_document(
        ctx,
        &page_title(ctx.dict, Some(&contact.title)),
        &contact.subtitle,
        &body,
    )
}
