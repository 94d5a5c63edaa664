//! Contact form bound to a `ContactForm` session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives in a signal. Submit runs `begin_submit` locally, posts
//! the snapshot to `/api/contact`, then settles the session from the reply:
//! sent, rejected with field errors, or failed with a notice. Rules are the
//! shared `contact` crate's, so the server never disagrees silently.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use contact::{ContactForm, ContactResponse, ContactStatus, Field, GENERIC_FAILURE_MESSAGE, SubmitAttempt};
use leptos::prelude::*;

/// Apply a server reply to a `Submitting` session.
///
/// Returns the notice to show, if any. Field errors are rendered from the
/// session itself and produce no notice.
pub(crate) fn settle_reply(form: &mut ContactForm, reply: Result<ContactResponse, String>) -> Option<String> {
    let Ok(reply) = reply else {
        form.finish_failure();
        return Some(GENERIC_FAILURE_MESSAGE.to_owned());
    };
    match reply.status {
        ContactStatus::Sent => {
            form.finish_success();
            None
        }
        ContactStatus::Invalid => {
            form.finish_rejected(reply.errors.unwrap_or_default());
            None
        }
        ContactStatus::RateLimited | ContactStatus::Failed => {
            form.finish_failure();
            Some(reply.message.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned()))
        }
    }
}

#[component]
pub fn ContactFormPanel() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let notice = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(SubmitAttempt::Started(snapshot)) = form.try_update(ContactForm::begin_submit) else {
            return;
        };
        notice.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let reply = crate::net::api::send_contact(&snapshot).await;
            if let Err(e) = &reply {
                log::error!("contact submission failed: {e}");
            }
            notice.set(form.try_update(|f| settle_reply(f, reply)).flatten());
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = snapshot;
    };

    view! {
        <Show
            when=move || !form.with(ContactForm::is_submitted)
            fallback=move || {
                view! {
                    <div class="contact-success">
                        <div class="contact-success__icon">"✓"</div>
                        <h3>"Message Sent!"</h3>
                        <p class="muted">"Thank you for reaching out. I'll get back to you as soon as possible."</p>
                        <button type="button" class="button button--ghost" on:click=move |_| form.update(ContactForm::reset)>
                            "Send another message"
                        </button>
                    </div>
                }
            }
        >
            <form class="contact-form" novalidate=true on:submit=on_submit>
                <div class="contact-form__row">
                    <FormField form=form field=Field::Name label="Name" placeholder="Your name"/>
                    <FormField form=form field=Field::Email label="Email" placeholder="Your email" input_type="email"/>
                </div>
                <FormField form=form field=Field::Subject label="Subject" placeholder="Subject (optional)"/>
                <FormField form=form field=Field::Message label="Message" placeholder="Your message" multiline=true/>
                <Show when=move || notice.get().is_some()>
                    <p class="contact-form__notice" role="alert">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <button
                    type="submit"
                    class="button button--gradient contact-form__submit"
                    disabled=move || form.with(ContactForm::is_submitting)
                >
                    {move || if form.with(ContactForm::is_submitting) { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </Show>
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let has_error = move || form.with(|f| f.error(field).is_some());
    let input_class = move || if has_error() { "form-input form-input--error" } else { "form-input" };
    let value = move || form.with(|f| f.value(field).to_owned());
    let on_input = move |ev: leptos::ev::Event| {
        form.update(|f| {
            f.set_field(field, event_target_value(&ev));
        });
    };

    let control = if multiline {
        view! {
            <textarea
                id=field.as_str()
                name=field.as_str()
                rows="6"
                placeholder=placeholder
                class=input_class
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=field.as_str()
                name=field.as_str()
                type=input_type
                placeholder=placeholder
                class=input_class
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-field">
            <label for=field.as_str()>{label}</label>
            {control}
            <Show when=has_error>
                <p class="form-field__error">{move || form.with(|f| f.error(field).unwrap_or_default().to_owned())}</p>
            </Show>
        </div>
    }
}
