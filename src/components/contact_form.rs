//! Contact section: autosaving form with inline validation.

use leptos::prelude::*;

use crate::consts::SUBMIT_CONFIRMATION;
use crate::state::contact::{ContactForm, Field, SubmitOutcome};
use crate::util::browser;
use crate::util::persistence::BrowserStorage;

/// One labelled input with its error slot.
#[component]
fn ContactField(field: Field, label: &'static str) -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactForm>>();

    let value = move || contact.with(|c| c.draft.value(field).to_owned());
    let error = move || contact.with(|c| c.errors.get(field).unwrap_or_default());
    let on_input = move |ev: leptos::ev::Event| contact.update(|c| c.edit(&BrowserStorage, field, event_target_value(&ev)));

    let input = match field {
        Field::Message => view! {
            <textarea id=field.id() name=field.id() rows="5" maxlength="500" prop:value=value on:input=on_input on:change=on_input></textarea>
        }
        .into_any(),
        Field::Email => view! {
            <input id=field.id() name=field.id() type="email" prop:value=value on:input=on_input on:change=on_input/>
        }
        .into_any(),
        Field::Dob => view! {
            <input id=field.id() name=field.id() type="date" prop:value=value on:input=on_input on:change=on_input/>
        }
        .into_any(),
        Field::Name => view! {
            <input id=field.id() name=field.id() type="text" autocomplete="name" prop:value=value on:input=on_input on:change=on_input/>
        }
        .into_any(),
    };

    view! {
        <div class="contact-form__field">
            <label for=field.id()>
                {label}
                {(field == Field::Message)
                    .then(|| view! { " " <span id="charCount">{move || contact.with(ContactForm::char_count)}</span> })}
            </label>
            {input}
            <span id=field.error_id() class="error" aria-live="polite">{error}</span>
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactForm>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if contact.try_update(|c| c.submit(&BrowserStorage)) == Some(SubmitOutcome::Sent) {
            browser::alert(SUBMIT_CONFIRMATION);
        }
    };

    view! {
        <section id="contact" class="contact">
            <h2>"Contact"</h2>
            <form id="contactForm" class="contact-form" novalidate=true on:submit=on_submit>
                <ContactField field=Field::Name label="Name"/>
                <ContactField field=Field::Email label="Email"/>
                <ContactField field=Field::Dob label="Date of birth"/>
                <ContactField field=Field::Message label="Message"/>
                <button class="btn btn--primary" type="submit">"Send"</button>
            </form>
        </section>
    }
}
