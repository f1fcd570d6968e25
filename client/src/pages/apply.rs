//! Membership application form for a club. Requires a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anonymous visitors are sent to `/login` with this page as `next` once the
//! session has hydrated. Name and email are prefilled from the identity.

#[cfg(test)]
#[path = "apply_test.rs"]
mod apply_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api::{get_club, submit_application};
use crate::pages::not_found::NotFoundPage;
use crate::state::application::{ApplicationForm, Field, FieldErrors, SubmitStatus};
use crate::state::session::SessionContext;
use crate::util::auth::install_unauth_redirect;

/// Route for the apply page of `club_id`.
fn apply_path(club_id: &str) -> String {
    format!("/clubs/{club_id}/apply")
}

/// Submit button caption.
fn submit_label(status: &SubmitStatus) -> &'static str {
    match status {
        SubmitStatus::Submitting => "Submitting...",
        SubmitStatus::Failed(_) => "Try again",
        SubmitStatus::Editing | SubmitStatus::Submitted { .. } => "Submit application",
    }
}

/// Club id from the route, kept current when the router reuses the page for
/// another `/clubs/:id/apply`.
fn route_club_id(param: impl Fn() -> Option<String> + Send + Sync + 'static) -> Memo<String> {
    Memo::new(move |_| param().unwrap_or_default())
}

#[component]
pub fn ApplyPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let params = use_params_map();
    let club_id = route_club_id(move || params.read().get("id"));
    install_unauth_redirect(session, move || apply_path(&club_id.get()), use_navigate());

    // Rebuilt per club so form state never carries over to another club.
    move || match get_club(&club_id.get()) {
        Ok(club) => view! { <ApplyForm club_id={club.id} club_name={club.name}/> }.into_any(),
        Err(_) => view! { <NotFoundPage what="club"/> }.into_any(),
    }
}

#[component]
fn ApplyForm(club_id: &'static str, club_name: &'static str) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let form = RwSignal::new(ApplicationForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let status = RwSignal::new(SubmitStatus::default());

    // Prefill once the identity is known, without clobbering typed input.
    Effect::new(move || {
        if let Some(user) = session.user() {
            form.update(|f| {
                if f.full_name.is_empty() && f.email.is_empty() {
                    *f = ApplicationForm::prefilled(&user);
                }
            });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.with_untracked(|s| *s == SubmitStatus::Submitting) {
            return;
        }
        let request = match form.with_untracked(ApplicationForm::validate) {
            Ok(request) => request,
            Err(invalid) => {
                log::debug!("application form has {} invalid field(s)", invalid.len());
                errors.set(invalid);
                return;
            }
        };
        errors.set(FieldErrors::default());
        status.set(SubmitStatus::Submitting);

        let applicant = session.store.with_untracked(|s| s.current_user().cloned());
        match submit_application(club_id, applicant.as_ref(), &request) {
            Ok(receipt) => status.set(SubmitStatus::Submitted { reference: receipt.reference }),
            Err(e) => status.set(SubmitStatus::Failed(e.to_string())),
        }
    };

    let submitted = move || status.with(|s| matches!(s, SubmitStatus::Submitted { .. }));

    view! {
        <section class="apply">
            <h1>{format!("Apply to {club_name}")}</h1>

            <Show
                when=submitted
                fallback=move || {
                    view! {
                        <form class="apply-form" on:submit=on_submit>
                            <TextField form=form errors=errors field=Field::FullName label="Full name"/>
                            <TextField form=form errors=errors field=Field::StudentId label="Student ID"/>
                            <TextField form=form errors=errors field=Field::Department label="Department"/>
                            <YearField form=form errors=errors/>
                            <TextField form=form errors=errors field=Field::Email label="Email" kind="email"/>
                            <TextField form=form errors=errors field=Field::Phone label="Mobile number" kind="tel"/>
                            <MotivationField form=form errors=errors/>
                            {move || {
                                status
                                    .with(|s| match s {
                                        SubmitStatus::Failed(message) => Some(message.clone()),
                                        _ => None,
                                    })
                                    .map(|message| view! { <p class="apply-form__error" role="alert">{message}</p> })
                            }}
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || status.with(|s| *s == SubmitStatus::Submitting)
                            >
                                {move || status.with(submit_label)}
                            </button>
                        </form>
                    }
                }
            >
                <div class="apply-receipt" role="status">
                    <h2>"Application received"</h2>
                    <p>
                        "Your reference is "
                        <code>
                            {move || {
                                status
                                    .with(|s| match s {
                                        SubmitStatus::Submitted { reference } => reference.clone(),
                                        _ => String::new(),
                                    })
                            }}
                        </code>
                        ". The club will contact you by email."
                    </p>
                    <a class="btn" href={format!("/clubs/{club_id}")}>"Back to the club"</a>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn FieldError(errors: RwSignal<FieldErrors>, field: Field) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(field))
            .map(|message| view! { <span class="form-field__error">{message}</span> })
    }
}

#[component]
fn TextField(
    form: RwSignal<ApplicationForm>,
    errors: RwSignal<FieldErrors>,
    field: Field,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-field" class:form-field--invalid=move || errors.with(|e| e.get(field).is_some())>
            <span class="form-field__label">{label}</span>
            <input
                type=kind
                prop:value=move || form.with(|f| f.value(field).to_owned())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
            <FieldError errors=errors field=field/>
        </label>
    }
}

#[component]
fn YearField(form: RwSignal<ApplicationForm>, errors: RwSignal<FieldErrors>) -> impl IntoView {
    view! {
        <label class="form-field" class:form-field--invalid=move || errors.with(|e| e.get(Field::Year).is_some())>
            <span class="form-field__label">"Year of study"</span>
            <select
                prop:value=move || form.with(|f| f.year.clone())
                on:change=move |ev| form.update(|f| f.set(Field::Year, event_target_value(&ev)))
            >
                <option value="">"Choose..."</option>
                {(1..=5_u8)
                    .map(|year| view! { <option value={year.to_string()}>{format!("Year {year}")}</option> })
                    .collect_view()}
            </select>
            <FieldError errors=errors field=Field::Year/>
        </label>
    }
}

#[component]
fn MotivationField(form: RwSignal<ApplicationForm>, errors: RwSignal<FieldErrors>) -> impl IntoView {
    let length = move || form.with(|f| f.motivation.trim().chars().count());

    view! {
        <label class="form-field" class:form-field--invalid=move || errors.with(|e| e.get(Field::Motivation).is_some())>
            <span class="form-field__label">"Why do you want to join?"</span>
            <textarea
                rows="5"
                prop:value=move || form.with(|f| f.motivation.clone())
                on:input=move |ev| form.update(|f| f.set(Field::Motivation, event_target_value(&ev)))
            ></textarea>
            <span class="form-field__hint">
                {move || format!("{} / {} characters minimum", length(), crate::state::application::MIN_MOTIVATION_CHARS)}
            </span>
            <FieldError errors=errors field=Field::Motivation/>
        </label>
    }
}
