//! Employee profile form.

use std::rc::Rc;

use dioxus::prelude::*;
use employee_profile_shared::{CountryCode, FormField};

use crate::components::profile::{NoticeBanner, PicturePicker, SignalNotifier};
use crate::components::ui::{Button, FieldError, TextInput};
use crate::config::FormConfig;
use crate::controller::{FinishOnDrop, ProfileFormController};
use crate::notify::Notice;
use crate::submission::ProfileSubmitter;

/// Collaborators the form needs, provided through context by the app root.
#[derive(Clone)]
pub struct FormServices {
    pub config: FormConfig,
    pub submitter: Rc<dyn ProfileSubmitter>,
}

#[component]
pub fn ProfileForm() -> Element {
    let services = use_context::<FormServices>();
    let mut controller = use_signal(|| ProfileFormController::new(&services.config));
    let notice = use_signal(|| None::<Notice>);

    let submitting = controller.read().is_submitting();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        // Rejections are already reflected in the controller state.
        let Ok(pending) = controller.write().begin_submit() else {
            return;
        };

        let submitter = services.submitter.clone();
        spawn(async move {
            // The signal may already be gone if the form unmounted mid-flight.
            let _finish = FinishOnDrop::new(move || {
                if let Ok(mut form) = controller.try_write() {
                    form.finish_submit();
                }
            });
            let notifier = SignalNotifier(notice);
            pending.deliver(submitter.as_ref(), &notifier).await;
        });
    };

    rsx! {
        div { class: "min-h-screen flex flex-col items-center bg-gray-50 p-6",
            NoticeBanner { notice }
            form {
                class: "w-full max-w-3xl bg-white shadow-md rounded-2xl p-6 md:p-8 grid gap-6 md:grid-cols-3",
                aria_label: "Employee profile form",
                onsubmit: on_submit,

                // Left column: picture
                div { class: "md:col-span-1 flex flex-col items-center",
                    PicturePicker { controller, notice }
                }

                // Right columns: inputs
                div { class: "md:col-span-2 grid gap-4",
                    div { class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                        ProfileTextField { controller, field: FormField::FirstName }
                        ProfileTextField { controller, field: FormField::SecondName }
                    }

                    ProfileTextField { controller, field: FormField::ThirdName }

                    div { class: "grid grid-cols-1 sm:grid-cols-3 gap-4",
                        PhoneField { controller }
                        ProfileTextField { controller, field: FormField::Email, class: "sm:col-span-2".to_string() }
                    }

                    div { class: "grid grid-cols-1 sm:grid-cols-4 gap-4",
                        ProfileTextField { controller, field: FormField::State }
                        ProfileTextField { controller, field: FormField::District }
                        ProfileTextField { controller, field: FormField::City }
                        ProfileTextField { controller, field: FormField::Tol }
                    }

                    div { class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                        ProfileTextField { controller, field: FormField::MotherName }
                        ProfileTextField { controller, field: FormField::FatherName }
                    }

                    ProfileTextField { controller, field: FormField::Study }

                    div { class: "flex items-center justify-between mt-4",
                        div { class: "text-sm text-gray-500",
                            "By submitting you agree to the company's data use policy."
                        }
                        Button {
                            r#type: "submit".to_string(),
                            disabled: submitting,
                            if submitting { "Saving..." } else { "Save Profile" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileTextField(
    mut controller: Signal<ProfileFormController>,
    field: FormField,
    #[props(optional)] class: Option<String>,
) -> Element {
    let form = controller.read();
    let value = form.value(field).to_string();
    let error = form.error_for(field).map(str::to_string);
    drop(form);

    rsx! {
        div { class: class.unwrap_or_default(),
            label { class: "block text-sm font-medium text-gray-700", {field.label()} }
            TextInput {
                name: field.key().to_string(),
                value,
                placeholder: field.placeholder().to_string(),
                invalid: error.is_some(),
                oninput: move |e: FormEvent| controller.write().update_field(field, e.value()),
            }
            if let Some(message) = error {
                FieldError { message }
            }
        }
    }
}

/// Mobile number with its country code prefix.
#[component]
fn PhoneField(mut controller: Signal<ProfileFormController>) -> Element {
    let form = controller.read();
    let current = form.country_code();
    let value = form.value(FormField::Number).to_string();
    let error = form.error_for(FormField::Number).map(str::to_string);
    drop(form);

    let border = if error.is_some() { "border-red-400" } else { "border-gray-200" };

    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700", {FormField::Number.label()} }
            div { class: "mt-1 flex",
                select {
                    class: "rounded-l-lg border border-gray-200 p-3",
                    value: current.as_str(),
                    onchange: move |e: FormEvent| match e.value().parse::<CountryCode>() {
                        Ok(code) => controller.write().set_country_code(code),
                        Err(err) => crate::log_warn!("{}", err),
                    },
                    for code in CountryCode::ALL {
                        option {
                            key: "{code}",
                            value: code.as_str(),
                            selected: code == current,
                            {code.as_str()}
                        }
                    }
                }
                input {
                    class: "flex-1 rounded-r-lg border p-3 {border}",
                    r#type: "tel",
                    name: FormField::Number.key(),
                    value: "{value}",
                    placeholder: FormField::Number.placeholder(),
                    oninput: move |e: FormEvent| {
                        controller.write().update_field(FormField::Number, e.value())
                    },
                }
            }
            if let Some(message) = error {
                FieldError { message }
            }
        }
    }
}
