use log::warn;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;
use yew_hooks::use_update;

use crate::components::notification::{Notification, SiteNotifier};
use crate::config::SUBMIT_DELAY_MS;
use crate::contact::phone::reformat;
use crate::contact::submission::{ContactFormController, FormField, SimulatedDelivery};
use crate::timer::BrowserScheduler;

type SiteFormController = ContactFormController<SimulatedDelivery<BrowserScheduler>>;

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let notifier = use_context::<SiteNotifier>();
    let update = use_update();
    let controller = use_state(move || {
        let notify = match notifier {
            Some(notifier) => Callback::from(move |n: Notification| {
                notifier.show(n);
            }),
            None => {
                warn!("No notification layer mounted, contact form feedback disabled");
                Callback::noop()
            }
        };
        SiteFormController::new(
            SimulatedDelivery::new(BrowserScheduler, SUBMIT_DELAY_MS),
            notify,
            Callback::from(move |_| update()),
        )
    });
    let form = controller.snapshot();

    let onsubmit = {
        let controller = controller.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            controller.submit();
        })
    };

    let on_input = |field: FormField| {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            controller.set_field(field, input.value());
        })
    };

    let on_phone = {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = match reformat(&input.value()) {
                Some(formatted) => {
                    input.set_value(&formatted);
                    formatted
                }
                None => input.value(),
            };
            controller.set_field(FormField::Phone, value);
        })
    };

    let on_message = {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            controller.set_field(FormField::Message, input.value());
        })
    };

    html! {
        <form id="contact-form" class="contact-form" onsubmit={onsubmit} novalidate=true>
            <div class="form-group">
                <label for="name">{"Full Name"}</label>
                <input
                    id="name"
                    name="name"
                    type="text"
                    placeholder="Jane Doe"
                    value={form.value(FormField::Name).to_string()}
                    oninput={on_input(FormField::Name)}
                />
            </div>
            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    placeholder="jane@example.com"
                    value={form.value(FormField::Email).to_string()}
                    oninput={on_input(FormField::Email)}
                />
            </div>
            <div class="form-group">
                <label for="phone">{"Phone"}</label>
                <input
                    id="phone"
                    name="phone"
                    type="tel"
                    placeholder="(555) 123-4567"
                    value={form.value(FormField::Phone).to_string()}
                    oninput={on_phone}
                />
            </div>
            <div class="form-group">
                <label for="message">{"How can we help?"}</label>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    value={form.value(FormField::Message).to_string()}
                    oninput={on_message}
                />
            </div>
            <button type="submit" class="btn btn-primary" disabled={form.submit.is_disabled()}>
                {form.submit.label().to_string()}
            </button>
        </form>
    }
}
