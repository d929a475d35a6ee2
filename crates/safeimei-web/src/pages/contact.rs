//! Contact form

use crate::{components::SimplePage, state::use_app_context};
use leptos::prelude::*;
use safeimei_protocol::{
    NotificationSink,
    notification::{MESSAGE_SENT_MESSAGE, MESSAGE_SENT_TITLE},
};

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm";

/// Enquiry form; sending shows the success modal and clears the fields
#[component]
pub fn ContactPage() -> impl IntoView {
    let app = use_app_context();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        tracing::info!("contact message sent");
        app.notify(MESSAGE_SENT_TITLE, MESSAGE_SENT_MESSAGE);
        set_name.set(String::new());
        set_email.set(String::new());
        set_message.set(String::new());
    };

    view! {
        <SimplePage title="Contact Us">
            <p>
                "We're here to help. Whether you have a question about our service, a suggestion, "
                "or a partnership inquiry, please feel free to reach out. Please note: to report a "
                "stolen phone, you must visit an authorized police station in person."
            </p>
            <form on:submit=on_submit class="mt-8 space-y-6">
                <div>
                    <label for="contact-name" class="block text-sm font-medium text-gray-700">"Full Name"</label>
                    <div class="mt-1">
                        <input
                            type="text"
                            id="contact-name"
                            required
                            class=INPUT_CLASS
                            prop:value=name
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div>
                    <label for="contact-email" class="block text-sm font-medium text-gray-700">"Email Address"</label>
                    <div class="mt-1">
                        <input
                            type="email"
                            id="contact-email"
                            required
                            class=INPUT_CLASS
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div>
                    <label for="contact-message" class="block text-sm font-medium text-gray-700">"Message"</label>
                    <div class="mt-1">
                        <textarea
                            id="contact-message"
                            rows="4"
                            required
                            class=INPUT_CLASS
                            prop:value=message
                            on:input=move |ev| set_message.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                </div>
                <div>
                    <button
                        type="submit"
                        class="w-full flex justify-center py-3 px-4 border rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700"
                    >
                        "Send Message"
                    </button>
                </div>
            </form>
        </SimplePage>
    }
}
