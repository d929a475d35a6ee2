//! Privacy policy

use crate::components::SimplePage;
use leptos::prelude::*;

/// What is stored and who can see it
#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <SimplePage title="Privacy Policy">
            <p>
                "A public IMEI check only reveals whether a device has been reported stolen. "
                "Owner details are never shown to the person performing the check."
            </p>
            <p>
                "Reports are filed by police officers. The owner's name, contact details and "
                "proof of ownership are visible only to authorized officers and administrators."
            </p>
            <p>
                "Messages sent through the contact form are used only to respond to the enquiry."
            </p>
        </SimplePage>
    }
}
