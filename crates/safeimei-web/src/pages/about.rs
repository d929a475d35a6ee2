//! About the registry

use crate::components::SimplePage;
use leptos::prelude::*;

/// Mission statement and how the registry works with the police
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <SimplePage title="About SafeIMEI">
            <p>
                "SafeIMEI is Nigeria's central registry of stolen mobile phones. Every entry is "
                "filed by an officer at an authorized police station after the owner has proved "
                "ownership and made an official statement."
            </p>
            <p>
                "Anyone can check a device's IMEI before buying it second-hand. A phone that "
                "shows up as stolen is worth nothing to a thief once buyers stop accepting it, "
                "which is the point of the registry."
            </p>
            <p>
                "When a stolen phone is recovered, the station that filed the report updates its "
                "status so the device can be used and sold legally again."
            </p>
        </SimplePage>
    }
}
