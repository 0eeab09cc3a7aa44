use leptos::prelude::*;

use crate::content::Feature;

#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    let tile = format!("feature-icon {}", feature.tone);

    view! {
        <div class="card feature-card">
            <div class=tile>{feature.icon}</div>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}
