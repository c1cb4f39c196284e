//! Risk classification result rendering.

use leptos::prelude::*;

use crate::net::types::RiskResponse;

/// Card showing the model's classification and probability.
#[component]
pub fn ResultCard(result: RiskResponse) -> impl IntoView {
    let card_class = if result.risk == "High Risk" {
        "result-card result-card--high"
    } else {
        "result-card result-card--low"
    };

    view! {
        <div class=card_class>
            <h2 class="result-card__risk">{result.risk.clone()}</h2>
            <p class="result-card__probability">
                "Estimated probability: "
                {format!("{:.2}", result.probability)}
                "%"
            </p>
        </div>
    }
}
