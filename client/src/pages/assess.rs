//! Assessment form page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the submit flow: validate fields, mark the submit control with the
//! loading class, POST the assessment, then swap in the result view or
//! surface the error message in place. The swap unmounts the marked submit
//! control, which is what ends the loading marker's lifecycle.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::result_card::ResultCard;
use crate::components::site_header::SiteHeader;
use crate::state::assessment::{AssessmentFields, SubmitPhase};
use crate::util::loading;

/// Element id of the submit control; the loading marker targets it.
const SUBMIT_ID: &str = "submit-assessment";

#[component]
pub fn AssessPage() -> impl IntoView {
    let fields = RwSignal::new(AssessmentFields::default());
    let phase = RwSignal::new(SubmitPhase::Idle);
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if matches!(phase.get(), SubmitPhase::Submitting) {
            return;
        }
        let request = match fields.get().to_request() {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg);
                return;
            }
        };
        info.set(String::new());
        phase.set(SubmitPhase::Submitting);
        loading::mark(SUBMIT_ID);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_assessment(&request).await {
                Ok(result) => phase.set(SubmitPhase::Done(result)),
                Err(e) => {
                    info.set(format!("Prediction failed: {e}"));
                    phase.set(SubmitPhase::Failed(e));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let on_start_over = move |_| {
        fields.set(AssessmentFields::default());
        info.set(String::new());
        phase.set(SubmitPhase::Idle);
    };

    view! {
        <SiteHeader/>
        <main class="page page--assess">
            <h1>"Risk assessment"</h1>
            {move || match phase.get() {
                SubmitPhase::Done(result) => view! {
                    <ResultCard result/>
                    <button class="cta-button" on:click=on_start_over>
                        "Start another assessment"
                    </button>
                }
                .into_any(),
                _ => view! {
                    <form class="assess-form" on:submit=on_submit>
                        <label>
                            "Age (years)"
                            <input
                                type="number"
                                min="1"
                                max="120"
                                prop:value=move || fields.get().age
                                on:input=move |ev| {
                                    fields.update(|f| f.age = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label>
                            "Gender"
                            <select
                                prop:value=move || fields.get().gender
                                on:change=move |ev| {
                                    fields.update(|f| f.gender = event_target_value(&ev));
                                }
                            >
                                <option value="Female">"Female"</option>
                                <option value="Male">"Male"</option>
                            </select>
                        </label>
                        <label>
                            "Smoking status"
                            <select
                                prop:value=move || fields.get().smoking
                                on:change=move |ev| {
                                    fields.update(|f| f.smoking = event_target_value(&ev));
                                }
                            >
                                <option value="Never">"Never"</option>
                                <option value="Former">"Former"</option>
                                <option value="Current">"Current"</option>
                            </select>
                        </label>
                        <label>
                            "Alcohol consumption"
                            <select
                                prop:value=move || fields.get().alcohol
                                on:change=move |ev| {
                                    fields.update(|f| f.alcohol = event_target_value(&ev));
                                }
                            >
                                <option value="None">"None"</option>
                                <option value="Moderate">"Moderate"</option>
                                <option value="Heavy">"Heavy"</option>
                            </select>
                        </label>
                        <label>
                            "ECG result"
                            <select
                                prop:value=move || fields.get().ecg
                                on:change=move |ev| {
                                    fields.update(|f| f.ecg = event_target_value(&ev));
                                }
                            >
                                <option value="Normal">"Normal"</option>
                                <option value="Abnormal">"Abnormal"</option>
                            </select>
                        </label>
                        <label>
                            "Blood oxygen (SpO2 %)"
                            <input
                                type="number"
                                step="0.1"
                                min="50"
                                max="100"
                                prop:value=move || fields.get().spo2
                                on:input=move |ev| {
                                    fields.update(|f| f.spo2 = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label>
                            "Blood pressure (systolic/diastolic)"
                            <input
                                type="text"
                                placeholder="120/80"
                                prop:value=move || fields.get().blood_pressure
                                on:input=move |ev| {
                                    fields.update(|f| f.blood_pressure = event_target_value(&ev));
                                }
                            />
                        </label>
                        <Show when=move || !info.get().is_empty()>
                            <p class="form-message">{move || info.get()}</p>
                        </Show>
                        <button id=SUBMIT_ID class="submit-button" type="submit">
                            "Check my risk"
                        </button>
                    </form>
                }
                .into_any(),
            }}
        </main>
    }
}
