use crate::services::Services;
use crate::ui::components::{FormField, SubmitNotice};
use dioxus::prelude::*;
use folio_client::{NewRecommendation, SubmitState};

/// Form for leaving a recommendation. The entry is validated before
/// anything is posted; `on_submitted` fires once the service accepted it.
#[component]
pub fn RecommendationForm(on_submitted: EventHandler<()>) -> Element {
    let services = use_context::<Services>();
    let mut form = use_signal(NewRecommendation::default);
    let mut state = use_signal(SubmitState::default);

    let current = form();
    let submitting = state.read().is_submitting();

    let submit = move |_: Event<MouseData>| {
        let entry = form();
        if let Err(e) = entry.validate() {
            state.set(SubmitState::Invalid(e));
            return;
        }

        state.set(SubmitState::Submitting);
        let client = services.recommendations.clone();
        spawn(async move {
            let outcome = SubmitState::from_result(client.submit(&entry).await);
            if outcome == SubmitState::Submitted {
                form.set(NewRecommendation::default());
                on_submitted.call(());
            }
            state.set(outcome);
        });
    };

    rsx! {
        div {
            class: "entry-form recommendation-form",
            FormField {
                label: "Name",
                value: current.recommender_name.clone(),
                required: true,
                on_input: move |value: String| form.write().recommender_name = value
            }
            FormField {
                label: "Title",
                value: current.recommender_title.clone(),
                on_input: move |value: String| form.write().recommender_title = value
            }
            FormField {
                label: "Company",
                value: current.recommender_company.clone(),
                on_input: move |value: String| form.write().recommender_company = value
            }
            FormField {
                label: "Location",
                value: current.recommender_location.clone(),
                on_input: move |value: String| form.write().recommender_location = value
            }
            FormField {
                label: "LinkedIn profile",
                value: current.linkedin_url.clone(),
                placeholder: "https://www.linkedin.com/in/...",
                on_input: move |value: String| form.write().linkedin_url = value
            }
            FormField {
                label: "Email",
                value: current.email.clone(),
                required: true,
                on_input: move |value: String| form.write().email = value
            }
            FormField {
                label: "Recommendation",
                value: current.recommendation_text.clone(),
                multiline: true,
                required: true,
                on_input: move |value: String| form.write().recommendation_text = value
            }
            button {
                class: "submit-button",
                disabled: submitting,
                onclick: submit,
                "Submit recommendation"
            }
            SubmitNotice {
                state: state(),
                success: "Thank you for the recommendation!"
            }
        }
    }
}
