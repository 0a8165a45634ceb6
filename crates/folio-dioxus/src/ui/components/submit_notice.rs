use dioxus::prelude::*;
use folio_client::SubmitState;

/// Outcome line under a form. Validation errors and service rejections are
/// shown verbatim; `success` is shown once the submission went through.
#[component]
pub fn SubmitNotice(state: SubmitState, success: String) -> Element {
    match state {
        SubmitState::Idle => rsx! {},
        SubmitState::Submitting => rsx! {
            p { class: "submit-notice pending", role: "status", "Sending..." }
        },
        SubmitState::Invalid(error) => {
            let message = error.to_string();
            rsx! {
                p { class: "submit-notice form-error", role: "alert", "{message}" }
            }
        }
        SubmitState::Failed(message) => rsx! {
            p { class: "submit-notice rejected", role: "alert", "{message}" }
        },
        SubmitState::Submitted => rsx! {
            p { class: "submit-notice submitted", role: "status", "{success}" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use folio_client::{ClientError, ValidationError};

    fn render_state(state: SubmitState) -> String {
        let mut dom = VirtualDom::new_with_props(
            SubmitNotice,
            SubmitNoticeProps {
                state,
                success: "Thank you!".to_string(),
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_validation_error_is_inline() {
        let html = render_state(SubmitState::Invalid(ValidationError::InvalidEmail));
        assert!(html.contains("form-error"));
        assert!(html.contains("email address is not valid"));
    }

    #[test]
    fn test_rejection_shows_service_text() {
        let state =
            SubmitState::from_result::<()>(Err(ClientError::Api("Duplicate email".to_string())));
        let html = render_state(state);
        assert!(html.contains("rejected"));
        assert!(html.contains("Duplicate email"));
    }

    #[test]
    fn test_idle_and_submitted() {
        assert!(!render_state(SubmitState::Idle).contains("submit-notice"));
        assert!(render_state(SubmitState::Submitted).contains("Thank you!"));
    }
}
