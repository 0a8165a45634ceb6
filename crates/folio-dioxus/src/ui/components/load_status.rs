use dioxus::prelude::*;
use folio_client::LoadState;

/// Placeholder shown while remote content is not ready. Fetch failures
/// offer a retry; content that arrived but could not be decoded does not.
#[component]
pub fn LoadStatus(state: LoadState<()>, subject: String, on_retry: EventHandler<()>) -> Element {
    match state {
        LoadState::Loading => rsx! {
            div {
                class: "load-status loading",
                role: "status",
                "Loading {subject}..."
            }
        },
        LoadState::FetchFailed(message) => rsx! {
            div {
                class: "load-status fetch-failed",
                role: "alert",
                p { "Could not load {subject}." }
                small { "{message}" }
                button {
                    class: "retry-button",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        },
        LoadState::ParseFailed(message) => rsx! {
            div {
                class: "load-status parse-failed",
                role: "alert",
                p { "This {subject} content could not be displayed." }
                small { "{message}" }
            }
        },
        LoadState::Invalid(message) => rsx! {
            div {
                class: "load-status invalid",
                role: "alert",
                p { "The {subject} request was not sent." }
                small { "{message}" }
            }
        },
        LoadState::Ready(()) => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use folio_client::{ClientError, ValidationError};

    fn render_state(state: LoadState<()>) -> String {
        let mut dom = VirtualDom::new_with_props(
            |props: LoadState<()>| {
                rsx! {
                    LoadStatus {
                        state: props,
                        subject: "article",
                        on_retry: move |_| {}
                    }
                }
            },
            state,
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_server_error_offers_retry() {
        let state = LoadState::from_result(Err(ClientError::Status {
            url: "https://api.test/api/Blog/1".to_string(),
            status: 500,
            body: "boom".to_string(),
        }));
        let html = render_state(state);

        assert!(html.contains("Could not load article."));
        assert!(html.contains("retry-button"));
        assert!(html.contains("Retry"));
    }

    #[test]
    fn test_parse_failure_has_no_retry() {
        let html = render_state(LoadState::ParseFailed("expected value".to_string()));

        assert!(html.contains("content could not be displayed"));
        assert!(!html.contains("retry-button"));
    }

    #[test]
    fn test_validation_failure_is_not_retried() {
        let state = LoadState::from_result(Err(ValidationError::InvalidEmail.into()));
        let html = render_state(state);

        assert!(html.contains("was not sent"));
        assert!(html.contains("email address is not valid"));
        assert!(!html.contains("retry-button"));
    }

    #[test]
    fn test_loading() {
        let html = render_state(LoadState::Loading);
        assert!(html.contains("Loading article..."));
    }
}
