use crate::services::Services;
use crate::ui::components::{BlockEditor, FormField, SubmitNotice};
use dioxus::prelude::*;
use folio_client::{Article, NewArticle, SubmitState, ValidationError};
use folio_config::EditorSettings;
use folio_engine::model::BlockDocument;

/// The draft's metadata combined with the editor's content, if it is
/// complete enough to publish
pub fn prepare_article(
    draft: &NewArticle,
    content: BlockDocument,
) -> Result<NewArticle, ValidationError> {
    let article = NewArticle {
        content,
        ..draft.clone()
    };
    article.validate()?;
    Ok(article)
}

/// Publishing page: article metadata around the block editor. Publishing
/// validates locally, then posts the article and reports the stored copy
/// through `on_published`.
#[component]
pub fn PublishPanel(settings: EditorSettings, on_published: EventHandler<Article>) -> Element {
    let services = use_context::<Services>();
    let mut draft = use_signal(NewArticle::default);
    let mut tag_input = use_signal(String::new);
    let mut state = use_signal(SubmitState::default);

    let current = draft();
    let pending_tag = tag_input();
    let tags = current.tags.clone();

    let mut add_tag = move || {
        let tag = tag_input();
        if draft.write().add_tag(&tag) {
            tag_input.set(String::new());
        }
    };

    let publish = move |content: BlockDocument| {
        if state.read().is_submitting() {
            return;
        }
        let article = match prepare_article(&draft(), content) {
            Ok(article) => article,
            Err(e) => {
                state.set(SubmitState::Invalid(e));
                return;
            }
        };

        state.set(SubmitState::Submitting);
        let blog = services.blog.clone();
        spawn(async move {
            match blog.create(&article).await {
                Ok(stored) => {
                    state.set(SubmitState::Submitted);
                    on_published.call(stored);
                }
                Err(e) => {
                    log::warn!("Publishing '{}' failed: {e}", article.title);
                    state.set(SubmitState::from_result::<()>(Err(e)));
                }
            }
        });
    };

    rsx! {
        div {
            class: "entry-form publish-panel",
            FormField {
                label: "Title",
                value: current.title.clone(),
                required: true,
                on_input: move |value: String| draft.write().set_title(value)
            }
            if !current.slug.is_empty() {
                p { class: "slug-preview", "/blog/{current.slug}" }
            }
            FormField {
                label: "Short description",
                value: current.short_description.clone(),
                multiline: true,
                required: true,
                on_input: move |value: String| draft.write().short_description = value
            }
            FormField {
                label: "Cover image URL",
                value: current.cover_image_url.clone(),
                placeholder: "https://",
                on_input: move |value: String| draft.write().cover_image_url = value
            }
            div {
                class: "tag-editor",
                for tag in tags {
                    span {
                        key: "{tag}",
                        class: "tag-chip",
                        "#{tag}"
                        button {
                            class: "remove-tag",
                            onclick: {
                                let tag = tag.clone();
                                move |_| draft.write().remove_tag(&tag)
                            },
                            "×"
                        }
                    }
                }
                input {
                    r#type: "text",
                    class: "tag-input",
                    placeholder: "Add a tag",
                    value: "{pending_tag}",
                    oninput: move |event: Event<FormData>| tag_input.set(event.value()),
                    onkeydown: move |event: Event<KeyboardData>| {
                        if event.key() == Key::Enter {
                            event.prevent_default();
                            add_tag();
                        }
                    }
                }
                button { class: "add-tag", onclick: move |_| add_tag(), "Add tag" }
            }
            BlockEditor {
                settings,
                on_change: move |document: BlockDocument| {
                    log::debug!("Draft changed, {} blocks", document.len());
                },
                on_publish: publish
            }
            SubmitNotice { state: state(), success: "Article published." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use folio_config::ApiConfig;
    use folio_engine::model::Block;
    use pretty_assertions::assert_eq;

    fn complete_draft() -> NewArticle {
        let mut draft = NewArticle::new("Refresh Tokens");
        draft.short_description = "Rotation done right".to_string();
        draft.add_tag("security");
        draft
    }

    #[test]
    fn test_prepare_article_takes_editor_content() {
        let content = BlockDocument::new(vec![Block::paragraph("Body")]);
        let article = prepare_article(&complete_draft(), content.clone()).unwrap();

        assert_eq!(article.content, content);
        assert_eq!(article.slug, "refresh-tokens");
        assert_eq!(article.tags, vec!["security"]);
    }

    #[test]
    fn test_prepare_article_rejects_incomplete_drafts() {
        let body = BlockDocument::new(vec![Block::paragraph("Body")]);

        let untitled = NewArticle {
            short_description: "Rotation done right".to_string(),
            ..Default::default()
        };
        assert_eq!(
            prepare_article(&untitled, body.clone()),
            Err(ValidationError::MissingField("title"))
        );
        assert_eq!(
            prepare_article(&NewArticle::new("Only a title"), body),
            Err(ValidationError::MissingField("short description"))
        );
        assert_eq!(
            prepare_article(&complete_draft(), BlockDocument::empty()),
            Err(ValidationError::EmptyContent)
        );
    }

    #[test]
    fn test_panel_wraps_editor_with_metadata() {
        let mut dom = VirtualDom::new(|| {
            use_context_provider(|| Services::connect(&ApiConfig::default()).unwrap());
            rsx! {
                PublishPanel {
                    settings: EditorSettings::default(),
                    on_published: move |_| {}
                }
            }
        });
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Title *"));
        assert!(html.contains("Short description *"));
        assert!(html.contains("Cover image URL"));
        assert!(html.contains("Add tag"));
        assert!(html.contains("block-editor"));
        assert!(html.contains("publish-button"));
        assert!(!html.contains("slug-preview"));
    }
}
