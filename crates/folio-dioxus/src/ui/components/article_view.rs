use crate::services::Services;
use crate::ui::components::{ArticleBody, LoadStatus};
use dioxus::prelude::*;
use folio_client::{LoadState, format_date};

/// One article: fetched by id, its body decoded and rendered block by block
#[component]
pub fn ArticleView(id: String, on_back: EventHandler<()>) -> Element {
    let services = use_context::<Services>();
    let mut request = use_resource(move || {
        let blog = services.blog.clone();
        let id = id.clone();
        async move { LoadState::from_result(blog.get_with_content(&id).await) }
    });

    let state = (*request.read()).clone().unwrap_or_default();
    let body = match state {
        LoadState::Ready((article, document)) => {
            let date = article
                .date_created
                .as_deref()
                .and_then(format_date)
                .unwrap_or_default();
            let minutes = document.reading_time_minutes();
            rsx! {
                header {
                    class: "article-header",
                    h1 { class: "text-3xl font-bold", "{article.title}" }
                    p { class: "text-sm", "{date} · {minutes} min read · {article.views} views · {article.loves} loves" }
                    if let Some(ref cover) = article.cover_image_url {
                        img { class: "article-cover", src: "{cover}", alt: "{article.title}" }
                    }
                }
                ArticleBody { document }
            }
        }
        other => rsx! {
            LoadStatus {
                state: other.map(|_| ()),
                subject: "article",
                on_retry: move |_| request.restart()
            }
        },
    };

    rsx! {
        div {
            class: "article-view",
            button {
                class: "back-button",
                onclick: move |_| on_back.call(()),
                "← All articles"
            }
            {body}
        }
    }
}
