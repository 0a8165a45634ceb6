use crate::services::Services;
use crate::ui::components::LoadStatus;
use dioxus::prelude::*;
use folio_client::{Article, LoadState, format_date};

/// Blog index: every published article as a card
#[component]
pub fn ArticleList(on_open: EventHandler<String>) -> Element {
    let services = use_context::<Services>();
    let mut articles = use_resource(move || {
        let blog = services.blog.clone();
        async move { LoadState::from_result(blog.list().await) }
    });

    let state = (*articles.read()).clone().unwrap_or_default();
    match state {
        LoadState::Ready(list) if list.is_empty() => rsx! {
            p { class: "text-gray-500", "No articles yet." }
        },
        LoadState::Ready(list) => rsx! {
            section {
                class: "article-list",
                for article in list {
                    ArticleCard {
                        key: "{article.id}",
                        article: article.clone(),
                        on_open
                    }
                }
            }
        },
        other => rsx! {
            LoadStatus {
                state: other.map(|_| ()),
                subject: "articles",
                on_retry: move |_| articles.restart()
            }
        },
    }
}

#[component]
pub fn ArticleCard(article: Article, on_open: EventHandler<String>) -> Element {
    let date = article
        .date_created
        .as_deref()
        .and_then(format_date)
        .unwrap_or_default();
    let id = article.id.clone();

    rsx! {
        div {
            class: "article-card",
            if let Some(ref cover) = article.cover_image_url {
                img { class: "article-cover", src: "{cover}", alt: "{article.title}" }
            }
            h3 { "{article.title}" }
            if !date.is_empty() {
                time { class: "text-sm", "{date}" }
            }
            p { "{article.short_description}" }
            div {
                class: "article-tags",
                for tag in article.tags.iter() {
                    span { key: "{tag}", class: "tag", "#{tag}" }
                }
            }
            button {
                class: "read-more",
                onclick: move |_| on_open.call(id.clone()),
                "Read article"
            }
        }
    }
}
