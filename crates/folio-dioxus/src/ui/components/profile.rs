use crate::services::Services;
use crate::ui::components::{LoadStatus, RecommendationForm};
use dioxus::prelude::*;
use folio_client::{ContestStats, LoadState, Recommendation};

/// Competitive programming record and recommendations
#[component]
pub fn Profile() -> Element {
    let services = use_context::<Services>();
    let handle = services.codeforces.handle().to_string();

    let mut stats_request = use_resource({
        let services = services.clone();
        move || {
            let codeforces = services.codeforces.clone();
            async move { LoadState::from_result(codeforces.stats().await) }
        }
    });
    let mut recommendations_request = use_resource(move || {
        let client = services.recommendations.clone();
        async move { LoadState::from_result(client.list().await) }
    });

    let stats_state = (*stats_request.read()).clone().unwrap_or_default();
    let recommendations_state = (*recommendations_request.read()).clone().unwrap_or_default();

    rsx! {
        section {
            class: "profile-section",
            h2 { "Codeforces · {handle}" }
            {match stats_state {
                LoadState::Ready(stats) => rsx! { StatsCard { stats } },
                other => rsx! {
                    LoadStatus {
                        state: other.map(|_| ()),
                        subject: "Codeforces statistics",
                        on_retry: move |_| stats_request.restart()
                    }
                },
            }}
        }
        section {
            class: "profile-section",
            h2 { "Recommendations" }
            {match recommendations_state {
                LoadState::Ready(list) if list.is_empty() => rsx! {
                    p { class: "text-gray-500", "No recommendations yet." }
                },
                LoadState::Ready(list) => rsx! {
                    for recommendation in list {
                        RecommendationCard {
                            key: "{recommendation.id}",
                            recommendation: recommendation.clone()
                        }
                    }
                },
                other => rsx! {
                    LoadStatus {
                        state: other.map(|_| ()),
                        subject: "recommendations",
                        on_retry: move |_| recommendations_request.restart()
                    }
                },
            }}
        }
        section {
            class: "profile-section",
            h2 { "Leave a recommendation" }
            RecommendationForm { on_submitted: move |_| recommendations_request.restart() }
        }
    }
}

#[component]
pub fn StatsCard(stats: ContestStats) -> Element {
    let rank = stats.rank();
    let rank_class = rank.text_class();
    let rating = stats.rating.map_or_else(|| "-".to_string(), |r| r.to_string());
    let max_rating = stats
        .max_rating
        .map_or_else(|| "-".to_string(), |r| r.to_string());

    rsx! {
        dl {
            class: "stats-card",
            dt { "Rank" }
            dd { class: "{rank_class}", "{rank}" }
            dt { "Rating" }
            dd { "{rating}" }
            dt { "Max rating" }
            dd { "{max_rating}" }
            dt { "Solved" }
            dd { "{stats.solved}" }
            dt { "Contests" }
            dd { "{stats.contests}" }
        }
    }
}

#[component]
pub fn RecommendationCard(recommendation: Recommendation) -> Element {
    let date = recommendation.display_date();
    let role = [
        recommendation.recommender_title.as_str(),
        recommendation.recommender_company.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" @ ");

    rsx! {
        blockquote {
            class: "recommendation",
            p { "{recommendation.recommendation_text}" }
            footer {
                strong { "{recommendation.recommender_name}" }
                if !role.is_empty() {
                    span { class: "text-sm", " · {role}" }
                }
                if !date.is_empty() {
                    time { class: "text-sm", " · {date}" }
                }
            }
        }
    }
}
