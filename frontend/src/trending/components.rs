use crate::config::EMPTY_VIDEO_LIST_NOTICE;
use crate::models::AnalysisResult;
use crate::trending::view::{Badge, ResultsView, VideoCardView};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TrendFormProps {
    pub loading: bool,
    pub on_submit: Callback<String>,
}

#[function_component(TrendForm)]
pub fn trend_form(props: &TrendFormProps) -> Html {
    let current_input = use_state(String::new);

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*current_input).clone());
        })
    };

    // Input stays enabled while loading; a newer prompt replaces the pending one
    html! {
        <form id="trending-form" onsubmit={on_submit} class="flex mb-4">
            <input
                id="prompt-input"
                type="text"
                class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="Enter a category, e.g. \"home workouts\"..."
                value={(*current_input).clone()}
                oninput={on_input}
            />
            <button
                type="submit"
                class="bg-blue-600 text-white p-3 rounded-r-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500"
            >
                { if props.loading { "Analyzing..." } else { "Analyze" } }
            </button>
        </form>
    }
}

#[function_component(LoadingIndicator)]
pub fn loading_indicator() -> Html {
    html! {
        <div id="loading-indicator" class="flex flex-col items-center py-8 text-gray-600">
            <div class="animate-spin rounded-full h-10 w-10 border-b-2 border-blue-600 mb-3"></div>
            <p>{"Analyzing trending videos..."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MessagePanelProps {
    pub message: String,
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &MessagePanelProps) -> Html {
    html! {
        <div id="error-message" class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
            { &props.message }
        </div>
    }
}

#[function_component(EmptyPanel)]
pub fn empty_panel(props: &MessagePanelProps) -> Html {
    html! {
        <div id="no-results" class="bg-gray-100 text-gray-600 px-4 py-3 rounded mb-4 text-center">
            { &props.message }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TrendBadgeProps {
    pub id: AttrValue,
    pub badge: Badge,
}

#[function_component(TrendBadge)]
pub fn trend_badge(props: &TrendBadgeProps) -> Html {
    html! {
        <span id={props.id.clone()} class={props.badge.tone.class()}>
            { &props.badge.label }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub card: VideoCardView,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let card = &props.card;

    html! {
        <div class="video-card bg-gray-100 rounded-lg overflow-hidden">
            <a href={card.watch_url.clone()} target="_blank" rel="noopener noreferrer" class="video-link block relative">
                <img src={card.thumbnail.clone()} alt={card.title.clone()} class="w-full" />
                <div class="video-play-button absolute inset-0 flex items-center justify-center">
                    <span class="bg-white rounded-full px-3 py-2 text-red-600">{"▶"}</span>
                </div>
            </a>
            <div class="video-info p-4">
                <h3 class="video-title text-lg font-semibold text-gray-800">{ &card.title }</h3>
                <div class="video-channel text-sm text-gray-600">{ &card.channel }</div>
                {
                    if let Some(published) = &card.published {
                        html! { <div class="text-xs text-gray-500">{"📅 "}{ published }</div> }
                    } else {
                        html! {}
                    }
                }
                <div class="video-stats mt-2 flex gap-4 text-sm text-gray-700">
                    <span>{ format!("{} views", card.views) }</span>
                    <span>{ format!("{} likes", card.likes) }</span>
                    <span>{ format!("{} comments", card.comments) }</span>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoListProps {
    pub videos: Vec<VideoCardView>,
}

#[function_component(VideoList)]
pub fn video_list(props: &VideoListProps) -> Html {
    if props.videos.is_empty() {
        return html! {
            <div id="videos-container">
                <p class="text-center text-gray-500">{ EMPTY_VIDEO_LIST_NOTICE }</p>
            </div>
        };
    }

    html! {
        <div id="videos-container" class="grid grid-cols-1 md:grid-cols-2 gap-4">
            { for props.videos.iter().enumerate().map(|(index, card)| html! {
                <VideoCard key={format!("{index}-{}", card.key)} card={card.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultsPanelProps {
    pub result: Rc<AnalysisResult>,
}

#[function_component(ResultsPanel)]
pub fn results_panel(props: &ResultsPanelProps) -> Html {
    let view = use_memo(props.result.clone(), |result| ResultsView::from(&**result));

    html! {
        <div id="trending-results" class="mt-6">
            <h2 id="category-title" class="text-2xl font-semibold text-gray-800 mb-3">
                { &view.category_title }
            </h2>
            <div class="flex gap-2 mb-4">
                <TrendBadge id="trend-direction" badge={view.direction.clone()} />
                <TrendBadge id="trend-strength" badge={view.strength.clone()} />
            </div>
            <div class="space-y-2 mb-6 text-gray-700">
                <p id="trend-summary">{ &view.summary }</p>
                <p id="trend-insights">{ &view.insights }</p>
                <p id="trend-recommendations">{ &view.recommendations }</p>
            </div>
            <VideoList videos={view.videos.clone()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TrendAnalysis, Video};
    use yew::ServerRenderer;

    fn video(id: &str, title: &str) -> Video {
        Video {
            id: id.to_string(),
            title: Some(title.to_string()),
            channel_title: Some("C".to_string()),
            view_count: Some(1_500_000),
            like_count: Some(2),
            comment_count: None,
            ..Default::default()
        }
    }

    fn cats_result(videos: Vec<Video>) -> AnalysisResult {
        AnalysisResult {
            success: true,
            message: None,
            category: "cats".to_string(),
            analysis: TrendAnalysis {
                trend_direction: Some("growing".to_string()),
                trend_strength: Some(9),
                summary: Some("Cats are everywhere".to_string()),
                ..Default::default()
            },
            videos,
        }
    }

    fn card_count(html: &str) -> usize {
        html.matches("class=\"video-card ").count()
    }

    async fn render_results(result: AnalysisResult) -> String {
        ServerRenderer::<ResultsPanel>::with_props(move || ResultsPanelProps {
            result: Rc::new(result),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn test_empty_panel_shows_message_verbatim() {
        let html = ServerRenderer::<EmptyPanel>::with_props(|| MessagePanelProps {
            message: "X".to_string(),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("id=\"no-results\""));
        assert!(html.contains(">X</div>"));
    }

    #[tokio::test]
    async fn test_error_panel_shows_message() {
        let html = ServerRenderer::<ErrorPanel>::with_props(|| MessagePanelProps {
            message: "Network error: offline".to_string(),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("id=\"error-message\""));
        assert!(html.contains(">Network error: offline</div>"));
    }

    #[tokio::test]
    async fn test_empty_video_list_shows_inline_notice() {
        let html = ServerRenderer::<VideoList>::with_props(|| VideoListProps { videos: Vec::new() })
            .hydratable(false)
            .render()
            .await;

        assert!(html.contains(EMPTY_VIDEO_LIST_NOTICE));
        assert_eq!(card_count(&html), 0);
    }

    #[tokio::test]
    async fn test_video_list_renders_one_card_per_video() {
        let cards: Vec<VideoCardView> = [video("v1", "First"), video("v2", "Second")]
            .iter()
            .map(VideoCardView::from)
            .collect();
        let html = ServerRenderer::<VideoList>::with_props(move || VideoListProps { videos: cards })
            .hydratable(false)
            .render()
            .await;

        assert_eq!(card_count(&html), 2);
        assert!(!html.contains(EMPTY_VIDEO_LIST_NOTICE));
        assert!(html.find("First").unwrap() < html.find("Second").unwrap());
    }

    #[tokio::test]
    async fn test_results_panel_renders_category_badges_and_counts() {
        let html = render_results(cats_result(vec![video("v1", "T")])).await;

        assert!(html.contains("Trending in "));
        assert!(html.contains("cats"));
        assert!(html.contains(">growing</span>"));
        assert!(html.contains(">9/10</span>"));
        assert!(html.contains("Cats are everywhere"));
        assert!(html.contains("1.5M views"));
        assert!(html.contains("2 likes"));
        assert!(html.contains("0 comments"));
        assert_eq!(card_count(&html), 1);
    }

    #[tokio::test]
    async fn test_results_panel_with_no_videos_keeps_summary_and_notice() {
        let html = render_results(cats_result(Vec::new())).await;

        assert!(html.contains("id=\"category-title\""));
        assert!(html.contains(EMPTY_VIDEO_LIST_NOTICE));
        assert_eq!(card_count(&html), 0);
    }

    #[tokio::test]
    async fn test_rendering_same_result_twice_does_not_duplicate_cards() {
        let result = cats_result(vec![video("v1", "T"), video("v2", "U"), video("v3", "V")]);

        let first = render_results(result.clone()).await;
        let second = render_results(result).await;

        assert_eq!(first, second);
        assert_eq!(card_count(&second), 3);
    }

    #[tokio::test]
    async fn test_titles_are_rendered_as_text() {
        let html = render_results(cats_result(vec![video("v1", "<img src=x onerror=alert(1)>")])).await;

        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;</h3>"));
        assert!(!html.contains("<h3 class=\"video-title text-lg font-semibold text-gray-800\"><img"));
    }
}
