use crate::config::{
    DEFAULT_TREND_LABEL, DEFAULT_TREND_STRENGTH, PLACEHOLDER_THUMBNAIL, UNKNOWN_CHANNEL,
    UNTITLED_VIDEO, YOUTUBE_WATCH_URL,
};
use crate::models::{AnalysisResult, Video};
use crate::utils::{format_count, format_iso8601_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl BadgeTone {
    pub fn class(self) -> &'static str {
        match self {
            BadgeTone::Success => "px-2 py-1 text-sm font-semibold rounded bg-green-600 text-white",
            BadgeTone::Warning => "px-2 py-1 text-sm font-semibold rounded bg-yellow-400 text-gray-900",
            BadgeTone::Danger => "px-2 py-1 text-sm font-semibold rounded bg-red-600 text-white",
            BadgeTone::Neutral => "px-2 py-1 text-sm font-semibold rounded bg-blue-600 text-white",
        }
    }

    pub fn for_direction(direction: Option<&str>) -> Self {
        match direction {
            Some("growing") => BadgeTone::Success,
            Some("declining") => BadgeTone::Danger,
            _ => BadgeTone::Neutral,
        }
    }

    pub fn for_strength(strength: i64) -> Self {
        if strength >= 8 {
            BadgeTone::Success
        } else if strength >= 5 {
            BadgeTone::Warning
        } else {
            BadgeTone::Danger
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub label: String,
    pub tone: BadgeTone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoCardView {
    pub key: String,
    pub watch_url: String,
    pub thumbnail: String,
    pub title: String,
    pub channel: String,
    pub published: Option<String>,
    pub views: String,
    pub likes: String,
    pub comments: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub category_title: String,
    pub direction: Badge,
    pub strength: Badge,
    pub summary: String,
    pub insights: String,
    pub recommendations: String,
    pub videos: Vec<VideoCardView>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<&Video> for VideoCardView {
    fn from(video: &Video) -> Self {
        Self {
            key: video.id.clone(),
            watch_url: format!("{YOUTUBE_WATCH_URL}{}", urlencoding::encode(&video.id)),
            thumbnail: non_empty(video.thumbnail.as_deref())
                .unwrap_or(PLACEHOLDER_THUMBNAIL)
                .to_string(),
            title: non_empty(video.title.as_deref())
                .unwrap_or(UNTITLED_VIDEO)
                .to_string(),
            channel: non_empty(video.channel_title.as_deref())
                .unwrap_or(UNKNOWN_CHANNEL)
                .to_string(),
            published: non_empty(video.published_at.as_deref()).map(format_iso8601_date),
            views: format_count(video.view_count),
            likes: format_count(video.like_count),
            comments: format_count(video.comment_count),
        }
    }
}

impl From<&AnalysisResult> for ResultsView {
    fn from(result: &AnalysisResult) -> Self {
        let analysis = &result.analysis;
        let direction = non_empty(analysis.trend_direction.as_deref());
        let strength = analysis.trend_strength.unwrap_or(DEFAULT_TREND_STRENGTH);

        Self {
            category_title: format!("Trending in \"{}\"", result.category),
            direction: Badge {
                label: direction.unwrap_or(DEFAULT_TREND_LABEL).to_string(),
                tone: BadgeTone::for_direction(direction),
            },
            strength: Badge {
                label: format!("{strength}/10"),
                tone: BadgeTone::for_strength(strength),
            },
            summary: analysis.summary.clone().unwrap_or_default(),
            insights: analysis.insights.clone().unwrap_or_default(),
            recommendations: analysis.recommendations.clone().unwrap_or_default(),
            videos: result.videos.iter().map(VideoCardView::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrendAnalysis;

    fn cats_result() -> AnalysisResult {
        serde_json::from_str(
            r#"{
                "success": true,
                "category": "cats",
                "analysis": {
                    "trend_direction": "growing",
                    "trend_strength": 9,
                    "summary": "S",
                    "insights": "I",
                    "recommendations": "R"
                },
                "videos": [{
                    "viewCount": "1500000",
                    "likeCount": "2",
                    "commentCount": "abc",
                    "title": "T",
                    "id": "v1",
                    "channelTitle": "C"
                }]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_cats_result_view() {
        let view = ResultsView::from(&cats_result());

        assert_eq!(view.category_title, "Trending in \"cats\"");
        assert_eq!(view.direction.label, "growing");
        assert_eq!(view.direction.tone, BadgeTone::Success);
        assert_eq!(view.strength.label, "9/10");
        assert_eq!(view.strength.tone, BadgeTone::Success);
        assert_eq!(view.summary, "S");
        assert_eq!(view.insights, "I");
        assert_eq!(view.recommendations, "R");

        assert_eq!(view.videos.len(), 1);
        let card = &view.videos[0];
        assert_eq!(card.views, "1.5M");
        assert_eq!(card.likes, "2");
        assert_eq!(card.comments, "0");
        assert_eq!(card.title, "T");
        assert_eq!(card.channel, "C");
        assert_eq!(card.watch_url, "https://www.youtube.com/watch?v=v1");
        assert_eq!(card.thumbnail, PLACEHOLDER_THUMBNAIL);
        assert_eq!(card.published, None);
    }

    #[test]
    fn test_direction_tones() {
        assert_eq!(BadgeTone::for_direction(Some("growing")), BadgeTone::Success);
        assert_eq!(BadgeTone::for_direction(Some("declining")), BadgeTone::Danger);
        assert_eq!(BadgeTone::for_direction(Some("stable")), BadgeTone::Neutral);
        assert_eq!(BadgeTone::for_direction(None), BadgeTone::Neutral);
    }

    #[test]
    fn test_strength_tones() {
        assert_eq!(BadgeTone::for_strength(10), BadgeTone::Success);
        assert_eq!(BadgeTone::for_strength(8), BadgeTone::Success);
        assert_eq!(BadgeTone::for_strength(7), BadgeTone::Warning);
        assert_eq!(BadgeTone::for_strength(5), BadgeTone::Warning);
        assert_eq!(BadgeTone::for_strength(4), BadgeTone::Danger);
        assert_eq!(BadgeTone::for_strength(0), BadgeTone::Danger);
    }

    #[test]
    fn test_missing_analysis_uses_defaults() {
        let result = AnalysisResult {
            success: true,
            category: "dogs".to_string(),
            analysis: TrendAnalysis::default(),
            ..Default::default()
        };
        let view = ResultsView::from(&result);

        assert_eq!(view.direction.label, DEFAULT_TREND_LABEL);
        assert_eq!(view.direction.tone, BadgeTone::Neutral);
        assert_eq!(view.strength.label, "5/10");
        assert_eq!(view.strength.tone, BadgeTone::Warning);
        assert_eq!(view.summary, "");
        assert!(view.videos.is_empty());
    }

    #[test]
    fn test_video_fallbacks() {
        let video = Video {
            id: "a b&c".to_string(),
            title: Some(String::new()),
            thumbnail: Some("https://i.ytimg.com/vi/x/hq.jpg".to_string()),
            published_at: Some("2024-03-05T10:20:30Z".to_string()),
            ..Default::default()
        };
        let card = VideoCardView::from(&video);

        assert_eq!(card.title, UNTITLED_VIDEO);
        assert_eq!(card.channel, UNKNOWN_CHANNEL);
        assert_eq!(card.thumbnail, "https://i.ytimg.com/vi/x/hq.jpg");
        assert_eq!(card.watch_url, "https://www.youtube.com/watch?v=a%20b%26c");
        assert_eq!(card.published.as_deref(), Some("2024-03-05"));
        assert_eq!(card.views, "0");
    }

    #[test]
    fn test_markup_in_titles_is_kept_as_text() {
        let video = Video {
            id: "v1".to_string(),
            title: Some("<img src=x onerror=alert(1)>".to_string()),
            ..Default::default()
        };

        assert_eq!(
            VideoCardView::from(&video).title,
            "<img src=x onerror=alert(1)>"
        );
    }

    #[test]
    fn test_explicit_zero_strength_is_not_defaulted() {
        let mut result = cats_result();
        result.analysis.trend_strength = Some(0);
        let view = ResultsView::from(&result);

        assert_eq!(view.strength.label, "0/10");
        assert_eq!(view.strength.tone, BadgeTone::Danger);

        result.analysis.trend_strength = None;
        let view = ResultsView::from(&result);

        assert_eq!(view.strength.label, "5/10");
        assert_eq!(view.strength.tone, BadgeTone::Warning);
    }

    #[test]
    fn test_videos_keep_response_order() {
        let mut result = cats_result();
        result.videos.push(Video {
            id: "v2".to_string(),
            ..Default::default()
        });
        result.videos.push(Video {
            id: "v3".to_string(),
            ..Default::default()
        });
        let keys: Vec<_> = ResultsView::from(&result)
            .videos
            .into_iter()
            .map(|card| card.key)
            .collect();

        assert_eq!(keys, vec!["v1", "v2", "v3"]);
    }
}
