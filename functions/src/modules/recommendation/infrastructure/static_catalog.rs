use crate::modules::recommendation::domain::EmotionCategory;
use crate::modules::recommendation::ports::{RecommendationCatalog, RecommendationSet};

const JOY: RecommendationSet = [
    "좋아하는 음악 감상하기",
    "가족이나 친구와 시간 보내기",
    "자연 속에서 산책하기",
];

const SADNESS: RecommendationSet = [
    "마음을 진정시키는 음악 듣기",
    "일기 쓰기",
    "감정을 표현할 수 있는 그림 그리기",
];

const ANGER: RecommendationSet = ["심호흡하기", "운동하기", "명상하기"];

const FEAR: RecommendationSet = [
    "지지해주는 사람과 대화하기",
    "근육 이완 운동하기",
    "명상 앱 사용하기",
];

const DISGUST: RecommendationSet = [
    "깨끗한 환경으로 이동하기",
    "좋은 향기 맡기",
    "마음을 환기시키는 활동하기",
];

const SURPRISE: RecommendationSet = [
    "놀라운 일에 대해 일기 쓰기",
    "새로운 정보 찾아보기",
    "명상으로 마음 진정시키기",
];

/// Built-in recommendation table
///
/// Compiled into the binary, so it exists before the first request and is
/// shared read-only by every invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRecommendationCatalog;

impl StaticRecommendationCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl RecommendationCatalog for StaticRecommendationCatalog {
    fn recommendations(&self, category: EmotionCategory) -> RecommendationSet {
        match category {
            EmotionCategory::Joy => JOY,
            EmotionCategory::Sadness => SADNESS,
            EmotionCategory::Anger => ANGER,
            EmotionCategory::Fear => FEAR,
            EmotionCategory::Disgust => DISGUST,
            EmotionCategory::Surprise => SURPRISE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_three_non_empty_entries() {
        let catalog = StaticRecommendationCatalog::new();
        for category in EmotionCategory::all() {
            let set = catalog.recommendations(*category);
            assert!(
                set.iter().all(|r| !r.trim().is_empty()),
                "empty recommendation for {}",
                category
            );
        }
    }

    #[test]
    fn test_lookup_is_stable() {
        let catalog = StaticRecommendationCatalog::new();
        assert_eq!(
            catalog.recommendations(EmotionCategory::Anger),
            catalog.recommendations(EmotionCategory::Anger)
        );
        assert_eq!(catalog.recommendations(EmotionCategory::Anger)[2], "명상하기");
    }
}
