use super::super::value_objects::EmotionLabel;

/// Result of a single resolution: the chosen activity and the reply sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    recommendation: String,
    message: String,
}

impl Recommendation {
    /// Pair a selected recommendation with the message that quotes it
    pub fn compose(label: &EmotionLabel, recommendation: &str) -> Self {
        let message = format!(
            "당신의 {} 감정에 맞게 \"{}\"를 추천합니다.",
            label.raw(),
            recommendation
        );
        Self {
            recommendation: recommendation.to_string(),
            message,
        }
    }

    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
