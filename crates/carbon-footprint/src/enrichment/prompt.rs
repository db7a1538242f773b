use super::EnrichmentRequest;
use crate::quiz::scoring::{ScoreCategory, QUESTION_COUNT};
use std::fmt::Write;

/// Renders the generation prompt: score, the five raw answers by category,
/// the requested shape, and the response language.
pub fn build_prompt(request: &EnrichmentRequest<'_>) -> String {
    let mut prompt = String::new();

    prompt.push_str("Based on a carbon footprint assessment:\n");
    let _ = writeln!(prompt, "- Overall score: {}/100", request.score);
    for index in 0..QUESTION_COUNT {
        let category = ScoreCategory::for_question(index);
        let answer = request.answers.get(index).unwrap_or("unanswered");
        let _ = writeln!(prompt, "- {}: {answer}", category.label());
    }

    prompt.push_str(
        "\nPlease provide:\n\
         1. A brief impact assessment (2 sentences). Include relevant emojis and use casual, \
         Gen-Z friendly language.\n\
         2. 3-4 specific, actionable recommendations to reduce their carbon footprint. \
         Each recommendation should start with an appropriate emoji.\n\
         Format as JSON with properties: \"impact\" and \"recommendations\" (array).\n\n",
    );
    let _ = write!(
        prompt,
        "Respond in {} language. Make sure to use plenty of emojis and casual language \
         in both the impact and recommendations.",
        request.locale.language_name()
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::locale::Locale;
    use crate::quiz::scoring::{AnswerSet, NormalizedScore};

    #[test]
    fn embeds_score_answers_and_language() {
        let answers = AnswerSet::from_ordered(["never", "car", "daily", "none", "weekly"])
            .expect("answers");
        let request = EnrichmentRequest {
            score: NormalizedScore::from_raw_points(15),
            answers: &answers,
            locale: Locale::Id,
        };

        let prompt = build_prompt(&request);
        assert!(prompt.contains("Overall score: 100/100"));
        assert!(prompt.contains("- Transportation habits: never"));
        assert!(prompt.contains("- Primary transport mode: car"));
        assert!(prompt.contains("- Meat consumption: daily"));
        assert!(prompt.contains("- Energy usage: none"));
        assert!(prompt.contains("- Shopping habits: weekly"));
        assert!(prompt.contains("Respond in Indonesian language"));
    }

    #[test]
    fn locale_only_changes_the_language_instruction() {
        let answers = AnswerSet::from_ordered(["always", "walking", "never", "minimal", "rarely"])
            .expect("answers");
        let english = build_prompt(&EnrichmentRequest {
            score: NormalizedScore::from_raw_points(0),
            answers: &answers,
            locale: Locale::En,
        });
        let indonesian = build_prompt(&EnrichmentRequest {
            score: NormalizedScore::from_raw_points(0),
            answers: &answers,
            locale: Locale::Id,
        });

        assert_eq!(
            english.replace("English", "Indonesian"),
            indonesian,
            "prompts should differ only by language name"
        );
    }
}
