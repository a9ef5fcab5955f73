use serde::{Deserialize, Serialize};

pub const OPTIONS_PER_QUESTION: usize = 4;

/// A single multiple-choice question. Only the validator should build these
/// from untrusted input; `correct_answer` is always one of `options`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    pub fn new<S: Into<String>>(
        question: impl Into<String>,
        options: [S; OPTIONS_PER_QUESTION],
        correct_answer: impl Into<String>,
    ) -> Self {
        Question {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer: correct_answer.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_serializes_with_camel_case_keys() {
        let question = Question::new("Capital of France?", ["London", "Berlin", "Paris", "Madrid"], "Paris");
        let json = serde_json::to_value(&question).expect("question should serialize");

        assert_eq!(json["correctAnswer"], "Paris");
        assert_eq!(json["options"].as_array().map(|o| o.len()), Some(4));
        assert!(json.get("correct_answer").is_none());
    }

    #[test]
    fn new_keeps_option_order() {
        let question = Question::new("2 + 2?", ["3", "4", "5", "22"], "4");

        assert_eq!(question.options, vec!["3", "4", "5", "22"]);
        assert_eq!(question.correct_answer, "4");
    }
}
