use std::collections::HashSet;

use serde_json::Value;
use thiserror::Error;

use crate::models::domain::{question::OPTIONS_PER_QUESTION, Question};

/// Why a candidate question was rejected. `index` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionDefect {
    #[error("Question {index} is not an object")]
    NotAnObject { index: usize },

    #[error("Question {index} is missing or invalid")]
    MissingQuestionText { index: usize },

    #[error("Question {index} must have exactly 4 options")]
    WrongOptionCount { index: usize },

    #[error("Question {index} has an option that is not a non-empty string")]
    InvalidOption { index: usize },

    #[error("Question {index} has duplicate options")]
    DuplicateOptions { index: usize },

    #[error("Question {index} has invalid correctAnswer")]
    InvalidCorrectAnswer { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionSetDefect {
    #[error("response is not an array")]
    NotAnArray,

    #[error(transparent)]
    Question(#[from] QuestionDefect),
}

/// Validates a single candidate and converts it into a [`Question`].
pub fn validate_question(index: usize, candidate: &Value) -> Result<Question, QuestionDefect> {
    let object = candidate
        .as_object()
        .ok_or(QuestionDefect::NotAnObject { index })?;

    let question = object
        .get("question")
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
        .ok_or(QuestionDefect::MissingQuestionText { index })?;

    let raw_options = object
        .get("options")
        .and_then(Value::as_array)
        .filter(|options| options.len() == OPTIONS_PER_QUESTION)
        .ok_or(QuestionDefect::WrongOptionCount { index })?;

    let options = raw_options
        .iter()
        .map(|option| {
            option
                .as_str()
                .filter(|text| !text.trim().is_empty())
                .map(str::to_string)
        })
        .collect::<Option<Vec<String>>>()
        .ok_or(QuestionDefect::InvalidOption { index })?;

    let distinct: HashSet<&str> = options.iter().map(String::as_str).collect();
    if distinct.len() != options.len() {
        return Err(QuestionDefect::DuplicateOptions { index });
    }

    let correct_answer = object
        .get("correctAnswer")
        .and_then(Value::as_str)
        .filter(|answer| options.iter().any(|option| option.as_str() == *answer))
        .ok_or(QuestionDefect::InvalidCorrectAnswer { index })?;

    Ok(Question {
        question: question.to_string(),
        options,
        correct_answer: correct_answer.to_string(),
    })
}

/// All-or-nothing: the first bad element rejects the whole set.
pub fn validate_question_set(candidate: &Value) -> Result<Vec<Question>, QuestionSetDefect> {
    let elements = candidate.as_array().ok_or(QuestionSetDefect::NotAnArray)?;

    elements
        .iter()
        .enumerate()
        .map(|(i, element)| validate_question(i + 1, element).map_err(QuestionSetDefect::from))
        .collect()
}

/// Checks an already-typed question against the same invariants.
pub fn check_question(index: usize, question: &Question) -> Result<(), QuestionDefect> {
    let value = serde_json::to_value(question).map_err(|_| QuestionDefect::NotAnObject { index })?;
    validate_question(index, &value).map(|_| ())
}
