//! Pulls a question list out of free-form model output.
//!
//! Models are asked for a bare JSON array but frequently wrap it in a fenced
//! code block or surround it with prose. Extraction strategies are tried in a
//! fixed order and the first one that yields parseable JSON wins; that value
//! then goes through the validator unchanged.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Question,
    services::question_validator::validate_question_set,
};

static FENCED_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").expect("FENCED_BLOCK_REGEX is a valid regex pattern")
});

static BARE_ARRAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[[\s\S]*\]").expect("BARE_ARRAY_REGEX is a valid regex pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    Direct,
    FencedBlock,
    BareArray,
}

impl ExtractionStrategy {
    pub const ORDERED: [ExtractionStrategy; 3] = [
        ExtractionStrategy::Direct,
        ExtractionStrategy::FencedBlock,
        ExtractionStrategy::BareArray,
    ];

    /// `None` means "no match", letting the next strategy run.
    pub fn extract(self, raw: &str) -> Option<Value> {
        let candidate = match self {
            ExtractionStrategy::Direct => Some(raw.trim()),
            ExtractionStrategy::FencedBlock => FENCED_BLOCK_REGEX
                .captures(raw)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str()),
            ExtractionStrategy::BareArray => BARE_ARRAY_REGEX.find(raw).map(|m| m.as_str()),
        }?;

        serde_json::from_str(candidate).ok()
    }
}

/// Returns the first successfully parsed value and the strategy that found it.
pub fn extract_json(raw: &str) -> Option<(ExtractionStrategy, Value)> {
    ExtractionStrategy::ORDERED
        .into_iter()
        .find_map(|strategy| strategy.extract(raw).map(|value| (strategy, value)))
}

pub fn parse_questions(raw: &str) -> AppResult<Vec<Question>> {
    let (strategy, value) = extract_json(raw).ok_or_else(|| {
        AppError::MalformedResponse("Could not extract valid JSON from AI response".to_string())
    })?;
    log::debug!("Model response parsed using {:?} extraction", strategy);

    validate_question_set(&value).map_err(|defect| AppError::MalformedResponse(defect.to_string()))
}
