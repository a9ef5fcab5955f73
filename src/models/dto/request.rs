use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

pub const DEFAULT_NUM_LEVELS: u32 = 5;
pub const DEFAULT_QUESTIONS_PER_LEVEL: u32 = 3;

fn default_num_levels() -> u32 {
    DEFAULT_NUM_LEVELS
}

fn default_questions_per_level() -> u32 {
    DEFAULT_QUESTIONS_PER_LEVEL
}

/// Level layout of a quiz. Missing fields fall back to 5 levels x 3 questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LevelConfig {
    #[serde(default = "default_num_levels")]
    #[validate(range(min = 1, message = "numLevels must be a positive integer"))]
    pub num_levels: u32,

    #[serde(default = "default_questions_per_level")]
    #[validate(range(min = 1, message = "questionsPerLevel must be a positive integer"))]
    pub questions_per_level: u32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            num_levels: DEFAULT_NUM_LEVELS,
            questions_per_level: DEFAULT_QUESTIONS_PER_LEVEL,
        }
    }
}

impl LevelConfig {
    pub fn total_questions_needed(&self) -> usize {
        self.num_levels as usize * self.questions_per_level as usize
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    #[validate(length(min = 1, message = "documentText is required"))]
    pub document_text: String,

    #[serde(flatten)]
    #[validate(nested)]
    pub levels: LevelConfig,
}

/// Questions stay untyped here so each element can be checked individually
/// and rejected with its index.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveQuizRequest {
    #[validate(length(min = 1, message = "Quiz must contain at least one question"))]
    pub questions: Vec<Value>,

    #[validate(range(min = 1, message = "numLevels must be a positive integer"))]
    pub num_levels: Option<u32>,

    #[validate(range(min = 1, message = "questionsPerLevel must be a positive integer"))]
    pub questions_per_level: Option<u32>,
}
