//! Quiz requests and random question selection

use rand::Rng;
use serde::Deserialize;

use super::{CategoryRef, Question, ValidationError};

/// Category type sent by clients to draw from every category
pub const ALL_CATEGORIES: &str = "click";

/// POST /quizzes body
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: Option<QuizCategory>,
}

/// Category selected for the quiz
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: Option<CategoryRef>,
}

/// Which questions a quiz may draw from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizFilter {
    /// Any category
    All,
    /// Questions whose category text equals this value
    Category(String),
}

impl QuizFilter {
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Category(c) => Some(c),
        }
    }

    pub fn accepts(&self, question: &Question) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => question.category == *c,
        }
    }
}

impl TryFrom<QuizCategory> for QuizFilter {
    type Error = ValidationError;

    fn try_from(category: QuizCategory) -> Result<Self, Self::Error> {
        if category.kind == ALL_CATEGORIES {
            return Ok(Self::All);
        }
        let id = category
            .id
            .ok_or(ValidationError::MissingField { field: "quiz_category.id" })?;
        Ok(Self::Category(id.as_text()))
    }
}

impl QuizRequest {
    /// Split into the candidate filter and the ids already asked.
    pub fn into_parts(self) -> Result<(QuizFilter, Vec<i32>), ValidationError> {
        let previous = self
            .previous_questions
            .ok_or(ValidationError::MissingField { field: "previous_questions" })?;
        let category = self
            .quiz_category
            .ok_or(ValidationError::MissingField { field: "quiz_category" })?;
        Ok((QuizFilter::try_from(category)?, previous))
    }
}

/// Pick one candidate uniformly at random, or `None` when there are none.
pub fn choose_question<R>(mut candidates: Vec<Question>, rng: &mut R) -> Option<Question>
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..candidates.len());
    Some(candidates.swap_remove(index))
}
