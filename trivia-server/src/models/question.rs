//! Question records, creation payloads and the formatted response shape

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{CategoryRef, ValidationError};

/// Question record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    /// Textual reference to a category id; not checked against categories
    pub category: String,
}

impl Question {
    /// Reduce to the externally visible fields.
    pub fn format(&self) -> QuestionResponse {
        QuestionResponse::from(self.clone())
    }
}

/// Formatted question as returned by every endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: String,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            difficulty: q.difficulty,
            category: q.category,
        }
    }
}

/// Fields for a question that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: String,
}

/// Difficulty as sent by clients: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DifficultyValue {
    Number(i32),
    Text(String),
}

impl DifficultyValue {
    /// Integer value, parsing text the way an INTEGER column would.
    pub fn to_i32(&self) -> Result<i32, ValidationError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| ValidationError::NotAnInteger { field: "difficulty" }),
        }
    }
}

/// POST /questions body.
///
/// Fields are optional here so that a missing field is reported as a
/// validation failure rather than a body rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<DifficultyValue>,
    pub category: Option<CategoryRef>,
}

impl CreateQuestionRequest {
    /// Check that every field is present.
    ///
    /// Only presence is checked: empty strings are accepted. `difficulty`
    /// must still read as an integer.
    pub fn into_new_question(self) -> Result<NewQuestion, ValidationError> {
        let question = self
            .question
            .ok_or(ValidationError::MissingField { field: "question" })?;
        let answer = self
            .answer
            .ok_or(ValidationError::MissingField { field: "answer" })?;
        let difficulty = self
            .difficulty
            .ok_or(ValidationError::MissingField { field: "difficulty" })?
            .to_i32()?;
        let category = self
            .category
            .ok_or(ValidationError::MissingField { field: "category" })?;

        Ok(NewQuestion {
            question,
            answer,
            difficulty,
            category: category.as_text(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> CreateQuestionRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn complete_request_converts() {
        let new = request(serde_json::json!({
            "question": "Who painted the Mona Lisa?",
            "answer": "Leonardo da Vinci",
            "difficulty": 2,
            "category": 2
        }))
        .into_new_question()
        .unwrap();

        assert_eq!(new.difficulty, 2);
        assert_eq!(new.category, "2");
    }

    #[test]
    fn empty_strings_are_accepted() {
        let new = request(serde_json::json!({
            "question": "",
            "answer": "",
            "difficulty": 1,
            "category": "1"
        }))
        .into_new_question()
        .unwrap();

        assert!(new.question.is_empty());
        assert!(new.answer.is_empty());
    }

    #[test]
    fn each_missing_field_is_reported() {
        let full = serde_json::json!({
            "question": "q",
            "answer": "a",
            "difficulty": 1,
            "category": 1
        });

        for field in ["question", "answer", "difficulty", "category"] {
            let mut body = full.clone();
            body.as_object_mut().unwrap().remove(field);

            let err = request(body).into_new_question().unwrap_err();
            assert_eq!(err, ValidationError::MissingField { field });
        }
    }

    #[test]
    fn null_counts_as_missing() {
        let err = request(serde_json::json!({
            "question": "q",
            "answer": null,
            "difficulty": 1,
            "category": 1
        }))
        .into_new_question()
        .unwrap_err();

        assert_eq!(err, ValidationError::MissingField { field: "answer" });
    }

    #[test]
    fn numeric_string_difficulty_is_parsed() {
        let new = request(serde_json::json!({
            "question": "q",
            "answer": "a",
            "difficulty": " 3 ",
            "category": "1"
        }))
        .into_new_question()
        .unwrap();

        assert_eq!(new.difficulty, 3);
    }

    #[test]
    fn non_integer_difficulty_is_rejected() {
        for difficulty in [serde_json::json!("hard"), serde_json::json!("2.5")] {
            let err = request(serde_json::json!({
                "question": "q",
                "answer": "a",
                "difficulty": difficulty,
                "category": "1"
            }))
            .into_new_question()
            .unwrap_err();

            assert_eq!(err, ValidationError::NotAnInteger { field: "difficulty" });
        }
    }

    #[test]
    fn format_keeps_public_fields() {
        let q = Question {
            id: 7,
            question: "Largest planet?".into(),
            answer: "Jupiter".into(),
            difficulty: 1,
            category: "1".into(),
        };

        let json = serde_json::to_value(q.format()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "question": "Largest planet?",
                "answer": "Jupiter",
                "difficulty": 1,
                "category": "1"
            })
        );
    }
}
