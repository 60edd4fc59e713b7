//! Domain models and the pure helpers that shape them for responses
//!
//! Request payloads are validated when converted into these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod category;
pub mod question;
pub mod pagination;
pub mod search;
pub mod quiz;

pub use validation::ValidationError;
pub use category::{category_map, Category, CategoryMap, CategoryRef};
pub use question::{
    CreateQuestionRequest, DifficultyValue, NewQuestion, Question, QuestionResponse,
};
pub use pagination::{max_page, paginate, PageParams, QUESTIONS_PER_PAGE};
pub use search::{SearchRequest, SearchTerm};
pub use quiz::{choose_question, QuizCategory, QuizFilter, QuizRequest, ALL_CATEGORIES};
