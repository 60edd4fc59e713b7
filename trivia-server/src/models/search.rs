//! Search term validation and case-insensitive substring matching

use serde::Deserialize;

use super::ValidationError;

/// POST /questions/search body
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl SearchRequest {
    pub fn into_term(self) -> Result<SearchTerm, ValidationError> {
        let term = self
            .search_term
            .ok_or(ValidationError::MissingField { field: "searchTerm" })?;
        SearchTerm::new(&term)
    }
}

/// Validated, non-empty search term.
///
/// The term is used as the inside of an `ILIKE '%term%'` pattern. `%`
/// and `_` are not escaped and keep their wildcard meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Create a search term.
    ///
    /// Whitespace is significant: `" "` is a valid term.
    ///
    /// # Example
    /// ```
    /// use trivia_server::models::SearchTerm;
    ///
    /// assert!(SearchTerm::new("title").is_ok());
    /// assert!(SearchTerm::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "searchTerm" });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// LIKE pattern matching the term anywhere in the text.
    pub fn pattern(&self) -> String {
        format!("%{}%", self.0)
    }

    /// Evaluate `text ILIKE pattern()` in process.
    pub fn matches(&self, text: &str) -> bool {
        ilike(text, &self.pattern())
    }
}

impl AsRef<str> for SearchTerm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(char),
    AnyOne,
    AnyRun,
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        let token = match c {
            '%' => Token::AnyRun,
            '_' => Token::AnyOne,
            // Backslash is the default LIKE escape character
            '\\' => Token::Literal(chars.next().unwrap_or('\\')),
            other => Token::Literal(other),
        };
        tokens.push(token);
    }
    tokens
}

/// Case-insensitive LIKE match over the whole text.
fn ilike(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.to_lowercase().chars().collect();
    let tokens: Vec<Token> = tokenize(&pattern.to_lowercase());

    // reachable[j]: the first i chars of text match the first j tokens
    let mut reachable = vec![false; tokens.len() + 1];
    reachable[0] = true;
    for (j, token) in tokens.iter().enumerate() {
        reachable[j + 1] = reachable[j] && *token == Token::AnyRun;
    }

    for c in &text {
        let mut next = vec![false; tokens.len() + 1];
        for (j, token) in tokens.iter().enumerate() {
            next[j + 1] = match token {
                Token::AnyRun => next[j] || reachable[j + 1],
                Token::AnyOne => reachable[j],
                Token::Literal(l) => reachable[j] && l == c,
            };
        }
        reachable = next;
    }

    reachable[tokens.len()]
}
