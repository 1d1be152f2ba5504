use std::convert::TryFrom;

use serde::Deserialize;

use crate::error::QuizError;

/// On-disk image of a question, as found in uploaded question files.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawQuestion {
    pub number: u32,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub number: u32,
    pub text: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl TryFrom<RawQuestion> for Question {
    type Error = QuizError;

    fn try_from(raw: RawQuestion) -> Result<Question, QuizError> {
        if raw.options.len() < 2 {
            return Err(QuizError::Format(format!(
                "question {} has fewer than two options",
                raw.number
            )));
        }
        if !raw.options.contains(&raw.answer) {
            return Err(QuizError::Format(format!(
                "the answer to question {} is not one of its options",
                raw.number
            )));
        }
        Ok(Question {
            number: raw.number,
            text: raw.question,
            options: raw.options,
            answer: raw.answer,
        })
    }
}
