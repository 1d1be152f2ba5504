use rand::seq::SliceRandom;

use crate::output::{Message, QuizOutput};
use crate::session::State;
use crate::store::Question;


#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnswerOutcome {
    pub chosen: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Awaiting-answer phase. Each instance draws a fresh permutation of the
/// question's options, so the presented order changes every time a question
/// becomes current.
pub struct QuestionState<O> {
    question: Question,
    position: usize,
    total: usize,
    options: Vec<String>,
    output: O,
}

impl<O: QuizOutput> QuestionState<O> {
    pub fn new(question: Question, index: usize, total: usize, output: O) -> Self {
        let mut options = question.options.clone();
        options.shuffle(&mut rand::thread_rng());
        QuestionState {
            question,
            position: index + 1,
            total,
            options,
            output,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn presented_options(&self) -> &[String] {
        &self.options
    }

    pub fn answer(&self, chosen: &str) -> AnswerOutcome {
        AnswerOutcome {
            chosen: chosen.to_owned(),
            correct_answer: self.question.answer.clone(),
            is_correct: chosen == self.question.answer,
        }
    }
}

impl<O: QuizOutput> State for QuestionState<O> {
    fn on_begin(&mut self) {
        self.output.show(&Message::QuestionBegins {
            position: self.position,
            total: self.total,
            text: self.question.text.clone(),
            options: self.options.clone(),
        });
    }

    fn on_end(&mut self) {}
}
