use crate::output::{Message, QuizOutput};
use crate::session::State;

use super::AnswerOutcome;


/// Answer-revealed phase. Carries the option order the question was presented
/// with, so the adapter can mark each option as correct or not.
pub struct RevealState<O> {
    options: Vec<String>,
    outcome: AnswerOutcome,
    output: O,
}

impl<O: QuizOutput> RevealState<O> {
    pub fn new(options: Vec<String>, outcome: AnswerOutcome, output: O) -> Self {
        RevealState {
            options,
            outcome,
            output,
        }
    }
}

impl<O: QuizOutput> State for RevealState<O> {
    fn on_begin(&mut self) {
        self.output.show(&Message::AnswerReveal {
            options: self.options.clone(),
            chosen: self.outcome.chosen.clone(),
            correct_answer: self.outcome.correct_answer.clone(),
            is_correct: self.outcome.is_correct,
        });
    }

    fn on_end(&mut self) {}
}
