use std::fmt;

use crate::error::QuizError;
use crate::output::{QuizOutput, View};
use crate::store::{Question, StoreHandle};

use self::phase::{CompleteState, QuestionState, RevealState};
use self::timer::Timer;

pub mod builder;
mod phase;
pub mod settings;
pub mod timer;


pub use self::phase::AnswerOutcome;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Practice,
    Timed,
    Review,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::Practice => write!(f, "practice"),
            Mode::Timed => write!(f, "timed"),
            Mode::Review => write!(f, "review"),
        }
    }
}

trait State {
    fn on_begin(&mut self);
    fn on_end(&mut self);
}

enum Phase<O> {
    Question(QuestionState<O>),
    Reveal(RevealState<O>),
    Complete(CompleteState<O>),
}

impl<O: QuizOutput> Phase<O> {
    fn get_state(&mut self) -> &mut dyn State {
        match self {
            Phase::Question(s) => s,
            Phase::Reveal(s) => s,
            Phase::Complete(s) => s,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Phase::Question(_) => "awaiting an answer",
            Phase::Reveal(_) => "revealing an answer",
            Phase::Complete(_) => "complete",
        }
    }
}

/// One run through a fixed working set of questions. The working set is a
/// snapshot: reloading the question store mid-run does not affect it.
pub struct Session<O: QuizOutput> {
    mode: Mode,
    questions: Vec<Question>,
    current_index: usize,
    score: u32,
    store: StoreHandle,
    timer: Option<Timer>,
    current_phase: Phase<O>,
    output: O,
}

impl<O: QuizOutput> Session<O> {
    pub fn new(
        mode: Mode,
        questions: Vec<Question>,
        store: StoreHandle,
        output: O,
    ) -> Result<Session<O>, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptySelection(mode));
        }
        let timer = match mode {
            Mode::Timed => Some(Timer::new()),
            _ => None,
        };
        let total = questions.len();
        let first = QuestionState::new(questions[0].clone(), 0, total, output.clone());
        let mut session = Session {
            mode,
            questions,
            current_index: 0,
            score: 0,
            store,
            timer,
            current_phase: Phase::Question(first),
            output,
        };
        session.output.switch_view(View::Quiz);
        session.current_phase.get_state().on_begin();
        Ok(session)
    }

    /// Accepts exactly one answer per question. A second submission without
    /// an intervening `advance` is an invalid transition, which is also what
    /// guards against double-clicks in the adapter.
    pub fn submit_answer(&mut self, chosen: &str) -> Result<AnswerOutcome, QuizError> {
        let (outcome, number, options) = match &self.current_phase {
            Phase::Question(state) => (
                state.answer(chosen),
                state.question().number,
                state.presented_options().to_vec(),
            ),
            _ => {
                return Err(QuizError::InvalidState {
                    operation: "submit an answer",
                    state: self.current_phase.name(),
                })
            }
        };
        if outcome.is_correct {
            self.score += 1;
        }
        self.store.write().record_outcome(number, outcome.is_correct);
        let reveal = RevealState::new(options, outcome.clone(), self.output.clone());
        self.set_phase(Phase::Reveal(reveal));
        Ok(outcome)
    }

    pub fn advance(&mut self) -> Result<(), QuizError> {
        match &self.current_phase {
            Phase::Reveal(_) => (),
            _ => {
                return Err(QuizError::InvalidState {
                    operation: "advance to the next question",
                    state: self.current_phase.name(),
                })
            }
        }
        self.current_index += 1;
        if self.current_index < self.questions.len() {
            let state = QuestionState::new(
                self.questions[self.current_index].clone(),
                self.current_index,
                self.questions.len(),
                self.output.clone(),
            );
            self.set_phase(Phase::Question(state));
        } else {
            self.stop_timer();
            let state = CompleteState::new(
                self.score,
                self.questions.len(),
                self.elapsed_seconds(),
                self.output.clone(),
            );
            self.set_phase(Phase::Complete(state));
        }
        Ok(())
    }

    /// Discards the run. Outcomes recorded for already-answered questions
    /// stay persisted; quitting does not roll back history.
    pub fn quit(self) {
        log::debug!("session quit before completion");
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.current_phase, Phase::Complete(_))
    }

    pub fn current_options(&self) -> Option<&[String]> {
        match &self.current_phase {
            Phase::Question(state) => Some(state.presented_options()),
            _ => None,
        }
    }

    pub fn elapsed_seconds(&self) -> Option<u64> {
        self.timer.as_ref().map(|timer| timer.elapsed_seconds())
    }

    pub fn timer(&self) -> Option<&Timer> {
        self.timer.as_ref()
    }

    fn set_phase(&mut self, phase: Phase<O>) {
        self.current_phase.get_state().on_end();
        self.current_phase = phase;
        log::debug!(
            "{} session is now {}",
            self.mode,
            self.current_phase.name()
        );
        self.current_phase.get_state().on_begin();
    }

    fn stop_timer(&self) {
        if let Some(timer) = &self.timer {
            timer.stop();
        }
    }
}

impl<O: QuizOutput> Drop for Session<O> {
    fn drop(&mut self) {
        self.stop_timer();
    }
}
