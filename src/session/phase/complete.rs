use crate::output::{Message, QuizOutput, View};
use crate::session::State;

/// Terminal phase. Announces the final tally once and accepts nothing else.
pub struct CompleteState<O> {
    score: u32,
    total: usize,
    elapsed_seconds: Option<u64>,
    output: O,
}

impl<O: QuizOutput> CompleteState<O> {
    pub fn new(score: u32, total: usize, elapsed_seconds: Option<u64>, output: O) -> Self {
        CompleteState {
            score,
            total,
            elapsed_seconds,
            output,
        }
    }
}

impl<O: QuizOutput> State for CompleteState<O> {
    fn on_begin(&mut self) {
        self.output.switch_view(View::Results);
        self.output.show(&Message::SessionComplete {
            score: self.score,
            total: self.total,
            elapsed_seconds: self.elapsed_seconds,
        });
    }

    fn on_end(&mut self) {}
}
