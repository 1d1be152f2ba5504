pub mod terminal;

#[cfg(test)]
pub mod mock;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum View {
    Upload,
    Settings,
    Quiz,
    Results,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    QuestionBegins {
        position: usize,
        total: usize,
        text: String,
        options: Vec<String>,
    },
    AnswerReveal {
        options: Vec<String>,
        chosen: String,
        correct_answer: String,
        is_correct: bool,
    },
    SessionComplete {
        score: u32,
        total: usize,
        elapsed_seconds: Option<u64>,
    },
    MistakeCount(usize),
    MistakesReset,
    Error(String),
}

/// Boundary between the quiz core and whatever renders it. The core never
/// touches the screen directly; it emits messages and view changes through
/// this trait.
pub trait QuizOutput: Clone {
    fn show(&mut self, message: &Message);
    fn switch_view(&mut self, view: View);
}
