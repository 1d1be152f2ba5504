use std::fs;
use std::path::Path;

use anyhow::*;

use crate::output::{Message, QuizOutput, View};
use crate::session::builder;
use crate::session::settings::Settings;
use crate::session::{Mode, Session};
use crate::store::{QuestionStore, StoreHandle};

/// Event surface between the front-end and the quiz core. Each method maps to
/// one user action; failures come back as errors for the caller to display.
pub struct App<O: QuizOutput> {
    store: StoreHandle,
    settings: Settings,
    output: O,
    session: Option<Session<O>>,
}

impl<O: QuizOutput> App<O> {
    pub fn new(output: O) -> App<O> {
        let mut store = QuestionStore::with_default_location();
        store.load_mistakes();
        App::with_store(store, output)
    }

    pub fn with_store(store: QuestionStore, output: O) -> App<O> {
        App {
            store: store.into_handle(),
            settings: Settings::default(),
            output,
            session: None,
        }
    }

    pub fn file_selected(&mut self, path: &Path) -> Result<usize> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        let count = self.store.write().load_json(&text)?;
        Ok(count)
    }

    pub fn start_requested(&mut self, mode: Mode, count: usize) -> Result<()> {
        // Any running session (and its timer) must be gone before a new one exists.
        self.quit_requested();
        let session = {
            let store = self.store.read();
            let questions = match mode {
                Mode::Practice => builder::build_practice(store.questions(), count),
                Mode::Timed => builder::build_timed(store.questions(), count),
                Mode::Review => builder::build_review(store.questions(), store.mistakes()),
            };
            Session::new(mode, questions, self.store.clone(), self.output.clone())?
        };
        if let Some(timer) = session.timer() {
            timer.spawn_ticker(self.settings.tick_interval);
        }
        self.session = Some(session);
        Ok(())
    }

    pub fn option_chosen(&mut self, value: &str) -> Result<()> {
        let session = self.session.as_mut().context("no active session")?;
        session.submit_answer(value)?;
        Ok(())
    }

    pub fn next_requested(&mut self) -> Result<()> {
        let session = self.session.as_mut().context("no active session")?;
        session.advance()?;
        if session.is_complete() {
            self.session = None;
        }
        Ok(())
    }

    pub fn quit_requested(&mut self) {
        if let Some(session) = self.session.take() {
            session.quit();
        }
    }

    /// The caller is responsible for confirming this with the user.
    pub fn reset_mistakes_requested(&mut self) {
        self.store.write().reset_mistakes();
        self.output.show(&Message::MistakesReset);
    }

    pub fn show_mistake_count(&mut self) {
        let count = self.store.read().mistake_count();
        self.output.show(&Message::MistakeCount(count));
    }

    pub fn show_error(&mut self, error: &Error) {
        self.output.show(&Message::Error(format!("{:#}", error)));
    }

    pub fn switch_view(&mut self, view: View) {
        self.output.switch_view(view);
    }

    pub fn session(&self) -> Option<&Session<O>> {
        self.session.as_ref()
    }

    pub fn has_active_session(&self) -> bool {
        self.session.is_some()
    }

    pub fn question_count(&self) -> usize {
        self.store.read().question_count()
    }

    pub fn default_question_count(&self) -> usize {
        self.settings.default_question_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::mock::MockQuizOutput;

    fn question_file() -> &'static str {
        r#"[
            { "Number": 1, "Question": "2+2?", "Options": ["3", "4"], "Answer": "4" },
            { "Number": 2, "Question": "3+3?", "Options": ["5", "6"], "Answer": "6" }
        ]"#
    }

    fn app_with_questions() -> App<MockQuizOutput> {
        let app = App::with_store(QuestionStore::new(None), MockQuizOutput::new());
        app.store.write().load_json(question_file()).unwrap();
        app
    }

    #[test]
    fn loads_questions_from_a_file() {
        let path = std::env::temp_dir().join(format!("quizdeck-app-{}.json", std::process::id()));
        fs::write(&path, question_file()).unwrap();
        let mut app = App::with_store(QuestionStore::new(None), MockQuizOutput::new());
        assert_eq!(app.file_selected(&path).unwrap(), 2);
        assert_eq!(app.question_count(), 2);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn a_full_practice_run_reaches_the_results_view() {
        let mut app = app_with_questions();
        app.start_requested(Mode::Practice, 2).unwrap();
        for _ in 0..2 {
            let options = app.session().unwrap().current_options().unwrap().to_vec();
            app.option_chosen(&options[0]).unwrap();
            app.next_requested().unwrap();
        }
        assert!(!app.has_active_session());
        assert_eq!(app.output.current_view(), Some(View::Results));
    }

    #[test]
    fn review_without_mistakes_reports_an_error() {
        let mut app = app_with_questions();
        assert!(app.start_requested(Mode::Review, 5).is_err());
        assert!(!app.has_active_session());
    }

    #[test]
    fn resetting_clears_the_registry() {
        let mut app = app_with_questions();
        app.store.write().record_outcome(1, false);
        app.reset_mistakes_requested();
        assert_eq!(app.store.read().mistake_count(), 0);
        assert!(app.output.contains_message(&Message::MistakesReset));
    }
}
