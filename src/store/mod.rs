use std::collections::HashSet;
use std::convert::TryFrom;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use directories_next::BaseDirs;
use itertools::Itertools;
use parking_lot::RwLock;
use serde_json::Value;

use crate::error::QuizError;

pub mod question;

#[cfg(test)]
mod tests;

pub use question::{Question, RawQuestion};

const REGISTRY_FILE: &'static str = "mistakes.json";

pub type StoreHandle = Arc<RwLock<QuestionStore>>;

/// Owns the loaded question set and the persisted registry of question
/// numbers the user has missed. The registry survives across sessions; the
/// question set is replaced wholesale on every successful load.
pub struct QuestionStore {
    questions: Vec<Question>,
    mistakes: HashSet<u32>,
    registry_path: Option<PathBuf>,
}

impl QuestionStore {
    pub fn new(registry_path: Option<PathBuf>) -> QuestionStore {
        QuestionStore {
            questions: Vec::new(),
            mistakes: HashSet::new(),
            registry_path,
        }
    }

    pub fn with_default_location() -> QuestionStore {
        match default_registry_path() {
            Some(path) => QuestionStore::new(Some(path)),
            None => {
                log::warn!("could not locate a data directory, mistake history will not survive this run");
                QuestionStore::new(None)
            }
        }
    }

    pub fn into_handle(self) -> StoreHandle {
        Arc::new(RwLock::new(self))
    }

    /// Validates an entire parsed question file before replacing the current
    /// set. A failed load leaves the previously loaded set untouched.
    pub fn load(&mut self, raw: Value) -> Result<usize, QuizError> {
        let raw_questions: Vec<RawQuestion> =
            serde_json::from_value(raw).map_err(|e| QuizError::Format(e.to_string()))?;
        if raw_questions.is_empty() {
            return Err(QuizError::Format("the file contains no questions".into()));
        }
        let mut questions = Vec::with_capacity(raw_questions.len());
        let mut numbers = HashSet::new();
        for raw_question in raw_questions {
            let question = Question::try_from(raw_question)?;
            if !numbers.insert(question.number) {
                return Err(QuizError::Format(format!(
                    "duplicate question number {}",
                    question.number
                )));
            }
            questions.push(question);
        }
        self.questions = questions;
        Ok(self.questions.len())
    }

    pub fn load_json(&mut self, text: &str) -> Result<usize, QuizError> {
        let value = serde_json::from_str(text).map_err(|e| QuizError::Format(e.to_string()))?;
        self.load(value)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn mistakes(&self) -> &HashSet<u32> {
        &self.mistakes
    }

    pub fn mistake_count(&self) -> usize {
        self.mistakes.len()
    }

    /// Reads the persisted registry. Missing or corrupt data degrades to an
    /// empty registry, so a damaged file heals itself on the next save.
    pub fn load_mistakes(&mut self) {
        self.mistakes = match self.read_registry() {
            Ok(mistakes) => mistakes,
            Err(e) => {
                log::warn!("could not load the mistake registry: {}", e);
                HashSet::new()
            }
        };
    }

    pub fn save_mistakes(&self) {
        if let Err(e) = self.write_registry() {
            log::warn!("could not save the mistake registry: {}", e);
        }
    }

    pub fn record_outcome(&mut self, number: u32, was_correct: bool) {
        if was_correct {
            self.mistakes.remove(&number);
        } else {
            self.mistakes.insert(number);
        }
        self.save_mistakes();
    }

    /// Irreversible. Callers are expected to confirm with the user first.
    pub fn reset_mistakes(&mut self) {
        self.mistakes.clear();
        self.save_mistakes();
    }

    fn read_registry(&self) -> Result<HashSet<u32>, QuizError> {
        let path = match &self.registry_path {
            Some(path) if path.exists() => path,
            _ => return Ok(HashSet::new()),
        };
        let payload =
            fs::read_to_string(path).map_err(|e| QuizError::Persistence(e.to_string()))?;
        let numbers: Vec<u32> =
            serde_json::from_str(&payload).map_err(|e| QuizError::Persistence(e.to_string()))?;
        Ok(numbers.into_iter().collect())
    }

    fn write_registry(&self) -> Result<(), QuizError> {
        let path = match &self.registry_path {
            Some(path) => path,
            None => return Ok(()),
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| QuizError::Persistence(e.to_string()))?;
        }
        let numbers = self.mistakes.iter().copied().sorted().collect_vec();
        let payload =
            serde_json::to_string(&numbers).map_err(|e| QuizError::Persistence(e.to_string()))?;
        fs::write(path, payload).map_err(|e| QuizError::Persistence(e.to_string()))
    }
}

fn default_registry_path() -> Option<PathBuf> {
    let mut path = BaseDirs::new()?.data_dir().to_path_buf();
    path.push("quizdeck");
    path.push(REGISTRY_FILE);
    Some(path)
}
