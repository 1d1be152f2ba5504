use std::sync::Arc;

use parking_lot::RwLock;

use crate::output::{Message, QuizOutput, View};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Entry {
    Shown(Message),
    Switched(View),
}

#[derive(Clone)]
pub struct MockQuizOutput {
    entries: Arc<RwLock<Vec<Entry>>>,
}

impl MockQuizOutput {
    pub fn new() -> MockQuizOutput {
        MockQuizOutput {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn flush(&mut self) -> Vec<Entry> {
        std::mem::replace(&mut *self.entries.write(), Vec::new())
    }

    pub fn messages(&self) -> Vec<Message> {
        self.entries
            .read()
            .iter()
            .filter_map(|entry| match entry {
                Entry::Shown(message) => Some(message.clone()),
                Entry::Switched(_) => None,
            })
            .collect()
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.messages().iter().any(|m| m == message)
    }

    pub fn current_view(&self) -> Option<View> {
        self.entries.read().iter().rev().find_map(|entry| match entry {
            Entry::Switched(view) => Some(*view),
            Entry::Shown(_) => None,
        })
    }
}

impl QuizOutput for MockQuizOutput {
    fn show(&mut self, message: &Message) {
        self.entries.write().push(Entry::Shown(message.clone()));
    }

    fn switch_view(&mut self, view: View) {
        self.entries.write().push(Entry::Switched(view));
    }
}
