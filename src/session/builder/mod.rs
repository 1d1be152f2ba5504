use std::collections::HashSet;

use rand::seq::SliceRandom;

use crate::store::Question;


pub fn build_practice(question_set: &[Question], count: usize) -> Vec<Question> {
    select_random(question_set, count)
}

pub fn build_timed(question_set: &[Question], count: usize) -> Vec<Question> {
    select_random(question_set, count)
}

/// Every question whose number is in the registry, in question-set order.
/// Registry entries with no matching question are ignored.
pub fn build_review(question_set: &[Question], mistakes: &HashSet<u32>) -> Vec<Question> {
    question_set
        .iter()
        .filter(|question| mistakes.contains(&question.number))
        .cloned()
        .collect()
}

fn select_random(question_set: &[Question], count: usize) -> Vec<Question> {
    let mut questions = question_set.to_vec();
    questions.shuffle(&mut rand::thread_rng());
    questions.truncate(count);
    questions
}
