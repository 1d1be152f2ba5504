use crate::output::{Message, QuizOutput, View};
use crate::session::timer;

#[derive(Clone)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> TerminalOutput {
        TerminalOutput
    }
}

impl QuizOutput for TerminalOutput {
    fn show(&mut self, message: &Message) {
        match message {
            Message::QuestionBegins {
                position,
                total,
                text,
                options,
            } => {
                println!();
                println!("Question {}/{}: {}", position, total, text);
                for (index, option) in options.iter().enumerate() {
                    println!("  {}) {}", index + 1, option);
                }
            }
            Message::AnswerReveal {
                options,
                chosen,
                correct_answer,
                is_correct,
            } => {
                if *is_correct {
                    println!("Correct!");
                } else {
                    println!("Wrong! The correct answer was: {}", correct_answer);
                }
                for option in options {
                    let marker = if option == correct_answer {
                        "+"
                    } else if option == chosen {
                        "x"
                    } else {
                        " "
                    };
                    println!("  [{}] {}", marker, option);
                }
            }
            Message::SessionComplete {
                score,
                total,
                elapsed_seconds,
            } => {
                let percentage = if *total > 0 {
                    (*score as f32 / *total as f32 * 100.0).round() as u32
                } else {
                    0
                };
                println!();
                println!("Final score: {}%", percentage);
                println!("Correct: {}  Incorrect: {}", score, *total as u32 - score);
                if let Some(seconds) = elapsed_seconds {
                    println!("Time taken: {}", timer::format_elapsed(*seconds));
                }
            }
            Message::MistakeCount(count) => {
                println!("Previously missed questions: {}", count);
            }
            Message::MistakesReset => {
                println!("Mistake history cleared.");
            }
            Message::Error(text) => {
                println!("Error: {}", text);
            }
        }
    }

    fn switch_view(&mut self, view: View) {
        match view {
            View::Upload => println!("=== Load a question file ==="),
            View::Settings => println!("\n=== Quiz settings ==="),
            View::Quiz => println!("\n=== Quiz ==="),
            View::Results => println!("\n=== Results ==="),
        }
    }
}
