use std::time::Duration;

#[derive(Debug)]
pub struct Settings {
    pub default_question_count: usize,
    pub tick_interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_question_count: 10,
            tick_interval: Duration::from_secs(1),
        }
    }
}
