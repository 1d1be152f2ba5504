use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

mod app;
mod error;
mod output;
mod session;
mod store;

use crate::app::App;
use crate::output::terminal::TerminalOutput;
use crate::output::{QuizOutput, View};
use crate::session::{timer, Mode};

fn main() {
    pretty_env_logger::init();

    let mut app = App::new(TerminalOutput::new());
    let stdin = io::stdin();
    let mut input = stdin.lock();
    if let Err(e) = run(&mut app, &mut input) {
        app.show_error(&e);
        std::process::exit(1);
    }
}

fn run<O: QuizOutput, R: BufRead>(app: &mut App<O>, input: &mut R) -> Result<()> {
    app.switch_view(View::Upload);
    load_questions(app, input)?;
    loop {
        app.switch_view(View::Settings);
        app.show_mistake_count();
        let line = match prompt(
            input,
            "Mode ([p]ractice, [t]imed, [r]eview), [x] reset mistakes, [q] quit: ",
        )? {
            Some(line) => line,
            None => return Ok(()),
        };
        match line.trim().to_lowercase().as_str() {
            "p" | "practice" => start_session(app, input, Mode::Practice)?,
            "t" | "timed" => start_session(app, input, Mode::Timed)?,
            "r" | "review" => start_session(app, input, Mode::Review)?,
            "x" | "reset" => {
                if confirm(
                    input,
                    "Erase the mistake history? This cannot be undone. [y/N] ",
                )? {
                    app.reset_mistakes_requested();
                }
            }
            "q" | "quit" => return Ok(()),
            other => app.show_error(&anyhow!("unknown choice: {}", other)),
        }
    }
}

fn load_questions<O: QuizOutput, R: BufRead>(app: &mut App<O>, input: &mut R) -> Result<()> {
    if let Some(path) = env::args().nth(1) {
        match app.file_selected(&PathBuf::from(&path)) {
            Ok(count) => {
                println!("Loaded {} questions from {}", count, path);
                return Ok(());
            }
            Err(e) => app.show_error(&e),
        }
    }
    loop {
        let line = match prompt(input, "Question file to load: ")? {
            Some(line) => line,
            None => bail!("no question file selected"),
        };
        let path = PathBuf::from(line.trim());
        match app.file_selected(&path) {
            Ok(count) => {
                println!("Loaded {} questions from {}", count, path.display());
                return Ok(());
            }
            Err(e) => app.show_error(&e),
        }
    }
}

fn start_session<O: QuizOutput, R: BufRead>(
    app: &mut App<O>,
    input: &mut R,
    mode: Mode,
) -> Result<()> {
    let count = match mode {
        // Review always plays every currently missed question.
        Mode::Review => 0,
        _ => match prompt_for_count(app, input) {
            Ok(count) => count,
            Err(e) => {
                app.show_error(&e);
                return Ok(());
            }
        },
    };
    if let Err(e) = app.start_requested(mode, count) {
        app.show_error(&e);
        return Ok(());
    }
    quiz_loop(app, input)
}

fn prompt_for_count<O: QuizOutput, R: BufRead>(app: &App<O>, input: &mut R) -> Result<usize> {
    let default = app
        .default_question_count()
        .min(app.question_count())
        .max(1);
    let text = format!(
        "How many questions? (1-{}) [{}] ",
        app.question_count(),
        default
    );
    let line = prompt(input, &text)?.unwrap_or_default();
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed
        .parse::<usize>()
        .with_context(|| format!("not a number: {}", trimmed))
}

fn quiz_loop<O: QuizOutput, R: BufRead>(app: &mut App<O>, input: &mut R) -> Result<()> {
    while app.has_active_session() {
        let options = match app.session().and_then(|s| s.current_options()) {
            Some(options) => options.to_vec(),
            None => break,
        };
        if let Some(seconds) = app.session().and_then(|s| s.elapsed_seconds()) {
            println!("Elapsed: {}", timer::format_elapsed(seconds));
        }
        let line = match prompt(
            input,
            &format!("Answer (1-{}), or q to quit: ", options.len()),
        )? {
            Some(line) => line,
            None => {
                app.quit_requested();
                return Ok(());
            }
        };
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") {
            if confirm(input, "Quit this quiz? Answers so far stay recorded. [y/N] ")? {
                app.quit_requested();
                return Ok(());
            }
            continue;
        }
        let choice = match trimmed.parse::<usize>() {
            Ok(n) if n >= 1 && n <= options.len() => &options[n - 1],
            _ => {
                app.show_error(&anyhow!("enter a number between 1 and {}", options.len()));
                continue;
            }
        };
        if let Err(e) = app.option_chosen(choice) {
            app.show_error(&e);
            continue;
        }
        match prompt(input, "[enter] next question, q to quit: ")? {
            None => {
                app.quit_requested();
                return Ok(());
            }
            Some(line) if line.trim().eq_ignore_ascii_case("q") => {
                if confirm(input, "Quit this quiz? Answers so far stay recorded. [y/N] ")? {
                    app.quit_requested();
                    return Ok(());
                }
            }
            Some(_) => (),
        }
        if let Err(e) = app.next_requested() {
            app.show_error(&e);
        }
    }
    Ok(())
}

fn prompt<R: BufRead>(input: &mut R, text: &str) -> Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush().context("could not flush stdout")?;
    let mut line = String::new();
    let bytes_read = input.read_line(&mut line).context("could not read input")?;
    if bytes_read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn confirm<R: BufRead>(input: &mut R, text: &str) -> Result<bool> {
    match prompt(input, text)? {
        Some(line) => Ok(line.trim().eq_ignore_ascii_case("y")),
        None => Ok(false),
    }
}
