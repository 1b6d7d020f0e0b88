//! Interactive question-and-answer session
//!
//! One sentence per input line, one answer per sentence. Blank lines are
//! skipped; `quit` or `exit` (any case) or the end of input ends the session.

use std::io::{BufRead, Write};

use owo_colors::OwoColorize;

use crate::format::OutputFormat;
use crate::query::QueryEngine;
use crate::ui::{theme, Icons};
use crate::Result;

fn is_exit(sentence: &str) -> bool {
    sentence.eq_ignore_ascii_case("quit") || sentence.eq_ignore_ascii_case("exit")
}

/// Answer lines from `input` until told to stop.
///
/// Returns the number of sentences answered.
pub fn run_session<R: BufRead, W: Write>(
    engine: &QueryEngine<'_>,
    format: OutputFormat,
    input: R,
    out: &mut W,
) -> Result<usize> {
    let mut lines = input.lines();
    let mut answered = 0;

    loop {
        write!(out, "{} ", Icons::PROMPT.style(theme().prompt.clone()))?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let sentence = line.trim();

        if sentence.is_empty() {
            continue;
        }
        if is_exit(sentence) {
            break;
        }

        let answer = engine.answer(sentence);
        let rendered = answer.render(format);
        if answer.is_success() {
            writeln!(out, "{}", rendered)?;
        } else {
            writeln!(out, "{}", rendered.style(theme().warn.clone()))?;
        }
        writeln!(out)?;
        answered += 1;
    }

    tracing::debug!("Chat session ended after {} answer(s)", answered);
    Ok(answered)
}
