//! Read-eval-print loop around [`lrcalc::evaluate_with`].
//!
//! Reads one expression per line until the end of input. Results are printed to stdout,
//! diagnostics to stderr. A failing line does not end the session.

use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use lrcalc::base::PrintHandler;
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "calc> ";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("I/O error in the read-eval-print loop: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let handler = PrintHandler::new();
    let mut line = Vec::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            // terminate the prompt line
            writeln!(output)?;
            tracing::debug!("end of input reached");
            return Ok(());
        }

        // invalid bytes become U+FFFD and are reported by the lexer
        let text = String::from_utf8_lossy(&line);
        let text = text.trim_end_matches(['\n', '\r']);
        if text.is_empty() {
            continue;
        }

        if let Ok(result) = lrcalc::evaluate_with(&handler, text) {
            writeln!(output, "{result}")?;
        }
    }
}
