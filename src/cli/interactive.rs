use std::io::{self, BufRead, Write};

use crate::VERSION;
use crate::dispatch::evaluate;
use crate::error::CalcError;
use crate::history::HistoryStore;

const SUPPORTED_OPERATIONS: &str = "+, -, *, /, sqrt, pow, sin, cos";

/// Run the read-eval-print loop until `exit` or end of input.
///
/// Calculation errors are printed and the loop continues; only I/O errors on
/// `input` or `out` end it early.
pub fn run_interactive(
    history: &mut dyn HistoryStore,
    input: impl BufRead,
    out: &mut dyn Write,
    precision: usize,
) -> io::Result<()> {
    writeln!(out, "Calculator v{} - Interactive Mode", VERSION)?;
    writeln!(out, "Type 'exit' to quit, 'history' to show calculation history")?;
    writeln!(out, "Usage: number operation number (e.g., 10 + 5)")?;
    writeln!(out)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            "" => continue,
            "exit" => {
                writeln!(out, "Goodbye")?;
                break;
            }
            "history" => history.show(out)?,
            expression => match evaluate(expression) {
                Ok(result) => {
                    history.add(expression, result);
                    writeln!(out, "{:.*}", precision, result)?;
                }
                Err(e @ CalcError::InvalidOperation(_)) => {
                    writeln!(out, "Error: {}", e)?;
                    writeln!(out, "Supported: {}", SUPPORTED_OPERATIONS)?;
                }
                Err(e) => writeln!(out, "Error: {}", e)?,
            },
        }
    }

    Ok(())
}
