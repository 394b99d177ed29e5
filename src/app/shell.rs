use crate::app::report::ReportRenderer;
use crate::core::engine::ExpiryEngine;
use crate::domain::ports::{Clock, RecordSource};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const SEARCH_PROMPT: &str = "\nEnter a domain name or owner to search: ";
const AGAIN_PROMPT: &str = "\nWould you like to search again? (yes/no): ";
const FAREWELL: &str = "Thank you for using the Domain Manager. Goodbye!";

/// Overview, prompt, search, repeat. End of input counts as "no term" and "no".
pub struct SearchShell<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> SearchShell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs the loop and returns how many searches were performed.
    pub fn run<S, C>(
        &mut self,
        engine: &ExpiryEngine<S>,
        renderer: &ReportRenderer,
        clock: &C,
    ) -> Result<usize>
    where
        S: RecordSource,
        C: Clock,
    {
        let mut rounds = 0;

        loop {
            renderer.write_overview(&mut self.output, engine, clock.now())?;

            self.prompt(SEARCH_PROMPT)?;
            let term = self.read_line()?;
            renderer.write_search_results(
                &mut self.output,
                engine,
                clock.now(),
                term.as_deref(),
            )?;
            rounds += 1;

            self.prompt(AGAIN_PROMPT)?;
            let choice = self.read_line()?.map(|answer| answer.to_lowercase());
            if !matches!(choice.as_deref(), Some("yes" | "y")) {
                break;
            }
            tracing::debug!(rounds, "continuing search loop");
        }

        writeln!(self.output, "{}", FAREWELL)?;
        self.output.flush()?;
        Ok(rounds)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// One line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
