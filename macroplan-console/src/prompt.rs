use std::io::{BufRead, Write};

use crate::{Error, Result};

/// Line-oriented prompts that keep asking until the answer is acceptable.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::EndOfInput);
        }
        Ok(line.trim().to_owned())
    }

    /// Asks for a whole number within `min..=max`.
    pub fn ask_integer(&mut self, prompt: &str, min: u32, max: u32) -> Result<u32> {
        loop {
            let answer = self.read_answer(prompt)?;
            match answer.parse::<u32>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                Ok(_) => writeln!(
                    self.output,
                    "Please enter a value between {} and {}.",
                    min, max
                )?,
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }

    /// Asks for a positive number no greater than `max`.
    pub fn ask_positive(&mut self, prompt: &str, max: f64) -> Result<f64> {
        loop {
            let answer = self.read_answer(prompt)?;
            match answer.parse::<f64>() {
                Ok(value) if value.is_finite() && value > 0.0 && value <= max => {
                    return Ok(value)
                }
                Ok(_) => writeln!(
                    self.output,
                    "Please enter a value greater than 0 and at most {}.",
                    max
                )?,
                Err(_) => writeln!(self.output, "Please enter a number.")?,
            }
        }
    }

    /// Shows numbered options starting at 1 and maps the choice with `select`.
    pub fn ask_menu<T>(
        &mut self,
        title: &str,
        options: &[String],
        select: impl Fn(u8) -> Option<T>,
    ) -> Result<T> {
        writeln!(self.output, "{}", title)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, option)?;
        }

        loop {
            let answer = self.read_answer("> ")?;
            if let Some(choice) = answer.parse::<u8>().ok().and_then(&select) {
                return Ok(choice);
            }
            writeln!(
                self.output,
                "Please choose an option between 1 and {}.",
                options.len()
            )?;
        }
    }
}
