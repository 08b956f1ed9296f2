//! Line-oriented prompts over any `BufRead` / `Write` pair.

use std::io::{self, BufRead, Write};

/// Returned as an `UnexpectedEof` I/O error when input runs out mid-prompt.
pub fn input_closed() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "input closed")
}

pub fn is_input_closed(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .map(|e| e.kind() == io::ErrorKind::UnexpectedEof)
        .unwrap_or(false)
}

pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.out, "{}", line.as_ref())
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(input_closed());
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Free-form answer, surrounding whitespace trimmed.
    pub fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.out, "{label}: ")?;
        self.out.flush()?;
        Ok(self.read_line()?.trim().to_string())
    }

    /// Re-asks until the answer is one of `choices`.
    pub fn ask_choice(&mut self, label: &str, choices: &[&str]) -> io::Result<String> {
        loop {
            let answer = self.ask(&format!("{label} [{}]", choices.join("/")))?;
            if choices.contains(&answer.as_str()) {
                return Ok(answer);
            }
            self.say("Please select one of the available options")?;
        }
    }

    /// An empty answer selects `default`.
    pub fn ask_with_default(&mut self, label: &str, default: &str) -> io::Result<String> {
        let answer = self.ask(&format!("{label} ({default})"))?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    pub fn ask_yes_no(&mut self, label: &str) -> io::Result<bool> {
        Ok(self.ask_choice(label, &["yes", "no"])? == "yes")
    }

    /// Re-asks until the answer parses as an integer.
    pub fn ask_i64(&mut self, label: &str, default: i64) -> io::Result<i64> {
        loop {
            let answer = self.ask_with_default(label, &default.to_string())?;
            match answer.parse::<i64>() {
                Ok(n) => return Ok(n),
                Err(_) => self.say("Please enter a valid integer number")?,
            }
        }
    }

    pub fn pause(&mut self, label: &str) -> io::Result<()> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        self.read_line().map(|_| ())
    }
}
