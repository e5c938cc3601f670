// src/cli/shell.rs
//
// Interactive command loop. Commands are a closed set; the loop itself is a
// small state machine so each step is observable in tests.

use std::io::{BufRead, Write};
use thiserror::Error;

use super::output::{
    error_line, format_command_list, format_help, format_json, format_spectrogram,
};
use crate::core::StateAnalyzer;
use crate::error::{SvaError, SvaResult};

const PROMPT: &str = "> ";

/// Everything the shell understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Nibble dump of a state; asks for the number when omitted
    ShowState(Option<usize>),
    /// Spectrogram of a bit; asks for the number when omitted
    ShowSpectrum(Option<usize>),
    ShowTable,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

impl Command {
    /// Parse one input line; `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let name = match words.next() {
            Some(name) => name,
            None => return Ok(None),
        };
        let mut arg = || words.next().map(parse_number).transpose();

        let command = match name {
            "s" | "state" => Command::ShowState(arg()?),
            "f" | "fft" => Command::ShowSpectrum(arg()?),
            "t" | "table" => Command::ShowTable,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_number(word: &str) -> Result<usize, CommandError> {
    word.trim()
        .parse()
        .map_err(|_| CommandError::InvalidNumber(word.trim().to_string()))
}

/// Where the loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Prompting,
    Executing(Command),
    Exiting,
}

/// Line-oriented shell over arbitrary reader/writers
pub struct Shell<R, W, E> {
    analyzer: StateAnalyzer,
    input: R,
    out: W,
    err: E,
    json: bool,
    state: ShellState,
}

impl<R: BufRead, W: Write, E: Write> Shell<R, W, E> {
    pub fn new(analyzer: StateAnalyzer, input: R, out: W, err: E) -> Self {
        Self {
            analyzer,
            input,
            out,
            err,
            json: false,
            state: ShellState::Prompting,
        }
    }

    /// Print spectrograms as JSON instead of charts
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self) -> SvaResult<()> {
        while self.state != ShellState::Exiting {
            self.step()?;
        }
        Ok(())
    }

    /// Advance the state machine by one transition
    pub fn step(&mut self) -> SvaResult<ShellState> {
        self.state = match self.state {
            ShellState::Prompting => self.prompt()?,
            ShellState::Executing(command) => self.execute(command)?,
            ShellState::Exiting => ShellState::Exiting,
        };
        Ok(self.state)
    }

    /// Parse and execute a single command line without prompting
    pub fn execute_line(&mut self, line: &str) -> SvaResult<ShellState> {
        self.state = match Command::parse(line) {
            Ok(Some(command)) => self.execute(command)?,
            Ok(None) => ShellState::Prompting,
            Err(e) => self.reject(e)?,
        };
        Ok(self.state)
    }

    fn prompt(&mut self) -> SvaResult<ShellState> {
        let line = match self.ask(PROMPT)? {
            Some(line) => line,
            None => return Ok(ShellState::Exiting),
        };

        match Command::parse(&line) {
            Ok(Some(command)) => Ok(ShellState::Executing(command)),
            Ok(None) => Ok(ShellState::Prompting),
            Err(e) => self.reject(e),
        }
    }

    fn reject(&mut self, error: CommandError) -> SvaResult<ShellState> {
        writeln!(self.err, "{}", error_line(&error))?;
        if let CommandError::Unknown(_) = error {
            writeln!(self.out, "{}", format_command_list())?;
        }
        Ok(ShellState::Prompting)
    }

    fn execute(&mut self, command: Command) -> SvaResult<ShellState> {
        log::debug!("executing {:?}", command);

        let result = match command {
            Command::ShowState(index) => self.show_state(index),
            Command::ShowSpectrum(bit) => self.show_spectrum(bit),
            Command::ShowTable => {
                let lines = self.analyzer.table_lines();
                self.write_lines(&lines)
            }
            Command::Help => {
                let lines = format_help(self.analyzer.config());
                self.write_lines(&lines)
            }
            Command::Quit => return Ok(ShellState::Exiting),
        };

        match result {
            Ok(next) => Ok(next),
            Err(SvaError::Io(e)) => Err(SvaError::Io(e)),
            Err(e) => {
                writeln!(self.err, "{}", error_line(&e))?;
                Ok(ShellState::Prompting)
            }
        }
    }

    fn show_state(&mut self, index: Option<usize>) -> SvaResult<ShellState> {
        let last = self.analyzer.training().state_count().saturating_sub(1);
        let index = match self.resolve(index, &format!("state (0-{})? ", last))? {
            Ok(Some(index)) => index,
            Ok(None) => return Ok(ShellState::Exiting),
            Err(e) => return self.reject(e),
        };

        let lines = self.analyzer.state_lines(index)?;
        self.write_lines(&lines)
    }

    fn show_spectrum(&mut self, bit: Option<usize>) -> SvaResult<ShellState> {
        let last = self.analyzer.training().vector_width.saturating_sub(1);
        let bit = match self.resolve(bit, &format!("bit (0-{})? ", last))? {
            Ok(Some(bit)) => bit,
            Ok(None) => return Ok(ShellState::Exiting),
            Err(e) => return self.reject(e),
        };

        let chart = self.analyzer.spectrogram(bit)?;
        let text = if self.json {
            format_json(&chart)? + "\n"
        } else {
            format_spectrogram(&chart)
        };
        write!(self.out, "{}", text)?;
        Ok(ShellState::Prompting)
    }

    /// Use the given argument, or ask for one. `Ok(None)` means input ended.
    fn resolve(
        &mut self,
        given: Option<usize>,
        question: &str,
    ) -> SvaResult<Result<Option<usize>, CommandError>> {
        if let Some(n) = given {
            return Ok(Ok(Some(n)));
        }
        Ok(match self.ask(question)? {
            Some(answer) => parse_number(&answer).map(Some),
            None => Ok(None),
        })
    }

    /// Print `question` and read one line; `None` at end of input.
    fn ask(&mut self, question: &str) -> SvaResult<Option<String>> {
        write!(self.out, "{}", question)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn write_lines(&mut self, lines: &[String]) -> SvaResult<ShellState> {
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        Ok(ShellState::Prompting)
    }

    /// Hand back the writers, e.g. to inspect captured output
    pub fn into_parts(self) -> (StateAnalyzer, W, E) {
        (self.analyzer, self.out, self.err)
    }
}
