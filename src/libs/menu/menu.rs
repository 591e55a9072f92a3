use std::io;
use std::io::{BufRead, Write};
use log::debug;

use crate::enum_primitive::FromPrimitive;
use crate::libs::report::report::{ConversionReport, InputKind};

enum_from_primitive! {
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum MenuChoice {
    Exit = 0,
    Decimal,
    Binary,
    Gray,
}
}

impl MenuChoice {
    pub fn input_kind(&self) -> Option<InputKind> {
        match self {
            MenuChoice::Exit => None,
            MenuChoice::Decimal => Some(InputKind::Decimal),
            MenuChoice::Binary => Some(InputKind::Binary),
            MenuChoice::Gray => Some(InputKind::Gray),
        }
    }
}

pub fn parse_choice(text: &str) -> Option<MenuChoice> {
    text.trim().parse::<u8>().ok().and_then(MenuChoice::from_u8)
}

#[derive(Debug, PartialEq, Clone)]
pub enum MenuState {
    AwaitingChoice,
    Displaying(ConversionReport),
    Exiting,
}

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct MenuSettings {
    pub show_misinterpretation: bool,
    pub pause_after_result: bool,
}

/// The interactive loop. Each call to `step` performs one transition; end of input is treated
/// as a request to exit.
pub struct Menu<R: BufRead, W: Write> {
    input: R,
    output: W,
    settings: MenuSettings,
    state: MenuState,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, settings: MenuSettings) -> Self {
        Self {
            input,
            output,
            settings,
            state: MenuState::AwaitingChoice,
        }
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> io::Result<()> {
        while self.state != MenuState::Exiting {
            self.step()?;
        }
        Ok(())
    }

    pub fn step(&mut self) -> io::Result<()> {
        let state = std::mem::replace(&mut self.state, MenuState::Exiting);
        self.state = match state {
            MenuState::AwaitingChoice => self.await_choice()?,
            MenuState::Displaying(report) => self.display(&report)?,
            MenuState::Exiting => MenuState::Exiting,
        };
        debug!("Menu state is now {:?}", self.state);
        Ok(())
    }

    fn await_choice(&mut self) -> io::Result<MenuState> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Code Converter Menu ---")?;
        writeln!(self.output, "1. Enter a decimal value")?;
        writeln!(self.output, "2. Enter a binary string")?;
        writeln!(self.output, "3. Enter a Gray code string")?;
        writeln!(self.output, "0. Exit")?;
        let line = match self.prompt("Please choose an option: ")? {
            None => return Ok(MenuState::Exiting),
            Some(line) => line,
        };
        let kind = match parse_choice(&line) {
            None => {
                writeln!(self.output, "Unrecognised choice '{}'. Please try again.", line.trim())?;
                return Ok(MenuState::AwaitingChoice);
            }
            Some(choice) => match choice.input_kind() {
                None => {
                    writeln!(self.output, "Exiting. Goodbye!")?;
                    return Ok(MenuState::Exiting);
                }
                Some(kind) => kind,
            },
        };
        let value = match self.prompt(&format!("Enter a {} value: ", kind))? {
            None => return Ok(MenuState::Exiting),
            Some(value) => value,
        };
        match ConversionReport::from_input(kind, &value) {
            Ok(report) => Ok(MenuState::Displaying(report)),
            Err(err) => {
                writeln!(self.output, "Error: {}", err)?;
                Ok(MenuState::AwaitingChoice)
            }
        }
    }

    fn display(&mut self, report: &ConversionReport) -> io::Result<MenuState> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Conversion Results ---")?;
        for line in report.lines(self.settings.show_misinterpretation) {
            writeln!(self.output, "{}", line)?;
        }
        if self.settings.pause_after_result {
            writeln!(self.output)?;
            if self.prompt("Press Enter to continue...")?.is_none() {
                return Ok(MenuState::Exiting);
            }
        }
        Ok(MenuState::AwaitingChoice)
    }

    // None at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        writeln!(self.output)?;
        Ok(Some(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_owned()))
    }
}

#[cfg(test)]
#[path = "./menu_spec.rs"]
mod menu_spec;
