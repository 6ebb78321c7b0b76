use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use thiserror::Error;

use crate::config::{check_percent, check_period};
use crate::engine::bank::WaveformBank;
use crate::engine::error::EngineError;
use crate::types::message::{ConfigMessage, ParamKind};
use crate::types::waveform::Waveform;

const HELP: &str = "\
commands:
  amp <wave> <0-100>        set amplitude in percent
  period <wave> <1-60000>   set period in milliseconds
  duty pulse <0-100>        set pulse duty cycle in percent
  toggle <wave>             turn output on or off
  off <wave>                force output off
  get <wave> <param>        read amplitude | period | duty | enable
  status                    show every engine
  help                      show this text
  quit                      exit
waves: pulse (pwm), sawtooth (saw), triangle (tri), sine";

/// A validated console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Amplitude { waveform: Waveform, percent: u32 },
    Period { waveform: Waveform, period_ms: u32 },
    DutyCycle { waveform: Waveform, percent: u32 },
    Toggle(Waveform),
    Off(Waveform),
    Get { waveform: Waveform, param: ParamKind },
    Status,
    Help,
    Quit,
}

/// Rejected console input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("unknown waveform '{0}'")]
    UnknownWaveform(String),
    #[error("unknown parameter '{0}'")]
    UnknownParam(String),
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
    #[error("{0}")]
    OutOfRange(String),
    #[error("{0} has no duty cycle")]
    NoDutyCycle(Waveform),
}

impl Command {
    /// Parse one input line, enforcing the accepted value ranges
    /// Returns `Ok(None)` for blank lines
    pub fn parse(line: &str) -> Result<Option<Self>, ConsoleError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };

        let command = match name.to_lowercase().as_str() {
            "amp" | "amplitude" => {
                let waveform = waveform_arg(words.next())?;
                let percent = number_arg(words.next(), "percent")?;
                check_percent("Amplitude", percent).map_err(out_of_range)?;
                Command::Amplitude { waveform, percent }
            }
            "period" => {
                let waveform = waveform_arg(words.next())?;
                let period_ms = number_arg(words.next(), "period")?;
                check_period(period_ms).map_err(out_of_range)?;
                Command::Period { waveform, period_ms }
            }
            "duty" => {
                let waveform = waveform_arg(words.next())?;
                if !waveform.has_duty_cycle() {
                    return Err(ConsoleError::NoDutyCycle(waveform));
                }
                let percent = number_arg(words.next(), "percent")?;
                check_percent("Duty cycle", percent).map_err(out_of_range)?;
                Command::DutyCycle { waveform, percent }
            }
            "toggle" | "on" => Command::Toggle(waveform_arg(words.next())?),
            "off" => Command::Off(waveform_arg(words.next())?),
            "get" => {
                let waveform = waveform_arg(words.next())?;
                let param = words
                    .next()
                    .ok_or(ConsoleError::MissingArgument("parameter"))?
                    .parse::<ParamKind>()
                    .map_err(ConsoleError::UnknownParam)?;
                Command::Get { waveform, param }
            }
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(ConsoleError::UnknownCommand(other.to_string())),
        };

        if let Some(extra) = words.next() {
            return Err(ConsoleError::UnexpectedArgument(extra.to_string()));
        }
        Ok(Some(command))
    }
}

fn waveform_arg(word: Option<&str>) -> Result<Waveform, ConsoleError> {
    word.ok_or(ConsoleError::MissingArgument("waveform"))?
        .parse()
        .map_err(ConsoleError::UnknownWaveform)
}

fn number_arg(word: Option<&str>, what: &'static str) -> Result<u32, ConsoleError> {
    let word = word.ok_or(ConsoleError::MissingArgument(what))?;
    word.parse()
        .map_err(|_| ConsoleError::InvalidNumber(word.to_string()))
}

fn out_of_range(err: anyhow::Error) -> ConsoleError {
    ConsoleError::OutOfRange(err.to_string())
}

/// Read commands line by line until `quit` or end of input
pub fn run(bank: &WaveformBank, input: impl BufRead, mut output: impl Write) -> Result<()> {
    writeln!(output, "Type 'help' for commands")?;

    for line in input.lines() {
        let line = line.context("Failed to read console input")?;
        match Command::parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => {
                if let Err(err) = execute(bank, command, &mut output)? {
                    writeln!(output, "error: {}", err)?;
                }
            }
            Err(err) => writeln!(output, "error: {}", err)?,
        }
        output.flush()?;
    }

    Ok(())
}

/// Run one command against the bank
/// Engine failures are returned for display; only output errors abort
fn execute(
    bank: &WaveformBank,
    command: Command,
    output: &mut impl Write,
) -> Result<Result<(), EngineError>> {
    let result = match command {
        Command::Amplitude { waveform, percent } => {
            bank.handle(waveform).send_config(ConfigMessage::Amplitude(percent))
        }
        Command::Period { waveform, period_ms } => {
            bank.handle(waveform).send_config(ConfigMessage::Period(period_ms))
        }
        Command::DutyCycle { waveform, percent } => {
            bank.handle(waveform).send_config(ConfigMessage::DutyCycle(percent))
        }
        Command::Toggle(waveform) => bank.handle(waveform).send_config(ConfigMessage::toggle()),
        Command::Off(waveform) => bank.handle(waveform).send_config(ConfigMessage::disable()),
        Command::Get { waveform, param } => match bank.handle(waveform).query_param(param) {
            Ok(value) => {
                writeln!(output, "{} {} = {}", waveform, param, value)?;
                Ok(())
            }
            Err(err) => Err(err),
        },
        Command::Status => {
            for waveform in Waveform::ALL {
                match status_line(bank, waveform) {
                    Ok(line) => writeln!(output, "{}", line)?,
                    Err(err) => writeln!(output, "{:<9} error: {}", waveform.name(), err)?,
                }
            }
            Ok(())
        }
        Command::Help => {
            writeln!(output, "{}", HELP)?;
            Ok(())
        }
        Command::Quit => Ok(()),
    };
    Ok(result)
}

fn status_line(bank: &WaveformBank, waveform: Waveform) -> Result<String, EngineError> {
    let handle = bank.handle(waveform);
    let running = handle.query_param(ParamKind::Enable)? != 0;
    let amplitude = handle.query_param(ParamKind::Amplitude)?;
    let period_ms = handle.query_param(ParamKind::Period)?;

    let mut line = format!(
        "{:<9} {:<3} amplitude={:>3}% period={:>5} ms",
        waveform.name(),
        if running { "on" } else { "off" },
        amplitude,
        period_ms
    );
    if waveform.has_duty_cycle() {
        let duty = handle.query_param(ParamKind::DutyCycle)?;
        line.push_str(&format!(" duty={:>3}%", duty));
    }
    let port = bank.port(waveform);
    line.push_str(&format!(" sample={:#06x} writes={}", port.value(), port.writes()));
    Ok(line)
}
