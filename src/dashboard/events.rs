use crate::error::{DashboardError, Result};
use crate::utils::dates::parse_date;
use chrono::NaiveDate;
use std::str::FromStr;

pub const HELP_TEXT: &str = "\
Commands:
  select <city>     add a city to the comparison (at most 4)
  deselect <city>   remove a city from the comparison
  clear             remove every selected city
  start <date>      set the start date (YYYY-MM-DD)
  end <date>        set the end date (YYYY-MM-DD)
  table             expand or collapse the complete dataset
  show              render the page again
  help              show this help
  quit              leave the dashboard";

/// A single user interaction with the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    SelectCity(String),
    DeselectCity(String),
    ClearCities,
    SetStartDate(NaiveDate),
    SetEndDate(NaiveDate),
    ToggleTable,
    Refresh,
    Help,
    Quit,
}

impl FromStr for InputEvent {
    type Err = DashboardError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        let require_argument = |what: &str| {
            if argument.is_empty() {
                Err(DashboardError::InvalidCommand(format!(
                    "'{}' needs {}",
                    command, what
                )))
            } else {
                Ok(argument)
            }
        };

        match command.to_ascii_lowercase().as_str() {
            "select" | "add" => Ok(InputEvent::SelectCity(require_argument("a city")?.to_string())),
            "deselect" | "remove" => Ok(InputEvent::DeselectCity(
                require_argument("a city")?.to_string(),
            )),
            "clear" => Ok(InputEvent::ClearCities),
            "start" => Ok(InputEvent::SetStartDate(parse_date(require_argument("a date")?)?)),
            "end" => Ok(InputEvent::SetEndDate(parse_date(require_argument("a date")?)?)),
            "table" => Ok(InputEvent::ToggleTable),
            "" | "show" | "refresh" => Ok(InputEvent::Refresh),
            "help" | "?" => Ok(InputEvent::Help),
            "quit" | "exit" | "q" => Ok(InputEvent::Quit),
            other => Err(DashboardError::InvalidCommand(format!(
                "unknown command '{}' (type 'help')",
                other
            ))),
        }
    }
}
