//! Line commands understood by a menu session.

use engine::NewDish;

pub(crate) const USAGE: &str = "\
Commands:
  add <name> | <description> | <course> | <price>
  remove <name>
  remove-at <index>
  list
  filter [All|Starter|Main|Dessert] [max-price]
  sort name|price
  top
  count
  manage        open a draft menu
  save          replace the menu with the draft
  discard       drop the draft
  help
  quit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Add(NewDish),
    Remove(String),
    RemoveAt(i64),
    List,
    Filter { course: String, max_price: String },
    Sort(String),
    Top,
    Count,
    Manage,
    Save,
    Discard,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command \"{0}\", type help for the list")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("add needs 4 fields separated by |, got {0}")]
    AddFields(usize),
    #[error("\"{0}\" is not a position")]
    InvalidIndex(String),
}

/// Parses one input line.
///
/// The first word selects the command. `add` splits the rest on `|` and keeps
/// the fields raw; validating them is up to the catalog.
pub(crate) fn parse_command(line: &str) -> Result<Command, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let (word, rest) = trimmed
        .split_once(char::is_whitespace)
        .map_or((trimmed, ""), |(word, rest)| (word, rest.trim()));

    match word {
        "add" => {
            let fields: Vec<&str> = rest.split('|').collect();
            let [name, description, course, price] = fields.as_slice() else {
                return Err(ParseError::AddFields(fields.len()));
            };
            Ok(Command::Add(NewDish::new(*name, *description, *course, *price)))
        }
        "remove" => {
            if rest.is_empty() {
                return Err(ParseError::Usage("remove <name>"));
            }
            Ok(Command::Remove(rest.to_string()))
        }
        "remove-at" => {
            if rest.is_empty() {
                return Err(ParseError::Usage("remove-at <index>"));
            }
            rest.parse()
                .map(Command::RemoveAt)
                .map_err(|_| ParseError::InvalidIndex(rest.to_string()))
        }
        "filter" => {
            let mut parts = rest.split_whitespace();
            let course = parts.next().unwrap_or_default().to_string();
            let max_price = parts.next().unwrap_or_default().to_string();
            if parts.next().is_some() {
                return Err(ParseError::Usage("filter [course] [max-price]"));
            }
            Ok(Command::Filter { course, max_price })
        }
        "sort" => {
            if rest.is_empty() {
                return Err(ParseError::Usage("sort name|price"));
            }
            Ok(Command::Sort(rest.to_string()))
        }
        "list" => Ok(Command::List),
        "top" => Ok(Command::Top),
        "count" => Ok(Command::Count),
        "manage" => Ok(Command::Manage),
        "save" => Ok(Command::Save),
        "discard" => Ok(Command::Discard),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}
