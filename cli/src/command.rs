//! Line commands for the interactive page.

use std::str::FromStr;

use posts_core::{Field, Outgoing, Page};

pub const HELP: &str = "\
commands:
  refresh                 refetch all posts (alias: list)
  search <text>           search posts
  clear                   clear the search box and show all posts
  all                     show all posts, keep the search text
  set <field> <value>     edit the form; fields: profile, desc, exp, techs
  submit                  create the post
  show                    print the page
  help                    this text
  quit                    exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Search(String),
    Clear,
    All,
    Set(Field, String),
    Submit,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match word {
            "refresh" | "list" => Ok(Command::Refresh),
            "search" => Ok(Command::Search(rest.to_string())),
            "clear" => Ok(Command::Clear),
            "all" => Ok(Command::All),
            "set" => {
                let rest = rest.trim_start();
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err("usage: set <field> <value>".to_string());
                }
                Ok(Command::Set(field.parse()?, value.trim_start().to_string()))
            }
            "submit" => Ok(Command::Submit),
            "" | "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("unknown command: {other} (try `help`)")),
        }
    }
}

/// Apply a command to the page. Returns the request it issued, if any.
pub fn apply(page: &mut Page, command: Command) -> Option<Outgoing> {
    match command {
        Command::Refresh => page.refresh(),
        Command::Search(text) => {
            page.set_query(text);
            page.submit_search()
        }
        Command::Clear => {
            page.clear_search();
            None
        }
        Command::All => {
            page.show_all();
            None
        }
        Command::Set(field, value) => {
            page.set_field(field, value);
            None
        }
        Command::Submit => page.submit_post(),
        Command::Show | Command::Help | Command::Quit => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posts_core::{Origin, PostsClient};

    #[test]
    fn parses_commands() {
        assert_eq!("refresh".parse::<Command>(), Ok(Command::Refresh));
        assert_eq!("list".parse::<Command>(), Ok(Command::Refresh));
        assert_eq!(
            "search spring boot".parse::<Command>(),
            Ok(Command::Search("spring boot".to_string()))
        );
        assert_eq!("clear".parse::<Command>(), Ok(Command::Clear));
        assert_eq!("  ".parse::<Command>(), Ok(Command::Show));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn set_keeps_value_spacing() {
        assert_eq!(
            "set techs rust, tokio ,".parse::<Command>(),
            Ok(Command::Set(Field::Techs, "rust, tokio ,".to_string()))
        );
        assert_eq!(
            "set desc".parse::<Command>(),
            Ok(Command::Set(Field::Desc, String::new()))
        );
    }

    #[test]
    fn set_rejects_unknown_field() {
        assert!("set id 4".parse::<Command>().is_err());
        assert!("set".parse::<Command>().is_err());
    }

    #[test]
    fn unknown_command_is_an_error() {
        assert!("delete 1".parse::<Command>().is_err());
    }

    #[test]
    fn blank_search_issues_nothing() {
        let mut page = Page::new(PostsClient::new("http://localhost:3001"));
        assert!(apply(&mut page, Command::Search(String::new())).is_none());
    }

    #[test]
    fn submit_issues_create() {
        let mut page = Page::new(PostsClient::new("http://localhost:3001"));
        apply(&mut page, Command::Set(Field::Profile, "p".to_string()));
        apply(&mut page, Command::Set(Field::Desc, "d".to_string()));
        let outgoing = apply(&mut page, Command::Submit).unwrap();
        assert_eq!(outgoing.ticket.origin(), Origin::Create);
    }
}
