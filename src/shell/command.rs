//! Shell Commands
//!
//! Parses one input line into a [`Command`].

use crate::error::{Result, ShellError};

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { key: String, value: i64 },
    Get { key: String },
    Del { key: String },
    Expire { key: String, seconds: i64 },
    Ttl { key: String },
    Sweep,
    DbSize,
    Stats,
    Ping,
    Quit,
}

impl Command {
    /// Parses a whitespace-separated line.
    ///
    /// Verbs are case-insensitive; keys are taken verbatim. Returns `Ok(None)`
    /// for a blank line.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = parts.collect();

        let command = match verb.to_ascii_lowercase().as_str() {
            "set" => {
                let [key, value] = exact::<2>("set", &args)?;
                Command::Set {
                    key: key.to_owned(),
                    value: parse_int(value)?,
                }
            }
            "get" => {
                let [key] = exact::<1>("get", &args)?;
                Command::Get { key: key.to_owned() }
            }
            "del" => {
                let [key] = exact::<1>("del", &args)?;
                Command::Del { key: key.to_owned() }
            }
            "expire" => {
                let [key, seconds] = exact::<2>("expire", &args)?;
                Command::Expire {
                    key: key.to_owned(),
                    seconds: parse_int(seconds)?,
                }
            }
            "ttl" => {
                let [key] = exact::<1>("ttl", &args)?;
                Command::Ttl { key: key.to_owned() }
            }
            "sweep" => {
                exact::<0>("sweep", &args)?;
                Command::Sweep
            }
            "dbsize" => {
                exact::<0>("dbsize", &args)?;
                Command::DbSize
            }
            "stats" => {
                exact::<0>("stats", &args)?;
                Command::Stats
            }
            "ping" => {
                exact::<0>("ping", &args)?;
                Command::Ping
            }
            "quit" | "exit" => Command::Quit,
            _ => return Err(ShellError::UnknownCommand(verb.to_owned())),
        };

        Ok(Some(command))
    }
}

fn exact<'a, const N: usize>(command: &'static str, args: &[&'a str]) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| ShellError::WrongArity {
        command,
        expected: N,
    })
}

fn parse_int(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| ShellError::InvalidInteger(raw.to_owned()))
}
