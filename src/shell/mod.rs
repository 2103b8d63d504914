//! Shell Module
//!
//! Line-oriented front end over a [`Store`], used by the `miniredis` binary.
//!
//! # Commands
//! - `SET key value` - Store an integer
//! - `GET key` - Read a value
//! - `DEL key` - Delete a key
//! - `EXPIRE key seconds` - Set or replace a key's TTL
//! - `TTL key` - Remaining seconds, -1 without TTL, -2 when missing
//! - `SWEEP` - Reclaim expired keys now
//! - `DBSIZE` - Physically held entries
//! - `STATS` - Counters as JSON
//! - `PING`, `QUIT`

mod command;
mod reader;

use std::fmt;

use tracing::warn;

use crate::cache::{Store, TtlStatus};

pub use command::Command;
pub use reader::spawn_line_reader;

// == Reply ==
/// Result of running one command, rendered with `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Ok,
    Pong,
    Nil,
    Integer(i64),
    Json(String),
    Error(String),
    Bye,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ok => f.write_str("OK"),
            Reply::Pong => f.write_str("PONG"),
            Reply::Nil => f.write_str("(nil)"),
            Reply::Integer(n) => write!(f, "(integer) {}", n),
            Reply::Json(body) => f.write_str(body),
            Reply::Error(msg) => write!(f, "(error) {}", msg),
            Reply::Bye => f.write_str("bye"),
        }
    }
}

// == Execute ==
/// Runs a parsed command against `store`.
pub fn execute(store: &Store, command: Command) -> Reply {
    match command {
        Command::Set { key, value } => {
            store.set(&key, value);
            Reply::Ok
        }
        Command::Get { key } => match store.get(&key) {
            Some(value) => Reply::Integer(value),
            None => Reply::Nil,
        },
        Command::Del { key } => Reply::Integer(i64::from(store.del(&key))),
        Command::Expire { key, seconds } => Reply::Integer(i64::from(store.expire(&key, seconds))),
        Command::Ttl { key } => Reply::Integer(match store.ttl(&key) {
            TtlStatus::Missing => -2,
            TtlStatus::Persistent => -1,
            TtlStatus::Expiring(remaining) => {
                let secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
                i64::try_from(secs).unwrap_or(i64::MAX)
            }
        }),
        Command::Sweep => Reply::Integer(count(store.sweep_expired())),
        Command::DbSize => Reply::Integer(count(store.len())),
        Command::Stats => match serde_json::to_string(&store.stats()) {
            Ok(body) => Reply::Json(body),
            Err(err) => Reply::Error(err.to_string()),
        },
        Command::Ping => Reply::Pong,
        Command::Quit => Reply::Bye,
    }
}

// == Handle Line ==
/// Parses and runs one input line.
///
/// Returns None for a blank line. Parse failures become [`Reply::Error`].
pub fn handle_line(store: &Store, line: &str) -> Option<Reply> {
    match Command::parse(line) {
        Ok(Some(command)) => Some(execute(store, command)),
        Ok(None) => None,
        Err(err) => {
            warn!(line, error = %err, "rejected shell input");
            Some(Reply::Error(err.to_string()))
        }
    }
}

fn count(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
