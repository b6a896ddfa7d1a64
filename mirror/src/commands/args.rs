//! Command-line pre-filtering.
//!
//! The flag surface is lenient: unknown flags and stray positional tokens
//! are dropped before clap sees them, so only a missing action is an error.

use std::ffi::OsString;

use clap::{Arg, Command, CommandFactory};
use tracing::debug;

use super::Cli;

/// Keep the program name, every known flag and the values of flags that
/// take one; drop everything else.
pub(crate) fn known_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let command = Cli::command();
    let mut args = args.into_iter();
    let mut kept: Vec<OsString> = args.next().into_iter().collect();
    let mut pending_value = false;

    for arg in args {
        if pending_value {
            pending_value = false;
            kept.push(arg);
            continue;
        }

        let Some(token) = arg.to_str() else {
            debug!(arg = ?arg, "ignoring non UTF-8 argument");
            continue;
        };

        match flag_takes_value(&command, token) {
            Some(takes_value) => {
                pending_value = takes_value && !token.contains('=');
                kept.push(arg);
            }
            None => debug!(arg = token, "ignoring unknown argument"),
        }
    }

    kept
}

/// `Some(takes_value)` when `token` names a known flag, `None` otherwise.
fn flag_takes_value(command: &Command, token: &str) -> Option<bool> {
    if let Some(long) = token.strip_prefix("--") {
        let name = long.split_once('=').map_or(long, |(name, _)| name);
        if matches!(name, "help" | "version") {
            return Some(false);
        }
        return command
            .get_arguments()
            .find(|arg| arg.get_long() == Some(name))
            .map(takes_value);
    }

    let short = token.strip_prefix('-')?;
    let mut chars = short.chars();
    let (Some(flag), None) = (chars.next(), chars.next()) else {
        return None;
    };
    if matches!(flag, 'h' | 'V') {
        return Some(false);
    }
    command
        .get_arguments()
        .find(|arg| arg.get_short() == Some(flag))
        .map(takes_value)
}

fn takes_value(arg: &Arg) -> bool {
    arg.get_action().takes_values()
}
