//! The `:` command line.

use std::path::PathBuf;

use pixedit_common::error::PixeditError;
use pixedit_tools::ToolKind;

/// A parsed command-line command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `:help`, `:h`, `:?`
    Help,
    /// `:q`, `:quit`
    Quit,
    /// `:new W H`
    New {
        /// Width in pixels.
        width: usize,
        /// Height in pixels.
        height: usize,
    },
    /// `:open PATH`
    Open(PathBuf),
    /// `:save [PATH]`
    Save(Option<PathBuf>),
    /// `:crop X1 Y1` or `:crop X0 Y0 X1 Y1`
    Crop {
        /// Left edge, inclusive.
        x0: i64,
        /// Top edge, inclusive.
        y0: i64,
        /// Right edge, exclusive.
        x1: i64,
        /// Bottom edge, exclusive.
        y1: i64,
    },
    /// `:tool NAME`
    Tool(ToolKind),
}

/// Why a command line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The command word is not known.
    #[error("Unknown command '{0}'")]
    Unknown(String),

    /// The arguments do not match the command.
    #[error("usage: {0}")]
    Usage(&'static str),

    /// A numeric argument did not parse.
    #[error("not a number: '{0}'")]
    Number(String),

    /// `:tool` named a tool that does not exist.
    #[error("no tool named '{0}'")]
    Tool(String),
}

impl From<CommandError> for PixeditError {
    fn from(err: CommandError) -> Self {
        Self::command(err.to_string())
    }
}

/// One line of help per command, shown by `:help`.
pub const HELP: &[(&str, &str)] = &[
    (":help", "shows keybindings and commands"),
    (":q", "exits the program without saving"),
    (":new <width> <height>", "replaces canvas with a new image"),
    (":open <path>", "opens a PNG image from <path>"),
    (":save [<path>]", "saves the image into <path>"),
    (":crop [<x0> <y0>] <x1> <y1>", "crops image to area between given coordinates"),
    (":tool <name>", "selects a tool by name"),
];

fn number<T: std::str::FromStr>(arg: &str) -> Result<T, CommandError> {
    arg.parse().map_err(|_| CommandError::Number(arg.to_owned()))
}

impl Command {
    /// Parses a command line such as `:crop 0 0 8 8`.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] for unknown commands and bad arguments.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        match (name, args.as_slice()) {
            (":help" | ":h" | ":?", _) => Ok(Self::Help),
            (":q" | ":quit", _) => Ok(Self::Quit),
            (":new", [width, height]) => Ok(Self::New {
                width: number(width)?,
                height: number(height)?,
            }),
            (":new", _) => Err(CommandError::Usage(":new <width> <height>")),
            (":open", [path]) => Ok(Self::Open(PathBuf::from(path))),
            (":open", _) => Err(CommandError::Usage(":open <path>")),
            (":save", []) => Ok(Self::Save(None)),
            (":save", [path]) => Ok(Self::Save(Some(PathBuf::from(path)))),
            (":save", _) => Err(CommandError::Usage(":save [<path>]")),
            (":crop", [x1, y1]) => Ok(Self::Crop {
                x0: 0,
                y0: 0,
                x1: number(x1)?,
                y1: number(y1)?,
            }),
            (":crop", [x0, y0, x1, y1]) => Ok(Self::Crop {
                x0: number(x0)?,
                y0: number(y0)?,
                x1: number(x1)?,
                y1: number(y1)?,
            }),
            (":crop", _) => Err(CommandError::Usage("crop requires exactly 2 or 4 arguments")),
            (":tool", [tool]) => ToolKind::from_name(tool)
                .map(Self::Tool)
                .ok_or_else(|| CommandError::Tool((*tool).to_owned())),
            (":tool", _) => Err(CommandError::Usage(":tool <name>")),
            (other, _) => Err(CommandError::Unknown(other.to_owned())),
        }
    }
}
