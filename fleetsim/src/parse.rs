//! Reads the line-oriented scenario format.
//!
//! ```text
//! 10
//! (1, 2, N) (3, 4, S)
//! (1, 2)
//! (3, 4) MRL
//! ```
//!
//! The first line is the board size. The second lists ships as `(x, y, heading)`. Every
//! following line is an operation: a coordinate, optionally followed by a string of
//! `M`, `L` and `R` tokens. An operation without tokens is a single shot.
//!
//! Parsing only checks syntax. Bounds, duplicate starts and the sign of the board size
//! are checked when the scenario is turned into a [`GameModel`][crate::GameModel].
use std::{fmt, str::FromStr};

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::{game::Action, ships::Heading};

/// Matches a single ship descriptor anywhere in the ships line.
static SHIP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)\(\s*
        (?P<x>[0-9]+)\s*,\s*
        (?P<y>[0-9]+)\s*,\s*
        (?P<heading>\w+)\s*\)",
    )
    .unwrap()
});

/// Matches a whole operation line.
static OPERATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)\(\s*
        (?P<x>[0-9]+)\s*,\s*
        (?P<y>[0-9]+)\s*\)\s*
        (?P<tokens>\S+)?$",
    )
    .unwrap()
});

/// A ship as written in the input: starting position and heading.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShipSpec {
    pub x: usize,
    pub y: usize,
    pub heading: Heading,
}

/// An operation as written in the input: a position and its actions.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OperationSpec {
    pub x: usize,
    pub y: usize,
    pub actions: Vec<Action>,
}

/// Structured content of a scenario, before any semantic validation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Scenario {
    /// Side length of the board, as written. May be zero or negative.
    pub board_size: i64,
    /// Ships in input order.
    pub ships: Vec<ShipSpec>,
    /// Operations in input order.
    pub operations: Vec<OperationSpec>,
}

/// Reason why a line could not be parsed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ParseErrorReason {
    /// The first line is missing or is not an integer.
    #[error("expected the board size")]
    InvalidBoardSize,
    /// A number is too large to be a coordinate on any board.
    #[error("coordinate is out of bounds")]
    OutOfBounds,
    /// The ships line contains something other than ship descriptors.
    #[error("expected ships written as (x, y, heading)")]
    MalformedShip,
    /// A ship's heading is not one of `N`, `E`, `S` or `W`.
    #[error("unknown heading")]
    UnknownHeading,
    /// The line is not `(x, y)` optionally followed by tokens.
    #[error("expected an operation written as (x, y) or (x, y) TOKENS")]
    MalformedOperation,
    /// A token other than `M`, `L` or `R`.
    #[error("unknown action token {0:?}")]
    UnknownActionToken(char),
}

/// Error returned when the input could not be parsed. Identifies the line.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("line {line}: {reason}: {text:?}")]
pub struct ParseError {
    /// Line number, starting from 1.
    line: usize,
    /// The offending text.
    text: String,
    #[source]
    reason: ParseErrorReason,
}

impl ParseError {
    fn new(reason: ParseErrorReason, line: usize, text: &str) -> Self {
        Self {
            line,
            text: text.to_owned(),
            reason,
        }
    }

    /// Get the reason parsing failed.
    pub fn reason(&self) -> ParseErrorReason {
        self.reason
    }

    /// Line number of the failure, starting from 1.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The text that could not be parsed.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Parse a whole scenario.
pub fn parse_scenario(input: &str) -> Result<Scenario, ParseError> {
    let mut lines = input.lines().enumerate().map(|(i, line)| (i + 1, line));

    let board_size = match lines.next() {
        Some((number, line)) => parse_board_size(number, line)?,
        None => return Err(ParseError::new(ParseErrorReason::InvalidBoardSize, 1, "")),
    };
    let ships = match lines.next() {
        Some((number, line)) => parse_ships(number, line)?,
        None => Vec::new(),
    };
    let mut operations = Vec::new();
    for (number, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        operations.push(parse_operation(number, line)?);
    }
    trace!(
        "parsed scenario: size {}, {} ships, {} operations",
        board_size,
        ships.len(),
        operations.len()
    );
    Ok(Scenario {
        board_size,
        ships,
        operations,
    })
}

fn parse_board_size(number: usize, line: &str) -> Result<i64, ParseError> {
    line.trim()
        .parse()
        .map_err(|_| ParseError::new(ParseErrorReason::InvalidBoardSize, number, line))
}

fn parse_coord(number: usize, text: &str) -> Result<usize, ParseError> {
    // The pattern only admits digits, so the only failure is overflow.
    text.parse()
        .map_err(|_| ParseError::new(ParseErrorReason::OutOfBounds, number, text))
}

/// Parse the ships line. Every non-whitespace character must belong to a descriptor.
fn parse_ships(number: usize, line: &str) -> Result<Vec<ShipSpec>, ParseError> {
    let mut ships = Vec::new();
    let mut last = 0;
    for captures in SHIP.captures_iter(line) {
        let whole = captures.get(0).unwrap();
        let gap = &line[last..whole.start()];
        if !gap.trim().is_empty() {
            return Err(ParseError::new(ParseErrorReason::MalformedShip, number, gap));
        }
        last = whole.end();

        let heading_text = captures.name("heading").unwrap().as_str();
        let heading = Heading::from_letter(heading_text).ok_or_else(|| {
            ParseError::new(ParseErrorReason::UnknownHeading, number, heading_text)
        })?;
        ships.push(ShipSpec {
            x: parse_coord(number, captures.name("x").unwrap().as_str())?,
            y: parse_coord(number, captures.name("y").unwrap().as_str())?,
            heading,
        });
    }
    let rest = &line[last..];
    if !rest.trim().is_empty() {
        return Err(ParseError::new(ParseErrorReason::MalformedShip, number, rest));
    }
    Ok(ships)
}

/// Parse one operation line.
fn parse_operation(number: usize, line: &str) -> Result<OperationSpec, ParseError> {
    let line = line.trim();
    let captures = OPERATION
        .captures(line)
        .ok_or_else(|| ParseError::new(ParseErrorReason::MalformedOperation, number, line))?;
    let tokens = captures.name("tokens").map(|m| m.as_str());
    let actions = Action::parse_tokens(tokens).map_err(|token| {
        ParseError::new(ParseErrorReason::UnknownActionToken(token), number, line)
    })?;
    Ok(OperationSpec {
        x: parse_coord(number, captures.name("x").unwrap().as_str())?,
        y: parse_coord(number, captures.name("y").unwrap().as_str())?,
        actions,
    })
}

impl FromStr for Scenario {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scenario(s)
    }
}

impl fmt::Display for ShipSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.heading)
    }
}

impl fmt::Display for OperationSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)?;
        let tokens: String = self.actions.iter().filter_map(|a| a.token()).collect();
        if !tokens.is_empty() {
            write!(f, " {}", tokens)?;
        }
        Ok(())
    }
}

impl fmt::Display for Scenario {
    /// Writes the scenario back out in the input format.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.board_size)?;
        let mut ships = self.ships.iter();
        if let Some(first) = ships.next() {
            write!(f, "{}", first)?;
            for ship in ships {
                write!(f, " {}", ship)?;
            }
        }
        writeln!(f)?;
        for op in &self.operations {
            writeln!(f, "{}", op)?;
        }
        Ok(())
    }
}
