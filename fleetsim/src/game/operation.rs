use std::fmt;

use crate::{board::Coordinate, game::Action};

/// A coordinate plus the actions to apply, in order, to whichever ship occupies it.
///
/// The origin is only a lookup key: it names the cell whose occupant the operation is
/// directed at when the operation starts, and it does not follow the ship afterwards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Operation {
    origin: Coordinate,
    actions: Vec<Action>,
}

impl Operation {
    /// Create an operation directed at `origin`.
    pub fn new(origin: Coordinate, actions: Vec<Action>) -> Self {
        Self { origin, actions }
    }

    /// An operation that fires a single shot at `origin`.
    pub fn shoot(origin: Coordinate) -> Self {
        Self::new(origin, vec![Action::Shoot])
    }

    /// The cell this operation is directed at.
    pub fn origin(&self) -> &Coordinate {
        &self.origin
    }

    /// The actions of this operation, in execution order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

impl fmt::Display for Operation {
    /// Formats the operation the way it is written in a scenario.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.origin)?;
        let tokens: String = self.actions.iter().filter_map(|a| a.token()).collect();
        if !tokens.is_empty() {
            write!(f, " {}", tokens)?;
        }
        Ok(())
    }
}
