// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Errors used by the [`Board`][crate::board::Board] and the coordinate parser.

use std::fmt::{self, Debug};

use thiserror::Error;

/// Reason why a coordinate or ship could not be accepted.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Coordinate text was not 2 or 3 characters long.
    #[error("coordinate text has the wrong length")]
    BadLength,
    /// The row letter was not in `A`-`J`.
    #[error("row letter is out of range")]
    BadRow,
    /// The column was not a number.
    #[error("column is not a number")]
    BadColumn,
    /// The column was a number outside `1`-`10`.
    #[error("column is out of range")]
    ColumnOutOfRange,
    /// A placement request was not two coordinates separated by a space.
    #[error("placement request is malformed")]
    MalformedRequest,
    /// The endpoints differ in both row and column.
    #[error("ship endpoints are diagonal")]
    Diagonal,
    /// The endpoints span a different number of cells than the ship's length.
    #[error("ship endpoints do not match the ship's length")]
    WrongLength,
    /// The ship overlaps or touches a ship that was already placed.
    #[error("ship overlaps or touches another ship")]
    Touching,
    /// No free position could be found for a randomly placed ship.
    #[error("no room left for the ship")]
    NoRoom,
}

/// Error produced when a coordinate, placement request or ship placement is rejected.
///
/// Every placement error is recoverable: the caller reports it and asks for the same item
/// again. `Display` gives the message meant for the player, `Debug` gives the detail
/// meant for logs.
#[derive(Error, Clone, Eq, PartialEq)]
#[error("{message}")]
pub struct PlacementError {
    #[source]
    reason: CannotPlaceReason,
    message: String,
    detail: String,
}

impl PlacementError {
    /// Construct a placement error from a reason, a player-facing message and a debug
    /// detail.
    pub(crate) fn new(
        reason: CannotPlaceReason,
        message: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            reason,
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Get the reason the placement was rejected.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Message suitable for showing to the player.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Detailed description of the failure, for logs.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl Debug for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PlacementError({:?}): {}", self.reason, self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_debug_differ() {
        let err = PlacementError::new(
            CannotPlaceReason::BadRow,
            "Row must be a letter from A to J.",
            "row byte b'Z' outside A..=J in \"Z4\"",
        );
        assert_eq!(err.to_string(), "Row must be a letter from A to J.");
        assert_eq!(
            format!("{:?}", err),
            "PlacementError(BadRow): row byte b'Z' outside A..=J in \"Z4\""
        );
        assert_eq!(err.reason(), CannotPlaceReason::BadRow);
    }
}
