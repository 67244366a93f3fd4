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
use std::fmt;

/// The classes of ship each player places, in the order they are placed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipClass {
    /// Carrier: length 5.
    Carrier,
    /// Battleship: length 4.
    Battleship,
    /// Submarine: length 3.
    Submarine,
    /// Cruiser: length 3.
    Cruiser,
    /// Destroyer: length 2.
    Destroyer,
}

impl ShipClass {
    /// Every class, in placement order.
    pub const ALL: &'static [ShipClass] = &[
        ShipClass::Carrier,
        ShipClass::Battleship,
        ShipClass::Submarine,
        ShipClass::Cruiser,
        ShipClass::Destroyer,
    ];

    /// Get the length of this ship class.
    pub fn len(self) -> usize {
        match self {
            ShipClass::Carrier => 5,
            ShipClass::Battleship => 4,
            ShipClass::Submarine => 3,
            ShipClass::Cruiser => 3,
            ShipClass::Destroyer => 2,
        }
    }

    /// Display name of this ship class.
    pub fn name(self) -> &'static str {
        match self {
            ShipClass::Carrier => "Carrier",
            ShipClass::Battleship => "Battleship",
            ShipClass::Submarine => "Submarine",
            ShipClass::Cruiser => "Cruiser",
            ShipClass::Destroyer => "Destroyer",
        }
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}
