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
//! Rule engine for two-player Battleship on a 10x10 grid addressed as `A1` through
//! `J10`.
//!
//! [`board`] holds coordinates, ships' cell states and the [`Board`][board::Board] that
//! validates placements and resolves shots. [`ships`] defines the [`Ship`][ships::Ship]
//! and the standard roster. [`game`] runs a whole [`Match`][game::Match] against a
//! pluggable input and output.

pub mod board;
pub mod game;
pub mod ships;
