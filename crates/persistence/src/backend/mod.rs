// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend utilities.
//!
//! Lectio stores its tables in `SQLite`. This module holds the pieces that
//! cannot be expressed in Diesel DSL: connection setup, PRAGMA handling and
//! embedded migrations. Domain queries and mutations live in `queries/` and
//! `mutations/`.

pub mod sqlite;
