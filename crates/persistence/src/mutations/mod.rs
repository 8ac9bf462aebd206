// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write operations.
//!
//! Bulk writes run inside a single transaction so a failed row leaves the
//! table as it was. Re-runs replace rows by their natural key rather than
//! appending.

pub mod calendar;
pub mod lectionary;
pub mod mapping;
pub mod ordo;
pub mod schedule;
