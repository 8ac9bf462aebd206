// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! ## Module Organization
//!
//! - `calendar` — Year-cycle reference rows
//! - `lectionary` — Canonical lectionary rows
//! - `ordo` — Extracted Ordo days
//! - `mapping` — Calendar to lectionary mapping, alone or joined to its lectionary row
//! - `schedule` — Schedule entries

pub mod calendar;
pub mod lectionary;
pub mod mapping;
pub mod ordo;
pub mod schedule;
