// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use regex::Regex;

/// Compiles a pattern that is a literal in this crate.
///
/// Every caller passes a constant or a pattern assembled from the
/// vocabulary tables, all of which are covered by tests.
#[allow(clippy::expect_used)]
pub fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}
