// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lectio_domain::LectionaryEntry;

use super::{create_test_lectionary_entry, create_test_persistence};
use crate::Persistence;

#[test]
fn test_lectionary_is_listed_in_admin_order() {
    let mut persistence: Persistence = create_test_persistence();
    persistence
        .upsert_lectionary(&[
            create_test_lectionary_entry(30, "Palm Sunday", "Mt 26:14-27:66"),
            create_test_lectionary_entry(10, "Fourth Sunday of Lent", "Jn 9:1-41"),
            create_test_lectionary_entry(20, "Fifth Sunday of Lent", "Jn 11:1-45"),
        ])
        .unwrap();

    let ids: Vec<i64> = persistence
        .list_lectionary()
        .unwrap()
        .iter()
        .map(|entry| entry.admin_order)
        .collect();
    assert_eq!(ids, vec![10, 20, 30]);
}

#[test]
fn test_upsert_updates_rows_in_place() {
    let mut persistence: Persistence = create_test_persistence();
    persistence
        .upsert_lectionary(&[create_test_lectionary_entry(10, "Fourth Sunday of Lent", "Jn 9:1-41")])
        .unwrap();

    let mut corrected: LectionaryEntry =
        create_test_lectionary_entry(10, "Fourth Sunday of Lent", "Jn 4:5-42");
    corrected.second_reading = None;
    persistence.upsert_lectionary(&[corrected.clone()]).unwrap();

    assert_eq!(persistence.count_lectionary().unwrap(), 1);
    assert_eq!(persistence.get_lectionary_entry(10).unwrap(), Some(corrected));
}

#[test]
fn test_missing_lectionary_entry_is_none() {
    let mut persistence: Persistence = create_test_persistence();
    assert_eq!(persistence.get_lectionary_entry(404).unwrap(), None);
}
