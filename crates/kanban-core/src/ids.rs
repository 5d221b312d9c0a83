//! Identifier allocation
//!
//! Ids are allocated per collection: one past the largest numeric id, then
//! checked against every id already in use.

use std::collections::HashSet;

use crate::domain::{Entity, Id};

/// Next free numeric id for `items`.
pub(crate) fn next_id<E: Entity>(items: &[E]) -> Id {
    let used: HashSet<u64> = items.iter().filter_map(|item| item.id().as_number()).collect();

    let mut candidate = used
        .iter()
        .max()
        .and_then(|max| max.checked_add(1))
        .unwrap_or(1);
    while used.contains(&candidate) {
        candidate += 1;
    }
    Id::Number(candidate)
}
