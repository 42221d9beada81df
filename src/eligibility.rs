// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Which categories a person may pick for a given transaction type.

use crate::models::{Category, Person, TransactionType};

/// People younger than this may only record expenses. Fixed policy, not configurable.
pub const MINOR_AGE_LIMIT: u32 = 18;

/// Categories that are legal choices for `person` recording a `kind` transaction.
///
/// Without a selected person every category is returned, leaving the choice to
/// the caller. Minors asking for income get nothing. Input order is preserved.
pub fn available_categories<'a>(
    categories: &'a [Category],
    person: Option<&Person>,
    kind: TransactionType,
) -> Vec<&'a Category> {
    let Some(person) = person else {
        return categories.iter().collect();
    };
    if person.is_minor() && kind == TransactionType::Income {
        return Vec::new();
    }
    categories
        .iter()
        .filter(|c| c.purpose.accepts(kind))
        .collect()
}
