// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod people;
pub mod categories;
pub mod transactions;
pub mod reports;
pub mod exporter;
pub mod doctor;
pub mod config;

use crate::models::{Category, Person};

/// Looks a person up by id first, then by exact name.
pub fn find_person<'a>(people: &'a [Person], key: &str) -> Option<&'a Person> {
    people
        .iter()
        .find(|p| p.id == key)
        .or_else(|| people.iter().find(|p| p.name == key))
}

/// Looks a category up by id first, then by exact description.
pub fn find_category<'a>(categories: &'a [Category], key: &str) -> Option<&'a Category> {
    categories
        .iter()
        .find(|c| c.id == key)
        .or_else(|| categories.iter().find(|c| c.description == key))
}
