// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::FakeApi;
use household::commands::{categories, people};
use household::models::{CategoryPurpose, CreateCategoryDto, CreatePersonDto};

#[test]
fn add_person_validates_before_calling_backend() {
    let api = FakeApi::default();
    let err = people::add(
        &api,
        &CreatePersonDto {
            name: "".into(),
            age: 30,
        },
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "name must not be empty");
    assert!(!api.called("create_person"));

    let p = people::add(
        &api,
        &CreatePersonDto {
            name: "Ana".into(),
            age: 30,
        },
    )
    .unwrap();
    assert_eq!(p.name, "Ana");
    assert!(api.called("create_person"));
}

#[test]
fn remove_requires_confirmation() {
    let api = FakeApi::household().with_transactions();
    let err = people::remove(&api, "Ana", false).unwrap_err();
    assert!(err.to_string().contains("--yes"), "unexpected error: {err}");
    assert!(!api.called("delete_person"));
    assert_eq!(api.people.borrow().len(), 2);
}

#[test]
fn remove_cascades_in_backend() {
    let api = FakeApi::household().with_transactions();
    let removed = people::remove(&api, "p1", true).unwrap();
    assert_eq!(removed.name, "Ana");
    assert_eq!(api.people.borrow().len(), 1);
    // only Leo's transaction survives
    let txs = api.transactions.borrow();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].person.id, "p2");
}

#[test]
fn remove_unknown_person_fails() {
    let api = FakeApi::household();
    let err = people::remove(&api, "Zed", true).unwrap_err();
    assert_eq!(err.to_string(), "Person 'Zed' not found");
}

#[test]
fn add_category_checks_description() {
    let api = FakeApi::default();
    assert!(categories::add(
        &api,
        &CreateCategoryDto {
            description: "  ".into(),
            purpose: CategoryPurpose::Both
        }
    )
    .is_err());
    assert!(!api.called("create_category"));

    let c = categories::add(
        &api,
        &CreateCategoryDto {
            description: "Rent".into(),
            purpose: CategoryPurpose::ExpenseOnly,
        },
    )
    .unwrap();
    assert_eq!(c.purpose, CategoryPurpose::ExpenseOnly);
}

#[test]
fn cli_category_add_parses_purpose() {
    let api = FakeApi::default();
    let matches = household::cli::build_cli().get_matches_from([
        "household",
        "category",
        "add",
        "--description",
        "Allowance",
        "--purpose",
        "income",
    ]);
    let Some(("category", sub)) = matches.subcommand() else {
        panic!("no category subcommand");
    };
    categories::handle(&api, sub).unwrap();
    let cats = api.categories.borrow();
    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].purpose, CategoryPurpose::IncomeOnly);
}

#[test]
fn cli_category_purpose_defaults_to_both() {
    let api = FakeApi::default();
    let matches = household::cli::build_cli().get_matches_from([
        "household",
        "category",
        "add",
        "--description",
        "Misc",
    ]);
    let Some(("category", sub)) = matches.subcommand() else {
        panic!("no category subcommand");
    };
    categories::handle(&api, sub).unwrap();
    assert_eq!(api.categories.borrow()[0].purpose, CategoryPurpose::Both);
}
