// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{category, dec, person, tx};
use household::models::{CategoryPurpose, PersonTotals, TotalsSummary, TransactionType};
use household::totals::{
    aggregate_by_category, aggregate_by_category_with_roster, aggregate_by_person,
    aggregate_by_person_with_roster,
};
use rust_decimal::Decimal;

use TransactionType::{Expense, Income};

#[test]
fn single_person_income_and_expense() {
    let a = person("A", "Ana", 30);
    let c = category("c", "Misc", CategoryPurpose::Both);
    let txs = vec![tx("1", &a, &c, Income, "100"), tx("2", &a, &c, Expense, "30")];

    let report = aggregate_by_person(&txs);
    assert_eq!(
        report.people,
        vec![PersonTotals {
            person_id: "A".into(),
            person_name: "Ana".into(),
            total_income: dec("100"),
            total_expense: dec("30"),
            balance: dec("70"),
        }]
    );
    assert_eq!(
        report.summary,
        TotalsSummary {
            total_income: dec("100"),
            total_expense: dec("30"),
            net_balance: dec("70"),
        }
    );
}

#[test]
fn empty_input_gives_empty_rows_and_zero_summary() {
    let p = aggregate_by_person(&[]);
    assert!(p.people.is_empty());
    assert_eq!(p.summary, TotalsSummary::default());
    assert!(p.summary.net_balance.is_zero());

    let c = aggregate_by_category(&[]);
    assert!(c.categories.is_empty());
    assert_eq!(c.summary, TotalsSummary::default());
}

#[test]
fn rows_follow_first_seen_order() {
    let a = person("A", "Ana", 30);
    let b = person("B", "Bo", 40);
    let c1 = category("c1", "Salary", CategoryPurpose::IncomeOnly);
    let c2 = category("c2", "Food", CategoryPurpose::ExpenseOnly);
    let txs = vec![
        tx("1", &b, &c2, Expense, "12.30"),
        tx("2", &a, &c1, Income, "500"),
        tx("3", &b, &c1, Income, "80"),
        tx("4", &a, &c2, Expense, "45.70"),
    ];

    let by_person = aggregate_by_person(&txs);
    let names: Vec<_> = by_person.people.iter().map(|r| r.person_name.as_str()).collect();
    assert_eq!(names, ["Bo", "Ana"]);
    assert_eq!(by_person.people[0].balance, dec("67.70"));
    assert_eq!(by_person.people[1].balance, dec("454.30"));

    let by_cat = aggregate_by_category(&txs);
    let descs: Vec<_> = by_cat
        .categories
        .iter()
        .map(|r| r.category_description.as_str())
        .collect();
    assert_eq!(descs, ["Food", "Salary"]);
    assert_eq!(by_cat.categories[0].total_expense, dec("58.00"));
    assert_eq!(by_cat.categories[1].total_income, dec("580"));

    assert_eq!(by_person.summary, by_cat.summary);
    assert_eq!(by_person.summary.net_balance, dec("522.00"));
}

#[test]
fn decimal_sums_do_not_drift() {
    let a = person("A", "Ana", 30);
    let c = category("c", "Coffee", CategoryPurpose::ExpenseOnly);
    let txs: Vec<_> = (0..10)
        .map(|i| tx(&i.to_string(), &a, &c, Expense, "0.10"))
        .collect();
    let report = aggregate_by_person(&txs);
    assert_eq!(report.summary.total_expense, Decimal::ONE);
    assert_eq!(report.summary.net_balance, -Decimal::ONE);
}

#[test]
fn idle_entities_are_omitted_by_default() {
    let a = person("A", "Ana", 30);
    let c = category("c", "Misc", CategoryPurpose::Both);
    let txs = vec![tx("1", &a, &c, Income, "10")];
    let report = aggregate_by_person(&txs);
    assert_eq!(report.people.len(), 1);
}

#[test]
fn roster_variant_includes_idle_entities_with_zero_totals() {
    let a = person("A", "Ana", 30);
    let b = person("B", "Bo", 40);
    let ghost = person("G", "Gil", 50);
    let c1 = category("c1", "Misc", CategoryPurpose::Both);
    let c2 = category("c2", "Unused", CategoryPurpose::Both);
    let txs = vec![
        tx("1", &b, &c1, Income, "10"),
        // not on the roster; appended after it
        tx("2", &ghost, &c1, Expense, "4"),
    ];

    let report = aggregate_by_person_with_roster(&[a.clone(), b.clone()], &txs);
    let ids: Vec<_> = report.people.iter().map(|r| r.person_id.as_str()).collect();
    assert_eq!(ids, ["A", "B", "G"]);
    assert!(report.people[0].total_income.is_zero());
    assert!(report.people[0].balance.is_zero());
    assert_eq!(report.summary, aggregate_by_person(&txs).summary);

    let cats = aggregate_by_category_with_roster(&[c1, c2], &txs);
    assert_eq!(cats.categories.len(), 2);
    assert_eq!(cats.categories[1].category_description, "Unused");
    assert!(cats.categories[1].total_expense.is_zero());
    assert_eq!(cats.categories[0].balance, dec("6"));
}

#[test]
fn aggregation_is_repeatable() {
    let a = person("A", "Ana", 30);
    let c = category("c", "Misc", CategoryPurpose::Both);
    let txs = vec![tx("1", &a, &c, Income, "1.5"), tx("2", &a, &c, Expense, "0.5")];
    assert_eq!(aggregate_by_person(&txs), aggregate_by_person(&txs));
    assert_eq!(aggregate_by_category(&txs), aggregate_by_category(&txs));
}
