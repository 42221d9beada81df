// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Income/expense totals grouped by person or by category.
//!
//! Rows come out in first-seen order. The plain variants only report entities
//! that appear in the transaction list; the roster variants list every known
//! entity first, in roster order, with zero totals where nothing was recorded.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{
    Category, CategoryTotals, CategoryTotalsReport, Person, PersonTotals, PersonTotalsReport,
    TotalsSummary, Transaction, TransactionType,
};

#[derive(Debug, Clone, Default)]
struct Bucket {
    id: String,
    label: String,
    income: Decimal,
    expense: Decimal,
}

#[derive(Default)]
struct Grouping {
    buckets: Vec<Bucket>,
    index: HashMap<String, usize>,
}

impl Grouping {
    fn slot(&mut self, id: &str, label: &str) -> &mut Bucket {
        let i = match self.index.get(id) {
            Some(&i) => i,
            None => {
                self.buckets.push(Bucket {
                    id: id.to_string(),
                    label: label.to_string(),
                    ..Bucket::default()
                });
                self.index.insert(id.to_string(), self.buckets.len() - 1);
                self.buckets.len() - 1
            }
        };
        &mut self.buckets[i]
    }

    fn add(&mut self, id: &str, label: &str, tx: &Transaction) {
        let b = self.slot(id, label);
        match tx.r#type {
            TransactionType::Income => b.income += tx.value,
            TransactionType::Expense => b.expense += tx.value,
        }
    }

    fn summary(&self) -> TotalsSummary {
        let mut s = TotalsSummary::default();
        for b in &self.buckets {
            s.total_income += b.income;
            s.total_expense += b.expense;
        }
        s.net_balance = s.total_income - s.total_expense;
        s
    }
}

fn person_report(g: Grouping) -> PersonTotalsReport {
    let summary = g.summary();
    let people = g
        .buckets
        .into_iter()
        .map(|b| PersonTotals {
            person_id: b.id,
            person_name: b.label,
            total_income: b.income,
            total_expense: b.expense,
            balance: b.income - b.expense,
        })
        .collect();
    PersonTotalsReport { people, summary }
}

fn category_report(g: Grouping) -> CategoryTotalsReport {
    let summary = g.summary();
    let categories = g
        .buckets
        .into_iter()
        .map(|b| CategoryTotals {
            category_id: b.id,
            category_description: b.label,
            total_income: b.income,
            total_expense: b.expense,
            balance: b.income - b.expense,
        })
        .collect();
    CategoryTotalsReport {
        categories,
        summary,
    }
}

pub fn aggregate_by_person(transactions: &[Transaction]) -> PersonTotalsReport {
    aggregate_by_person_with_roster(&[], transactions)
}

pub fn aggregate_by_category(transactions: &[Transaction]) -> CategoryTotalsReport {
    aggregate_by_category_with_roster(&[], transactions)
}

pub fn aggregate_by_person_with_roster(
    people: &[Person],
    transactions: &[Transaction],
) -> PersonTotalsReport {
    let mut g = Grouping::default();
    for p in people {
        g.slot(&p.id, &p.name);
    }
    for tx in transactions {
        g.add(&tx.person.id, &tx.person.name, tx);
    }
    person_report(g)
}

pub fn aggregate_by_category_with_roster(
    categories: &[Category],
    transactions: &[Transaction],
) -> CategoryTotalsReport {
    let mut g = Grouping::default();
    for c in categories {
        g.slot(&c.id, &c.description);
    }
    for tx in transactions {
        g.add(&tx.category.id, &tx.category.description, tx);
    }
    category_report(g)
}
