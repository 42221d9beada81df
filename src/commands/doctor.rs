// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::HouseholdApi;
use crate::models::{
    CategoryTotalsReport, PersonTotalsReport, TotalsSummary, Transaction, TransactionType,
};
use crate::totals::{aggregate_by_category, aggregate_by_person};
use crate::utils::{fmt_money, pretty_table};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub kind: &'static str,
    pub detail: String,
}

impl Issue {
    fn new(kind: &'static str, detail: String) -> Self {
        Self { kind, detail }
    }
}

pub fn handle(api: &dyn HouseholdApi) -> Result<()> {
    let txs = api.list_transactions().context("Failed to load transactions")?;
    let people = api
        .person_totals_report()
        .context("Failed to load person totals report")?;
    let categories = api
        .category_totals_report()
        .context("Failed to load category totals report")?;

    let issues = audit(&txs, &people, &categories);
    if issues.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        for i in &issues {
            tracing::warn!(kind = i.kind, detail = %i.detail, "doctor finding");
        }
        let rows = issues.into_iter().map(|i| vec![i.kind.to_string(), i.detail]).collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

fn same(a: Decimal, b: Decimal) -> bool {
    a.round_dp(2) == b.round_dp(2)
}

fn summary_matches(a: &TotalsSummary, b: &TotalsSummary) -> bool {
    same(a.total_income, b.total_income)
        && same(a.total_expense, b.total_expense)
        && same(a.net_balance, b.net_balance)
}

/// Checks stored transactions against the creation rules and the backend's
/// reports against a local aggregation of the same transactions.
pub fn audit(
    txs: &[Transaction],
    people: &PersonTotalsReport,
    categories: &CategoryTotalsReport,
) -> Vec<Issue> {
    let mut out = Vec::new();

    // 1) Rule violations that slipped past the backend
    for t in txs {
        if t.person.is_minor() && t.r#type == TransactionType::Income {
            out.push(Issue::new(
                "minor_income",
                format!("{} '{}' ({})", t.person.name, t.description, t.id),
            ));
        }
        if !t.category.purpose.accepts(t.r#type) {
            out.push(Issue::new(
                "purpose_mismatch",
                format!(
                    "{} '{}' in {} [{}] ({})",
                    t.r#type, t.description, t.category.description, t.category.purpose, t.id
                ),
            ));
        }
    }

    // 2) Report rows versus local totals; idle rows must be all zero
    let local = aggregate_by_person(txs);
    for row in &people.people {
        let ok = match local.people.iter().find(|l| l.person_id == row.person_id) {
            Some(l) => same(l.total_income, row.total_income) && same(l.total_expense, row.total_expense),
            None => row.total_income.is_zero() && row.total_expense.is_zero(),
        };
        if !ok {
            out.push(Issue::new(
                "report_mismatch",
                format!(
                    "person {}: report {}/{}",
                    row.person_name,
                    fmt_money(&row.total_income),
                    fmt_money(&row.total_expense)
                ),
            ));
        }
    }
    for l in &local.people {
        if !people.people.iter().any(|r| r.person_id == l.person_id) {
            out.push(Issue::new(
                "missing_from_report",
                format!("person {}", l.person_name),
            ));
        }
    }
    if !summary_matches(&local.summary, &people.summary) {
        out.push(Issue::new(
            "summary_mismatch",
            format!("person report net {}", fmt_money(&people.summary.net_balance)),
        ));
    }

    let local = aggregate_by_category(txs);
    for row in &categories.categories {
        let ok = match local
            .categories
            .iter()
            .find(|l| l.category_id == row.category_id)
        {
            Some(l) => same(l.total_income, row.total_income) && same(l.total_expense, row.total_expense),
            None => row.total_income.is_zero() && row.total_expense.is_zero(),
        };
        if !ok {
            out.push(Issue::new(
                "report_mismatch",
                format!(
                    "category {}: report {}/{}",
                    row.category_description,
                    fmt_money(&row.total_income),
                    fmt_money(&row.total_expense)
                ),
            ));
        }
    }
    for l in &local.categories {
        if !categories
            .categories
            .iter()
            .any(|r| r.category_id == l.category_id)
        {
            out.push(Issue::new(
                "missing_from_report",
                format!("category {}", l.category_description),
            ));
        }
    }
    if !summary_matches(&local.summary, &categories.summary) {
        out.push(Issue::new(
            "summary_mismatch",
            format!(
                "category report net {}",
                fmt_money(&categories.summary.net_balance)
            ),
        ));
    }

    out
}
