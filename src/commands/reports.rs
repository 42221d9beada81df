// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::HouseholdApi;
use crate::models::{CategoryTotalsReport, PersonTotalsReport, TotalsSummary};
use crate::totals::{
    aggregate_by_category, aggregate_by_category_with_roster, aggregate_by_person,
    aggregate_by_person_with_roster,
};
use crate::utils::{fmt_money, maybe_print_json, totals_table};
use anyhow::{Context, Result};

/// Where report numbers come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The backend's own report endpoint.
    Remote,
    /// Local aggregation over the transaction list; `all` keeps idle entries.
    Local { all: bool },
}

impl Source {
    pub fn from_matches(sub: &clap::ArgMatches) -> Self {
        if sub.get_flag("local") {
            Source::Local {
                all: sub.get_flag("all"),
            }
        } else {
            Source::Remote
        }
    }
}

pub fn handle(api: &dyn HouseholdApi, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("people", sub)) => people(api, sub)?,
        Some(("categories", sub)) => categories(api, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn person_report(api: &dyn HouseholdApi, source: Source) -> Result<PersonTotalsReport> {
    match source {
        Source::Remote => api
            .person_totals_report()
            .context("Failed to load person totals report"),
        Source::Local { all } => {
            let txs = api.list_transactions().context("Failed to load transactions")?;
            if all {
                let people = api.list_people().context("Failed to load people")?;
                Ok(aggregate_by_person_with_roster(&people, &txs))
            } else {
                Ok(aggregate_by_person(&txs))
            }
        }
    }
}

pub fn category_report(api: &dyn HouseholdApi, source: Source) -> Result<CategoryTotalsReport> {
    match source {
        Source::Remote => api
            .category_totals_report()
            .context("Failed to load category totals report"),
        Source::Local { all } => {
            let txs = api.list_transactions().context("Failed to load transactions")?;
            if all {
                let categories = api.list_categories().context("Failed to load categories")?;
                Ok(aggregate_by_category_with_roster(&categories, &txs))
            } else {
                Ok(aggregate_by_category(&txs))
            }
        }
    }
}

fn summary_row(s: &TotalsSummary) -> Vec<String> {
    vec![
        "Total".into(),
        fmt_money(&s.total_income),
        fmt_money(&s.total_expense),
        fmt_money(&s.net_balance),
    ]
}

fn people(api: &dyn HouseholdApi, sub: &clap::ArgMatches) -> Result<()> {
    let report = person_report(api, Source::from_matches(sub))?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        return Ok(());
    }
    let rows = report
        .people
        .iter()
        .map(|r| {
            vec![
                r.person_name.clone(),
                fmt_money(&r.total_income),
                fmt_money(&r.total_expense),
                fmt_money(&r.balance),
            ]
        })
        .collect();
    println!(
        "{}",
        totals_table(
            &["Person", "Income", "Expense", "Balance"],
            rows,
            Some(summary_row(&report.summary)),
            3,
        )
    );
    Ok(())
}

fn categories(api: &dyn HouseholdApi, sub: &clap::ArgMatches) -> Result<()> {
    let report = category_report(api, Source::from_matches(sub))?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        return Ok(());
    }
    let rows = report
        .categories
        .iter()
        .map(|r| {
            vec![
                r.category_description.clone(),
                fmt_money(&r.total_income),
                fmt_money(&r.total_expense),
                fmt_money(&r.balance),
            ]
        })
        .collect();
    println!(
        "{}",
        totals_table(
            &["Category", "Income", "Expense", "Balance"],
            rows,
            Some(summary_row(&report.summary)),
            3,
        )
    );
    Ok(())
}
