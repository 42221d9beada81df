// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::HouseholdApi;
use crate::commands::categories::print_categories;
use crate::commands::{find_category, find_person};
use crate::eligibility::available_categories;
use crate::errors::HouseholdError;
use crate::models::{Category, Person, Transaction, TransactionDraft, TransactionType};
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use crate::validation::validate_create;
use anyhow::{anyhow, Context, Result};
use serde::Serialize;

pub fn handle(api: &dyn HouseholdApi, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(api, sub)?,
        Some(("list", sub)) => list(api, sub)?,
        Some(("show", sub)) => show(api, sub)?,
        Some(("categories", sub)) => eligible(api, sub)?,
        _ => {}
    }
    Ok(())
}

fn parse_type(sub: &clap::ArgMatches) -> Result<Option<TransactionType>> {
    sub.get_one::<String>("type")
        .map(|s| s.parse::<TransactionType>().map_err(|e| anyhow!(e)))
        .transpose()
}

/// Validates `draft` locally and only then submits it.
///
/// A rejected draft never reaches the backend. Backend rejections are returned
/// as they came.
pub fn submit(
    api: &dyn HouseholdApi,
    draft: TransactionDraft,
    person: Option<&Person>,
    category: Option<&Category>,
) -> Result<Transaction, HouseholdError> {
    let valid = validate_create(draft, person, category).inspect_err(|e| {
        tracing::warn!(reason = %e, "transaction rejected locally");
    })?;
    let tx = api.create_transaction(&valid)?;
    tracing::info!(id = %tx.id, value = %tx.value, kind = %tx.r#type, "transaction created");
    Ok(tx)
}

fn add(api: &dyn HouseholdApi, sub: &clap::ArgMatches) -> Result<()> {
    let person_key = sub.get_one::<String>("person").cloned().unwrap_or_default();
    let category_key = sub.get_one::<String>("category").cloned().unwrap_or_default();
    let value = parse_decimal(sub.get_one::<String>("value").map(String::as_str).unwrap_or_default())?;
    let description = sub.get_one::<String>("description").cloned().unwrap_or_default();
    // type defaults to expense
    let kind = parse_type(sub)?.unwrap_or(TransactionType::Expense);

    let people = api.list_people().context("Failed to load people")?;
    let categories = api.list_categories().context("Failed to load categories")?;
    let person = find_person(&people, &person_key);
    let category = find_category(&categories, &category_key);

    let draft = TransactionDraft {
        description,
        value,
        r#type: kind,
        category_id: category.map(|c| c.id.clone()).unwrap_or(category_key),
        person_id: person.map(|p| p.id.clone()).unwrap_or(person_key),
    };
    let tx = submit(api, draft, person, category)?;
    println!(
        "Recorded {} {} '{}' for {} in {} ({})",
        tx.r#type,
        fmt_money(&tx.value),
        tx.description,
        tx.person.name,
        tx.category.description,
        tx.id
    );
    Ok(())
}

fn list(api: &dyn HouseholdApi, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(api, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data.iter().map(TransactionRow::cells).collect();
        println!(
            "{}",
            pretty_table(&["Description", "Person", "Category", "Type", "Value"], rows)
        );
    }
    Ok(())
}

fn show(api: &dyn HouseholdApi, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").map(String::as_str).unwrap_or_default();
    let tx = api
        .get_transaction(id)
        .with_context(|| format!("Failed to load transaction '{}'", id))?;
    let row = TransactionRow::from(&tx);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &row)? {
        println!(
            "{}",
            pretty_table(
                &["Description", "Person", "Category", "Type", "Value"],
                vec![row.cells()]
            )
        );
    }
    Ok(())
}

/// Preview of the categories the transaction form would offer.
fn eligible(api: &dyn HouseholdApi, sub: &clap::ArgMatches) -> Result<()> {
    let kind = sub
        .get_one::<String>("type")
        .ok_or_else(|| anyhow!("--type is required"))?
        .parse::<TransactionType>()
        .map_err(|e| anyhow!(e))?;
    let categories = api.list_categories().context("Failed to load categories")?;
    let people;
    let person = match sub.get_one::<String>("person") {
        Some(key) => {
            people = api.list_people().context("Failed to load people")?;
            Some(find_person(&people, key).ok_or_else(|| anyhow!("Person '{}' not found", key))?)
        }
        None => None,
    };
    let allowed = available_categories(&categories, person, kind);
    if allowed.is_empty() && !(sub.get_flag("json") || sub.get_flag("jsonl")) {
        match person {
            Some(p) if p.is_minor() && kind == TransactionType::Income => {
                println!("{} is a minor; minors restricted to expenses", p.name)
            }
            _ => println!("No category available for this transaction type"),
        }
        return Ok(());
    }
    print_categories(sub, &allowed)
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub description: String,
    pub person: String,
    pub category: String,
    pub r#type: String,
    pub value: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        Self {
            id: t.id.clone(),
            description: t.description.clone(),
            person: t.person.name.clone(),
            category: t.category.description.clone(),
            r#type: t.r#type.to_string(),
            value: fmt_money(&t.value),
        }
    }
}

impl TransactionRow {
    fn cells(&self) -> Vec<String> {
        vec![
            self.description.clone(),
            self.person.clone(),
            self.category.clone(),
            self.r#type.clone(),
            self.value.clone(),
        ]
    }
}

/// Transactions filtered by the `--person`, `--category`, `--type` and
/// `--limit` options, in backend order.
pub fn query_rows(api: &dyn HouseholdApi, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let kind = parse_type(sub)?;
    let person = sub.get_one::<String>("person");
    let category = sub.get_one::<String>("category");
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);

    let txs = api.list_transactions().context("Failed to load transactions")?;
    let data = txs
        .iter()
        .filter(|t| person.is_none_or(|k| &t.person.id == k || &t.person.name == k))
        .filter(|t| category.is_none_or(|k| &t.category.id == k || &t.category.description == k))
        .filter(|t| kind.is_none_or(|k| t.r#type == k))
        .take(limit)
        .map(TransactionRow::from)
        .collect();
    Ok(data)
}
