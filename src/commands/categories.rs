// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::HouseholdApi;
use crate::models::{Category, CategoryPurpose, CreateCategoryDto};
use crate::utils::{maybe_print_json, pretty_table};
use crate::validation::validate_category;
use anyhow::{anyhow, Context, Result};

pub fn handle(api: &dyn HouseholdApi, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let description = sub.get_one::<String>("description").cloned().unwrap_or_default();
            let purpose = sub
                .get_one::<String>("purpose")
                .map(String::as_str)
                .unwrap_or_default()
                .parse::<CategoryPurpose>()
                .map_err(|e| anyhow!(e))?;
            let category = add(api, &CreateCategoryDto { description, purpose })?;
            println!(
                "Added category '{}' [{}] ({})",
                category.description, category.purpose, category.id
            );
        }
        Some(("list", sub)) => {
            let categories = api.list_categories().context("Failed to load categories")?;
            print_categories(sub, &categories.iter().collect::<Vec<_>>())?;
        }
        Some(("show", sub)) => {
            let id = sub.get_one::<String>("id").map(String::as_str).unwrap_or_default();
            let category = api
                .get_category(id)
                .with_context(|| format!("Failed to load category '{}'", id))?;
            print_categories(sub, &[&category])?;
        }
        _ => {}
    }
    Ok(())
}

pub fn add(api: &dyn HouseholdApi, dto: &CreateCategoryDto) -> Result<Category> {
    validate_category(dto)?;
    let category = api.create_category(dto).context("Failed to create category")?;
    tracing::info!(id = %category.id, purpose = %category.purpose, "category created");
    Ok(category)
}

pub fn print_categories(sub: &clap::ArgMatches, categories: &[&Category]) -> Result<()> {
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &categories)? {
        return Ok(());
    }
    let rows = categories
        .iter()
        .map(|c| vec![c.description.clone(), c.purpose.to_string(), c.id.clone()])
        .collect();
    println!("{}", pretty_table(&["Category", "Purpose", "Id"], rows));
    Ok(())
}
