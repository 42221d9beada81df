// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::HouseholdApi;
use crate::commands::reports::{category_report, person_report, Source};
use crate::models::TotalsSummary;
use crate::utils::fmt_money;
use anyhow::{bail, Context, Result};
use serde_json::json;

pub fn handle(api: &dyn HouseholdApi, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(api, sub),
        Some(("people-report", sub)) => export_people_report(api, sub),
        Some(("category-report", sub)) => export_category_report(api, sub),
        _ => Ok(()),
    }
}

fn format_and_out(sub: &clap::ArgMatches) -> (String, String) {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".into());
    let out = sub.get_one::<String>("out").cloned().unwrap_or_default();
    (fmt, out)
}

fn export_transactions(api: &dyn HouseholdApi, sub: &clap::ArgMatches) -> Result<()> {
    let (fmt, out) = format_and_out(sub);
    let txs = api.list_transactions().context("Failed to load transactions")?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(&out)
                .with_context(|| format!("Cannot write {}", out))?;
            wtr.write_record([
                "id", "description", "person", "category", "type", "value",
            ])?;
            for t in &txs {
                wtr.write_record([
                    t.id.clone(),
                    t.description.clone(),
                    t.person.name.clone(),
                    t.category.description.clone(),
                    t.r#type.to_string(),
                    fmt_money(&t.value),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = txs
                .iter()
                .map(|t| {
                    json!({
                        "id": t.id,
                        "description": t.description,
                        "person": t.person.name,
                        "category": t.category.description,
                        "type": t.r#type.to_string(),
                        "value": fmt_money(&t.value),
                    })
                })
                .collect();
            std::fs::write(&out, serde_json::to_string_pretty(&items)?)?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}

fn write_totals_csv(
    out: &str,
    label: &str,
    rows: impl Iterator<Item = [String; 5]>,
    summary: &TotalsSummary,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out).with_context(|| format!("Cannot write {}", out))?;
    wtr.write_record(["id", label, "total_income", "total_expense", "balance"])?;
    for r in rows {
        wtr.write_record(r)?;
    }
    wtr.write_record([
        String::new(),
        "TOTAL".into(),
        fmt_money(&summary.total_income),
        fmt_money(&summary.total_expense),
        fmt_money(&summary.net_balance),
    ])?;
    wtr.flush()?;
    Ok(())
}

fn export_people_report(api: &dyn HouseholdApi, sub: &clap::ArgMatches) -> Result<()> {
    let (fmt, out) = format_and_out(sub);
    let report = person_report(api, Source::from_matches(sub))?;
    match fmt.as_str() {
        "csv" => write_totals_csv(
            &out,
            "person",
            report.people.iter().map(|r| {
                [
                    r.person_id.clone(),
                    r.person_name.clone(),
                    fmt_money(&r.total_income),
                    fmt_money(&r.total_expense),
                    fmt_money(&r.balance),
                ]
            }),
            &report.summary,
        )?,
        "json" => std::fs::write(&out, serde_json::to_string_pretty(&report)?)?,
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    println!("Exported person totals to {}", out);
    Ok(())
}

fn export_category_report(api: &dyn HouseholdApi, sub: &clap::ArgMatches) -> Result<()> {
    let (fmt, out) = format_and_out(sub);
    let report = category_report(api, Source::from_matches(sub))?;
    match fmt.as_str() {
        "csv" => write_totals_csv(
            &out,
            "category",
            report.categories.iter().map(|r| {
                [
                    r.category_id.clone(),
                    r.category_description.clone(),
                    fmt_money(&r.total_income),
                    fmt_money(&r.total_expense),
                    fmt_money(&r.balance),
                ]
            }),
            &report.summary,
        )?,
        "json" => std::fs::write(&out, serde_json::to_string_pretty(&report)?)?,
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    println!("Exported category totals to {}", out);
    Ok(())
}
