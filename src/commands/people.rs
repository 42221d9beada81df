// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::HouseholdApi;
use crate::commands::find_person;
use crate::models::{CreatePersonDto, Person};
use crate::utils::{maybe_print_json, pretty_table};
use crate::validation::validate_person;
use anyhow::{bail, Context, Result};

pub fn handle(api: &dyn HouseholdApi, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let dto = CreatePersonDto {
                name: sub.get_one::<String>("name").cloned().unwrap_or_default(),
                age: sub.get_one::<u32>("age").copied().unwrap_or_default(),
            };
            let person = add(api, &dto)?;
            println!("Added person '{}' ({})", person.name, person.id);
        }
        Some(("list", sub)) => {
            let people = api.list_people().context("Failed to load people")?;
            print_people(sub, &people)?;
        }
        Some(("show", sub)) => {
            let id = sub.get_one::<String>("id").map(String::as_str).unwrap_or_default();
            let person = api
                .get_person(id)
                .with_context(|| format!("Failed to load person '{}'", id))?;
            print_people(sub, std::slice::from_ref(&person))?;
        }
        Some(("rm", sub)) => {
            let key = sub.get_one::<String>("person").map(String::as_str).unwrap_or_default();
            let person = remove(api, key, sub.get_flag("yes"))?;
            println!(
                "Removed person '{}' and all of their transactions",
                person.name
            );
        }
        _ => {}
    }
    Ok(())
}

pub fn add(api: &dyn HouseholdApi, dto: &CreatePersonDto) -> Result<Person> {
    validate_person(dto)?;
    let person = api.create_person(dto).context("Failed to create person")?;
    tracing::info!(id = %person.id, name = %person.name, "person created");
    Ok(person)
}

/// Deletes a person by id or name. The backend cascades the delete to the
/// person's transactions, so `confirmed` must be set.
pub fn remove(api: &dyn HouseholdApi, key: &str, confirmed: bool) -> Result<Person> {
    let people = api.list_people().context("Failed to load people")?;
    let Some(person) = find_person(&people, key) else {
        bail!("Person '{}' not found", key);
    };
    if !confirmed {
        bail!(
            "Deleting '{}' also deletes all of their transactions; re-run with --yes to confirm",
            person.name
        );
    }
    api.delete_person(&person.id)
        .with_context(|| format!("Failed to delete person '{}'", person.name))?;
    tracing::info!(id = %person.id, "person deleted");
    Ok(person.clone())
}

fn print_people(sub: &clap::ArgMatches, people: &[Person]) -> Result<()> {
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &people)? {
        return Ok(());
    }
    let rows = people
        .iter()
        .map(|p| {
            let age = if p.is_minor() {
                format!("{} (minor)", p.age)
            } else {
                p.age.to_string()
            };
            vec![p.name.clone(), age, p.id.clone()]
        })
        .collect();
    println!("{}", pretty_table(&["Name", "Age", "Id"], rows));
    Ok(())
}
