// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use household::{api::HttpApi, cli, commands, config, utils};

fn main() -> Result<()> {
    utils::init_tracing();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let overrides = cli::overrides(&matches);
    if let Some(("config", sub)) = matches.subcommand() {
        return commands::config::handle(&overrides, sub);
    }
    if matches.subcommand().is_none() {
        cli::build_cli().print_help()?;
        println!();
        return Ok(());
    }

    let cfg = config::resolve(&overrides)?;
    let api = HttpApi::new(&cfg)?;

    match matches.subcommand() {
        Some(("person", sub)) => commands::people::handle(&api, sub)?,
        Some(("category", sub)) => commands::categories::handle(&api, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&api, sub)?,
        Some(("report", sub)) => commands::reports::handle(&api, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&api, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&api)?,
        _ => {}
    }
    Ok(())
}
