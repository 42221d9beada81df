// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

use crate::config::Overrides;

fn output_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn report_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("local")
            .long("local")
            .action(ArgAction::SetTrue)
            .help("Compute totals locally from the transaction list"),
    )
    .arg(
        Arg::new("all")
            .long("all")
            .action(ArgAction::SetTrue)
            .requires("local")
            .help("With --local, also list entries without transactions"),
    )
}

pub fn build_cli() -> Command {
    Command::new("household")
        .about("Household expenses: people, categories, transactions and totals")
        .version(clap::crate_version!())
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .global(true)
                .help("Base URL of the household API"),
        )
        .arg(
            Arg::new("token")
                .long("token")
                .global(true)
                .help("Bearer token sent with every request"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .global(true)
                .value_parser(value_parser!(u64))
                .help("Request timeout in seconds"),
        )
        .subcommand(
            Command::new("person")
                .about("Manage people")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("age")
                                .long("age")
                                .required(true)
                                .value_parser(value_parser!(u32)),
                        ),
                )
                .subcommand(output_flags(Command::new("list")))
                .subcommand(output_flags(
                    Command::new("show").arg(Arg::new("id").required(true)),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a person and all of their transactions")
                        .arg(Arg::new("person").required(true).help("Person id or name"))
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .action(ArgAction::SetTrue)
                                .help("Confirm deletion of the person's transactions"),
                        ),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(
                            Arg::new("purpose")
                                .long("purpose")
                                .default_value("both")
                                .value_parser(["expense", "income", "both"]),
                        ),
                )
                .subcommand(output_flags(Command::new("list")))
                .subcommand(output_flags(
                    Command::new("show").arg(Arg::new("id").required(true)),
                )),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("person").long("person").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["expense", "income"]),
                        )
                        .arg(Arg::new("value").long("value").required(true))
                        .arg(Arg::new("description").long("description").required(true)),
                )
                .subcommand(output_flags(
                    Command::new("list")
                        .arg(Arg::new("person").long("person"))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["expense", "income"]),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(output_flags(
                    Command::new("show").arg(Arg::new("id").required(true)),
                ))
                .subcommand(output_flags(
                    Command::new("categories")
                        .about("Show which categories a person may use for a type")
                        .arg(Arg::new("person").long("person"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .value_parser(["expense", "income"]),
                        ),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Income, expense and balance totals")
                .subcommand(output_flags(report_flags(Command::new("people"))))
                .subcommand(output_flags(report_flags(Command::new("categories")))),
        )
        .subcommand(
            Command::new("export")
                .about("Write transactions or reports to a file")
                .subcommand(export_args(Command::new("transactions")))
                .subcommand(report_flags(export_args(Command::new("people-report"))))
                .subcommand(report_flags(export_args(Command::new("category-report")))),
        )
        .subcommand(Command::new("doctor").about("Check backend data against the local rules"))
        .subcommand(
            Command::new("config")
                .about("Client configuration")
                .subcommand(Command::new("show"))
                .subcommand(Command::new("path")),
        )
}

fn export_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("format")
            .long("format")
            .default_value("csv")
            .value_parser(["csv", "json"]),
    )
    .arg(Arg::new("out").long("out").required(true))
}

/// Collects the global connection flags. Globals propagate downward, so the
/// innermost subcommand sees them wherever they were typed.
pub fn overrides(m: &clap::ArgMatches) -> Overrides {
    let mut leaf = m;
    while let Some((_, sub)) = leaf.subcommand() {
        leaf = sub;
    }
    Overrides {
        api_url: leaf.get_one::<String>("api-url").cloned(),
        token: leaf.get_one::<String>("token").cloned(),
        timeout_secs: leaf.get_one::<u64>("timeout").copied(),
    }
}
