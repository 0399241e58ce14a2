// Copyright (c) 2024 Electrolux Status contributors
// SPDX-License-Identifier: MPL-2.0

//! Capability catalog inspection tool.

#![forbid(non_ascii_idents)]
#![deny(unsafe_code)]

use std::path::Path;

use anyhow::{Context, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command, arg};
use electrolux_status::catalog::Catalog;
use electrolux_status::configuration::{DEF_CONFIG_FILE, Settings, get_configuration};
use electrolux_status::notification::{Notification, NotificationSink, create_notification};
use electrolux_status::util::{minutes_to_seconds, seconds_to_minutes, string_to_boolean};
use electrolux_status::{APP_VERSION, build_summary};
use log::{debug, error, info};
use serde_json::{Value, json};

fn main() -> anyhow::Result<()> {
    let args = Command::new("electrolux-catalog")
        .author("Electrolux Status contributors")
        .version(APP_VERSION)
        .about("Electrolux appliance capability catalog tool")
        .arg(arg!(-c --config <FILE> "Configuration file").required(false))
        .subcommand_required(true)
        .subcommand(Command::new("list").about("List all catalog entries"))
        .subcommand(
            Command::new("show")
                .about("Show the descriptor of an attribute path")
                .arg(arg!(<PATH> "Appliance attribute path, e.g. freezer/doorState")),
        )
        .subcommand(
            Command::new("paths")
                .about("Merge discovered capability paths with the static attributes")
                .arg(arg!([CAPABILITY] ... "Discovered capability paths")),
        )
        .subcommand(Command::new("validate").about("Check the catalog invariants"))
        .subcommand(
            Command::new("minutes")
                .about("Convert seconds to minutes")
                .arg(arg!(<SECONDS>).allow_negative_numbers(true)),
        )
        .subcommand(
            Command::new("seconds")
                .about("Convert minutes to seconds")
                .arg(arg!(<MINUTES>).allow_negative_numbers(true)),
        )
        .subcommand(
            Command::new("bool")
                .about("Convert an appliance state string to a boolean")
                .arg(arg!(<STATE>))
                .arg(
                    Arg::new("no_fallback")
                        .long("no-fallback")
                        .action(ArgAction::SetTrue)
                        .help("Return false instead of the input for unknown states"),
                ),
        )
        .subcommand(
            Command::new("notify")
                .about("Print the notification which would be sent")
                .arg(arg!(<MESSAGE>))
                .arg(arg!(-t --title <TITLE> "Notification title").required(false)),
        )
        .get_matches();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    debug!("{}", build_summary());

    let catalog = Catalog::new();

    match args.subcommand() {
        Some(("list", _)) => {
            let entries: Vec<Value> = catalog
                .iter()
                .map(|(path, descriptor)| json!({ "path": path, "descriptor": descriptor }))
                .collect();
            print_json(&Value::Array(entries))?;
        }
        Some(("show", sub)) => {
            let path = required_str(sub, "PATH")?;
            let descriptor = catalog
                .get(path)
                .ok_or_else(|| anyhow!("No catalog entry for '{path}'"))?;
            print_json(&json!({ "path": path, "descriptor": descriptor }))?;
        }
        Some(("paths", sub)) => {
            let discovered = sub
                .get_many::<String>("CAPABILITY")
                .map(|v| v.cloned().collect::<Vec<_>>())
                .unwrap_or_default();
            let paths: Vec<Value> = catalog
                .considered_paths(&discovered)
                .into_iter()
                .map(|path| {
                    let known = catalog.contains(&path);
                    json!({ "path": path, "in_catalog": known })
                })
                .collect();
            print_json(&Value::Array(paths))?;
        }
        Some(("validate", _)) => {
            catalog.validate()?;
            println!("Catalog with {} entries is valid", catalog.len());
        }
        Some(("minutes", sub)) => {
            let seconds = parse_number(sub, "SECONDS")?;
            print_json(&json!(seconds_to_minutes(Some(seconds))))?;
        }
        Some(("seconds", sub)) => {
            let minutes = parse_number(sub, "MINUTES")?;
            print_json(&json!(minutes_to_seconds(Some(minutes))))?;
        }
        Some(("bool", sub)) => {
            let state = required_str(sub, "STATE")?;
            let fallback = !sub.get_flag("no_fallback");
            print_json(&Value::from(string_to_boolean(state, fallback)))?;
        }
        Some(("notify", sub)) => {
            let cfg = load_settings(args.get_one::<String>("config"))?;
            let message = required_str(sub, "MESSAGE")?;
            let title = sub.get_one::<String>("title").map(|t| t.as_str());
            if !create_notification(&cfg.electrolux, &StdoutSink, message, title) {
                info!("Notifications are disabled in the configuration");
            }
        }
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}

fn load_settings(config: Option<&String>) -> anyhow::Result<Settings> {
    let cfg_file = match config {
        None if Path::new(DEF_CONFIG_FILE).exists() => Some(DEF_CONFIG_FILE),
        None => None,
        Some(c) => Some(c.as_str()),
    };
    let cfg = get_configuration(cfg_file).context("Failed to read configuration")?;
    info!("Configuration: {}", cfg.electrolux);
    Ok(cfg)
}

fn required_str<'a>(args: &'a ArgMatches, id: &str) -> anyhow::Result<&'a str> {
    args.get_one::<String>(id)
        .map(|v| v.as_str())
        .ok_or_else(|| anyhow!("Missing argument {id}"))
}

fn parse_number(args: &ArgMatches, id: &str) -> anyhow::Result<f64> {
    let value = required_str(args, id)?;
    value
        .parse::<f64>()
        .with_context(|| format!("Invalid number: {value}"))
}

fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints notifications instead of sending them to a host.
struct StdoutSink;

impl NotificationSink for StdoutSink {
    fn create_or_update(&self, notification: Notification) {
        match serde_json::to_string_pretty(&notification) {
            Ok(v) => println!("{v}"),
            Err(e) => error!("Error serializing notification: {e}"),
        }
    }
}
