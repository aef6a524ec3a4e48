use std::env::current_dir;
use std::process::exit;

use chrono::Local;
use clap::Parser;
use mockall_double::double;

use crate::logging;
use crate::query::NameQuery;
use crate::settings::Settings;
#[double]
use crate::store::FileStore;
use crate::vault::{Vault, VaultImpl, VaultReadable};
use argument_parsing::{FinCommand, FinOptions};
use commands::NewRecurringPayment;

mod argument_parsing;
mod commands;
mod formatting;

pub fn run() {
    let result: Result<String, String> = (|| {
        let arguments = FinOptions::parse();
        let vault_path = match &arguments.vault {
            Some(a) => a.clone(),
            None => current_dir().map_err(|e| e.to_string())?,
        };
        let vault = VaultImpl { path: vault_path };

        let settings = Settings::from_vault(&vault)?;
        settings.validate()?;
        logging::init(if arguments.verbose {
            "debug"
        } else {
            settings.log_level.as_str()
        });

        let store = FileStore::new(vault.path());
        let today = Local::now().date_naive();

        match arguments.command {
            FinCommand::Overview { query, anchor } => commands::overview(
                &store,
                &settings,
                anchor.unwrap_or(today),
                &NameQuery::new(query.as_deref()),
            ),
            FinCommand::Payments {
                size,
                query,
                anchor,
            } => commands::payments(
                &store,
                &settings,
                anchor.unwrap_or(today),
                size.unwrap_or(settings.page_size),
                &NameQuery::new(query.as_deref()),
            ),
            FinCommand::Show { id, since } => {
                commands::show(&store, &settings, &id, since.unwrap_or(today))
            }
            FinCommand::Create {
                name,
                cadence,
                amount,
                debt,
                disabled,
            } => commands::create(
                &store,
                NewRecurringPayment {
                    name,
                    cadence,
                    amount,
                    debt,
                    enabled: !disabled,
                },
            ),
        }
    })();

    match result {
        Ok(screen) => println!("{}", screen),
        Err(error) => {
            eprintln!("Could not complete the command: {}", error);
            exit(1)
        }
    }
}
