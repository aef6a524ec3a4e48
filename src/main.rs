mod amounts;
mod cadence;
mod cli;
mod logging;
mod pagination;
mod query;
mod recurring_payment;
mod schedule;
mod settings;
mod store;
mod vault;

fn main() {
    cli::run()
}
