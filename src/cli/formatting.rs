use chrono::NaiveDate;
use comfy_table::Table;

use crate::pagination::Page;
use crate::query::NameQuery;
use crate::recurring_payment::{Payment, RecurringPayment};

fn check(value: bool) -> String {
    (if value { "✅" } else { "" }).into()
}

fn title(string: &str) -> String {
    let string_length = string.chars().count();
    string.to_string() + "\n" + &"=".repeat(string_length)
}

fn query_suffix(query: &NameQuery) -> String {
    match query.as_str() {
        Some(query) => format!(" matching '{}'", query),
        None => "".to_string(),
    }
}

pub fn format_payments_table(payments: &[Payment]) -> String {
    if payments.is_empty() {
        return "No payments".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Name", "Amount", "Debt"]);
    for payment in payments {
        table.add_row(vec![
            payment.date.to_string(),
            payment.recurring_payment.name.clone(),
            payment.recurring_payment.amount.to_string(),
            check(payment.recurring_payment.debt),
        ]);
    }
    table.to_string()
}

pub fn format_recurring_payments_table(recurring_payments: &[&RecurringPayment]) -> String {
    if recurring_payments.is_empty() {
        return "No recurring payments".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["Name", "Cadence", "Amount", "Debt", "Enabled", "ID"]);
    for recurring_payment in recurring_payments {
        table.add_row(vec![
            recurring_payment.name.clone(),
            recurring_payment.cadence.to_string(),
            recurring_payment.amount.to_string(),
            check(recurring_payment.debt),
            check(recurring_payment.enabled),
            recurring_payment.id.clone(),
        ]);
    }
    table.to_string()
}

// Single-quoted shell word
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

/// Payments across recurring payments, with the command loading the next page.
///
/// `scan_limit_reached` holds the scan limit when the name search stopped
/// there, in which case older matching payments may exist.
pub fn format_payments_screen(
    page: &Page<usize>,
    anchor: &NaiveDate,
    query: &NameQuery,
    scan_limit_reached: Option<usize>,
) -> String {
    let mut components = vec![
        title(&format!("Payments{} until {}", query_suffix(query), anchor)),
        format_payments_table(&page.payments),
    ];

    let query_argument = match query.as_str() {
        Some(query) => format!(" --query {}", shell_quote(query)),
        None => "".to_string(),
    };
    if let Some(next_size) = page.next {
        components.push(format!(
            "More payments: fin payments --size {}{} --anchor {}",
            next_size, query_argument, anchor
        ));
    } else if let Some(scan_limit) = scan_limit_reached {
        components.push(format!(
            "Search stopped after the latest {} payments, older matching payments may exist. Raise scan_limit in the vault settings to search further.",
            scan_limit
        ));
    }

    components.join("\n\n")
}

pub fn format_overview_screen(
    recurring_payments: &[&RecurringPayment],
    page: &Page<usize>,
    anchor: &NaiveDate,
    query: &NameQuery,
) -> String {
    let components = vec![
        title(&format!("Recurring payments{}", query_suffix(query))),
        format_recurring_payments_table(recurring_payments),
        format_payments_screen(page, anchor, &NameQuery::default(), None),
        format!("Release: {}", env!("RELEASE")),
    ];
    components.join("\n\n")
}

pub fn format_recurring_payment_screen(
    recurring_payment: &RecurringPayment,
    page: &Page<NaiveDate>,
) -> String {
    let yes_no = |value: bool| if value { "yes" } else { "no" };
    let mut components = vec![
        title(&recurring_payment.name),
        [
            format!("Cadence: {}", recurring_payment.cadence),
            format!("Amount: {}", recurring_payment.amount),
            format!("Debt: {}", yes_no(recurring_payment.debt)),
            format!("Enabled: {}", yes_no(recurring_payment.enabled)),
            format!("ID: {}", recurring_payment.id),
        ]
        .join("\n"),
    ];

    if page.payments.is_empty() {
        components.push("No payments".to_string());
    } else {
        let mut table = Table::new();
        table.set_header(vec!["Date", "Amount"]);
        for payment in page.payments.iter() {
            table.add_row(vec![
                payment.date.to_string(),
                payment.recurring_payment.amount.to_string(),
            ]);
        }
        components.push(table.to_string());
    }

    if let Some(since) = page.next {
        components.push(format!(
            "More payments: fin show {} --since {}",
            recurring_payment.id, since
        ));
    }

    components.join("\n\n")
}
