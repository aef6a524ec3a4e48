use chrono::NaiveDate;
use mockall_double::double;
use tracing::{debug, info};
use uuid::Uuid;

use crate::amounts::Amount;
use crate::cadence::AnyCadence;
use crate::cli::formatting::{
    format_overview_screen, format_payments_screen, format_recurring_payment_screen,
};
use crate::pagination::{by_since, by_size, fetch_size};
use crate::query::NameQuery;
use crate::recurring_payment::{RecurringPayment, RecurringPaymentBuilder};
use crate::schedule::{payments_since_n, payments_since_n_filter_scanning};
use crate::settings::Settings;
#[double]
use crate::store::FileStore;

pub fn overview(
    store: &FileStore,
    settings: &Settings,
    anchor: NaiveDate,
    query: &NameQuery,
) -> Result<String, String> {
    let recurring_payments = store.recurring_payments().map_err(|e| e.to_string())?;

    let payments = payments_since_n(&recurring_payments, anchor, fetch_size(settings.page_size))
        .map_err(|e| e.to_string())?;
    let page = by_size(payments, settings.page_size, settings.page_step);

    let listed: Vec<&RecurringPayment> = recurring_payments
        .iter()
        .filter(|recurring_payment| query.matches(recurring_payment))
        .collect();

    Ok(format_overview_screen(&listed, &page, &anchor, query))
}

pub fn payments(
    store: &FileStore,
    settings: &Settings,
    anchor: NaiveDate,
    size: usize,
    query: &NameQuery,
) -> Result<String, String> {
    let recurring_payments = store.recurring_payments().map_err(|e| e.to_string())?;

    let (payments, scan_limit_reached) = if query.as_str().is_none() {
        let payments = payments_since_n(&recurring_payments, anchor, fetch_size(size))
            .map_err(|e| e.to_string())?;
        (payments, None)
    } else {
        let scanned = payments_since_n_filter_scanning(
            &recurring_payments,
            anchor,
            fetch_size(size),
            settings.scan_limit,
            |payment| query.matches_payment(payment),
        )
        .map_err(|e| e.to_string())?;
        let reached = scanned.limit_reached.then_some(settings.scan_limit);
        (scanned.payments, reached)
    };
    debug!(size, found = payments.len(), "payments fetched");
    let page = by_size(payments, size, settings.page_step);

    Ok(format_payments_screen(
        &page,
        &anchor,
        query,
        scan_limit_reached,
    ))
}

pub fn show(
    store: &FileStore,
    settings: &Settings,
    id: &str,
    since: NaiveDate,
) -> Result<String, String> {
    let recurring_payment = store.recurring_payment(id).map_err(|e| e.to_string())?;

    let payments = recurring_payment
        .payments_since_n(since, fetch_size(settings.detail_page_size))
        .map_err(|e| e.to_string())?;
    let page = by_since(payments, settings.detail_page_size);

    Ok(format_recurring_payment_screen(&recurring_payment, &page))
}

pub struct NewRecurringPayment {
    pub name: String,
    pub cadence: AnyCadence,
    pub amount: Amount,
    pub debt: bool,
    pub enabled: bool,
}

pub fn create(store: &FileStore, new: NewRecurringPayment) -> Result<String, String> {
    let recurring_payment: RecurringPayment = RecurringPaymentBuilder::default()
        .id(Uuid::new_v4().to_string())
        .name(new.name)
        .cadence(new.cadence)
        .amount(new.amount)
        .debt(new.debt)
        .enabled(new.enabled)
        .build()
        .map_err(|e| e.to_string())?;
    let message = format!(
        "Created recurring payment {} ({})",
        recurring_payment.name, recurring_payment.id
    );

    store
        .create_recurring_payment(recurring_payment)
        .map_err(|e| e.to_string())?;
    info!("{}", message);
    Ok(message)
}
