use std::fs::{read_to_string, write};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::recurring_payment::{RecurringPayment, RecurringPaymentId};

const STORE_FILE: &str = "fin.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not serialize the store: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Recurring payment not found: {0}")]
    NotFound(RecurringPaymentId),
    #[error("A recurring payment already exists with id {0}")]
    DuplicateId(RecurringPaymentId),
}

#[derive(Default, Serialize, Deserialize)]
struct StoreContent {
    #[serde(default)]
    recurring_payments: Vec<RecurringPayment>,
}

/// Recurring payments kept in `fin.json` inside the vault.
pub struct FileStore {
    path: PathBuf,
}

#[cfg_attr(test, automock)]
impl FileStore {
    pub fn new(vault_path: &Path) -> Self {
        Self {
            path: vault_path.join(STORE_FILE),
        }
    }

    pub fn recurring_payments(&self) -> Result<Vec<RecurringPayment>, StoreError> {
        Ok(read_content(&self.path)?.recurring_payments)
    }

    pub fn recurring_payment(&self, id: &str) -> Result<RecurringPayment, StoreError> {
        read_content(&self.path)?
            .recurring_payments
            .into_iter()
            .find(|recurring_payment| recurring_payment.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub fn create_recurring_payment(
        &self,
        recurring_payment: RecurringPayment,
    ) -> Result<(), StoreError> {
        let mut content = read_content(&self.path)?;
        if content
            .recurring_payments
            .iter()
            .any(|existing| existing.id == recurring_payment.id)
        {
            return Err(StoreError::DuplicateId(recurring_payment.id));
        }
        info!(id = %recurring_payment.id, name = %recurring_payment.name, "creating recurring payment");
        content.recurring_payments.push(recurring_payment);
        write_content(&self.path, &content)
    }
}

fn read_content(path: &Path) -> Result<StoreContent, StoreError> {
    let raw = match read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no store file yet, starting empty");
            return Ok(StoreContent::default());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn write_content(path: &Path, content: &StoreContent) -> Result<(), StoreError> {
    let raw = serde_json::to_string_pretty(content)?;
    write(path, raw).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::prelude::*;
    use std::path::Path;

    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tempfile::{tempdir, TempDir};

    use super::{FileStore, StoreError, STORE_FILE};
    use crate::amounts::Amount;
    use crate::cadence::{AnyCadence, MonthlyCadence, WeeklyCadence};
    use crate::recurring_payment::fixtures::monthly;
    use crate::recurring_payment::RecurringPayment;

    fn create_store_file(directory: &TempDir, content: &str) {
        let path = Path::join(directory.path(), STORE_FILE);
        let mut file = File::create(path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn recurring_payments__nominal() {
        let directory = tempdir().unwrap();
        create_store_file(
            &directory,
            r#"{
"recurring_payments": [
    {
        "id": "0b9c",
        "name": "Rent",
        "enabled": true,
        "debt": false,
        "cadence": {"type": "monthly", "day_of_month": 1},
        "amount": {"currency": "EUR", "figure": "950.00"}
    },
    {
        "id": "77aa",
        "name": "Car loan",
        "enabled": false,
        "debt": true,
        "cadence": {"type": "weekly", "weekday": "Mon", "every_weeks": 2, "start_date": "2024-01-01"},
        "amount": {"currency": "JPY", "figure": "12000"}
    }
]
}"#,
        );

        let store = FileStore::new(directory.path());
        assert_eq!(
            store.recurring_payments().unwrap(),
            vec![
                RecurringPayment {
                    id: "0b9c".to_string(),
                    name: "Rent".to_string(),
                    enabled: true,
                    debt: false,
                    cadence: AnyCadence::Monthly(MonthlyCadence {
                        day_of_month: 1,
                        every_months: 1,
                        start_date: None,
                    }),
                    amount: Amount {
                        currency: "EUR".to_string(),
                        figure: dec!(950.00),
                    },
                },
                RecurringPayment {
                    id: "77aa".to_string(),
                    name: "Car loan".to_string(),
                    enabled: false,
                    debt: true,
                    cadence: AnyCadence::Weekly(WeeklyCadence {
                        weekday: chrono::Weekday::Mon,
                        every_weeks: 2,
                        start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
                    }),
                    amount: Amount {
                        currency: "JPY".to_string(),
                        figure: dec!(12000),
                    },
                },
            ]
        )
    }

    #[test]
    fn recurring_payments__missing_file_is_empty() {
        let directory = tempdir().unwrap();
        let store = FileStore::new(directory.path());
        assert_eq!(store.recurring_payments().unwrap(), Vec::<RecurringPayment>::new())
    }

    #[test]
    fn recurring_payments__invalid_json() {
        let directory = tempdir().unwrap();
        create_store_file(&directory, "{ not json");
        let store = FileStore::new(directory.path());
        assert!(matches!(
            store.recurring_payments(),
            Err(StoreError::Parse { .. })
        ))
    }

    #[test]
    fn recurring_payment__not_found() {
        let directory = tempdir().unwrap();
        let store = FileStore::new(directory.path());
        assert_eq!(
            store.recurring_payment("nope").unwrap_err().to_string(),
            "Recurring payment not found: nope"
        )
    }

    #[test]
    fn create_recurring_payment__then_read_back() {
        let directory = tempdir().unwrap();
        let store = FileStore::new(directory.path());
        store.create_recurring_payment(monthly("a", "Rent", 1)).unwrap();
        store.create_recurring_payment(monthly("b", "Gym", 15)).unwrap();

        assert_eq!(store.recurring_payment("b").unwrap(), monthly("b", "Gym", 15));
        assert_eq!(store.recurring_payments().unwrap().len(), 2)
    }

    #[test]
    fn create_recurring_payment__duplicate_id() {
        let directory = tempdir().unwrap();
        let store = FileStore::new(directory.path());
        store.create_recurring_payment(monthly("a", "Rent", 1)).unwrap();

        assert!(matches!(
            store.create_recurring_payment(monthly("a", "Other", 2)),
            Err(StoreError::DuplicateId(id)) if id == "a"
        ));
        assert_eq!(store.recurring_payments().unwrap().len(), 1)
    }
}
