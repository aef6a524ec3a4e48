use std::fs::File;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde_json::{from_reader, Value};

const CONFIG_FILE: &str = "config.json";

/// Directory holding the configuration and the store.
pub trait Vault {
    fn path(&self) -> &PathBuf;

    /// Value under `name` in the vault's `config.json`, `None` if the file
    /// or the key is absent.
    fn read_vault_values<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, String>;
}

pub struct VaultImpl {
    pub path: PathBuf,
}

impl Vault for VaultImpl {
    fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_vault_values<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, String> {
        let config_path = self.path.join(CONFIG_FILE);
        let file = match File::open(&config_path) {
            Ok(file) => file,
            Err(why) if why.kind() == ErrorKind::NotFound => return Ok(None),
            Err(why) => {
                return Err(format!(
                    "Could not read {}: {}",
                    config_path.display(),
                    why
                ))
            }
        };

        let mut config: Value = from_reader(file)
            .map_err(|why| format!("Could not parse {}: {}", config_path.display(), why))?;

        match config.get_mut(name).map(Value::take) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|why| format!("Could not read '{}' from the vault: {}", name, why)),
        }
    }
}

pub trait VaultReadable: DeserializeOwned + Default {
    const KEY: &'static str;

    fn from_vault<V: Vault>(vault: &V) -> Result<Self, String> {
        Ok(vault.read_vault_values(Self::KEY)?.unwrap_or_default())
    }
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use super::{Vault, VaultImpl, VaultReadable, CONFIG_FILE};
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use std::fs::write;
    use tempfile::tempdir;

    #[derive(Deserialize, Default, Debug, PartialEq)]
    struct Colour {
        name: String,
    }

    impl VaultReadable for Colour {
        const KEY: &'static str = "colour";
    }

    #[test]
    fn read_vault_values__nominal() {
        let directory = tempdir().unwrap();
        write(
            directory.path().join(CONFIG_FILE),
            r#"{"colour": {"name": "blue"}, "other": 3}"#,
        )
        .unwrap();
        let vault = VaultImpl {
            path: directory.path().to_path_buf(),
        };
        assert_eq!(
            Colour::from_vault(&vault).unwrap(),
            Colour {
                name: "blue".to_string()
            }
        );
        assert_eq!(vault.read_vault_values::<u8>("other").unwrap(), Some(3))
    }

    #[test]
    fn read_vault_values__missing_key() {
        let directory = tempdir().unwrap();
        write(directory.path().join(CONFIG_FILE), r#"{"other": 3}"#).unwrap();
        let vault = VaultImpl {
            path: directory.path().to_path_buf(),
        };
        assert_eq!(Colour::from_vault(&vault).unwrap(), Colour::default())
    }

    #[test]
    fn read_vault_values__missing_file() {
        let directory = tempdir().unwrap();
        let vault = VaultImpl {
            path: directory.path().to_path_buf(),
        };
        assert_eq!(vault.read_vault_values::<Colour>("colour").unwrap(), None)
    }

    #[test]
    fn read_vault_values__wrong_shape() {
        let directory = tempdir().unwrap();
        write(directory.path().join(CONFIG_FILE), r#"{"colour": 12}"#).unwrap();
        let vault = VaultImpl {
            path: directory.path().to_path_buf(),
        };
        assert!(Colour::from_vault(&vault)
            .unwrap_err()
            .starts_with("Could not read 'colour' from the vault"))
    }
}
