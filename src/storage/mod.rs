//! Storage layer for BudgeIt
//!
//! One account per JSON file, written atomically. The codec knows the file
//! shape; `AccountStore` knows where the file lives.

pub mod codec;
pub mod file_io;

pub use codec::{decode, encode, AccountDocument};
pub use file_io::{read_text_optional, write_text_atomic};

use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Account;

/// Reads and writes a single account file
#[derive(Debug, Clone)]
pub struct AccountStore {
    path: PathBuf,
}

impl AccountStore {
    /// Create a store for the account file at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether an account has been saved here
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the account, or `None` if nothing has been saved yet
    pub fn load(&self) -> LedgerResult<Option<Account>> {
        match read_text_optional(&self.path)? {
            Some(json) => decode(&json)
                .map(Some)
                .map_err(|e| match e {
                    LedgerError::MalformedAccountFile(msg) => LedgerError::MalformedAccountFile(
                        format!("{}: {}", self.path.display(), msg),
                    ),
                    other => other,
                }),
            None => Ok(None),
        }
    }

    /// Save the account, replacing any previous file atomically
    pub fn save(&self, account: &Account) -> LedgerResult<()> {
        let json = encode(account)?;
        write_text_atomic(&self.path, &json)
    }
}
