//! The current account and its lifecycle
//!
//! A `Session` owns exactly one account at a time together with the file it
//! is saved to and the event log. Commands go through `execute`, which
//! applies the session's settings and records what changed. A change is
//! committed only after its event log entry has been written.

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{BudgeitPaths, Settings};
use crate::error::{LedgerError, LedgerResult};
use crate::models::Account;
use crate::storage::AccountStore;

use super::command::{Command, CommandOutcome};

pub struct Session {
    account: Account,
    store: AccountStore,
    logger: Option<AuditLogger>,
    settings: Settings,
}

impl Session {
    /// Start a session on a fresh account
    ///
    /// Nothing is read from `store` until `load` is called.
    pub fn new(store: AccountStore, logger: Option<AuditLogger>, settings: Settings) -> Self {
        Self {
            account: Account::new(),
            store,
            logger,
            settings,
        }
    }

    /// Start a session on a fresh account using the configured paths
    pub fn for_paths(paths: &BudgeitPaths, settings: Settings) -> Self {
        let store = AccountStore::new(paths.account_file());
        let logger = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.event_log()));
        Self::new(store, logger, settings)
    }

    /// Open the session for the configured paths, starting from the saved
    /// account if one exists
    pub fn open(paths: &BudgeitPaths, settings: Settings) -> LedgerResult<Self> {
        let mut session = Self::for_paths(paths, settings);
        if let Some(account) = session.store.load()? {
            session.account = account;
        }
        Ok(session)
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    /// The event log, if logging is enabled
    pub fn logger(&self) -> Option<&AuditLogger> {
        self.logger.as_ref()
    }

    /// Reload the account from disk
    ///
    /// Returns `false` if there is no saved account. On any failure the
    /// current account is kept.
    pub fn load(&mut self) -> LedgerResult<bool> {
        let Some(account) = self.store.load()? else {
            return Ok(false);
        };

        self.record(AuditEntry::update(
            EntityType::Account,
            None,
            format!("loaded from {}", self.store.path().display()),
        ))?;
        self.account = account;
        Ok(true)
    }

    /// Swap in another account, returning the previous one
    pub fn replace(&mut self, account: Account) -> Account {
        std::mem::replace(&mut self.account, account)
    }

    /// Write the current account to disk
    pub fn save(&self) -> LedgerResult<()> {
        self.store.save(&self.account)?;
        self.record(AuditEntry::update(
            EntityType::Account,
            None,
            format!("saved to {}", self.store.path().display()),
        ))
    }

    /// Start over with an empty account; nothing is written until `save`
    pub fn reset(&mut self) -> LedgerResult<()> {
        self.record(AuditEntry::delete(
            EntityType::Account,
            None,
            "reset to an empty account",
        ))?;
        self.account = Account::new();
        Ok(())
    }

    /// Apply a command to the current account
    ///
    /// Rejected commands and name-lookup misses leave the account untouched
    /// and are not logged. If the log entry cannot be written the command
    /// is not applied.
    pub fn execute(&mut self, command: &Command) -> LedgerResult<CommandOutcome> {
        self.check_policy(command)?;

        let mut next = self.account.clone();
        let outcome = command.apply_with_symbol(&mut next, &self.settings.currency_symbol)?;
        if outcome.is_applied() {
            self.record(command.audit_entry(&next))?;
            self.account = next;
        }
        Ok(outcome)
    }

    fn check_policy(&self, command: &Command) -> LedgerResult<()> {
        if let Command::WithdrawBalance(amount) = command {
            let available = self.account.balance();
            if !self.settings.allow_negative_balance && *amount > available {
                return Err(LedgerError::ExceedsBalance {
                    requested: *amount,
                    available,
                });
            }
        }
        Ok(())
    }

    fn record(&self, entry: AuditEntry) -> LedgerResult<()> {
        match &self.logger {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }
}
