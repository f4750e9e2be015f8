//! Escrow capability used by settlement and rejection.
//!
//! Both players' stakes are held by the escrow from game creation on. The
//! runtime only decides who receives the pool; debit and credit accounting
//! belong to the implementation.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identity::Identity;
use crate::types::Amount;

#[derive(Debug, Error)]
pub enum EscrowError {
    #[error("escrow lock was poisoned")]
    LockPoisoned,

    #[error("escrow refused to {kind} {amount}{denom} to {to}: {reason}")]
    Refused {
        kind: TransferKind,
        to: Identity,
        amount: Amount,
        denom: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, EscrowError>;

/// Moves escrowed funds out of the game pools.
///
/// The runtime hands over every transfer of one operation in a single batch.
/// A batch is all or nothing: when any transfer is refused, none of them may
/// have been executed and the enclosing operation fails as a whole.
pub trait Escrow: Send + Sync {
    fn execute(&self, batch: &[Transfer]) -> Result<()>;
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TransferKind {
    Pay,
    Refund,
}

/// A transfer decided by the runtime, executed once the operation commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub kind: TransferKind,
    pub to: Identity,
    pub amount: Amount,
    pub denom: String,
}

impl Transfer {
    pub fn pay(to: Identity, amount: Amount, denom: impl Into<String>) -> Self {
        Self {
            kind: TransferKind::Pay,
            to,
            amount,
            denom: denom.into(),
        }
    }

    pub fn refund(to: Identity, amount: Amount, denom: impl Into<String>) -> Self {
        Self {
            kind: TransferKind::Refund,
            to,
            amount,
            denom: denom.into(),
        }
    }
}

/// Escrow that records every transfer it is asked to make.
#[derive(Default)]
pub struct InMemoryEscrow {
    transfers: RwLock<Vec<Transfer>>,
}

impl InMemoryEscrow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all executed transfers (for testing/debugging).
    pub fn transfers(&self) -> Result<Vec<Transfer>> {
        let transfers = self
            .transfers
            .read()
            .map_err(|_| EscrowError::LockPoisoned)?;
        Ok(transfers.clone())
    }
}

impl Escrow for InMemoryEscrow {
    fn execute(&self, batch: &[Transfer]) -> Result<()> {
        let mut transfers = self
            .transfers
            .write()
            .map_err(|_| EscrowError::LockPoisoned)?;
        transfers.extend_from_slice(batch);
        Ok(())
    }
}
