//! Supported ledgers (projects) that can be analyzed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// A blockchain project whose block production can be analyzed.
///
/// # Examples
///
/// ```
/// use decentra_core::ledger::Ledger;
/// let ledger: Ledger = "Bitcoin_Cash".parse().unwrap();
/// assert_eq!(ledger, Ledger::BitcoinCash);
/// assert_eq!(ledger.as_str(), "bitcoin_cash");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ledger {
    Bitcoin,
    BitcoinCash,
    Cardano,
    Dash,
    Dogecoin,
    Ethereum,
    Litecoin,
    Tezos,
    Zcash,
}

impl Ledger {
    /// Every supported ledger, in alphabetical order.
    pub const ALL: [Ledger; 9] = [
        Ledger::Bitcoin,
        Ledger::BitcoinCash,
        Ledger::Cardano,
        Ledger::Dash,
        Ledger::Dogecoin,
        Ledger::Ethereum,
        Ledger::Litecoin,
        Ledger::Tezos,
        Ledger::Zcash,
    ];

    /// Lower-case identifier, also used as the ledger's directory name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bitcoin => "bitcoin",
            Self::BitcoinCash => "bitcoin_cash",
            Self::Cardano => "cardano",
            Self::Dash => "dash",
            Self::Dogecoin => "dogecoin",
            Self::Ethereum => "ethereum",
            Self::Litecoin => "litecoin",
            Self::Tezos => "tezos",
            Self::Zcash => "zcash",
        }
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ledger {
    type Err = LedgerError;

    /// Case-insensitive lookup by identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == lower)
            .ok_or_else(|| LedgerError::UnknownLedger(s.to_string()))
    }
}
