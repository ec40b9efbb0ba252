//! Currency codes and their minor-unit exponents.
//!
//! Only the ISO code and exponent are modeled here; exchange data is out of
//! scope for this crate.

use crate::error::{MonetizeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency known to the monetization layer
///
/// The exponent is the number of decimal digits between the major unit and
/// the stored subunit (2 for cents, 0 for yen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// United States dollar
    Usd,
    /// Euro
    Eur,
    /// Pound sterling
    Gbp,
    /// Japanese yen
    Jpy,
    /// Swiss franc
    Chf,
    /// Canadian dollar
    Cad,
    /// Australian dollar
    Aud,
    /// Danish krone
    Dkk,
    /// Swedish krona
    Sek,
    /// Norwegian krone
    Nok,
}

impl Currency {
    /// Look up a currency by its ISO code, case-insensitively
    pub fn from_code(code: &str) -> Result<Self> {
        match code.to_ascii_lowercase().as_str() {
            "usd" => Ok(Self::Usd),
            "eur" => Ok(Self::Eur),
            "gbp" => Ok(Self::Gbp),
            "jpy" => Ok(Self::Jpy),
            "chf" => Ok(Self::Chf),
            "cad" => Ok(Self::Cad),
            "aud" => Ok(Self::Aud),
            "dkk" => Ok(Self::Dkk),
            "sek" => Ok(Self::Sek),
            "nok" => Ok(Self::Nok),
            _ => Err(MonetizeError::UnknownCurrency(code.to_string())),
        }
    }

    /// The lowercase ISO code, as stored in a row currency column
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "usd",
            Self::Eur => "eur",
            Self::Gbp => "gbp",
            Self::Jpy => "jpy",
            Self::Chf => "chf",
            Self::Cad => "cad",
            Self::Aud => "aud",
            Self::Dkk => "dkk",
            Self::Sek => "sek",
            Self::Nok => "nok",
        }
    }

    /// Decimal digits between the major unit and the subunit
    #[must_use]
    pub const fn exponent(self) -> u32 {
        match self {
            Self::Jpy => 0,
            _ => 2,
        }
    }

    /// Subunits per major unit (10^exponent)
    #[must_use]
    pub const fn subunits_per_unit(self) -> i64 {
        10i64.pow(self.exponent())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code().to_ascii_uppercase())
    }
}
