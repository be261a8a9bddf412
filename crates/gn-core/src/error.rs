//! Error types used throughout the crate.

use crate::theme::ThemeId;

/// Alias for `Result<T, GnError>`.
pub type GnResult<T> = Result<T, GnError>;

/// Errors that can occur when manipulating game state or catalogs.
#[derive(Debug, thiserror::Error)]
pub enum GnError {
    /// The requested theme id does not exist in the catalog.
    #[error("unknown theme: {0}")]
    UnknownTheme(ThemeId),

    /// The level index is outside the catalog bounds.
    #[error("level index {index} out of bounds (catalog has {len} levels)")]
    LevelOutOfBounds {
        /// The offending index.
        index: usize,
        /// Catalog length.
        len: usize,
    },

    /// Not enough money to buy a theme.
    #[error("insufficient funds: need {price}, have {balance}")]
    InsufficientFunds {
        /// Theme price.
        price: u32,
        /// Current balance.
        balance: u32,
    },
}
