//! Amounts and numbers in words ("valor por extenso").
//!
//! Brazilian invoices, receipts and contracts repeat the amount in full
//! words next to the figures. This module reads amounts written the
//! Brazilian way ("1.500,50") and spells them out in reais and centavos.
//!
//! # Example
//!
//! ```
//! use fatura_br::extenso::*;
//!
//! assert_eq!(
//!     amount_to_words("1.500,50"),
//!     "mil e quinhentos reais e cinquenta centavos"
//! );
//! assert_eq!(amount_to_words("0,01"), "um centavo");
//!
//! // Unreadable input renders as an empty string, never as "zero".
//! assert_eq!(amount_to_words("R$ abc"), "");
//!
//! assert_eq!(integer_to_words(1_001, Gender::Feminine).unwrap(), "mil e uma");
//! ```

mod amount;
mod words;

pub use amount::{
    AmountError, amount_to_words, decimal_to_words, format_amount, parse_amount,
    sanitize_amount_input,
};
pub use words::{Gender, MAX_WORDS_VALUE, integer_to_words};
