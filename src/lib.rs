//! # fatura-br
//!
//! Brazilian invoice text processing: CPF/CNPJ check digits and masks,
//! amounts in words ("valor por extenso"), and dates in Brazilian
//! notation.
//!
//! Every function is pure and deterministic. Invalid input never panics:
//! predicates return `false`, text functions return an empty string (or
//! the input unchanged, for dates), and the `Result`-returning variants
//! say why. Monetary values use [`rust_decimal::Decimal`], never floating
//! point.
//!
//! ## Quick Start
//!
//! ```rust
//! use fatura_br::*;
//!
//! assert!(validate_cpf("529.982.247-25"));
//! assert_eq!(format_document("11222333000181", DocumentKind::Cnpj), "11.222.333/0001-81");
//!
//! assert_eq!(
//!     amount_to_words("1.500,50"),
//!     "mil e quinhentos reais e cinquenta centavos"
//! );
//!
//! assert_eq!(iso_to_brazilian_date("2026-01-15"), "15/01/2026");
//! assert_eq!(month_year_label("2026-01-15"), "janeiro/2026");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `documento` (default) | CPF/CNPJ validation and masks |
//! | `extenso` (default) | Amounts and numbers in words |
//! | `data` (default) | Brazilian dates, month names |
//! | `fatura` | Invoice request payload, validation, template merge fields |
//! | `all` | Everything |

#[cfg(feature = "documento")]
pub mod documento;

#[cfg(feature = "extenso")]
pub mod extenso;

#[cfg(feature = "data")]
pub mod data;

#[cfg(feature = "fatura")]
pub mod fatura;

// Re-export the leaf modules at crate root for convenience
#[cfg(feature = "documento")]
pub use crate::documento::*;

#[cfg(feature = "extenso")]
pub use crate::extenso::*;

#[cfg(feature = "data")]
pub use crate::data::*;
