//! CPF and CNPJ taxpayer identifiers: check-digit validation and display masks.
//!
//! Both identifiers end in two modulo-11 verification digits. Input is
//! accepted in any punctuation (`529.982.247-25`, `52998224725`, ...);
//! non-digit characters are always stripped first.
//!
//! # Example
//!
//! ```
//! use fatura_br::documento::*;
//!
//! assert!(validate_cpf("529.982.247-25"));
//! assert!(validate_document("11222333000181", DocumentKind::Cnpj));
//!
//! assert_eq!(format_document("11222333000181", DocumentKind::Cnpj), "11.222.333/0001-81");
//! assert_eq!(extract_digits("11.222.333/0001-81"), "11222333000181");
//! ```

mod format;
mod validate;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use format::{clamp_digits, extract_digits, format_document, max_length};
pub use validate::{
    DocumentError, check_digits, check_document, validate_cnpj, validate_cpf, validate_document,
};

/// Which Brazilian taxpayer identifier a value represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas: individuals, 11 digits.
    #[default]
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica: companies, 14 digits.
    Cnpj,
}

impl DocumentKind {
    /// Number of digits in a complete identifier of this kind.
    pub const fn max_len(self) -> usize {
        match self {
            DocumentKind::Cpf => 11,
            DocumentKind::Cnpj => 14,
        }
    }

    /// Upper-case display label ("CPF" / "CNPJ").
    pub const fn label(self) -> &'static str {
        match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
        }
    }

    /// Mask shown for an empty input field.
    pub const fn placeholder(self) -> &'static str {
        match self {
            DocumentKind::Cpf => "000.000.000-00",
            DocumentKind::Cnpj => "00.000.000/0000-00",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentKind {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpf" => Ok(DocumentKind::Cpf),
            "cnpj" => Ok(DocumentKind::Cnpj),
            _ => Err(DocumentError::UnknownKind(s.to_string())),
        }
    }
}
