//! Invoice requests: payload, field validation and template merge data.
//!
//! A request carries one string per placeholder of the invoice template.
//! This module validates it the way the input form does (every field at
//! once, messages in Portuguese), fills in derived values and produces
//! the merge map and download file name for the document generator.
//!
//! # Example
//!
//! ```
//! use fatura_br::fatura::*;
//!
//! let body = r#"{
//!     "NUMERO_FATURA": "12",
//!     "ANO_FATURA": "2026",
//!     "DESTINATARIO_NOME": "ACME Ltda",
//!     "TIPO": "Honorários Mensais",
//!     "DESTINATARIO_CNPJ_CPF": "11.222.333/0001-81",
//!     "VALOR_NUMERICO": "1.500,50",
//!     "VALOR_EXTENSO": "mil e quinhentos reais e cinquenta centavos",
//!     "DATA_VENCIMENTO": "2026-01-15",
//!     "DESCRICAO": "Consultoria"
//! }"#;
//!
//! let fatura = Fatura::from_payload(FaturaPayload::from_json(body)?)?;
//! assert_eq!(fatura.vencimento_br(), "15/01/2026");
//! assert_eq!(fatura.attachment_filename(), "12_ACME_Ltda_jan.docx");
//! # Ok::<(), FaturaError>(())
//! ```

mod builder;
mod error;
mod filename;
mod payload;
mod types;
mod validation;

pub use builder::FaturaBuilder;
pub use error::{FaturaError, ValidationError};
pub use filename::{attachment_filename, safe_file_name};
pub use payload::FaturaPayload;
pub use types::Fatura;
pub use validation::validate_payload;
