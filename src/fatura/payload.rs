use serde::{Deserialize, Serialize};

use super::error::FaturaError;
use crate::documento::{DocumentKind, extract_digits};

/// Invoice request as submitted by the form, one string per template field.
///
/// Field names on the wire are the template placeholders themselves
/// (`NUMERO_FATURA`, `VALOR_EXTENSO`, ...). Missing fields deserialize as
/// empty strings so validation can report them all at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct FaturaPayload {
    /// Invoice number, digits only in the form (up to 10).
    pub numero_fatura: String,
    /// Four-digit invoice year.
    pub ano_fatura: String,
    /// Recipient name.
    pub destinatario_nome: String,
    /// Fee category, e.g. "Honorários Mensais".
    pub tipo: String,
    /// Recipient CPF or CNPJ, masked or bare.
    #[serde(rename = "DESTINATARIO_CNPJ_CPF")]
    pub destinatario_documento: String,
    /// Amount in Brazilian notation ("1.500,50").
    pub valor_numerico: String,
    /// Amount in words.
    pub valor_extenso: String,
    /// Due date, `YYYY-MM-DD` or `DD/MM/YYYY`.
    pub data_vencimento: String,
    /// Service description.
    pub descricao: String,
}

impl FaturaPayload {
    /// Parse a JSON request body.
    pub fn from_json(json: &str) -> Result<Self, FaturaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize as a JSON request body.
    pub fn to_json(&self) -> Result<String, FaturaError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Identifier kind implied by the number of digits in the recipient
    /// document: 14 is a CNPJ, anything else is treated as a CPF.
    pub fn document_kind(&self) -> DocumentKind {
        if extract_digits(&self.destinatario_documento).len() == DocumentKind::Cnpj.max_len() {
            DocumentKind::Cnpj
        } else {
            DocumentKind::Cpf
        }
    }
}
