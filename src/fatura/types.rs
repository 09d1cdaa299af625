use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::FaturaError;
use super::filename;
use super::payload::FaturaPayload;
use super::validation::validate_payload;
use crate::data::{iso_to_brazilian_date, month_year_label};
use crate::documento::{DocumentKind, format_document};

/// A validated invoice request, ready to be merged into a document template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fatura {
    payload: FaturaPayload,
    kind: DocumentKind,
}

impl Fatura {
    /// Validate a submitted payload, inferring CPF or CNPJ from the number
    /// of digits in the recipient document.
    pub fn from_payload(payload: FaturaPayload) -> Result<Self, FaturaError> {
        let kind = payload.document_kind();
        Self::with_kind(payload, kind)
    }

    /// Validate a submitted payload against an explicit identifier kind.
    pub fn with_kind(payload: FaturaPayload, kind: DocumentKind) -> Result<Self, FaturaError> {
        let errors = validate_payload(&payload, kind);
        if !errors.is_empty() {
            debug!(
                numero = %payload.numero_fatura,
                errors = errors.len(),
                "invoice request rejected"
            );
            return Err(FaturaError::Validation(errors));
        }
        Ok(Self { payload, kind })
    }

    /// Wrap a payload without validating it.
    pub fn unchecked(payload: FaturaPayload, kind: DocumentKind) -> Self {
        Self { payload, kind }
    }

    pub fn payload(&self) -> &FaturaPayload {
        &self.payload
    }

    pub fn into_payload(self) -> FaturaPayload {
        self.payload
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Recipient document with its display mask.
    pub fn documento_formatado(&self) -> String {
        format_document(&self.payload.destinatario_documento, self.kind)
    }

    /// Due date as `DD/MM/YYYY`. Dates already in that form are kept.
    pub fn vencimento_br(&self) -> String {
        localize_due_date(&self.payload.data_vencimento)
    }

    /// Reference month of the due date ("janeiro/2026").
    pub fn mes_referencia(&self) -> String {
        month_year_label(&self.payload.data_vencimento)
    }

    /// Template placeholders and their values, in template order.
    pub fn merge_fields(&self) -> Vec<(&'static str, String)> {
        let p = &self.payload;
        vec![
            ("NUMERO_FATURA", p.numero_fatura.trim().to_string()),
            ("ANO_FATURA", p.ano_fatura.trim().to_string()),
            ("DESTINATARIO_NOME", p.destinatario_nome.trim().to_string()),
            ("TIPO", p.tipo.trim().to_string()),
            ("DESTINATARIO_CNPJ_CPF", self.documento_formatado()),
            ("VALOR_NUMERICO", p.valor_numerico.trim().to_string()),
            ("VALOR_EXTENSO", p.valor_extenso.trim().to_string()),
            ("DATA_VENCIMENTO", self.vencimento_br()),
            ("DESCRICAO", p.descricao.trim().to_string()),
        ]
    }

    /// File name for the generated document (`12_João_da_Silva_jan.docx`).
    pub fn attachment_filename(&self) -> String {
        filename::attachment_filename(
            &self.payload.numero_fatura,
            &self.payload.destinatario_nome,
            &self.payload.data_vencimento,
        )
    }
}

/// Only `YYYY-MM-DD`-shaped dates are reordered; anything else (already
/// `DD/MM/YYYY`, or free text) is kept as typed.
fn localize_due_date(date: &str) -> String {
    let trimmed = date.trim();
    let iso_shaped = trimmed
        .split(['-', '/'])
        .next()
        .is_some_and(|year| year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()));
    if iso_shaped {
        iso_to_brazilian_date(trimmed)
    } else {
        trimmed.to_string()
    }
}
