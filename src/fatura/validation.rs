use rust_decimal::Decimal;

use super::error::ValidationError;
use super::payload::FaturaPayload;
use crate::documento::{DocumentError, DocumentKind, check_document, extract_digits};
use crate::extenso::parse_amount;

/// Validate an invoice request.
/// Returns all field errors found (not just the first).
///
/// `kind` is the identifier type selected in the form; the recipient
/// document is checked for that kind's length and check digits.
pub fn validate_payload(payload: &FaturaPayload, kind: DocumentKind) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    required(
        &mut errors,
        "NUMERO_FATURA",
        &payload.numero_fatura,
        "Número da fatura é obrigatório.",
    );

    let ano = payload.ano_fatura.trim();
    if ano.is_empty() {
        errors.push(ValidationError::new("ANO_FATURA", "Ano da fatura é obrigatório."));
    } else if ano.len() != 4 || !ano.chars().all(|c| c.is_ascii_digit()) {
        errors.push(ValidationError::new("ANO_FATURA", "Ano deve ter 4 dígitos."));
    }

    required(
        &mut errors,
        "DATA_VENCIMENTO",
        &payload.data_vencimento,
        "Vencimento é obrigatório.",
    );
    required(&mut errors, "TIPO", &payload.tipo, "Tipo é obrigatório.");

    validate_documento(&payload.destinatario_documento, kind, &mut errors);

    required(
        &mut errors,
        "DESTINATARIO_NOME",
        &payload.destinatario_nome,
        "Nome do destinatário é obrigatório.",
    );

    if payload.valor_numerico.trim().is_empty() {
        errors.push(ValidationError::new("VALOR_NUMERICO", "Valor é obrigatório."));
    } else if !parse_amount(&payload.valor_numerico).is_ok_and(|v| v > Decimal::ZERO) {
        errors.push(ValidationError::new(
            "VALOR_NUMERICO",
            "Informe um valor numérico válido.",
        ));
    }

    required(
        &mut errors,
        "VALOR_EXTENSO",
        &payload.valor_extenso,
        "Valor por extenso é obrigatório.",
    );
    required(
        &mut errors,
        "DESCRICAO",
        &payload.descricao,
        "Descrição é obrigatória.",
    );

    errors
}

fn required(errors: &mut Vec<ValidationError>, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, message));
    }
}

fn validate_documento(value: &str, kind: DocumentKind, errors: &mut Vec<ValidationError>) {
    const FIELD: &str = "DESTINATARIO_CNPJ_CPF";

    if extract_digits(value).is_empty() {
        errors.push(ValidationError::new(FIELD, "Documento é obrigatório."));
        return;
    }
    match check_document(value, kind) {
        Ok(_) => {}
        Err(DocumentError::WrongLength { expected, .. }) => errors.push(ValidationError::new(
            FIELD,
            format!("{kind} deve ter {expected} dígitos."),
        )),
        Err(_) => errors.push(ValidationError::new(FIELD, format!("{kind} inválido."))),
    }
}
