use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::FaturaError;
use super::payload::FaturaPayload;
use super::types::Fatura;
use crate::documento::{DocumentKind, clamp_digits};
use crate::extenso::{amount_to_words, format_amount};

/// Builder for invoice requests.
///
/// The amount in words is derived from the amount unless set explicitly,
/// and the recipient document is stored as bare digits.
///
/// ```
/// use fatura_br::fatura::*;
/// use fatura_br::documento::DocumentKind;
///
/// let fatura = FaturaBuilder::new("12", "2026")
///     .destinatario("João da Silva", "529.982.247-25", DocumentKind::Cpf)
///     .tipo("Honorários Mensais")
///     .valor("1.500,50")
///     .vencimento("2026-01-15")
///     .descricao("Consultoria jurídica")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     fatura.payload().valor_extenso,
///     "mil e quinhentos reais e cinquenta centavos"
/// );
/// assert_eq!(fatura.attachment_filename(), "12_João_da_Silva_jan.docx");
/// ```
#[derive(Debug, Clone)]
pub struct FaturaBuilder {
    numero: String,
    ano: String,
    destinatario: Option<(String, String, DocumentKind)>,
    tipo: String,
    valor: Option<String>,
    valor_extenso: Option<String>,
    vencimento: Option<String>,
    descricao: String,
}

impl FaturaBuilder {
    pub fn new(numero: impl Into<String>, ano: impl Into<String>) -> Self {
        Self {
            numero: numero.into(),
            ano: ano.into(),
            destinatario: None,
            tipo: String::new(),
            valor: None,
            valor_extenso: None,
            vencimento: None,
            descricao: String::new(),
        }
    }

    /// Recipient name and CPF/CNPJ (any punctuation).
    pub fn destinatario(
        mut self,
        nome: impl Into<String>,
        documento: &str,
        kind: DocumentKind,
    ) -> Self {
        self.destinatario = Some((nome.into(), clamp_digits(documento, kind), kind));
        self
    }

    pub fn tipo(mut self, tipo: impl Into<String>) -> Self {
        self.tipo = tipo.into();
        self
    }

    /// Amount in Brazilian notation ("1.500,50").
    pub fn valor(mut self, valor: impl Into<String>) -> Self {
        self.valor = Some(valor.into());
        self
    }

    /// Amount as a decimal; stored in Brazilian notation.
    pub fn valor_decimal(mut self, valor: Decimal) -> Self {
        self.valor = Some(format_amount(valor));
        self
    }

    /// Override the amount in words derived from the amount.
    pub fn valor_extenso(mut self, extenso: impl Into<String>) -> Self {
        self.valor_extenso = Some(extenso.into());
        self
    }

    /// Due date as typed (`YYYY-MM-DD` or `DD/MM/YYYY`).
    pub fn vencimento(mut self, data: impl Into<String>) -> Self {
        self.vencimento = Some(data.into());
        self
    }

    pub fn vencimento_date(mut self, data: NaiveDate) -> Self {
        self.vencimento = Some(data.format("%Y-%m-%d").to_string());
        self
    }

    pub fn descricao(mut self, descricao: impl Into<String>) -> Self {
        self.descricao = descricao.into();
        self
    }

    /// Build and validate the request.
    pub fn build(self) -> Result<Fatura, FaturaError> {
        let (payload, kind) = self.into_payload()?;
        Fatura::with_kind(payload, kind)
    }

    /// Build without field validation, for previews of a half-filled form.
    ///
    /// Destinatario, valor and vencimento must still be set.
    pub fn build_unchecked(self) -> Result<Fatura, FaturaError> {
        let (payload, kind) = self.into_payload()?;
        Ok(Fatura::unchecked(payload, kind))
    }

    fn into_payload(self) -> Result<(FaturaPayload, DocumentKind), FaturaError> {
        let (nome, documento, kind) = self
            .destinatario
            .ok_or_else(|| FaturaError::Builder("destinatario is required".into()))?;
        let valor = self
            .valor
            .ok_or_else(|| FaturaError::Builder("valor is required".into()))?;
        let vencimento = self
            .vencimento
            .ok_or_else(|| FaturaError::Builder("vencimento is required".into()))?;

        let valor_extenso = self
            .valor_extenso
            .unwrap_or_else(|| amount_to_words(&valor));

        let payload = FaturaPayload {
            numero_fatura: self.numero,
            ano_fatura: self.ano,
            destinatario_nome: nome,
            tipo: self.tipo,
            destinatario_documento: documento,
            valor_numerico: valor,
            valor_extenso,
            data_vencimento: vencimento,
            descricao: self.descricao,
        };
        Ok((payload, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn builder() -> FaturaBuilder {
        FaturaBuilder::new("12", "2026")
            .destinatario("ACME Ltda", "11.222.333/0001-81", DocumentKind::Cnpj)
            .tipo("Honorários de Êxito")
            .vencimento("2026-03-10")
            .descricao("Êxito em ação trabalhista")
    }

    #[test]
    fn derives_words_from_amount() {
        let fatura = builder().valor("2.000").build().unwrap();
        assert_eq!(fatura.payload().valor_extenso, "dois mil reais");
    }

    #[test]
    fn explicit_words_win() {
        let fatura = builder()
            .valor("2.000")
            .valor_extenso("dois mil reais (valor bruto)")
            .build()
            .unwrap();
        assert_eq!(fatura.payload().valor_extenso, "dois mil reais (valor bruto)");
    }

    #[test]
    fn decimal_amount_formatted() {
        let fatura = builder().valor_decimal(dec!(1234.5)).build().unwrap();
        assert_eq!(fatura.payload().valor_numerico, "1.234,50");
        assert_eq!(
            fatura.payload().valor_extenso,
            "mil e duzentos e trinta e quatro reais e cinquenta centavos"
        );
    }

    #[test]
    fn document_stored_as_digits() {
        let fatura = builder().valor("10").build().unwrap();
        assert_eq!(fatura.payload().destinatario_documento, "11222333000181");
    }

    #[test]
    fn typed_due_date() {
        let date = NaiveDate::from_ymd_opt(2026, 11, 5).unwrap();
        let fatura = builder().valor("10").vencimento_date(date).build().unwrap();
        assert_eq!(fatura.payload().data_vencimento, "2026-11-05");
        assert_eq!(fatura.vencimento_br(), "05/11/2026");
    }

    #[test]
    fn missing_recipient_is_builder_error() {
        let err = FaturaBuilder::new("1", "2026")
            .valor("10")
            .vencimento("2026-01-01")
            .build()
            .unwrap_err();
        assert!(matches!(err, FaturaError::Builder(_)));
    }

    #[test]
    fn unreadable_amount_fails_validation() {
        let err = builder().valor("dez reais").build().unwrap_err();
        let FaturaError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["VALOR_NUMERICO", "VALOR_EXTENSO"]);
    }

    #[test]
    fn unchecked_skips_validation() {
        let fatura = FaturaBuilder::new("", "")
            .destinatario("", "", DocumentKind::Cpf)
            .valor("")
            .vencimento("")
            .build_unchecked()
            .unwrap();
        assert_eq!(fatura.payload().valor_extenso, "");
    }
}
