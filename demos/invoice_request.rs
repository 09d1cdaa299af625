use fatura_br::documento::DocumentKind;
use fatura_br::fatura::*;

fn main() -> Result<(), FaturaError> {
    // Incoming request from the invoice form.
    let json = r#"{
        "NUMERO_FATURA": "42",
        "ANO_FATURA": "2026",
        "DESTINATARIO_NOME": "Construtora Horizonte Ltda",
        "TIPO": "Honorários Mensais",
        "DESTINATARIO_CNPJ_CPF": "11.222.333/0001-81",
        "VALOR_NUMERICO": "3.250,00",
        "VALOR_EXTENSO": "três mil e duzentos e cinquenta reais",
        "DATA_VENCIMENTO": "2026-02-10",
        "DESCRICAO": "Assessoria contratual de fevereiro"
    }"#;

    let fatura = Fatura::from_payload(FaturaPayload::from_json(json)?)?;

    println!("=== Merge Fields ({}) ===\n", fatura.kind());
    for (key, value) in fatura.merge_fields() {
        println!("  {key:<22} {value}");
    }
    println!("\n  Reference month: {}", fatura.mes_referencia());
    println!("  Attachment:      {}", fatura.attachment_filename());

    // Same request, built in code.
    let built = FaturaBuilder::new("43", "2026")
        .destinatario("Maria José Côrtes", "52998224725", DocumentKind::Cpf)
        .tipo("Honorários Spot")
        .valor("780,35")
        .vencimento("2026-03-05")
        .descricao("Parecer")
        .build()?;
    println!("\n=== Built Request ===\n\n{}", built.payload().to_json()?);

    // A broken request reports every problem at once.
    let broken = FaturaPayload {
        numero_fatura: "44".into(),
        ano_fatura: "26".into(),
        destinatario_documento: "123".into(),
        ..FaturaPayload::default()
    };
    println!("\n=== Validation Errors ===\n");
    match Fatura::from_payload(broken) {
        Ok(_) => println!("  unexpectedly valid"),
        Err(FaturaError::Validation(errors)) => {
            for e in &errors {
                println!("  {e}");
            }
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
