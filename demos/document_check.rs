use fatura_br::documento::*;

fn main() {
    println!("=== CPF/CNPJ Validation ===\n");

    let inputs = [
        ("529.982.247-25", DocumentKind::Cpf),
        ("52998224726", DocumentKind::Cpf),    // wrong check digit
        ("111.111.111-11", DocumentKind::Cpf), // repeated digits
        ("11.222.333/0001-81", DocumentKind::Cnpj),
        ("1122233300018", DocumentKind::Cnpj), // too short
    ];

    for (input, kind) in &inputs {
        match check_document(input, *kind) {
            Ok(digits) => println!(
                "  {kind} {input} => valid ({})",
                format_document(&digits, *kind)
            ),
            Err(e) => println!("  {kind} {input} => INVALID: {e}"),
        }
    }

    println!("\n=== Check Digits ===\n");

    for (base, kind) in [("123456789", DocumentKind::Cpf), ("112223330001", DocumentKind::Cnpj)] {
        if let Some([d1, d2]) = check_digits(base, kind) {
            println!("  {kind} base {base} => {d1}{d2}");
        }
    }

    println!("\n=== Mask While Typing ===\n");

    let typed = "11222333000181";
    for n in [2, 5, 8, 12, 14] {
        println!(
            "  {:<14} => {}",
            &typed[..n],
            format_document(&typed[..n], DocumentKind::Cnpj)
        );
    }

    // Switching the form from CNPJ to CPF drops the extra digits.
    println!(
        "\n  as CPF: {} (max {} digits)",
        format_document(typed, DocumentKind::Cpf),
        max_length(DocumentKind::Cpf)
    );
}
