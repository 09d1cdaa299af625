use fatura_br::extenso::*;
use rust_decimal_macros::dec;

fn main() {
    println!("=== Amounts in Words ===\n");

    let amounts = [
        "0",
        "1",
        "0,01",
        "100",
        "1.500,50",
        "2.350.000,10",
        "10,995",         // rounds up into the reais
        "999.999.999,99", // largest amount spelled
        "1.000.000.000",  // too large
        "-5",             // negative
        "abc",
    ];

    for amount in &amounts {
        let words = amount_to_words(amount);
        if words.is_empty() {
            let reason = parse_amount(amount)
                .err()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "out of range".into());
            println!("  {amount:>16} => (not rendered: {reason})");
        } else {
            println!("  {amount:>16} => {words}");
        }
    }

    println!("\n=== Keystroke Filter ===\n");

    for raw in ["R$ 1.500,509", "12,3,4", "abc7,5"] {
        println!("  {raw:>16} => {}", sanitize_amount_input(raw));
    }

    println!("\n=== Decimal Values ===\n");

    let value = dec!(12345.675);
    println!("  {value} => {}", format_amount(value));
    println!("  {value} => {}", decimal_to_words(value).unwrap_or_default());

    println!("\n=== Feminine Counts ===\n");

    for n in [1, 2, 21, 1_002] {
        let m = integer_to_words(n, Gender::Masculine).unwrap_or_default();
        let f = integer_to_words(n, Gender::Feminine).unwrap_or_default();
        println!("  {n:>5} => {m} / {f}");
    }
}
