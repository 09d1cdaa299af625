//! Download file name for a generated invoice document.

use crate::data::month_abbrev;

/// Accented letters allowed in file names, besides ASCII alphanumerics.
const ACCENTED: &str = "àáâãäéèêëíìîïóòôõöúùûüçÀÁÂÃÄÉÈÊËÍÌÎÏÓÒÔÕÖÚÙÛÜÇ";

const FALLBACK_NAME: &str = "fatura";

/// `{numero}_{name}_{month}.docx`, e.g. `12_João_da_Silva_jan.docx`.
///
/// The month abbreviation comes from the due date (ISO or `DD/MM/YYYY`)
/// and is left empty when the date has no valid month.
pub fn attachment_filename(numero: &str, destinatario: &str, vencimento: &str) -> String {
    format!(
        "{}_{}_{}.docx",
        numero.trim(),
        safe_file_name(destinatario),
        month_abbrev(vencimento)
    )
}

/// Reduce a name to characters that are safe in a file name.
///
/// Keeps ASCII letters and digits, Portuguese accented letters and `-`;
/// runs of whitespace become a single `_`. Falls back to "fatura" when
/// nothing is left.
pub fn safe_file_name(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || c.is_whitespace() || c == '-' || ACCENTED.contains(c))
        .collect();
    let joined = kept.split_whitespace().collect::<Vec<_>>().join("_");
    if joined.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        joined
    }
}
