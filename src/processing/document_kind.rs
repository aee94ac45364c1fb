use crate::models::DocumentKind;

// Checked in this order; the first kind with a marker present wins.
const DETECTION_ORDER: [DocumentKind; 4] = [
    DocumentKind::BirthCertificate,
    DocumentKind::Passport,
    DocumentKind::MarriageCertificate,
    DocumentKind::DeathCertificate,
];

fn title_markers(kind: DocumentKind) -> &'static [&'static str] {
    match kind {
        DocumentKind::BirthCertificate => &["Akt urodzenia", "AKT URODZENIA", "Birth Certificate", "BIRTH CERTIFICATE"],
        DocumentKind::Passport => &["PASZPORT", "PASSPORT"],
        DocumentKind::MarriageCertificate => &["Akt małżeństwa", "AKT MAŁŻEŃSTWA", "Marriage Certificate", "MARRIAGE CERTIFICATE"],
        DocumentKind::DeathCertificate => &["Akt zgonu", "AKT ZGONU", "Death Certificate", "DEATH CERTIFICATE"],
        DocumentKind::Unknown => &[],
    }
}

/// Guess the source document from bilingual title markers.
pub fn detect_document_kind(text: &str) -> DocumentKind {
    DETECTION_ORDER
        .into_iter()
        .find(|kind| title_markers(*kind).iter().any(|marker| text.contains(marker)))
        .unwrap_or(DocumentKind::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_kinds() {
        assert_eq!(detect_document_kind("ODPIS ZUPEŁNY\nAKT URODZENIA\n"), DocumentKind::BirthCertificate);
        assert_eq!(detect_document_kind("RZECZPOSPOLITA POLSKA PASZPORT"), DocumentKind::Passport);
        assert_eq!(detect_document_kind("Marriage Certificate No 12"), DocumentKind::MarriageCertificate);
        assert_eq!(detect_document_kind("Odpis skrócony aktu zgonu\nAkt zgonu"), DocumentKind::DeathCertificate);
        assert_eq!(detect_document_kind("Pełnomocnictwo"), DocumentKind::Unknown);
    }

    #[test]
    fn test_birth_certificate_checked_before_passport() {
        let text = "Akt urodzenia\nPASSPORT No: ABC123456";
        assert_eq!(detect_document_kind(text), DocumentKind::BirthCertificate);
    }
}
