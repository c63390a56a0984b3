//! Text normalization and the fixed locality tables.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Locality as written in the spreadsheet, its hostname code, and its host
/// group display name in Zabbix.
pub const LOCALITIES: [(&str, &str, &str); 7] = [
    ("Los teques", "LTQ OSS", "Clientes FTTH POC (Los Teques)"),
    ("Maracay", "MCY OSS", "Clientes FTTH POC (Maracay)"),
    ("Valencia", "VAL OSS", "Clientes FTTH POC (Valencia)"),
    ("Barquisimeto", "BTO OSS", "Clientes FTTH POC (Barquisimeto)"),
    (
        "Caracas (Red propia)",
        "CCS OSS",
        "Clientes FTTH POC (Caracas) - Red propia",
    ),
    (
        "Caracas (Red alquilada)",
        "CCS OSS",
        "Clientes FTTH POC (Caracas) - Red alquilada",
    ),
    ("Barcelona", "BCN OSS", "Clientes FTTH POC (Barcelona)"),
];

/// Remove accents so the name is accepted as a Zabbix technical hostname.
pub fn strip_diacritics(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'ñ' => 'n',
            'Ñ' => 'N',
            other => other,
        })
        .collect()
}

/// Short code for a locality; unknown localities pass through unchanged.
pub fn locality_abbreviation(name: &str) -> &str {
    LOCALITIES
        .iter()
        .find(|(loc, _, _)| *loc == name)
        .map(|(_, code, _)| *code)
        .unwrap_or(name)
}

/// Host group display name for a known locality.
pub fn locality_group_name(name: &str) -> Option<&'static str> {
    LOCALITIES
        .iter()
        .find(|(loc, _, _)| *loc == name)
        .map(|(_, _, group)| *group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_diacritics() {
        assert_eq!(strip_diacritics("José Pérez"), "Jose Perez");
        assert_eq!(strip_diacritics("Muñoz ÑANDÚ"), "Munoz NANDU");
        assert_eq!(strip_diacritics("plain ascii 123"), "plain ascii 123");
        assert_eq!(strip_diacritics(""), "");
    }

    #[test]
    fn test_strip_diacritics_idempotent() {
        let samples = [
            "José Pérez",
            "Ñuñoa",
            "Ångström façade",
            "ﬁancé",
            "Crème brûlée über",
            "e\u{301}\u{323}",
            "日本語 テスト",
        ];
        for s in samples {
            let once = strip_diacritics(s);
            assert_eq!(strip_diacritics(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_locality_abbreviation_known() {
        let expected = [
            ("Los teques", "LTQ OSS"),
            ("Maracay", "MCY OSS"),
            ("Valencia", "VAL OSS"),
            ("Barquisimeto", "BTO OSS"),
            ("Caracas (Red propia)", "CCS OSS"),
            ("Caracas (Red alquilada)", "CCS OSS"),
            ("Barcelona", "BCN OSS"),
        ];
        for (loc, code) in expected {
            assert_eq!(locality_abbreviation(loc), code);
        }
    }

    #[test]
    fn test_locality_abbreviation_unknown_passthrough() {
        assert_eq!(locality_abbreviation("Mérida"), "Mérida");
        assert_eq!(locality_abbreviation("maracay"), "maracay");
        assert_eq!(locality_abbreviation(""), "");
    }

    #[test]
    fn test_locality_group_name() {
        assert_eq!(
            locality_group_name("Los teques"),
            Some("Clientes FTTH POC (Los Teques)")
        );
        assert_eq!(locality_group_name("Mérida"), None);
    }
}
