//! Cross-lingual ROOT consistency.
//!
//! The symbol alphabets are shared across every supported language; the
//! curated parallel table must agree on ROOT between English and each
//! translation.

use ptil::crosslingual::{validate_pair, validate_table, PARALLEL_TABLE};
use ptil::{Format, Language, PtilEncoder, Root};

#[test]
fn parallel_table_agrees_on_root() {
    let failures = validate_table();
    assert!(failures.is_empty(), "inconsistent pairs at indices {failures:?}");
}

#[test]
fn every_language_appears_in_the_table() {
    for language in [Language::Es, Language::Fr, Language::De, Language::It] {
        assert!(
            PARALLEL_TABLE.iter().any(|p| p.language == language),
            "no parallel coverage for {}",
            language.code()
        );
    }
}

#[test]
fn pair_results_carry_both_roots() {
    let result = validate_pair(&PARALLEL_TABLE[0]);
    assert_eq!(result.english_root, Some(Root::Motion));
    assert_eq!(result.translated_root, Some(Root::Motion));
}

#[test]
fn symbol_alphabet_is_language_independent() {
    // The Spanish encoding of a motion sentence serializes with the same
    // ROOT symbol as the English one; only the entity differs.
    let es = PtilEncoder::for_language(Language::Es);
    let en = PtilEncoder::for_language(Language::En);

    let spanish = es.encode_and_serialize("El niño corre.", Format::Verbose);
    let english = en.encode_and_serialize("The boy runs.", Format::Verbose);

    assert!(spanish.starts_with("<ROOT=MOTION>"));
    assert!(english.starts_with("<ROOT=MOTION>"));
    assert!(spanish.contains("<AGENT=NIÑO>"));
    assert!(english.contains("<AGENT=BOY>"));
}

#[test]
fn unsupported_language_is_a_construction_error() {
    let err = PtilEncoder::for_code("zz").unwrap_err();
    assert!(err.is_analysis());
    assert!(format!("{err}").contains("zz"));
}

#[test]
fn each_language_reports_its_model() {
    for (code, model) in [
        ("en", "en-rule-1"),
        ("es", "es-rule-1"),
        ("fr", "fr-rule-1"),
        ("de", "de-rule-1"),
        ("it", "it-rule-1"),
    ] {
        let encoder = PtilEncoder::for_code(code).unwrap();
        assert_eq!(encoder.model_id(), model);
    }
}
