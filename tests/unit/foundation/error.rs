use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ChromacastError::invalid_white_point("x")
            .to_string()
            .contains("invalid white point:")
    );
    assert!(
        ChromacastError::chunking_failed("x")
            .to_string()
            .contains("chunking failed:")
    );
    assert!(
        ChromacastError::display_unavailable("x")
            .to_string()
            .contains("display unavailable:")
    );
    assert!(
        ChromacastError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ChromacastError::ResizeRejected
            .to_string()
            .contains("resize rejected")
    );
}

#[test]
fn missing_glyph_names_symbol_and_width() {
    let err = ChromacastError::MissingGlyph {
        symbol_bits: 4,
        symbol: 0x0b,
    };
    let msg = err.to_string();
    assert!(msg.contains("0x0b"), "{msg}");
    assert!(msg.contains("4 bits"), "{msg}");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ChromacastError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
