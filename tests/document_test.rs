use tagbin::{
    decode_document, encode_document, is_compressed, parse_with, Compound, Document, Error, Value,
};

fn level_foo_42() -> Compound {
    let mut root = Compound::new();
    root.insert("foo".to_string(), Value::Int(42));
    root
}

#[test]
fn test_document_round_trip() {
    let bytes = encode_document("Level", &level_foo_42()).unwrap();
    let doc = decode_document(&bytes).unwrap();
    assert_eq!(doc.name, "Level");
    assert_eq!(doc.root.len(), 1);
    assert_eq!(doc.root["foo"], Value::Int(42));
}

#[test]
fn test_document_wire_layout() {
    let bytes = encode_document("Level", &level_foo_42()).unwrap();
    assert_eq!(
        &bytes[..],
        &[
            10, // compound
            0, 5, b'L', b'e', b'v', b'e', b'l', // name
            3, // int entry
            0, 3, b'f', b'o', b'o', // entry name
            0, 0, 0, 42, // entry value
            0, // end
        ]
    );
}

#[test]
fn test_empty_document_is_header_plus_end() {
    let bytes = encode_document("", &Compound::new()).unwrap();
    assert_eq!(&bytes[..], &[10, 0, 0, 0]);
}

#[test]
fn test_document_struct_round_trip() {
    let doc = Document::new("Level", level_foo_42());
    let bytes = doc.to_bytes().unwrap();
    assert_eq!(Document::from_bytes(&bytes).unwrap(), doc);
}

#[test]
fn test_top_level_must_be_compound() {
    match decode_document(&[0x01, 0, 0]) {
        Err(Error::TopLevelTag(1)) => {}
        other => panic!("expected TopLevelTag, got {:?}", other),
    }
    assert!(matches!(decode_document(&[]), Err(Error::UnexpectedEof)));
}

#[test]
fn test_truncated_string_field_fails() {
    // valid header, then a name length claiming more bytes than remain
    let bytes = [10u8, 0, 5, b'L'];
    assert!(matches!(
        decode_document(&bytes),
        Err(Error::UnexpectedEof)
    ));
}

#[test]
fn test_missing_end_marker_fails() {
    let full = encode_document("Level", &level_foo_42()).unwrap();
    let cut = &full[..full.len() - 1];
    assert!(matches!(decode_document(cut), Err(Error::UnexpectedEof)));
}

#[test]
fn test_is_compressed_detects_gzip_magic() {
    assert!(is_compressed(&[0x1f, 0x8b, 0x08]));
    assert!(!is_compressed(&[0x1f]));
    assert!(!is_compressed(&[10, 0, 0, 0]));
    assert!(!is_compressed(&[]));
}

#[test]
fn test_parse_with_passes_plain_input_through() {
    let bytes = encode_document("Level", &level_foo_42()).unwrap();
    // the collaborator must not be called for uncompressed input
    let doc = parse_with(&bytes, |_| panic!("decompressor called")).unwrap();
    assert_eq!(doc.name, "Level");
}

#[test]
fn test_parse_with_uses_collaborator_for_gzip_magic() {
    let plain = encode_document("Level", &level_foo_42()).unwrap();
    let framed: Vec<u8> = [0x1f, 0x8b].iter().chain(plain.iter()).copied().collect();

    let inner = plain.to_vec();
    let doc = parse_with(&framed, move |data| {
        assert_eq!(data[..2], [0x1f, 0x8b]);
        Ok(inner)
    })
    .unwrap();
    assert_eq!(doc.root["foo"], Value::Int(42));
}

#[test]
fn test_parse_with_propagates_collaborator_error() {
    let err = parse_with(&[0x1f, 0x8b, 0xff], |_| {
        Err(std::io::Error::new(std::io::ErrorKind::InvalidData, "bad stream"))
    })
    .unwrap_err();
    match err {
        Error::Decompress(io) => assert_eq!(io.kind(), std::io::ErrorKind::InvalidData),
        other => panic!("expected Decompress, got {:?}", other),
    }
}

#[cfg(feature = "gzip")]
mod gzip {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tagbin::parse;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_parse_inflates_gzip_envelope() {
        let plain = encode_document("Level", &level_foo_42()).unwrap();
        let doc = parse(&gzip(&plain)).unwrap();
        assert_eq!(doc, parse(&plain).unwrap());
        assert_eq!(doc.name, "Level");
        assert_eq!(doc.root["foo"], Value::Int(42));
    }

    #[test]
    fn test_parse_rejects_corrupt_gzip_without_decoding() {
        let mut framed = gzip(&encode_document("Level", &level_foo_42()).unwrap());
        // mangle the deflate body, keep the magic intact
        let mid = framed.len() / 2;
        framed[mid] ^= 0xff;
        framed[mid + 1] ^= 0xff;
        let tail = framed.len() - 1;
        framed[tail] ^= 0xff;
        assert!(matches!(parse(&framed), Err(Error::Decompress(_))));
    }
}
