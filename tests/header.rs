mod common;

use common::{CatalogBuilder, fruit_catalog, patch_u32};
use mo_reader::mo::format::header;
use mo_reader::{CatalogReader, MoError, Revision};

#[test]
fn parses_all_header_fields() {
    let bytes = fruit_catalog();
    let parsed = header::parse(&bytes).expect("valid header");

    assert_eq!(parsed.magic, 0x950412de);
    assert_eq!(parsed.revision, Revision(0));
    assert_eq!(parsed.count, 3);
    assert_eq!(parsed.originals_offset, 28);
    assert_eq!(parsed.translations_offset, 28 + 3 * 8);
    assert_eq!(parsed.hash_size, 7);
    assert_eq!(parsed.hash_offset, 28 + 6 * 8);
}

#[test]
fn rejects_wrong_magic() {
    let mut bytes = fruit_catalog();
    patch_u32(&mut bytes, 0, 0xdeadbeef);

    match header::parse(&bytes) {
        Err(MoError::InvalidMagic { found }) => assert_eq!(found, 0xdeadbeef),
        other => panic!("expected InvalidMagic, got {:?}", other),
    }
}

#[test]
fn rejects_big_endian_magic() {
    let mut bytes = fruit_catalog();
    bytes[..4].copy_from_slice(&0x950412deu32.to_be_bytes());

    assert!(matches!(
        header::parse(&bytes),
        Err(MoError::InvalidMagic { found: 0xde120495 })
    ));
}

#[test]
fn rejects_buffers_shorter_than_header() {
    let bytes = fruit_catalog();
    for len in [0, 3, 4, 27] {
        match header::parse(&bytes[..len]) {
            Err(MoError::TruncatedHeader { len: reported }) => assert_eq!(reported, len),
            other => panic!("expected TruncatedHeader for {} bytes, got {:?}", len, other),
        }
    }
}

#[test]
fn accepts_bare_header_with_no_strings() {
    let bytes = CatalogBuilder::new().hash_size(0).build();
    assert_eq!(bytes.len(), 28);

    let reader = CatalogReader::from_bytes(bytes).expect("empty catalog opens");
    assert!(reader.is_open());
    assert!(reader.is_empty());
    assert_eq!(reader.index_of(b"anything"), None);
    assert_eq!(reader.translate(b"anything"), b"anything");
}

#[test]
fn accepts_newer_revision() {
    let bytes = CatalogBuilder::new()
        .pair("apple", "manzana")
        .revision(0x0001_0002)
        .build();

    let reader = CatalogReader::from_bytes(bytes).expect("newer revision is best effort");
    let revision = reader.header().expect("open").revision;
    assert_eq!(revision.major(), 1);
    assert_eq!(revision.minor(), 2);
    assert!(revision.is_newer_than_supported());
    assert_eq!(revision.to_string(), "1.2");
    assert_eq!(reader.translate(b"apple"), "manzana".as_bytes());
}
