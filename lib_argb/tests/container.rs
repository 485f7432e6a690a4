mod common;

use common::{container, MINIMAL_HEADER, PNGTOPAM_HEADER};
use lib_argb::pam::DecodeError;
use lib_argb::{decode, encode, PamHeader};

#[test]
fn test_decode_pngtopam_header() {
    let bytes = container(PNGTOPAM_HEADER, &[9; 12]);

    let pam = decode(&bytes).unwrap();

    assert_eq!(pam.header, PamHeader::icon());
    assert_eq!(pam.payload, &[9; 12]);
}

#[test]
fn test_decode_minimal_header() {
    let bytes = container(MINIMAL_HEADER, &[1, 2, 3]);

    let pam = decode(&bytes).unwrap();

    assert_eq!(pam.header, PamHeader::default());
    assert_eq!(pam.payload, &[1, 2, 3]);
}

#[test]
fn test_decode_empty_payload() {
    let pam = decode(MINIMAL_HEADER).unwrap();

    assert!(pam.payload.is_empty());
}

#[test]
fn test_payload_may_contain_terminator() {
    let payload = b"\nENDHDR\n\xff\x00";
    let bytes = container(PNGTOPAM_HEADER, payload);

    let pam = decode(&bytes).unwrap();

    assert_eq!(pam.payload, payload);
}

#[test]
fn test_comments_and_unknown_keys_ignored() {
    let header = b"P7\n# made by hand\n\nWIDTH   32\nCOLORSPACE sRGB\n  HEIGHT 32  \nENDHDR\n";

    let pam = decode(header).unwrap();

    assert_eq!(pam.header.width, Some(32));
    assert_eq!(pam.header.height, Some(32));
    assert_eq!(pam.header.depth, None);
}

#[test]
fn test_tuple_type_lines_concatenate() {
    let pam = decode(b"P7\nTUPLTYPE RGB\nTUPLTYPE _ALPHA\nENDHDR\n").unwrap();

    assert_eq!(pam.header.tuple_type.as_deref(), Some("RGB _ALPHA"));
}

#[test]
fn test_malformed_lines_rejected() {
    let headers: [&[u8]; 3] = [
        b"P7\nWIDTH thirty-two\nENDHDR\n",
        b"P7\nDEPTH\nENDHDR\n",
        b"P7\nMAXVAL \xff\nENDHDR\n",
    ];

    for header in headers {
        let result = decode(header);
        assert!(
            matches!(result, Err(DecodeError::MalformedHeader(_))),
            "{:?} gave {:?}",
            String::from_utf8_lossy(header),
            result
        );
    }
}

#[test]
fn test_encode_partial_header() {
    let header = PamHeader {
        width: Some(2),
        depth: Some(4),
        ..PamHeader::default()
    };

    let encoded = encode(&header, &[7, 7]);

    assert_eq!(encoded, b"P7\nWIDTH 2\nDEPTH 4\nENDHDR\n\x07\x07");
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.header, header);
    assert_eq!(decoded.payload, &[7, 7]);
}

#[test]
fn test_encode_empty_header() {
    assert_eq!(encode(&PamHeader::default(), &[]), MINIMAL_HEADER);
}
