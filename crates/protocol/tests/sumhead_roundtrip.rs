//! Signature header and per-block entry wire format.

use protocol::{read_sum_entry, read_sum_head, write_sum_entry, write_sum_head, ProtocolVersion, SumHead};
use std::io::Cursor;

#[test]
fn header_and_entries_round_trip_modern() {
    let version = ProtocolVersion::NEWEST;
    let head = SumHead {
        count: 5,
        block_len: 700,
        strong_len: 16,
        remainder: 42,
    };

    let mut buf = Vec::new();
    write_sum_head(&mut buf, version, &head).expect("header must encode");
    for i in 0..head.count {
        let strong = vec![i as u8; head.strong_len as usize];
        write_sum_entry(&mut buf, i * 7, &strong).expect("entry must encode");
    }

    let mut cursor = Cursor::new(buf);
    let decoded = read_sum_head(&mut cursor, version).expect("header must decode");
    assert_eq!(decoded, head);
    for i in 0..head.count {
        let (weak, strong) = read_sum_entry(&mut cursor, head.strong_len as usize).expect("entry must decode");
        assert_eq!(weak, i * 7);
        assert_eq!(strong, vec![i as u8; head.strong_len as usize]);
    }
}

#[test]
fn legacy_protocol_omits_remainder_on_the_wire() {
    let version = ProtocolVersion::try_from(26).expect("26 is a supported legacy version");
    let head = SumHead {
        count: 2,
        block_len: 8192,
        strong_len: 16,
        remainder: 0,
    };

    let mut buf = Vec::new();
    write_sum_head(&mut buf, version, &head).expect("header must encode");
    assert_eq!(buf.len(), 12, "legacy header is three fixed int32 fields with no remainder");

    let mut cursor = Cursor::new(buf);
    let decoded = read_sum_head(&mut cursor, version).expect("header must decode");
    assert_eq!(decoded.count, head.count);
    assert_eq!(decoded.block_len, head.block_len);
    assert_eq!(decoded.strong_len, head.strong_len);
    assert_eq!(decoded.remainder, 0, "legacy readers cannot recover a remainder from the wire");
}

#[test]
fn zero_block_signature_round_trips() {
    let version = ProtocolVersion::NEWEST;
    let head = SumHead {
        count: 0,
        block_len: 700,
        strong_len: 16,
        remainder: 0,
    };
    let mut buf = Vec::new();
    write_sum_head(&mut buf, version, &head).expect("header must encode");
    let mut cursor = Cursor::new(buf);
    let decoded = read_sum_head(&mut cursor, version).expect("header must decode");
    assert_eq!(decoded, head);
}

#[test]
fn truncated_entry_stream_errors_without_panicking() {
    let version = ProtocolVersion::NEWEST;
    let head = SumHead {
        count: 1,
        block_len: 700,
        strong_len: 16,
        remainder: 0,
    };
    let mut buf = Vec::new();
    write_sum_head(&mut buf, version, &head).expect("header must encode");
    write_sum_entry(&mut buf, 1, &[0u8; 16]).expect("entry must encode");
    buf.truncate(buf.len() - 3);

    let mut cursor = Cursor::new(buf);
    let _ = read_sum_head(&mut cursor, version).expect("header is intact");
    let result = read_sum_entry(&mut cursor, head.strong_len as usize);
    assert!(result.is_err(), "a short strong-digest tail must error, not panic");
}
