use super::words;
use crate::dict::compiled::{self, from_bytes, to_bytes};
use crate::dict::{DictError, Word, WordFlags};

fn sample() -> Vec<Word> {
    let mut list = words(&["汉文", "文化", "我们", "中华人民共和国"]);
    let idx = list.iter().position(|w| w.text() == "我们").unwrap();
    list[idx] = Word::with_flags(
        "我们",
        WordFlags {
            noise_word: true,
            noise_character: false,
        },
    );
    list
}

#[test]
fn test_round_trip_keeps_order_and_flags() {
    let list = sample();
    let decoded = from_bytes(&to_bytes(&list).unwrap(), 0).unwrap();
    assert_eq!(decoded, list);
    assert!(decoded.iter().find(|w| w.text() == "我们").unwrap().is_noise_word());
}

#[test]
fn test_max_word_length_filter_on_read() {
    let decoded = from_bytes(&to_bytes(&sample()).unwrap(), 2).unwrap();
    assert_eq!(decoded.len(), 3);
    assert!(decoded.iter().all(|w| w.char_len() <= 2));
}

#[test]
fn test_header_too_short() {
    assert!(matches!(from_bytes(b"KND", 0), Err(DictError::InvalidHeader)));
    assert!(matches!(
        from_bytes(b"KNDX\x01\x00\x00", 0),
        Err(DictError::InvalidHeader)
    ));
}

#[test]
fn test_invalid_magic() {
    assert!(matches!(
        from_bytes(b"LXDX\x01data-data-data-data", 0),
        Err(DictError::InvalidMagic)
    ));
}

#[test]
fn test_unsupported_version() {
    assert!(matches!(
        from_bytes(b"KNDX\x99", 0),
        Err(DictError::UnsupportedVersion(0x99))
    ));
}

#[test]
fn test_truncated_body() {
    let bytes = to_bytes(&sample()).unwrap();
    let cut = &bytes[..bytes.len() - 3];
    assert!(matches!(from_bytes(cut, 0), Err(DictError::Truncated { .. })));
}

#[test]
fn test_checksum_mismatch() {
    let mut bytes = to_bytes(&sample()).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xff;
    assert!(matches!(
        from_bytes(&bytes, 0),
        Err(DictError::ChecksumMismatch { .. })
    ));
}

#[test]
fn test_out_of_order_list_is_rejected() {
    let unsorted = vec![Word::new("文化"), Word::new("汉文"), Word::new("和服")];
    let bytes = to_bytes(&unsorted).unwrap();
    assert!(matches!(from_bytes(&bytes, 0), Err(DictError::Parse(_))));
}

#[test]
fn test_save_and_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = compiled::path_for(dir.path(), "nested/vocabulary");
    compiled::save(&path, &sample()).unwrap();
    assert!(path.exists());
    let opened = compiled::open(&path, 0).unwrap().unwrap();
    assert_eq!(opened.len(), 4);

    let missing = compiled::path_for(dir.path(), "absent");
    assert!(compiled::open(&missing, 0).unwrap().is_none());
}
