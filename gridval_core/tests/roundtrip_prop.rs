//! Randomized round-trip properties: any record survives encode/decode
//! under every strategy, and encoding is deterministic.

use gridval_codecs::record_codec;
use gridval_core::{Compression, Record};
use proptest::prelude::*;
use uuid::Uuid;

fn arb_record() -> impl Strategy<Value = Record> {
    (any::<i32>(), "\\PC{0,400}", any::<u128>())
        .prop_map(|(number, text, id)| Record::new(number, text, Uuid::from_u128(id)))
}

proptest! {
    #[test]
    fn prop_roundtrip_identity(record in arb_record()) {
        let codec = record_codec(Compression::None).unwrap();
        prop_assert_eq!(codec.decode(&codec.encode(&record).unwrap()).unwrap(), record);
    }

    #[test]
    fn prop_roundtrip_zstd_fast(record in arb_record()) {
        let codec = record_codec(Compression::ZstdFast).unwrap();
        prop_assert_eq!(codec.decode(&codec.encode(&record).unwrap()).unwrap(), record);
    }

    #[test]
    fn prop_roundtrip_zstd_high(record in arb_record()) {
        let codec = record_codec(Compression::ZstdHigh).unwrap();
        prop_assert_eq!(codec.decode(&codec.encode(&record).unwrap()).unwrap(), record);
    }

    #[test]
    fn prop_roundtrip_lz4(record in arb_record()) {
        let codec = record_codec(Compression::Lz4).unwrap();
        prop_assert_eq!(codec.decode(&codec.encode(&record).unwrap()).unwrap(), record);
    }

    #[test]
    fn prop_encoding_deterministic(record in arb_record()) {
        for strategy in [
            Compression::None,
            Compression::ZstdFast,
            Compression::ZstdHigh,
            Compression::Lz4,
        ] {
            let codec = record_codec(strategy).unwrap();
            prop_assert_eq!(codec.encode(&record).unwrap(), codec.encode(&record).unwrap());
        }
    }

    /// Arbitrary byte soup must never panic the decoder — it either parses
    /// (only possible for inputs that happen to be well-formed) or fails.
    #[test]
    fn prop_decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        for strategy in [
            Compression::None,
            Compression::ZstdFast,
            Compression::ZstdHigh,
            Compression::Lz4,
        ] {
            let _ = record_codec(strategy).unwrap().decode(&bytes);
        }
    }
}
