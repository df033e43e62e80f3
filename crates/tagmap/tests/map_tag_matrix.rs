use std::sync::Arc;

use cbor_tagmap::{
    flatten, unflatten, DuplicateKeyPolicy, Malformation, MapCborCodec, MapTagConfig, MAP_TAG,
};
use cbor_tagmap_pack::{
    CborDecoder, CborEncoder, CborError, EncodeHooks, OrderedMap, PackExtension, PackValue,
    TagDecodeHook, TagRegistry,
};

fn int(i: i64) -> PackValue {
    PackValue::Integer(i)
}

fn sample_map() -> OrderedMap {
    let mut map = OrderedMap::new();
    map.insert(int(1), int(2));
    map.insert(int(3), PackValue::Array(vec![int(4), int(5)]));
    map
}

fn codec() -> MapCborCodec {
    MapCborCodec::new(MapTagConfig::new(MAP_TAG)).unwrap()
}

#[test]
fn sample_map_flattens_to_tagged_pairs() {
    let ext = flatten(MAP_TAG, &sample_map());
    assert_eq!(ext.tag, 279);
    assert_eq!(
        ext.into_payload(),
        PackValue::Array(vec![int(1), int(2), int(3), PackValue::Array(vec![int(4), int(5)])])
    );
}

#[test]
fn sample_map_wire_bytes() {
    let mut codec = codec();
    let bytes = codec.encode(&PackValue::Map(sample_map()));
    assert_eq!(hex::encode(&bytes), "d9011784010203820405");
}

#[test]
fn sample_map_decodes_from_wire_bytes() {
    let bytes = hex::decode("d9011784010203820405").unwrap();
    let decoded = codec().decode(&bytes).unwrap();
    assert_eq!(decoded, PackValue::Map(sample_map()));

    let map = codec().decode_map(&bytes).unwrap();
    let entries: Vec<_> = map.into_iter().collect();
    assert_eq!(
        entries,
        vec![(int(1), int(2)), (int(3), PackValue::Array(vec![int(4), int(5)]))]
    );
}

#[test]
fn empty_container_roundtrip() {
    let mut codec = codec();
    let bytes = codec.encode(&PackValue::Map(OrderedMap::new()));
    assert_eq!(hex::encode(&bytes), "d9011780");
    assert_eq!(codec.decode(&bytes).unwrap(), PackValue::Map(OrderedMap::new()));

    let config = MapTagConfig::new(MAP_TAG);
    assert!(unflatten(&config, PackValue::Array(vec![])).unwrap().is_empty());
}

#[test]
fn wire_level_malformed_payloads() {
    let cases = vec![
        // 279(1)
        ("d9011701", "payload is not a sequence (found integer)"),
        // 279({"a": 1})
        ("d90117a1616101", "payload is not a sequence (found object)"),
        // 279({1: 2})
        ("d90117a10102", "payload is not a sequence (found map)"),
        // 279([1])
        ("d901178101", "odd element count 1, cannot pair into key/value"),
        // 279([1, 2, 3])
        ("d9011783010203", "odd element count 3, cannot pair into key/value"),
    ];
    let codec = codec();
    for (hex_str, reason) in cases {
        let bytes = hex::decode(hex_str).unwrap();
        assert_eq!(
            codec.decode(&bytes).unwrap_err(),
            CborError::MalformedTag {
                tag: MAP_TAG,
                reason: reason.to_owned()
            },
            "decoding {hex_str}"
        );
    }
}

#[test]
fn malformed_nested_tag_fails_whole_decode() {
    // [279([1, 2]), 279([3])]
    let bytes = hex::decode("82d90117820102d901178103").unwrap();
    assert!(matches!(
        codec().decode(&bytes),
        Err(CborError::MalformedTag { tag: MAP_TAG, .. })
    ));
}

#[test]
fn item_errors_propagate_unwrapped() {
    // 279([1, <truncated u16>])
    let bytes = hex::decode("d90117820119").unwrap();
    assert_eq!(codec().decode(&bytes), Err(CborError::UnexpectedEnd));
}

#[test]
fn last_write_wins_on_the_wire() {
    // 279(["k", 1, "k", 2])
    let bytes = hex::decode("d9011784616b01616b02").unwrap();
    let map = codec().decode_map(&bytes).unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&PackValue::from("k")), Some(&int(2)));
}

#[test]
fn strict_decoder_rejects_duplicates() {
    let config = MapTagConfig::new(MAP_TAG).with_duplicate_keys(DuplicateKeyPolicy::Reject);
    let codec = MapCborCodec::new(config).unwrap();
    let bytes = hex::decode("d9011784616b01616b02").unwrap();
    assert_eq!(
        codec.decode(&bytes).unwrap_err(),
        CborError::MalformedTag {
            tag: MAP_TAG,
            reason: Malformation::DuplicateKey { index: 1 }.to_string()
        }
    );
}

#[test]
fn entry_limit_bounds_untrusted_input() {
    let config = MapTagConfig::new(MAP_TAG).with_max_entries(1);
    let codec = MapCborCodec::new(config).unwrap();
    let bytes = hex::decode("d9011784010203820405").unwrap();
    assert!(matches!(
        codec.decode(&bytes),
        Err(CborError::MalformedTag { tag: MAP_TAG, .. })
    ));
}

#[test]
fn nested_containers_and_generic_keys() {
    let mut inner = OrderedMap::new();
    inner.insert(PackValue::Bytes(vec![0xca, 0xfe]), PackValue::Bool(true));

    let mut map = OrderedMap::new();
    map.insert(PackValue::from("inner"), PackValue::Map(inner.clone()));
    map.insert(PackValue::Map(inner), PackValue::Null);
    map.insert(PackValue::Array(vec![int(-1)]), PackValue::Float(0.5));

    let mut codec = codec();
    let bytes = codec.encode(&PackValue::Map(map.clone()));
    // The container keeps its tag; the nested one is tagged too.
    assert_eq!(&bytes[..4], &[0xd9, 0x01, 0x17, 0x86]);
    assert_eq!(&bytes[4..11], &[0x65, b'i', b'n', b'n', b'e', b'r', 0xd9]);

    let decoded = codec.decode(&bytes).unwrap();
    assert_eq!(decoded, PackValue::Map(map));
    assert_eq!(codec.encode(&decoded), bytes);
}

#[test]
fn many_container_keys_decode() {
    let entries = 4096;
    let mut map = OrderedMap::new();
    for i in 0..entries {
        let mut key = OrderedMap::new();
        key.insert(int(i), int(0));
        map.insert(PackValue::Map(key), PackValue::Null);
    }
    let mut codec = codec();
    let bytes = codec.encode(&PackValue::Map(map.clone()));
    let decoded = codec.decode_map(&bytes).unwrap();
    assert_eq!(decoded.len(), entries as usize);
    let first = decoded.get_index(0).map(|(k, _)| k.clone());
    assert_eq!(first, map.get_index(0).map(|(k, _)| k.clone()));
    assert_eq!(PackValue::Map(decoded), PackValue::Map(map));
}

#[test]
fn encoder_and_decoder_must_share_the_tag() {
    let mut producer = MapCborCodec::new(MapTagConfig::new(MAP_TAG)).unwrap();
    let consumer = MapCborCodec::new(MapTagConfig::new(280)).unwrap();
    let bytes = producer.encode(&PackValue::Map(sample_map()));
    // The consumer does not know 279 and keeps it as an opaque tag.
    assert_eq!(
        consumer.decode(&bytes).unwrap(),
        PackValue::Extension(PackExtension::new(
            MAP_TAG,
            PackValue::Array(vec![int(1), int(2), int(3), PackValue::Array(vec![int(4), int(5)])])
        ))
    );
}

struct Epoch;

impl TagDecodeHook for Epoch {
    fn decode(&self, payload: PackValue) -> Result<PackValue, CborError> {
        Ok(PackValue::Array(vec![PackValue::from("epoch"), payload]))
    }
}

#[test]
fn coexists_with_other_tag_hooks() {
    let mut tags = TagRegistry::new();
    tags.register(1, Arc::new(Epoch)).unwrap();
    let mut codec =
        MapCborCodec::with_registries(MapTagConfig::new(MAP_TAG), EncodeHooks::new(), tags)
            .unwrap();

    let mut map = OrderedMap::new();
    map.insert(
        PackValue::from("at"),
        PackValue::Extension(PackExtension::new(1, int(0))),
    );
    let bytes = codec.encode(&PackValue::Map(map));

    let mut expected = OrderedMap::new();
    expected.insert(
        PackValue::from("at"),
        PackValue::Array(vec![PackValue::from("epoch"), int(0)]),
    );
    assert_eq!(codec.decode(&bytes).unwrap(), PackValue::Map(expected));
}

#[test]
fn registering_the_tag_twice_is_rejected() {
    let mut tags = TagRegistry::new();
    tags.register(MAP_TAG, Arc::new(Epoch)).unwrap();
    let result = MapCborCodec::with_registries(MapTagConfig::new(MAP_TAG), EncodeHooks::new(), tags);
    assert!(matches!(result, Err(CborError::DuplicateTag(MAP_TAG))));
}

#[test]
fn plain_codec_writes_generic_map() {
    // Without the hook the same container is an ordinary CBOR map.
    let bytes = CborEncoder::new().encode(&PackValue::Map(sample_map()));
    assert_eq!(hex::encode(&bytes), "a2010203820405");
    assert_eq!(
        CborDecoder::new().decode(&bytes).unwrap(),
        PackValue::Map(sample_map())
    );
}
