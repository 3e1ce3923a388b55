// Host-side tests for the hash/store codecs and the load/write-through policy.

use awop_core::band::Band;
use awop_core::content::Dataset;
use awop_core::error::HashError;
use awop_core::geometry::Viewport;
use awop_core::persist::{
    decode_hash, decode_store, encode_hash, encode_store, persist, restore, write_through,
    LoadSource, MemoryBackend, Snapshot,
};
use awop_core::session::Session;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn session() -> Session {
    Session::from_dataset(Dataset::default(), Viewport::new(1280.0, 800.0))
}

fn band_strategy() -> impl Strategy<Value = Band> {
    prop_oneof![Just(Band::Inner), Just(Band::Middle), Just(Band::Outer)]
}

fn snapshot_strategy() -> impl Strategy<Value = Snapshot> {
    (
        proptest::collection::vec(band_strategy(), 20),
        proptest::collection::vec(any::<bool>(), 7),
    )
        .prop_map(|(bands, categories_visible)| Snapshot {
            bands,
            categories_visible,
        })
}

#[test]
fn documented_example_decodes() {
    let snap = decode_hash("#immioommiiimmiioomim/iiiiiii", 20, 7).expect("valid hash");
    assert_eq!(snap.bands[0], Band::Inner);
    assert_eq!(snap.bands[1], Band::Middle);
    assert_eq!(snap.bands[4], Band::Outer);
    assert!(snap.categories_visible.iter().all(|&v| v));
    assert_eq!(encode_hash(&snap), "immioommiiimmiioomim/iiiiiii");
}

#[test]
fn initial_state_encodes_all_inner_and_visible() {
    let hash = encode_hash(&Snapshot::initial(20, 7));
    assert_eq!(hash, format!("{}/{}", "i".repeat(20), "i".repeat(7)));
    assert_eq!(hash.len(), 20 + 1 + 7);
}

#[test]
fn malformed_hashes_are_rejected() {
    let bands = "i".repeat(20);
    assert_eq!(decode_hash("", 20, 7), Err(HashError::Empty));
    assert_eq!(decode_hash("#", 20, 7), Err(HashError::Empty));
    assert_eq!(
        decode_hash(&bands, 20, 7),
        Err(HashError::Segments(1))
    );
    assert_eq!(
        decode_hash(&format!("{bands}/iiiiiii/i"), 20, 7),
        Err(HashError::Segments(3))
    );
    assert_eq!(
        decode_hash("iii/iiiiiii", 20, 7),
        Err(HashError::BandLength {
            expected: 20,
            found: 3
        })
    );
    assert_eq!(
        decode_hash(&format!("{bands}/"), 20, 7),
        Err(HashError::CategoryLength {
            expected: 7,
            found: 0
        })
    );
    assert_eq!(
        decode_hash(&format!("{}x/iiiiiii", "i".repeat(19)), 20, 7),
        Err(HashError::BandChar { index: 19, ch: 'x' })
    );
    // 'm' is a band character but not a visibility character.
    assert_eq!(
        decode_hash(&format!("{bands}/iiimiii"), 20, 7),
        Err(HashError::CategoryChar { index: 3, ch: 'm' })
    );
}

#[test]
fn rejected_hash_falls_back_to_the_store_without_partial_application() {
    let mut s = session();
    let first = s.tokens()[0].name().to_string();
    let store = encode_store([(first.as_str(), Band::Middle)]).expect("encodes");
    let backend = MemoryBackend {
        // Valid apart from the last category character.
        hash: Some(format!("#{}/iiiiiiz", "o".repeat(20))),
        store: Some(store),
        ..Default::default()
    };

    assert_eq!(restore(&mut s, &backend), LoadSource::Store);
    assert_eq!(s.tokens()[0].band(), Band::Middle);
    assert!(s.tokens()[1..].iter().all(|t| t.band() == Band::Inner));
    assert!(s.categories().iter().all(|c| c.visible));
}

#[test]
fn valid_hash_wins_over_the_store() {
    let mut s = session();
    let store = encode_store(s.store_entries().map(|(n, _)| (n, Band::Middle))).expect("encodes");
    let backend = MemoryBackend {
        hash: Some(format!("#o{}/oiiiiii", "i".repeat(19))),
        store: Some(store),
        ..Default::default()
    };

    assert_eq!(restore(&mut s, &backend), LoadSource::Hash);
    assert_eq!(s.tokens()[0].band(), Band::Outer);
    assert_eq!(s.tokens()[1].band(), Band::Inner);
    assert!(!s.categories()[0].visible);
    assert_eq!(s.score().total, 58);
    assert!((s.score().normalized - 0.95).abs() < 1e-6);
}

#[test]
fn nothing_persisted_means_defaults() {
    let mut s = session();
    assert_eq!(restore(&mut s, &MemoryBackend::default()), LoadSource::Defaults);
    assert_eq!(s.snapshot(), Snapshot::initial(20, 7));
}

#[test]
fn store_decode_skips_bad_values_and_unknown_names() {
    let mut s = session();
    let a = s.tokens()[2].name().to_string();
    let b = s.tokens()[3].name().to_string();
    let json = format!(r#"{{"{a}":"outer","{b}":"sideways","No Such Axis":"middle"}}"#);

    let parsed = decode_store(&json).expect("valid JSON object");
    assert_eq!(parsed.len(), 2);
    assert_eq!(s.apply_store_selections(&parsed), 1);
    assert_eq!(s.tokens()[2].band(), Band::Outer);
    assert_eq!(s.tokens()[3].band(), Band::Inner);
}

#[test]
fn corrupt_store_is_treated_as_absent() {
    assert!(decode_store("{not json").is_err());
    assert!(decode_store("[1, 2, 3]").is_err());

    let mut s = session();
    let backend = MemoryBackend {
        store: Some("{not json".into()),
        ..Default::default()
    };
    assert_eq!(restore(&mut s, &backend), LoadSource::Defaults);
}

#[test]
fn store_uses_lowercase_band_names() {
    let json = encode_store([("Wealth", Band::Outer), ("Age", Band::Inner)]).expect("encodes");
    assert_eq!(json, r#"{"Age":"inner","Wealth":"outer"}"#);
}

#[test]
fn write_through_updates_both_representations() {
    let mut s = session();
    s.set_band(4, Band::Outer);
    let mut backend = MemoryBackend::default();
    write_through(&s, &mut backend).expect("memory backend accepts writes");

    let hash = backend.hash.clone().expect("hash written");
    assert_eq!(decode_hash(&hash, 20, 7).expect("valid"), s.snapshot());
    let store = decode_store(backend.store.as_deref().expect("store written")).expect("valid");
    assert_eq!(store.get(s.tokens()[4].name()), Some(&Band::Outer));
    assert_eq!((backend.store_writes, backend.hash_writes), (1, 1));
}

#[test]
fn storage_failure_is_logged_not_propagated() {
    let s = session();
    let mut backend = MemoryBackend {
        fail_store_writes: true,
        ..Default::default()
    };
    assert!(write_through(&s, &mut backend).is_err());
    // The hash is still rewritten when the store write fails.
    assert_eq!(backend.hash_writes, 1);

    persist(&s, &mut backend);
    assert_eq!(backend.hash_writes, 2);
    assert_eq!(backend.store, None);
}

proptest! {
    #[test]
    fn snapshot_survives_encode_decode(snap in snapshot_strategy()) {
        let hash = encode_hash(&snap);
        prop_assert_eq!(hash.len(), 28);
        let back = decode_hash(&hash, 20, 7).unwrap();
        prop_assert_eq!(&back, &snap);
        prop_assert_eq!(encode_hash(&back), hash);
    }

    #[test]
    fn one_bad_character_rejects_the_whole_hash(
        snap in snapshot_strategy(),
        pos in 0usize..28,
        bad in prop_oneof![Just('x'), Just('I'), Just('#'), Just('0')],
    ) {
        let mut chars: Vec<char> = encode_hash(&snap).chars().collect();
        chars[pos] = bad;
        let hash: String = chars.into_iter().collect();

        let mut s = session();
        let before = s.snapshot();
        let backend = MemoryBackend { hash: Some(hash), ..Default::default() };
        prop_assert_eq!(restore(&mut s, &backend), LoadSource::Defaults);
        prop_assert_eq!(s.snapshot(), before);
    }
}
