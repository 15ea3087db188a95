use microbench::config::{index_bucket, length_bucket};
use microbench::corpus::CorpusMode;
use microbench::search::{SearcherKind, SubstringSearcher};
use microbench::{Harness, MicroBench, StringIndexOfBench, StringSearchConfig, StringSearchFixture};
use proptest::prelude::*;

fn config(string_length: i32, index_level: i32, use_random_string: bool, seed: u64) -> StringSearchConfig {
    StringSearchConfig {
        string_length,
        index_level,
        use_random_string,
        seed,
        ..StringSearchConfig::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every candidate is found, no later than where it was cut.
    #[test]
    fn every_candidate_is_found(
        string_length in 1i32..=4,
        index_level in 1i32..=4,
        use_random_string in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let cfg = config(string_length, index_level, use_random_string, seed);
        let mut bench = StringIndexOfBench::from_config(&cfg);
        Harness::new().run(&mut bench, 1).unwrap();

        let fixture = bench.fixture();
        let haystack = fixture.corpus().as_bytes();
        for (result, candidate) in bench.results().iter().zip(fixture.candidates()) {
            let found = result.expect("candidate not found");
            prop_assert!(found <= candidate.origin);
            prop_assert_eq!(&haystack[found..found + candidate.needle.len()], &candidate.needle[..]);
        }
    }

    #[test]
    fn fixture_is_reproducible(
        string_length in -2i32..=6,
        index_level in -2i32..=6,
        use_random_string in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let cfg = config(string_length, index_level, use_random_string, seed);
        let a = StringSearchFixture::build(&cfg);
        let b = StringSearchFixture::build(&cfg);
        prop_assert_eq!(a.candidates(), b.candidates());
        prop_assert_eq!(a.corpus().as_bytes(), b.corpus().as_bytes());
        let expected_mode = if use_random_string { CorpusMode::Random } else { CorpusMode::Article };
        prop_assert_eq!(a.corpus().mode(), expected_mode);

        let lengths = length_bucket(string_length);
        let indices = index_bucket(index_level);
        for c in a.candidates() {
            prop_assert!((lengths.min..=lengths.max).contains(&c.needle.len()));
            prop_assert!((indices.min..=indices.max).contains(&c.origin));
        }
    }

    #[test]
    fn operations_are_loops_times_candidates(loops in 0u64..20, count in 0usize..32) {
        let cfg = StringSearchConfig {
            max_num_strings: count,
            ..StringSearchConfig::default()
        };
        let mut bench = StringIndexOfBench::from_config(&cfg);
        prop_assert_eq!(bench.max_iterations_per_loop(), count as u64);
        let report = Harness::new().run(&mut bench, loops).unwrap();
        prop_assert_eq!(report.operations, loops * count as u64);
    }

    #[test]
    fn searchers_agree(haystack in proptest::collection::vec(any::<u8>(), 0..256), start in 0usize..256, len in 0usize..16) {
        let start = start.min(haystack.len());
        let end = (start + len).min(haystack.len());
        let needle = &haystack[start..end];
        let memmem = SearcherKind::Memmem.find(&haystack, needle);
        prop_assert_eq!(memmem, SearcherKind::Windows.find(&haystack, needle));
        prop_assert!(memmem.is_some_and(|p| p <= start));
    }
}

#[test]
fn batch_of_five_reports_five_times_candidates() {
    let cfg = StringSearchConfig::default();
    let mut bench = StringIndexOfBench::from_config(&cfg);
    let report = Harness::new().run(&mut bench, 5).unwrap();
    assert_eq!(report.loops, 5);
    assert_eq!(report.operations, 5 * cfg.max_num_strings as u64);
}

#[test]
fn zero_loop_batch_keeps_accumulated_time() {
    let mut harness = Harness::new();
    let mut bench = StringIndexOfBench::from_config(&StringSearchConfig::default());
    harness.run(&mut bench, 3).unwrap();
    let before = harness.elapsed();

    let report = harness.run(&mut bench, 0).unwrap();
    assert_eq!(report.operations, 0);
    assert_eq!(harness.elapsed(), before);
}

#[test]
fn report_serializes_to_json() {
    let mut bench = StringIndexOfBench::from_config(&StringSearchConfig::default());
    let report = Harness::new().run(&mut bench, 2).unwrap();
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["name"], "string_index_of");
    assert_eq!(json["loops"], 2);
    assert_eq!(json["operations"], 20);
    assert!(json["elapsed_ns"].is_u64());
}
