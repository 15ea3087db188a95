//! Substring search benchmark
//!
//! Setup builds a [`StringSearchFixture`] once: the source text and a set of
//! candidate substrings sliced from it at seeded random offsets and lengths.
//! Each loop then searches for every candidate in the full source text.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::config::{Bucket, StringSearchConfig};
use crate::corpus::{Corpus, RANDOM_CORPUS_LEN};
use crate::error::BenchError;
use crate::harness::{Harness, MicroBench};
use crate::search::{SearcherKind, SubstringSearcher};

/// A substring of the source text and where it was cut from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub needle: Box<[u8]>,
    pub origin: usize,
}

/// Immutable data shared by every iteration.
#[derive(Clone, Debug)]
pub struct StringSearchFixture {
    corpus: Corpus,
    candidates: Vec<Candidate>,
    searcher: SearcherKind,
}

impl StringSearchFixture {
    pub fn build(config: &StringSearchConfig) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);

        // Corpus draws come first so candidate draws depend on the mode.
        let corpus = if config.use_random_string {
            Corpus::random(&mut rng, RANDOM_CORPUS_LEN)
        } else {
            Corpus::article()
        };

        let candidates = generate_candidates(
            &mut rng,
            &corpus,
            config.max_num_strings,
            config.length_bucket(),
            config.index_bucket(),
        );

        tracing::debug!(
            mode = ?corpus.mode(),
            corpus_len = corpus.len(),
            candidates = candidates.len(),
            string_length = config.string_length,
            index_level = config.index_level,
            "built substring fixture"
        );

        Self {
            corpus,
            candidates,
            searcher: config.searcher,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn searcher(&self) -> SearcherKind {
        self.searcher
    }
}

/// Slice `count` candidates out of `corpus`, drawing the length first and the
/// start offset second for each one.
pub fn generate_candidates<R: Rng>(
    rng: &mut R,
    corpus: &Corpus,
    count: usize,
    lengths: Bucket,
    indices: Bucket,
) -> Vec<Candidate> {
    let text = corpus.as_bytes();
    (0..count)
        .map(|_| {
            let len = rng.gen_range(lengths.min..=lengths.max).min(text.len());
            let start = rng
                .gen_range(indices.min..=indices.max)
                .min(text.len() - len);
            Candidate {
                needle: text[start..start + len].into(),
                origin: start,
            }
        })
        .collect()
}

pub struct StringIndexOfBench {
    fixture: StringSearchFixture,
    results: Vec<Option<usize>>,
}

impl StringIndexOfBench {
    pub fn new(fixture: StringSearchFixture) -> Self {
        let results = vec![None; fixture.candidates.len()];
        Self { fixture, results }
    }

    pub fn from_config(config: &StringSearchConfig) -> Self {
        Self::new(StringSearchFixture::build(config))
    }

    pub fn fixture(&self) -> &StringSearchFixture {
        &self.fixture
    }

    /// Match offsets from the most recent loop, one per candidate.
    pub fn results(&self) -> &[Option<usize>] {
        &self.results
    }

    /// Search every candidate once, returning the number of searches.
    #[inline]
    fn search_all(&mut self) -> usize {
        let haystack = self.fixture.corpus.as_bytes();
        let searcher = self.fixture.searcher;
        for (slot, candidate) in self.results.iter_mut().zip(&self.fixture.candidates) {
            *slot = std::hint::black_box(searcher.find(haystack, &candidate.needle));
        }
        self.fixture.candidates.len()
    }
}

impl MicroBench for StringIndexOfBench {
    fn name(&self) -> &'static str {
        "string_index_of"
    }

    fn max_iterations_per_loop(&self) -> u64 {
        self.fixture.candidates.len() as u64
    }

    fn do_batch(&mut self, harness: &mut Harness, num_loops: u64) -> Result<u64, BenchError> {
        for _ in 0..num_loops {
            harness.check_interrupt()?;
            harness.start_timer();
            let total = self.search_all();
            harness.pause_timer();
            std::hint::black_box(total);
        }
        Ok(num_loops * self.max_iterations_per_loop())
    }
}
