//! Source text for the substring benchmark
//!
//! Either a fixed encyclopedia article (~65k bytes, CRLF line endings) or a
//! pseudo-random byte sequence drawn from a seeded generator.

use std::borrow::Cow;

use rand::Rng;

/// Fixed literal corpus.
pub const ARTICLE: &str = include_str!("corpus/article.txt");

/// Length of the synthetic corpus in bytes.
pub const RANDOM_CORPUS_LEN: usize = 64_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CorpusMode {
    Article,
    Random,
}

#[derive(Clone, Debug)]
pub struct Corpus {
    mode: CorpusMode,
    text: Cow<'static, [u8]>,
}

impl Corpus {
    pub fn article() -> Self {
        Self {
            mode: CorpusMode::Article,
            text: Cow::Borrowed(ARTICLE.as_bytes()),
        }
    }

    /// One full-range byte per draw, in order.
    pub fn random<R: Rng>(rng: &mut R, len: usize) -> Self {
        let text: Vec<u8> = (0..len).map(|_| rng.gen::<u8>()).collect();
        Self {
            mode: CorpusMode::Random,
            text: Cow::Owned(text),
        }
    }

    pub fn mode(&self) -> CorpusMode {
        self.mode
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn slice(&self, start: usize, len: usize) -> Option<&[u8]> {
        let end = start.checked_add(len)?;
        self.text.get(start..end)
    }
}
