//! Substring searchers used by the string benchmark

use serde::{Deserialize, Serialize};

/// Forward substring search over bytes.
pub trait SubstringSearcher {
    /// Offset of the first occurrence of `needle` in `haystack`, or `None`.
    fn find(&self, haystack: &[u8], needle: &[u8]) -> Option<usize>;
}

/// memchr's `memmem`, the usual choice for byte-string search in Rust
pub struct MemmemSearcher;

impl SubstringSearcher for MemmemSearcher {
    #[inline]
    fn find(&self, haystack: &[u8], needle: &[u8]) -> Option<usize> {
        memchr::memmem::find(haystack, needle)
    }
}

/// Plain std slice scan: compare every window
pub struct WindowsSearcher;

impl SubstringSearcher for WindowsSearcher {
    fn find(&self, haystack: &[u8], needle: &[u8]) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        haystack.windows(needle.len()).position(|w| w == needle)
    }
}

/// Searcher selected by configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearcherKind {
    #[default]
    Memmem,
    Windows,
}

impl SearcherKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memmem" => Some(Self::Memmem),
            "windows" => Some(Self::Windows),
            _ => None,
        }
    }
}

impl SubstringSearcher for SearcherKind {
    #[inline]
    fn find(&self, haystack: &[u8], needle: &[u8]) -> Option<usize> {
        match self {
            Self::Memmem => MemmemSearcher.find(haystack, needle),
            Self::Windows => WindowsSearcher.find(haystack, needle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check<S: SubstringSearcher>(searcher: &S) {
        assert_eq!(searcher.find(b"hello", b""), Some(0));
        assert_eq!(searcher.find(b"", b"a"), None);
        assert_eq!(searcher.find(b"hello world", b"hello"), Some(0));
        assert_eq!(searcher.find(b"hello world", b"world"), Some(6));
        assert_eq!(searcher.find(b"hello", b"xyz"), None);
        assert_eq!(searcher.find(b"hi", b"hello"), None);

        // First of several occurrences
        assert_eq!(searcher.find(b"xyzabcabc", b"abc"), Some(3));
        assert_eq!(searcher.find(b"aaaa", b"aa"), Some(0));

        // High bytes, as produced by the synthetic corpus
        assert_eq!(searcher.find(&[0x00, 0xff, 0x80, 0xff], &[0x80, 0xff]), Some(2));
    }

    #[test]
    fn test_memmem() {
        check(&MemmemSearcher);
    }

    #[test]
    fn test_windows() {
        check(&WindowsSearcher);
    }

    #[test]
    fn test_kind_dispatch() {
        check(&SearcherKind::Memmem);
        check(&SearcherKind::Windows);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(SearcherKind::parse("memmem"), Some(SearcherKind::Memmem));
        assert_eq!(SearcherKind::parse(" Windows "), Some(SearcherKind::Windows));
        assert_eq!(SearcherKind::parse("kmp"), None);
        assert_eq!(SearcherKind::default(), SearcherKind::Memmem);
    }
}
