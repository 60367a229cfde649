//! Whitespace tokenization and alphanumeric run extraction

use regex::Regex;
use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::LazyLock;

static ALPHANUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Za-z0-9]+").expect("alphanumeric pattern is valid"));

/// Leftmost maximal run of ASCII letters and digits in `token`, if any
///
/// Only the first run is returned: `"foo-bar123"` yields `"foo"`.
pub fn extract_alphanumeric(token: &str) -> Option<&str> {
    ALPHANUMERIC_RUN.find(token).map(|m| m.as_str())
}

/// Lazy iterator over whitespace-delimited tokens of a reader
///
/// The reader is scanned one buffered chunk at a time. Bytes up to the next
/// ASCII whitespace byte are carried across chunks, so a token may straddle
/// reads but no more than one unfinished token is ever held. Each completed
/// run is decoded lossily and split on Unicode whitespace.
/// After the first read error the iterator is exhausted.
pub struct Tokens<R> {
    reader: R,
    run: Vec<u8>,
    pending: VecDeque<String>,
    done: bool,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            run: Vec::new(),
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// Read until a non-empty run completes or the input ends
    fn fill_pending(&mut self) -> io::Result<()> {
        loop {
            let chunk = match self.reader.fill_buf() {
                Ok(chunk) => chunk,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if chunk.is_empty() {
                self.done = true;
                self.flush_run();
                return Ok(());
            }

            match chunk.iter().position(u8::is_ascii_whitespace) {
                Some(end) => {
                    self.run.extend_from_slice(&chunk[..end]);
                    self.reader.consume(end + 1);
                    if !self.run.is_empty() {
                        self.flush_run();
                        return Ok(());
                    }
                }
                None => {
                    let len = chunk.len();
                    self.run.extend_from_slice(chunk);
                    self.reader.consume(len);
                }
            }
        }
    }

    fn flush_run(&mut self) {
        if self.run.is_empty() {
            return;
        }
        self.pending.extend(
            String::from_utf8_lossy(&self.run)
                .split_whitespace()
                .map(str::to_owned),
        );
        self.run.clear();
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }
            if self.done {
                return None;
            }
            if let Err(e) = self.fill_pending() {
                self.done = true;
                return Some(Err(e));
            }
        }
    }
}

/// Tokenize a reader into raw whitespace-delimited tokens
pub fn tokenize<R: BufRead>(reader: R) -> Tokens<R> {
    Tokens::new(reader)
}

/// Alphanumeric words of a reader, one per token that contains any
pub fn alphanumeric_words<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    tokenize(reader).filter_map(|token| match token {
        Ok(token) => extract_alphanumeric(&token).map(|word| Ok(word.to_owned())),
        Err(e) => Some(Err(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    fn words(content: &str) -> Vec<String> {
        alphanumeric_words(Cursor::new(content))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_extract_first_run_only() {
        assert_eq!(extract_alphanumeric("foo-bar123"), Some("foo"));
        assert_eq!(extract_alphanumeric("--x9y--z"), Some("x9y"));
        assert_eq!(extract_alphanumeric("(42)"), Some("42"));
        assert_eq!(extract_alphanumeric("---"), None);
        assert_eq!(extract_alphanumeric(""), None);
    }

    #[test]
    fn test_extract_is_ascii_only() {
        assert_eq!(extract_alphanumeric("héllo"), Some("h"));
        assert_eq!(extract_alphanumeric("日本語"), None);
        assert_eq!(extract_alphanumeric("ünïcode"), Some("n"));
    }

    #[test]
    fn test_extract_returns_leftmost_maximal_substring() {
        for token in ["a.b", "..abc..de", "x", "1-22-333", "__init__", "@@"] {
            if let Some(run) = extract_alphanumeric(token) {
                let start = token.find(run).unwrap();
                assert!(run.bytes().all(|b| b.is_ascii_alphanumeric()));
                assert!(!token[..start].bytes().any(|b| b.is_ascii_alphanumeric()));
                let end = start + run.len();
                assert!(!token[end..]
                    .bytes()
                    .next()
                    .is_some_and(|b| b.is_ascii_alphanumeric()));
            } else {
                assert!(!token.bytes().any(|b| b.is_ascii_alphanumeric()));
            }
        }
    }

    #[test]
    fn test_words_filter_tokens_without_alphanumerics() {
        assert_eq!(words("abc 123 --- foo-bar"), vec!["abc", "123", "foo"]);
    }

    #[test]
    fn test_tokens_split_on_any_whitespace() {
        let tokens = tokenize(Cursor::new("  one\ttwo\n\nthree \r\n four  "))
            .collect::<io::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(tokens, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_tokens_survive_tiny_read_buffer() {
        let content = "supercalifragilistic expialidocious\nsecond-line tokens";
        let reader = BufReader::with_capacity(3, Cursor::new(content));

        let tokens = tokenize(reader)
            .collect::<io::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(
            tokens,
            vec!["supercalifragilistic", "expialidocious", "second-line", "tokens"]
        );
    }

    #[test]
    fn test_tokens_split_on_unicode_whitespace() {
        let tokens = tokenize(Cursor::new("a\u{00A0}b\u{2003}c d"))
            .collect::<io::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(tokens, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_multibyte_tokens_split_across_reads() {
        let reader = BufReader::with_capacity(1, Cursor::new("héllo wörld ☃x"));

        let tokens = tokenize(reader)
            .collect::<io::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(tokens, vec!["héllo", "wörld", "☃x"]);
    }

    /// Never-ending single line of `xx ` repeated
    struct EndlessLine;

    impl Read for EndlessLine {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            for (i, byte) in buf.iter_mut().enumerate() {
                *byte = if i % 3 == 2 { b' ' } else { b'x' };
            }
            Ok(buf.len())
        }
    }

    #[test]
    fn test_tokens_stream_without_newlines() {
        let tokens = tokenize(BufReader::new(EndlessLine))
            .take(3)
            .collect::<io::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(tokens, vec!["xx", "xx", "xx"]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(words("").is_empty());
        assert!(words(" \n\t ").is_empty());
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_read_error_is_reported_once() {
        let mut tokens = tokenize(BufReader::new(FailingReader));
        assert!(tokens.next().unwrap().is_err());
        assert!(tokens.next().is_none());
    }
}
