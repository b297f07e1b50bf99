//! Replays a fixed sequence of reads, for driving a session without a terminal.

use std::collections::VecDeque;
use std::io;

use crate::source::KeySource;
use crate::types::Keystroke;

/// One scripted read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayStep {
    Key(Keystroke),
    /// The read produced nothing.
    Idle,
    /// The read fails with this kind and message.
    Fail(io::ErrorKind, String),
}

/// A [`KeySource`] that plays back [`ReplayStep`]s in order.
///
/// Once the script is exhausted every read fails with `UnexpectedEof`, so a
/// session driven by it always terminates.
#[derive(Debug, Clone, Default)]
pub struct ReplayKeySource {
    steps: VecDeque<ReplayStep>,
    reads: usize,
}

impl ReplayKeySource {
    pub fn new(steps: impl IntoIterator<Item = ReplayStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            reads: 0,
        }
    }

    /// Script that presses each character of `keys` in order.
    pub fn from_keys(keys: &str) -> Self {
        Self::new(keys.chars().map(|c| ReplayStep::Key(Keystroke::from_char(c))))
    }

    /// Number of reads performed so far.
    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl KeySource for ReplayKeySource {
    fn read_key(&mut self) -> io::Result<Option<Keystroke>> {
        self.reads += 1;
        match self.steps.pop_front() {
            Some(ReplayStep::Key(key)) => Ok(Some(key)),
            Some(ReplayStep::Idle) => Ok(None),
            Some(ReplayStep::Fail(kind, msg)) => Err(io::Error::new(kind, msg)),
            None => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "replay script exhausted",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order() {
        let mut src = ReplayKeySource::new([
            ReplayStep::Key(Keystroke::from_char('a')),
            ReplayStep::Idle,
            ReplayStep::Fail(io::ErrorKind::Other, "gone".into()),
        ]);

        assert_eq!(src.read_key().unwrap(), Some(Keystroke::from_char('a')));
        assert_eq!(src.read_key().unwrap(), None);
        let err = src.read_key().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert_eq!(err.to_string(), "gone");
        assert_eq!(src.reads(), 3);
    }

    #[test]
    fn test_exhausted_script_fails() {
        let mut src = ReplayKeySource::from_keys("q");
        assert!(src.read_key().is_ok());
        assert_eq!(src.remaining(), 0);
        assert_eq!(
            src.read_key().unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn test_works_through_mut_ref() {
        fn read_one<S: KeySource>(mut source: S) -> Option<Keystroke> {
            source.read_key().unwrap()
        }

        let mut src = ReplayKeySource::from_keys("xy");
        assert_eq!(read_one(&mut src), Some(Keystroke::from_char('x')));
        assert_eq!(src.reads(), 1);
    }
}
