//! Chunk source contract and scoped release

use log::warn;
use std::io;

/// Producer of bounded text chunks, consumed by the evaluator
///
/// Implementations must never return a chunk longer than the size they were
/// opened with, and should prefer natural text boundaries over hard cuts.
/// [`crate::TextReader`] is the standard implementation.
pub trait ChunkSource {
    /// Next chunk of text, or `None` once the source is exhausted
    fn read_next(&mut self) -> io::Result<Option<String>>;

    /// Release the underlying stream
    fn close(&mut self) -> io::Result<()>;
}

impl<S: ChunkSource + ?Sized> ChunkSource for Box<S> {
    fn read_next(&mut self) -> io::Result<Option<String>> {
        (**self).read_next()
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

/// Owns a chunk source for the duration of one evaluation and closes it
/// exactly once.
///
/// Normal exits call [`ScopedSource::release`] so that a failing close is
/// reported to the caller. Any other exit (an error returned with `?`, a
/// panic in a predicate) closes the source on drop, where a close failure is
/// logged and never replaces the error already in flight.
pub(crate) struct ScopedSource<S: ChunkSource> {
    source: S,
    released: bool,
}

impl<S: ChunkSource> ScopedSource<S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            released: false,
        }
    }

    pub(crate) fn read_next(&mut self) -> io::Result<Option<String>> {
        self.source.read_next()
    }

    /// Close the source, surfacing a close failure
    pub(crate) fn release(mut self) -> io::Result<()> {
        self.released = true;
        self.source.close()
    }
}

impl<S: ChunkSource> Drop for ScopedSource<S> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Err(e) = self.source.close() {
            warn!("failed to release chunk source after an aborted evaluation: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingSource {
        closes: Rc<Cell<usize>>,
        fail_close: bool,
    }

    impl ChunkSource for CountingSource {
        fn read_next(&mut self) -> io::Result<Option<String>> {
            Ok(None)
        }

        fn close(&mut self) -> io::Result<()> {
            self.closes.set(self.closes.get() + 1);
            if self.fail_close {
                Err(io::Error::other("close failed"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_release_closes_once() {
        let closes = Rc::new(Cell::new(0));
        let scoped = ScopedSource::new(CountingSource {
            closes: closes.clone(),
            fail_close: false,
        });
        scoped.release().unwrap();
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_drop_closes_once() {
        let closes = Rc::new(Cell::new(0));
        {
            let _scoped = ScopedSource::new(CountingSource {
                closes: closes.clone(),
                fail_close: true,
            });
        }
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_release_reports_close_failure() {
        let closes = Rc::new(Cell::new(0));
        let scoped = ScopedSource::new(CountingSource {
            closes: closes.clone(),
            fail_close: true,
        });
        assert!(scoped.release().is_err());
        assert_eq!(closes.get(), 1);
    }
}
