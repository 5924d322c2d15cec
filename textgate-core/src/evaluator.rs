//! Sectioned evaluation of document content
//!
//! The evaluator reads content one section at a time through a
//! [`ChunkSource`], hands each section to a predicate closure and stops as
//! soon as one section matches. Only the section under test is ever held in
//! memory: it is dropped as soon as the predicate returns.
//!
//! The predicate always runs at least once. Content that yields no text at
//! all is tested as a single empty section with index 0, which gives
//! metadata-only conditions a chance to run.

use crate::{
    config::EvaluatorConfig,
    error::Result,
    reader::TextReader,
    source::{ChunkSource, ScopedSource},
};
use log::{debug, trace};
use std::io::{self, Read};

/// Evaluates content section by section with bounded memory
#[derive(Debug, Clone, Default)]
pub struct SectionedEvaluator {
    config: EvaluatorConfig,
}

impl SectionedEvaluator {
    /// Create an evaluator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator with a custom configuration
    pub fn with_config(config: EvaluatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluate `content`, reading it through a [`TextReader`] sized to the
    /// configured maximum section size
    pub fn evaluate<R, P>(&self, content: R, predicate: P) -> Result<bool>
    where
        R: Read,
        P: FnMut(&str, usize) -> Result<bool>,
    {
        self.evaluate_source(
            TextReader::new(content, self.config.max_section_size),
            predicate,
        )
    }

    /// Evaluate optional content; absent content is evaluated as empty
    pub fn evaluate_optional<R, P>(&self, content: Option<R>, predicate: P) -> Result<bool>
    where
        R: Read,
        P: FnMut(&str, usize) -> Result<bool>,
    {
        match content {
            Some(reader) => self.evaluate(reader, predicate),
            None => self.evaluate(io::empty(), predicate),
        }
    }

    /// Evaluate the sections produced by an already opened chunk source
    ///
    /// The source is closed exactly once before this returns, whatever the
    /// outcome.
    pub fn evaluate_source<S, P>(&self, source: S, mut predicate: P) -> Result<bool>
    where
        S: ChunkSource,
        P: FnMut(&str, usize) -> Result<bool>,
    {
        let mut source = ScopedSource::new(source);
        let mut section_index = 0;

        while let Some(section) = source.read_next()? {
            trace!("testing section {section_index} ({} bytes)", section.len());
            let matched = predicate(section.as_str(), section_index)?;
            section_index += 1;
            drop(section);

            if matched {
                debug!("section {} matched, skipping remaining content", section_index - 1);
                source.release()?;
                return Ok(true);
            }
        }

        let matched = if section_index == 0 {
            trace!("no content to read, testing an empty section");
            predicate("", 0)?
        } else {
            false
        };

        source.release()?;
        debug!("evaluated {section_index} section(s), matched: {matched}");
        Ok(matched)
    }
}

/// Evaluate `content` in sections of at most `max_section_size` characters
///
/// Returns `true` as soon as `predicate` accepts a section, `false` once the
/// content is exhausted without a match. A `max_section_size` of zero is
/// rejected before anything is read.
pub fn evaluate<R, P>(content: R, max_section_size: usize, predicate: P) -> Result<bool>
where
    R: Read,
    P: FnMut(&str, usize) -> Result<bool>,
{
    SectionedEvaluator::with_config(EvaluatorConfig::new(max_section_size))?
        .evaluate(content, predicate)
}
