//! Document conditions
//!
//! A [`DocumentCondition`] decides whether a document passes, looking at its
//! metadata and streamed content. Conditions that need to look at content as
//! text implement the section-level [`StringCondition`] hook instead and are
//! wrapped in [`Sectioned`], which feeds them one bounded section at a time
//! through the [`SectionedEvaluator`].

pub mod text;

pub use text::TextCondition;

use crate::{
    config::EvaluatorConfig,
    document::{HandlerDoc, ParseState},
    error::Result,
    evaluator::SectionedEvaluator,
};
use std::io::Read;

/// Condition evaluated against a whole document
pub trait DocumentCondition {
    /// Test `doc`, reading its content from `content` when present
    fn test_document(
        &self,
        doc: &mut HandlerDoc,
        content: Option<&mut dyn Read>,
        parse_state: ParseState,
    ) -> Result<bool>;
}

/// Condition evaluated one section of text at a time
///
/// `test_section` runs at least once per document, with an empty section
/// and index 0 when the document has no content. Implementations must not
/// hold on to `section` beyond the call.
pub trait StringCondition {
    /// Test one section of the document's text
    fn test_section(
        &self,
        doc: &mut HandlerDoc,
        section: &str,
        parse_state: ParseState,
        section_index: usize,
    ) -> Result<bool>;
}

/// Adapts a [`StringCondition`] into a [`DocumentCondition`]
#[derive(Debug, Clone)]
pub struct Sectioned<C> {
    evaluator: SectionedEvaluator,
    condition: C,
}

impl<C: StringCondition> Sectioned<C> {
    /// Wrap `condition` using the default maximum section size
    pub fn new(condition: C) -> Self {
        Self {
            evaluator: SectionedEvaluator::new(),
            condition,
        }
    }

    /// Wrap `condition` with a custom configuration
    pub fn with_config(condition: C, config: EvaluatorConfig) -> Result<Self> {
        Ok(Self {
            evaluator: SectionedEvaluator::with_config(config)?,
            condition,
        })
    }

    /// Maximum number of characters per section
    pub fn max_read_size(&self) -> usize {
        self.evaluator.config().max_section_size
    }

    /// The wrapped condition
    pub fn inner(&self) -> &C {
        &self.condition
    }
}

impl<C: StringCondition> DocumentCondition for Sectioned<C> {
    fn test_document(
        &self,
        doc: &mut HandlerDoc,
        content: Option<&mut dyn Read>,
        parse_state: ParseState,
    ) -> Result<bool> {
        self.evaluator
            .evaluate_optional(content, |section, section_index| {
                self.condition.test_section(doc, section, parse_state, section_index)
            })
    }
}

impl<C: DocumentCondition + ?Sized> DocumentCondition for Box<C> {
    fn test_document(
        &self,
        doc: &mut HandlerDoc,
        content: Option<&mut dyn Read>,
        parse_state: ParseState,
    ) -> Result<bool> {
        (**self).test_document(doc, content, parse_state)
    }
}
