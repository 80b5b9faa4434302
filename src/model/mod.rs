//! Resume model types.
//!
//! [`Token`] is the analysis input; [`ResumeDocument`] is the inferred
//! structure and [`ResumeForm`] its editable copy.

mod document;
mod form;
mod token;

pub use document::{ContactInfo, DetectedSection, Layout, ResumeDocument};
pub use form::{ResumeForm, FIXED_FIELDS};
pub use token::{BoundingBox, Token};

pub(crate) use token::finite_or_zero;
