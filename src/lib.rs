//! Dictionary-driven segmentation of mixed CJK / Latin / numeric text.
//!
//! ```no_run
//! use cjk_knife::{settings, Segmenter};
//!
//! let segmenter = Segmenter::from_settings(settings::settings()).unwrap();
//! for token in segmenter.segment("汉文化和服装") {
//!     println!("{token}");
//! }
//! ```

pub mod collector;
pub mod dict;
pub mod knife;
pub mod segmenter;
pub mod settings;
#[cfg(test)]
pub(crate) mod testutil;
pub mod token;
pub mod trace_init;
pub mod unicode;

pub use collector::Mode;
pub use dict::{DictError, Dictionaries, DictionaryConfig, DictionaryRegistry};
pub use knife::Knife;
pub use segmenter::{Segmenter, TokenStream};
pub use token::{Token, TokenKind};
