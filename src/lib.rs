//! labnote: section locator and placeholder filler for structured lab-notebook markdown.
//!
//! Lab notebooks are markdown files with YAML front matter and a fixed heading grammar:
//!
//! ```text
//! ---
//! title: "My Experiment"
//! ---
//! ### [UHW100] Transformation
//! #### Method
//! - (method used in this step)
//! ```
//!
//! Given a cursor line or a `(uo_id, section)` pair, [`locate`] finds the matching section and the
//! exact range of its placeholder, together with the experiment title used as drafting context.

pub mod config;
pub mod document;
pub mod edit_plan;
pub mod error;
pub mod front_matter;
pub mod grammar;
pub mod input;
pub mod locate;
pub mod logging;
pub mod payload;
pub mod placeholder;
pub mod resolver;
pub mod scanner;
pub mod section;

pub use document::{Document, Position, Range};
pub use error::{Error, Result};
pub use front_matter::{extract_query, parse_front_matter, FrontMatter, QueryStyle};
pub use locate::{locate, locate_with, SectionContext, Target};
pub use placeholder::{find_placeholder, Placeholder};
pub use resolver::{resolve_explicit, resolve_from_cursor};
pub use scanner::scan;
pub use section::HeadingRecord;
