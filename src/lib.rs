#![deny(unused_must_use, missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// Some helpers associated with driving the clis that ship with livenav.
#[cfg(feature = "cli")]
pub mod cli;

/// An in memory navigation link. Tests lean on it heavily, and the cli uses it to stand in for a
/// rendered page.
pub mod links;

/// The highlighter itself, and the `NavLinkHandle` trait that anything which looks like an anchor
/// in a nav bar must implement.
pub mod nav;

/// Details pertaining to parsing a rules file, and the defaults used when there isn't one.
pub mod rules;

mod version;

/// What version of livenav do you have :)
pub use crate::version::VERSION;

/// Who wrote this mess
pub use crate::version::AUTHOR;

pub use crate::nav::{highlight_active_nav, NavLinkHandle};
pub use crate::rules::HighlightRules;
