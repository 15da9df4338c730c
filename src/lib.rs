#![deny(unexpected_cfgs)]
//
#![warn(clippy::cargo)]
#![warn(clippy::nursery)]

//! Fluent construction of Discord embed message payloads.
//!
//! ```
//! use embed_builder::{EmbedBuilder, embed::Color};
//!
//! let embed = EmbedBuilder::new()
//!     .set_title("Deploy finished")
//!     .set_color(Color::new(87, 242, 135))
//!     .add_field("Duration", "41s", true)
//!     .into_record();
//!
//! assert_eq!(embed.title.as_deref(), Some("Deploy finished"));
//! ```
//!
//! The crate only shapes the in-memory record; sending it anywhere is the
//! responsibility of an external Discord client library.

mod json_util;

pub mod builder;
pub mod embed;
pub mod naming;

pub use builder::EmbedBuilder;
pub use embed::Embed;
pub use naming::FieldNaming;
