//! # epigen
//!
//! An episode page generator. Your filesystem is the data source: each
//! folder under `asset/` is one episode, its `description.txt` carries the
//! episode's fields, and the generator splices a rendered fragment per
//! episode into the container region of an existing `index.html` — leaving
//! every byte outside that region untouched.
//!
//! # Architecture: Single-Pass Pipeline
//!
//! ```text
//! scan     asset/           →  Vec<Record>     (filesystem → structured data)
//! render   Vec<Record>      →  Vec<fragment>   (maud HTML per episode)
//! splice   page + fragments →  page'           (container interior replaced)
//! ```
//!
//! The pass is single-threaded and synchronous, rebuilds the whole container
//! region every time, and skips the write when nothing changed — running it
//! twice over unchanged sources is a byte-identical no-op. Watch mode wraps
//! the pass in an mtime poller with serialized, coalesced runs.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`record`] | `Record` type and the description-file parser |
//! | [`scan`] | Episode folder enumeration and media discovery |
//! | [`render`] | Maud fragment rendering, embed-URL conversion, payload encoding |
//! | [`splice`] | Container region location and text-level splice |
//! | [`generate`] | The full pass: scan → render → splice → write |
//! | [`config`] | `config.toml` loading, validation, and the stock dump |
//! | [`output`] | CLI output formatting — pure `format_*` plus `print_*` wrappers |
//! | [`watch`] | mtime polling and the single-slot run coalescer |
//!
//! # Design Decisions
//!
//! ## Text-Level Splice, Structural Boundary
//!
//! The host page is hand-maintained; parsing it into a DOM and serializing
//! it back could not guarantee byte-for-byte preservation of the parts the
//! generator does not own. Instead the container's interior is found by a
//! balanced-tag scan from its literal open marker, so the boundary is
//! structural without giving up the preservation guarantee.
//!
//! ## Maud Over Template Engines
//!
//! Fragments are built with [Maud](https://maud.lambda.xyz/): malformed
//! markup is a compile error, interpolation is escaped by default, and there
//! is no template directory to ship. The one deliberate exception to
//! auto-escaping is the episode title, which is trusted input rendered
//! verbatim, matching the rest of the hand-written page.
//!
//! ## JSON Payload Attributes
//!
//! Descriptions and designer credits travel to the client inside `data-*`
//! attributes for the page's own expand/collapse script. They are encoded as
//! JSON string literals rather than ad-hoc character substitution, so
//! quotes, newlines, and anything else reserved survive: entity-decode plus
//! `JSON.parse` on the client recovers the exact text.

pub mod config;
pub mod generate;
pub mod output;
pub mod record;
pub mod render;
pub mod scan;
pub mod splice;
pub mod watch;

#[cfg(test)]
pub(crate) mod test_helpers;
