//! # Chakana Rebelde
//!
//! Static site builder for the Chakana Rebelde photo reportage. The
//! content repository is the data source: a headless CMS holds one
//! project record and the photo items, and this crate turns a snapshot of
//! them into the published page.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! The build runs in two independent stages with a JSON snapshot between
//! them:
//!
//! ```text
//! 1. Fetch      content API  →  snapshot.json    (remote documents → structured data)
//! 2. Generate   snapshot     →  dist/index.html  (assembled gallery → final HTML)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the snapshot is human-readable JSON you can inspect.
//! - **Offline iteration**: layout and styling changes re-run generate
//!   against a saved snapshot without touching the network.
//! - **Testability**: assembly and rendering are pure functions from
//!   snapshot to page, so tests never need a live content repository.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`client`] | Configured read-only handle to the content repository's query API |
//! | [`query`] | The fixed composite gallery query and its raw result shape |
//! | [`assemble`] | Display-set assembly — validity filter, chapter filter, cap, derived stats |
//! | [`generate`] | Stage 2 — renders the final page from the snapshot using Maud |
//! | [`config`] | `config.toml` loading, env overrides, validation, and CSS generation |
//! | [`types`] | Document shapes serialized between stages |
//! | [`output`] | CLI output formatting — content inventory and outcome reporting |
//!
//! # Design Decisions
//!
//! ## One Query, One Round Trip
//!
//! The project record and the photo list are fetched in a single
//! composite query. Two separate requests could observe different
//! dataset states — metadata claiming 26 photos next to a list holding
//! 24 — so the page is always built from one consistent snapshot.
//!
//! ## Three Page Outcomes, Nothing Else
//!
//! Every build ends in exactly one of: the gallery, the explicit
//! under-construction placeholder, or the error page with a manual
//! reload affordance. An absent project record or an empty photo list is
//! a degraded success, not a failure; only a fetch error reaches the
//! error page, and the `build` command maps it there instead of
//! propagating a fault.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro system, rather than Handlebars or Tera.
//! Advantages:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## No Image Pipeline
//!
//! Photo bytes live on the content service's CDN; the page embeds the
//! resolved asset URLs directly and only validates their presence. The
//! loading policy — first 8 tiles eager, the rest lazy — is the one
//! performance knob this crate owns.
//!
//! ## Published Content Only
//!
//! The client pins `perspective=published`: drafts never reach the site.
//! Production builds read through the content service's edge cache;
//! every other environment bypasses it so editors see changes
//! immediately.

pub mod assemble;
pub mod client;
pub mod config;
pub mod generate;
pub mod output;
pub mod query;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
