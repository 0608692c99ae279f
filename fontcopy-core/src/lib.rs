//! fontcopy-core: the quiet stagehand that sets out fonts before the show
//!
//! Containers that render text need their fonts in a shared volume before
//! anything else starts. This library does exactly that one job: it takes
//! the `.ttf` files sitting at the top of a source directory and lays them
//! into a destination directory, replacing whatever was there under the
//! same name.
//!
//! ## The Running Order
//!
//! 1. Check that the source directory is really there
//! 2. Check that the destination directory is really there
//! 3. Walk the top level of the source (no wandering into subdirectories)
//! 4. Copy every `*.ttf` file across, overwriting old copies
//! 5. Hand back a [`report::CopyReport`] saying what happened
//!
//! ## A Sample Run
//!
//! ```rust,no_run
//! use fontcopy_core::config::CopierConfig;
//! use fontcopy_core::copier::copy_fonts;
//! use fontcopy_core::fs::DiskFs;
//!
//! let config = CopierConfig::new("/fonts", "/font_volume");
//! let report = copy_fonts(&config, &DiskFs)?;
//!
//! println!("{}", report.status_message());
//! #
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## The Cast of Characters
//!
//! - [`config::CopierConfig`]: where to read from, where to write to, and how strict to be
//! - [`fs::FontFs`]: the filesystem capability, real ([`fs::DiskFs`]) or pretend ([`fs::MemoryFs`])
//! - [`copier::copy_fonts`]: the whole performance in one call
//! - [`error::CopierError`]: what can go wrong, split into configuration and copy trouble
//!
//! Matching is literal and case-sensitive: `A.ttf` is copied, `B.TTF` is not.
//!
//! ---
//!
//! Crafted with care at FontLab https://www.fontlab.com/

pub mod config;
pub mod copier;
pub mod error;
pub mod fs;
pub mod report;
