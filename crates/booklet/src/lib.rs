#![warn(missing_docs)]
//! # Raffle ticket sheets
//!
//! This crate lays out sheets ("booklets") of uniquely numbered raffle
//! tickets and renders them into RGBA images, ready to be printed.
//!
//! Every ticket on every sheet of a run gets a number that is drawn at random
//! from a configured range and never repeats. The tickets are arranged in a
//! grid between the page margins, optionally on top of a background picture.
//!
//! The pipeline is driven by [`BookletGenerator`]:
//!
//! - [`numbers::NumberAllocator`] hands out the unique numbers
//! - [`ticket::TicketFormatter`] pads them to a fixed width
//! - [`layout::LayoutEngine`] computes the grid and paints the [`raster::Canvas`]
//! - a [`generator::SheetSink`] (e.g. [`output::PngFolder`]) stores the result

pub mod error;
pub mod generator;
pub mod layout;
pub mod numbers;
pub mod output;
pub mod raster;
pub mod resources;
pub mod ticket;

pub use error::{ConfigError, Error, OutputError, ResourceError};
pub use generator::{BookletGenerator, RunPlan};
