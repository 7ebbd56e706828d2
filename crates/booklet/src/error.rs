//! # Errors
//!
//! Configuration problems are detected before anything is rendered, resource
//! problems while loading the font and background, output problems while
//! storing the sheets. None of them is retried.

use std::{io, path::PathBuf};

use thiserror::Error;

/// A constraint on the run configuration was violated
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The range holds fewer numbers than tickets are requested
    #[error("not enough numbers: {requested} tickets requested, but only {available} numbers are available")]
    NotEnoughNumbers {
        /// `tickets_per_page * pages`
        requested: u64,
        /// `max - min + 1`
        available: u64,
    },
    /// `min` is greater than `max`
    #[error("invalid number range: minimum {min} is greater than maximum {max}")]
    InvalidRange {
        /// Lower bound
        min: u32,
        /// Upper bound
        max: u32,
    },
    /// A count or size that needs to be at least 1
    #[error("`{name}` must be greater than zero (got {value})")]
    NotPositive {
        /// The name of the setting
        name: &'static str,
        /// The offending value
        value: i64,
    },
    /// A margin is below zero
    #[error("the {side} margin must be zero or more (got {value})")]
    NegativeMargin {
        /// `top`, `bottom`, `left` or `right`
        side: &'static str,
        /// The offending value
        value: i64,
    },
    /// The margins cover the whole sheet
    #[error("margins leave no printable area on a {width}x{height} sheet")]
    NoPrintableArea {
        /// Sheet width in pixels
        width: u32,
        /// Sheet height in pixels
        height: u32,
    },
    /// The font size is zero, negative or not a number
    #[error("font size must be a positive number (got {0})")]
    FontSize(f32),
}

/// A font or background image could not be loaded
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Reading the font file failed
    #[error("failed to read font file '{}'", path.display())]
    FontRead {
        /// The configured font path
        path: PathBuf,
        /// The underlying error
        #[source]
        source: io::Error,
    },
    /// The font file is not a usable TrueType/OpenType font
    #[error("failed to parse font file '{}': {reason}", path.display())]
    FontParse {
        /// The configured font path
        path: PathBuf,
        /// The reason reported by the font parser
        reason: &'static str,
    },
    /// Opening or decoding the background failed
    #[error("failed to load background image '{}'", path.display())]
    Background {
        /// The configured background path
        path: PathBuf,
        /// The underlying error
        #[source]
        source: image::ImageError,
    },
}

/// The sheets could not be stored
#[derive(Debug, Error)]
pub enum OutputError {
    /// The output folder could not be created
    #[error("failed to create output folder '{}'", path.display())]
    CreateDir {
        /// The output folder
        path: PathBuf,
        /// The underlying error
        #[source]
        source: io::Error,
    },
    /// Encoding or writing a sheet failed
    #[error("failed to save sheet {index} to '{}'", path.display())]
    WriteSheet {
        /// 1-based index of the sheet
        index: u32,
        /// The target file
        path: PathBuf,
        /// The underlying error
        #[source]
        source: image::ImageError,
    },
}

/// Any error of a booklet run
#[derive(Debug, Error)]
pub enum Error {
    /// See [`ConfigError`]
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// See [`ResourceError`]
    #[error(transparent)]
    Resource(#[from] ResourceError),
    /// See [`OutputError`]
    #[error(transparent)]
    Output(#[from] OutputError),
}
