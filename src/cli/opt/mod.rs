//! Command line options and the configuration file
use std::{
    io,
    path::{Path, PathBuf},
};

use booklet::{
    layout::{Alignment, Margins, SheetLayout, Style},
    numbers::NumberRange,
    ConfigError, RunPlan,
};
use clap::Parser;
use image::Rgba;
use serde::Deserialize;
use thiserror::*;

mod de;
use de::{deserialize_alignment, deserialize_color, deserialize_opt_path, deserialize_opt_u64};

#[derive(Parser)]
/// Generate sheets of uniquely numbered raffle tickets
pub struct Options {
    /// A RON file with the booklet settings (built-in defaults if omitted)
    pub config: Option<PathBuf>,
    /// Where to store the sheets
    #[clap(long, short = 'o')]
    pub out: Option<PathBuf>,
    /// The number of sheets
    #[clap(long, short = 'n')]
    pub pages: Option<i64>,
    /// Seed for the number generator, for reproducible sheets
    #[clap(long)]
    pub seed: Option<u64>,
    /// Placement of the numbers in the tickets. Valid choices are:
    ///
    /// "left", "center" and "right"
    #[clap(long, short = 'A')]
    pub align: Option<Alignment>,
}

/// The configuration file could not be used
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Reading the file failed
    #[error("failed to read config file '{}'", path.display())]
    Io {
        /// The config file
        path: PathBuf,
        /// The underlying error
        #[source]
        source: io::Error,
    },
    /// The file is not a valid config
    #[error("failed to parse config file '{}'", path.display())]
    Ron {
        /// The config file
        path: PathBuf,
        /// The underlying error
        #[source]
        source: ron::error::Error,
    },
}

impl Options {
    /// The config file (or the defaults) with the command line overrides applied
    pub fn config(&self) -> Result<Config, ConfigFileError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(out) = &self.out {
            config.out = out.clone();
        }
        if let Some(pages) = self.pages {
            config.pages = pages;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(align) = self.align {
            config.alignment = align;
        }
        Ok(config)
    }
}

/// The settings of a run
///
/// Every field is optional in the file; missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// A picture stretched behind the tickets
    #[serde(deserialize_with = "deserialize_opt_path")]
    pub background: Option<PathBuf>,
    /// The color of the sheet below the picture
    #[serde(deserialize_with = "deserialize_color")]
    pub background_color: Rgba<u8>,
    /// The smallest ticket number
    pub min: u32,
    /// The largest ticket number
    pub max: u32,
    /// Tickets on every sheet
    pub tickets_per_page: i64,
    /// The number of sheets
    pub pages: i64,
    /// Columns of the ticket grid
    pub tickets_per_row: i64,
    /// The output folder
    pub out: PathBuf,
    /// Sheet width in pixels
    pub width: u32,
    /// Sheet height in pixels
    pub height: u32,
    /// Space above the grid
    pub margin_top: i64,
    /// Space below the grid
    pub margin_bottom: i64,
    /// Space left of the grid
    pub margin_left: i64,
    /// Space right of the grid
    pub margin_right: i64,
    /// Color of the numbers
    #[serde(deserialize_with = "deserialize_color")]
    pub text_color: Rgba<u8>,
    /// Color of the borders and the separator
    #[serde(deserialize_with = "deserialize_color")]
    pub border_color: Rgba<u8>,
    /// A TrueType/OpenType font for the numbers
    #[serde(deserialize_with = "deserialize_opt_path")]
    pub font: Option<PathBuf>,
    /// Font size in points
    pub font_size: f32,
    /// Stroke width of borders and separator
    pub line_width: u32,
    /// Placement of the numbers
    #[serde(deserialize_with = "deserialize_alignment")]
    pub alignment: Alignment,
    /// Seed for the number generator
    #[serde(deserialize_with = "deserialize_opt_u64")]
    pub seed: Option<u64>,
}

const PEACH: Rgba<u8> = Rgba([248, 220, 191, 255]);

impl Default for Config {
    fn default() -> Self {
        Self {
            background: None,
            background_color: Rgba([0, 0, 0, 255]),
            min: 0,
            max: 9999,
            tickets_per_page: 10,
            pages: 500,
            tickets_per_row: 1,
            out: PathBuf::from("ticket-sheets"),
            width: 1080,
            height: 1920,
            margin_top: 610,
            margin_bottom: 440,
            margin_left: 50,
            margin_right: 50,
            text_color: PEACH,
            border_color: PEACH,
            font: None,
            font_size: 38.0,
            line_width: 5,
            alignment: Alignment::Left,
            seed: None,
        }
    }
}

impl Config {
    /// Parse a config from RON text
    pub fn from_ron(text: &str) -> Result<Self, ron::error::Error> {
        ron::from_str(text)
    }

    /// Read a config file
    ///
    /// Relative `background` and `font` paths are relative to the folder of
    /// the file.
    pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
            path: path.to_owned(),
            source,
        })?;
        let mut config = Self::from_ron(&text).map_err(|source| ConfigFileError::Ron {
            path: path.to_owned(),
            source,
        })?;
        if let Some(folder) = path.parent() {
            config.resolve_paths(folder);
        }
        Ok(config)
    }

    fn resolve_paths(&mut self, folder: &Path) {
        for path in [&mut self.background, &mut self.font].into_iter().flatten() {
            if path.is_relative() {
                *path = folder.join(&*path);
            }
        }
    }

    /// The range the ticket numbers are drawn from
    pub fn number_range(&self) -> Result<NumberRange, ConfigError> {
        NumberRange::new(self.min, self.max)
    }

    /// The number of sheets and tickets
    pub fn plan(&self) -> Result<RunPlan, ConfigError> {
        RunPlan::new(self.tickets_per_page, self.pages)
    }

    /// The page setup
    pub fn layout(&self) -> Result<SheetLayout, ConfigError> {
        let margins = Margins::from_signed(
            self.margin_top,
            self.margin_bottom,
            self.margin_left,
            self.margin_right,
        )?;
        let tickets_per_row =
            u32::try_from(self.tickets_per_row).map_err(|_| ConfigError::NotPositive {
                name: "tickets_per_row",
                value: self.tickets_per_row,
            })?;
        SheetLayout::new(self.width, self.height, margins, tickets_per_row)
    }

    /// The font size, if it is usable
    pub fn font_size(&self) -> Result<f32, ConfigError> {
        if self.font_size.is_finite() && self.font_size > 0.0 {
            Ok(self.font_size)
        } else {
            Err(ConfigError::FontSize(self.font_size))
        }
    }

    /// Colors and strokes
    pub fn style(&self) -> Style {
        Style {
            text_color: self.text_color,
            border_color: self.border_color,
            line_thickness: self.line_width,
            alignment: self.alignment,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use booklet::{layout::Alignment, ConfigError};
    use clap::Parser;
    use image::Rgba;

    use super::{Config, Options};

    #[test]
    fn test_defaults() {
        let config = Config::from_ron("()").unwrap();
        assert_eq!(config, Config::default());

        let layout = config.layout().unwrap();
        assert_eq!(layout.printable_width(), 980);
        assert_eq!(layout.printable_height(), 870);
        assert_eq!(config.plan().unwrap().total_tickets(), 5000);
        assert_eq!(config.number_range().unwrap().len(), 10000);
        assert_eq!(config.style().text_color, Rgba([248, 220, 191, 255]));
        assert_eq!(config.font_size().unwrap(), 38.0);
    }

    #[test]
    fn test_parse() {
        let config = Config::from_ron(
            r##"(
                background: "Base.png",
                background_color: "#10203040",
                min: 1,
                max: 500,
                tickets_per_page: 6,
                pages: 20,
                tickets_per_row: 2,
                out: "out",
                text_color: (1, 2, 3),
                border_color: [4, 5, 6, 7],
                font: "fonts/calibri-bold.ttf",
                font_size: 24.5,
                alignment: "center",
                seed: 1234,
            )"##,
        )
        .unwrap();
        assert_eq!(config.background, Some(PathBuf::from("Base.png")));
        assert_eq!(config.background_color, Rgba([0x10, 0x20, 0x30, 0x40]));
        assert_eq!((config.min, config.max), (1, 500));
        assert_eq!(config.tickets_per_row, 2);
        assert_eq!(config.text_color, Rgba([1, 2, 3, 255]));
        assert_eq!(config.border_color, Rgba([4, 5, 6, 7]));
        assert_eq!(config.font_size, 24.5);
        assert_eq!(config.alignment, Alignment::Center);
        assert_eq!(config.seed, Some(1234));
        // untouched
        assert_eq!(config.width, 1080);
        assert_eq!(config.line_width, 5);
    }

    #[test]
    fn test_parse_numeric_alignment() {
        let config = Config::from_ron("(alignment: 2)").unwrap();
        assert_eq!(config.alignment, Alignment::Right);
        assert!(Config::from_ron("(alignment: 3)").is_err());
        assert!(Config::from_ron("(alignment: \"middle\")").is_err());
    }

    #[test]
    fn test_parse_bad_color() {
        assert!(Config::from_ron("(text_color: \"red\")").is_err());
        assert!(Config::from_ron("(text_color: (1, 2))").is_err());
        assert!(Config::from_ron("(text_color: (1, 2, 3, 4, 5))").is_err());
        assert!(Config::from_ron("(text_color: (1, 2, 300))").is_err());
    }

    #[test]
    fn test_validation() {
        let config = Config {
            pages: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.plan(),
            Err(ConfigError::NotPositive { name: "pages", .. })
        ));

        let config = Config {
            pages: 1001,
            ..Config::default()
        };
        assert_eq!(config.plan().unwrap().total_tickets(), 10010);

        let config = Config {
            min: 10,
            max: 1,
            ..Config::default()
        };
        assert!(config.number_range().is_err());

        let config = Config {
            margin_bottom: -4,
            ..Config::default()
        };
        assert!(matches!(
            config.layout(),
            Err(ConfigError::NegativeMargin {
                side: "bottom",
                value: -4
            })
        ));

        let config = Config {
            tickets_per_row: -2,
            ..Config::default()
        };
        assert!(matches!(
            config.layout(),
            Err(ConfigError::NotPositive {
                name: "tickets_per_row",
                ..
            })
        ));

        let config = Config {
            font_size: 0.0,
            ..Config::default()
        };
        assert!(config.font_size().is_err());
    }

    #[test]
    fn test_resolve_paths() {
        let mut config = Config {
            background: Some(PathBuf::from("Base.png")),
            font: Some(PathBuf::from("/usr/share/fonts/a.ttf")),
            ..Config::default()
        };
        config.resolve_paths(Path::new("/data/raffle"));
        assert_eq!(config.background, Some(PathBuf::from("/data/raffle/Base.png")));
        assert_eq!(config.font, Some(PathBuf::from("/usr/share/fonts/a.ttf")));
        assert_eq!(config.out, PathBuf::from("ticket-sheets"));
    }

    #[test]
    fn test_overrides() {
        let opt = Options::parse_from([
            "raffle-tool",
            "--out",
            "sheets",
            "-n",
            "3",
            "--seed",
            "9",
            "-A",
            "right",
        ]);
        let config = opt.config().unwrap();
        assert_eq!(config.out, PathBuf::from("sheets"));
        assert_eq!(config.pages, 3);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.alignment, Alignment::Right);
        assert_eq!(config.tickets_per_page, 10);
    }

    #[test]
    fn test_missing_config_file() {
        let opt = Options::parse_from(["raffle-tool", "/nonexistent/booklet.ron"]);
        let err = opt.config().unwrap_err();
        assert!(err.to_string().contains("booklet.ron"));
    }
}
