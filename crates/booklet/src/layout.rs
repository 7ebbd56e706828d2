//! # Sheet layout
//!
//! A sheet is a grid of equally sized ticket cells between the page margins.
//! The grid has a fixed number of cells per row and as many rows as needed
//! for the tickets on the sheet.

use std::{fmt, str::FromStr};

use image::{Rgba, RgbaImage};
use log::debug;

use crate::{
    raster::{draw_centered_text, offset, scale_nearest, Canvas, Face, Rect},
    ticket::Page,
    ConfigError,
};

/// Distance between the sheet edges and the ticket grid, in pixels
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Margins {
    /// Above the first row
    pub top: u32,
    /// Below the last row
    pub bottom: u32,
    /// Left of the first column
    pub left: u32,
    /// Right of the last column
    pub right: u32,
}

impl Margins {
    /// Convert signed margins, rejecting negative values
    pub fn from_signed(top: i64, bottom: i64, left: i64, right: i64) -> Result<Self, ConfigError> {
        let side = |side: &'static str, value: i64| {
            u32::try_from(value).map_err(|_| ConfigError::NegativeMargin { side, value })
        };
        Ok(Self {
            top: side("top", top)?,
            bottom: side("bottom", bottom)?,
            left: side("left", left)?,
            right: side("right", right)?,
        })
    }
}

/// The fixed page setup of a run
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    width: u32,
    height: u32,
    margins: Margins,
    tickets_per_row: u32,
}

impl SheetLayout {
    /// Create a new layout, checking that there is room for the grid
    pub fn new(
        width: u32,
        height: u32,
        margins: Margins,
        tickets_per_row: u32,
    ) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::NotPositive {
                name: "width",
                value: 0,
            });
        }
        if height == 0 {
            return Err(ConfigError::NotPositive {
                name: "height",
                value: 0,
            });
        }
        if tickets_per_row == 0 {
            return Err(ConfigError::NotPositive {
                name: "tickets_per_row",
                value: 0,
            });
        }
        let h_margin = u64::from(margins.left) + u64::from(margins.right);
        let v_margin = u64::from(margins.top) + u64::from(margins.bottom);
        if h_margin >= u64::from(width) || v_margin >= u64::from(height) {
            return Err(ConfigError::NoPrintableArea { width, height });
        }
        Ok(Self {
            width,
            height,
            margins,
            tickets_per_row,
        })
    }

    /// Width of the sheet in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the sheet in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The page margins
    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// The number of cells in a row
    pub fn tickets_per_row(&self) -> u32 {
        self.tickets_per_row
    }

    /// The width between the left and right margin
    pub fn printable_width(&self) -> u32 {
        self.width - self.margins.left - self.margins.right
    }

    /// The height between the top and bottom margin
    pub fn printable_height(&self) -> u32 {
        self.height - self.margins.top - self.margins.bottom
    }
}

/// A single ticket cell
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// The grid for a sheet with a given number of tickets
///
/// Cell sizes are rounded down, the remaining pixels at the right and bottom
/// of the printable area stay empty.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridGeometry {
    /// Width of the sheet
    pub canvas_width: u32,
    /// Height of the sheet
    pub canvas_height: u32,
    /// The page margins
    pub margins: Margins,
    /// Columns of the grid
    pub cells_per_row: u32,
    /// Rows of the grid
    pub row_count: u32,
    /// Width of a cell
    pub cell_width: u32,
    /// Height of a cell
    pub cell_height: u32,
}

impl GridGeometry {
    /// Compute the grid for `ticket_count` tickets
    pub fn compute(layout: &SheetLayout, ticket_count: usize) -> Self {
        let cells_per_row = layout.tickets_per_row;
        let row_count = (ticket_count as u64).div_ceil(u64::from(cells_per_row)) as u32;
        let cell_width = layout.printable_width() / cells_per_row;
        let cell_height = layout
            .printable_height()
            .checked_div(row_count)
            .unwrap_or(0);
        Self {
            canvas_width: layout.width,
            canvas_height: layout.height,
            margins: layout.margins,
            cells_per_row,
            row_count,
            cell_width,
            cell_height,
        }
    }

    /// The cell of the ticket at `index` (row by row, starting at 0)
    pub fn cell(&self, index: usize) -> Cell {
        let per_row = self.cells_per_row as usize;
        let row = (index / per_row) as u64;
        let col = (index % per_row) as u64;
        let x = col * u64::from(self.cell_width) + u64::from(self.margins.left);
        let y = row * u64::from(self.cell_height) + u64::from(self.margins.top);
        Cell {
            x: i32::try_from(x).unwrap_or(i32::MAX),
            y: i32::try_from(y).unwrap_or(i32::MAX),
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// The bottom edge of the last row
    pub fn grid_bottom(&self) -> u32 {
        self.margins.top + self.row_count * self.cell_height
    }
}

/// Where the number is placed within its cell
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Alignment {
    /// One character width from the left edge
    #[default]
    Left,
    /// In the middle of the cell
    Center,
    /// One character width from the right edge
    Right,
}

impl Alignment {
    /// The x coordinate at which the text of `cell` starts
    ///
    /// For [`Alignment::Right`] the reference width is the cell width divided
    /// by `tickets_per_row` once more, so the right margin is only correct
    /// with a single ticket per row.
    pub fn text_x(
        self,
        cell: &Cell,
        tickets_per_row: u32,
        digit_width: u32,
        char_width: u32,
    ) -> i32 {
        let x = i64::from(cell.x);
        let width = i64::from(cell.width);
        let cw = i64::from(char_width);
        let dw = i64::from(digit_width);
        let text_x = match self {
            Self::Left => x + cw,
            Self::Center => x + width / 2 - cw * dw / 2,
            Self::Right => x + width / i64::from(tickets_per_row.max(1)) - cw * (dw + 1),
        };
        text_x.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
}

#[derive(Debug)]
/// Failed to parse an alignment name
pub struct AlignmentError {}

impl fmt::Display for AlignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Use one of `left`, `center` or `right`")
    }
}

impl std::error::Error for AlignmentError {}

impl FromStr for Alignment {
    type Err = AlignmentError;
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val {
            "left" | "l" => Ok(Self::Left),
            "center" | "centre" | "c" => Ok(Self::Center),
            "right" | "r" => Ok(Self::Right),
            _ => Err(AlignmentError {}),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        })
    }
}

/// Colors and strokes shared by all sheets
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Style {
    /// Color of the numbers
    pub text_color: Rgba<u8>,
    /// Color of the cell borders and the separator
    pub border_color: Rgba<u8>,
    /// Stroke width of borders and separator
    pub line_thickness: u32,
    /// Placement of the numbers
    pub alignment: Alignment,
}

/// Paints sheets
pub struct LayoutEngine {
    layout: SheetLayout,
    style: Style,
    face: Box<dyn Face>,
    digit_width: u32,
    background_color: Rgba<u8>,
    background: Option<RgbaImage>,
}

impl LayoutEngine {
    /// Create a new engine for numbers with `digit_width` digits
    pub fn new(layout: SheetLayout, style: Style, face: Box<dyn Face>, digit_width: usize) -> Self {
        Self {
            layout,
            style,
            face,
            digit_width: u32::try_from(digit_width).unwrap_or(u32::MAX),
            background_color: Rgba([0, 0, 0, 255]),
            background: None,
        }
    }

    /// Set the color every sheet is filled with first
    pub fn with_background_color(mut self, color: Rgba<u8>) -> Self {
        self.background_color = color;
        self
    }

    /// Put a picture behind the tickets
    ///
    /// The picture is stretched to the sheet size once, here.
    pub fn with_background(mut self, image: &RgbaImage) -> Self {
        let (w, h) = (self.layout.width, self.layout.height);
        debug!(
            "Scaling background from {}x{} to {}x{}",
            image.width(),
            image.height(),
            w,
            h
        );
        self.background = Some(scale_nearest(image, w, h));
        self
    }

    /// Render a sheet
    pub fn layout_page(&self, page: &Page) -> Canvas {
        let layout = &self.layout;
        let style = &self.style;
        let mut canvas = Canvas::new(layout.width, layout.height);

        canvas.fill(self.background_color);
        if let Some(background) = &self.background {
            canvas.composite_image(background, Rect::new(0, 0, layout.width, layout.height));
        }

        let geometry = GridGeometry::compute(layout, page.tickets.len());
        let margins = layout.margins;
        canvas.draw_horizontal_rule(
            offset(0, margins.left),
            offset(0, margins.top),
            layout.printable_width(),
            style.line_thickness,
            style.border_color,
        );

        let char_width = self.face.advance('0');
        for (index, ticket) in page.tickets.iter().enumerate() {
            let cell = geometry.cell(index);
            canvas.draw_rect_border(
                cell.x,
                cell.y,
                cell.width,
                cell.height,
                style.line_thickness,
                style.border_color,
            );
            let x = style.alignment.text_x(
                &cell,
                layout.tickets_per_row,
                self.digit_width,
                char_width,
            );
            let y = offset(cell.y, cell.height / 2);
            draw_centered_text(
                &mut canvas,
                &ticket.text,
                self.face.as_ref(),
                x,
                y,
                style.text_color,
            );
        }
        canvas
    }
}
