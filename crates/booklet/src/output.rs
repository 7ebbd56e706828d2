//! # Storing sheets as PNG files

use std::path::{Path, PathBuf};

use image::ImageFormat;
use log::info;

use crate::{generator::SheetSink, raster::Canvas, ticket::Page, Error, OutputError};

/// The file name of the sheet with the given (1-based) index
pub fn sheet_file_name(index: u32) -> String {
    format!("ticket-sheet-{:03}.png", index)
}

/// Writes every sheet to a numbered PNG file in a folder
pub struct PngFolder {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl PngFolder {
    /// Use `dir` as the output folder, creating it if needed
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, OutputError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| OutputError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self {
            dir,
            written: Vec::new(),
        })
    }

    /// The output folder
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The files written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl SheetSink for PngFolder {
    fn write_sheet(&mut self, page: &Page, canvas: &Canvas) -> Result<(), Error> {
        let path = self.dir.join(sheet_file_name(page.index));
        canvas
            .image()
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|source| OutputError::WriteSheet {
                index: page.index,
                path: path.clone(),
                source,
            })?;
        info!("Saved {}", path.display());
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::{sheet_file_name, PngFolder};
    use crate::{
        generator::SheetSink,
        raster::Canvas,
        ticket::{Page, TicketFormatter},
        Error, OutputError,
    };

    #[test]
    fn test_file_name() {
        assert_eq!(sheet_file_name(1), "ticket-sheet-001.png");
        assert_eq!(sheet_file_name(42), "ticket-sheet-042.png");
        assert_eq!(sheet_file_name(1001), "ticket-sheet-1001.png");
    }

    #[test]
    fn test_write_sheet() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("out");
        let mut folder = PngFolder::create(&dir).unwrap();
        assert!(dir.is_dir());

        let mut canvas = Canvas::new(6, 4);
        canvas.fill(Rgba([10, 20, 30, 255]));
        let page = Page {
            index: 7,
            tickets: vec![TicketFormatter::new(99).ticket(5)],
        };
        folder.write_sheet(&page, &canvas).unwrap();

        let path = dir.join("ticket-sheet-007.png");
        assert_eq!(folder.written(), [path.clone()]);
        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (6, 4));
        assert_eq!(decoded.get_pixel(3, 2), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_create_fails_on_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("taken");
        std::fs::write(&file, b"x").unwrap();
        assert!(matches!(
            PngFolder::create(file.join("sub")),
            Err(OutputError::CreateDir { .. })
        ));
    }

    #[test]
    fn test_write_fails_when_dir_is_gone() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("out");
        let mut folder = PngFolder::create(&dir).unwrap();
        std::fs::remove_dir(&dir).unwrap();

        let page = Page {
            index: 1,
            tickets: Vec::new(),
        };
        let result = folder.write_sheet(&page, &Canvas::new(2, 2));
        assert!(matches!(
            result,
            Err(Error::Output(OutputError::WriteSheet { index: 1, .. }))
        ));
    }
}
