//! # Booklet generation

use log::info;
use rand::Rng;

use crate::{
    layout::LayoutEngine,
    numbers::NumberAllocator,
    raster::Canvas,
    ticket::{Page, TicketFormatter},
    ConfigError, Error,
};

/// Receives every rendered sheet, in order
pub trait SheetSink {
    /// Store a sheet; an error stops the run
    fn write_sheet(&mut self, page: &Page, canvas: &Canvas) -> Result<(), Error>;
}

impl<F> SheetSink for F
where
    F: FnMut(&Page, &Canvas) -> Result<(), Error>,
{
    fn write_sheet(&mut self, page: &Page, canvas: &Canvas) -> Result<(), Error> {
        self(page, canvas)
    }
}

/// How many sheets with how many tickets
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RunPlan {
    tickets_per_page: u32,
    page_count: u32,
}

impl RunPlan {
    /// Create a new plan, both counts need to be at least 1
    pub fn new(tickets_per_page: i64, page_count: i64) -> Result<Self, ConfigError> {
        let positive = |name: &'static str, value: i64| match u32::try_from(value) {
            Ok(v) if v > 0 => Ok(v),
            _ => Err(ConfigError::NotPositive { name, value }),
        };
        Ok(Self {
            tickets_per_page: positive("tickets_per_page", tickets_per_page)?,
            page_count: positive("pages", page_count)?,
        })
    }

    /// Tickets on every sheet
    pub fn tickets_per_page(&self) -> u32 {
        self.tickets_per_page
    }

    /// Number of sheets
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Tickets across all sheets
    pub fn total_tickets(&self) -> u64 {
        u64::from(self.tickets_per_page) * u64::from(self.page_count)
    }
}

/// Produces all sheets of a run
///
/// The allocator is owned for the whole run, so no number appears on two
/// sheets.
pub struct BookletGenerator<R> {
    allocator: NumberAllocator<R>,
    formatter: TicketFormatter,
    engine: LayoutEngine,
    plan: RunPlan,
}

impl<R: Rng> BookletGenerator<R> {
    /// Create a new generator
    ///
    /// Fails if the allocator has fewer numbers left than the plan needs.
    pub fn new(
        allocator: NumberAllocator<R>,
        engine: LayoutEngine,
        plan: RunPlan,
    ) -> Result<Self, ConfigError> {
        let requested = plan.total_tickets();
        let available = allocator.remaining();
        if requested > available {
            return Err(ConfigError::NotEnoughNumbers {
                requested,
                available,
            });
        }
        let formatter = TicketFormatter::new(allocator.range().max());
        Ok(Self {
            allocator,
            formatter,
            engine,
            plan,
        })
    }

    /// Allocate the tickets for the sheet with the given index
    pub fn next_page(&mut self, index: u32) -> Page {
        let tickets = (0..self.plan.tickets_per_page)
            .map(|_| self.formatter.ticket(self.allocator.allocate()))
            .collect();
        Page { index, tickets }
    }

    /// Render all sheets and pass them to `sink`
    ///
    /// Returns the pages that were produced, in order. The first error stops
    /// the run.
    pub fn generate_all<S: SheetSink + ?Sized>(&mut self, sink: &mut S) -> Result<Vec<Page>, Error> {
        let count = self.plan.page_count;
        info!(
            "Generating {} sheets with {} tickets each...",
            count, self.plan.tickets_per_page
        );

        let mut pages = Vec::with_capacity(count as usize);
        for index in 1..=count {
            info!("Generating sheet {}/{}...", index, count);
            let page = self.next_page(index);
            let canvas = self.engine.layout_page(&page);
            sink.write_sheet(&page, &canvas)?;
            info!("  Numbers: {}", page.numbers().collect::<Vec<_>>().join(", "));
            pages.push(page);
        }
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use image::Rgba;

    use super::{BookletGenerator, RunPlan};
    use crate::{
        layout::{Alignment, LayoutEngine, Margins, SheetLayout, Style},
        numbers::{NumberAllocator, NumberRange},
        raster::{BitmapFace, Canvas},
        ticket::Page,
        ConfigError, Error, OutputError,
    };

    fn engine(digit_width: usize) -> LayoutEngine {
        let layout = SheetLayout::new(120, 90, Margins::default(), 2).unwrap();
        let style = Style {
            text_color: Rgba([255, 255, 255, 255]),
            border_color: Rgba([255, 0, 0, 255]),
            line_thickness: 2,
            alignment: Alignment::Center,
        };
        LayoutEngine::new(layout, style, Box::new(BitmapFace), digit_width)
    }

    #[test]
    fn test_plan() {
        let plan = RunPlan::new(10, 500).unwrap();
        assert_eq!(plan.total_tickets(), 5000);
        assert!(matches!(
            RunPlan::new(0, 5),
            Err(ConfigError::NotPositive {
                name: "tickets_per_page",
                value: 0
            })
        ));
        assert!(matches!(
            RunPlan::new(3, -1),
            Err(ConfigError::NotPositive {
                name: "pages",
                value: -1
            })
        ));
    }

    #[test]
    fn test_generate_all() {
        let range = NumberRange::new(0, 9999).unwrap();
        let plan = RunPlan::new(2, 3).unwrap();
        let alloc = NumberAllocator::with_seed(range, plan.total_tickets(), 99).unwrap();
        let mut generator = BookletGenerator::new(alloc, engine(4), plan).unwrap();

        let mut sheets: Vec<(u32, Canvas)> = Vec::new();
        let mut sink = |page: &Page, canvas: &Canvas| -> Result<(), Error> {
            sheets.push((page.index, canvas.clone()));
            Ok(())
        };
        let pages = generator.generate_all(&mut sink).unwrap();

        assert_eq!(sheets.len(), 3);
        assert_eq!(
            sheets.iter().map(|(i, _)| *i).collect::<Vec<_>>(),
            [1, 2, 3]
        );
        assert!(sheets
            .iter()
            .all(|(_, c)| (c.width(), c.height()) == (120, 90)));

        assert_eq!(pages.len(), 3);
        let numbers: Vec<&str> = pages.iter().flat_map(|p| p.numbers()).collect();
        assert_eq!(numbers.len(), 6);
        assert!(numbers.iter().all(|n| n.len() == 4));
        let distinct: HashSet<&str> = numbers.iter().copied().collect();
        assert_eq!(distinct.len(), 6);
    }

    #[test]
    fn test_whole_range_is_used_once() {
        let range = NumberRange::new(1, 12).unwrap();
        let plan = RunPlan::new(4, 3).unwrap();
        let alloc = NumberAllocator::with_seed(range, plan.total_tickets(), 5).unwrap();
        let mut generator = BookletGenerator::new(alloc, engine(2), plan).unwrap();
        let mut sink = |_: &Page, _: &Canvas| -> Result<(), Error> { Ok(()) };
        let pages = generator.generate_all(&mut sink).unwrap();

        let mut values: Vec<u32> = pages
            .iter()
            .flat_map(|p| p.tickets.iter().map(|t| t.value))
            .collect();
        values.sort_unstable();
        assert_eq!(values, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_not_enough_numbers() {
        let range = NumberRange::new(0, 9).unwrap();
        let alloc = NumberAllocator::with_seed(range, 10, 1).unwrap();
        let plan = RunPlan::new(4, 3).unwrap();
        assert!(matches!(
            BookletGenerator::new(alloc, engine(1), plan),
            Err(ConfigError::NotEnoughNumbers {
                requested: 12,
                available: 10
            })
        ));
    }

    #[test]
    fn test_sink_error_stops_run() {
        let range = NumberRange::new(0, 99).unwrap();
        let plan = RunPlan::new(1, 5).unwrap();
        let alloc = NumberAllocator::with_seed(range, plan.total_tickets(), 3).unwrap();
        let mut generator = BookletGenerator::new(alloc, engine(2), plan).unwrap();

        let mut written = 0;
        let mut sink = |page: &Page, _: &Canvas| -> Result<(), Error> {
            if page.index == 2 {
                return Err(Error::Output(OutputError::CreateDir {
                    path: "out".into(),
                    source: std::io::ErrorKind::PermissionDenied.into(),
                }));
            }
            written += 1;
            Ok(())
        };
        let result = generator.generate_all(&mut sink);
        assert!(matches!(result, Err(Error::Output(_))));
        assert_eq!(written, 1);
    }
}
