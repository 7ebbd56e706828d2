//! # Running a booklet

use booklet::{
    layout::LayoutEngine,
    numbers::NumberAllocator,
    output::PngFolder,
    resources::{load_background, load_face},
    ticket::{Page, TicketFormatter},
    BookletGenerator,
};
use color_eyre::eyre::{self, WrapErr};
use log::info;

use super::opt::Config;

/// Generate all sheets of `config` into its output folder
///
/// The configuration is checked completely before anything is loaded or
/// written.
pub fn run(config: &Config) -> eyre::Result<Vec<Page>> {
    let range = config.number_range()?;
    let plan = config.plan()?;
    let layout = config.layout()?;
    let font_size = config.font_size()?;
    let requested = plan.total_tickets();
    let allocator = match config.seed {
        Some(seed) => NumberAllocator::with_seed(range, requested, seed)?,
        None => NumberAllocator::new(range, requested)?,
    };

    info!(
        "Ticket range {}-{} ({} numbers), {} tickets needed",
        range.min(),
        range.max(),
        range.len(),
        requested
    );
    info!(
        "Sheet {}x{}, {} per row, alignment {}",
        layout.width(),
        layout.height(),
        layout.tickets_per_row(),
        config.alignment
    );

    let face = load_face(config.font.as_deref(), font_size);
    let digit_width = TicketFormatter::new(range.max()).digit_width();
    let mut engine = LayoutEngine::new(layout, config.style(), face, digit_width)
        .with_background_color(config.background_color);
    if let Some(path) = &config.background {
        let image = load_background(path)?;
        engine = engine.with_background(&image);
    }

    let mut folder = PngFolder::create(&config.out)?;
    let mut generator = BookletGenerator::new(allocator, engine, plan)?;
    let pages = generator
        .generate_all(&mut folder)
        .wrap_err("Failed to generate the ticket sheets")?;

    info!(
        "Done: {} sheets in '{}'",
        folder.written().len(),
        folder.dir().display()
    );
    Ok(pages)
}
