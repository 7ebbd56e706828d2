use color_eyre::eyre;
use raffle_tool::cli::{self, booklet, opt::Options};

fn main() -> eyre::Result<()> {
    let opt: Options = cli::init()?;
    let config = opt.config()?;
    booklet::run(&config)?;
    Ok(())
}
