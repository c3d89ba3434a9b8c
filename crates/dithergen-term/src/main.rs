#![forbid(unsafe_code)]

//! dithergen binary entry point.

use dithergen_term::{app, cli, logging};

fn main() -> std::io::Result<()> {
    let opts = cli::Opts::parse();
    logging::init()?;
    app::run(&opts)
}
