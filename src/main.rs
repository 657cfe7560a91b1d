use std::io;
use std::path::Path;

use env_logger::Builder;
use log::LevelFilter;

mod demo;
mod letter_file;
mod letters;
mod product;

fn main() -> io::Result<()> {
    Builder::new()
        .filter(None, LevelFilter::Warn)
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    demo::run(Path::new("."), &mut rand::rng(), &mut stdout.lock())
}
