use std::io::{self, Write};
use std::path::Path;

use log::{debug, info, warn};
use rand::Rng;

use crate::letter_file::{LetterFile, FILE_NAMES};
use crate::letters::{random_letters, LETTER_COUNT};
use crate::product::RandomProduct;

const BANNER: &str = "***********************************************";

/// Writes the three letter files into `dir`, echoes them, then reports the
/// product of two random numbers. All output goes to `out`.
pub fn run<R: Rng, W: Write>(dir: &Path, rng: &mut R, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", BANNER)?;
    writeln!(out, "\nTHIS IS THE CONTENT OF THE 3 FILES CREATED:")?;

    for (i, name) in FILE_NAMES.iter().enumerate() {
        let file = LetterFile::in_dir(dir, name);
        let letters = random_letters(rng, LETTER_COUNT);
        file.write(&letters)?;

        let saved = file.read()?;
        if !LetterFile::is_well_formed(&saved) {
            warn!("unexpected content in {}: {:?}", file.path.display(), saved);
        }
        // Only the first line is set apart by a blank line.
        let lead = if i == 0 { "\n" } else { "" };
        writeln!(out, "{}=> Random letters saved in file {}: {}", lead, i + 1, saved)?;
    }
    info!("wrote {} letter files to {}", FILE_NAMES.len(), dir.display());

    writeln!(out, "\nNOW, LET'S CALCULATE THE PRODUCT OF TWO RANDOM NUMBERS:\n")?;
    let numbers = RandomProduct::draw(rng);
    debug!("drew {:?}", numbers);
    writeln!(out, "=> 1st Random Number = {}", numbers.first)?;
    writeln!(out, "=> 2nd Random Number = {}", numbers.second)?;
    writeln!(out, "=> THE PRODUCT IS:    {}", numbers.product())?;

    writeln!(out, "\n{}\n", BANNER)?;
    out.flush()
}
