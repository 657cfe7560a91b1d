use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::letters::LETTER_COUNT;

/// Fixed names of the files written on each run, in order.
pub const FILE_NAMES: [&str; 3] = ["file1.txt", "file2.txt", "file3.txt"];

/// A flat file holding one line of random letters.
pub struct LetterFile {
    pub path: PathBuf,
}

impl LetterFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        LetterFile { path: path.into() }
    }

    /// The file for `name` inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P, name: &str) -> Self {
        LetterFile::new(dir.as_ref().join(name))
    }

    /// Creates or truncates the file and writes `letters` followed by a single `\n`.
    pub fn write(&self, letters: &str) -> io::Result<()> {
        let mut file = File::create(&self.path)?;
        file.write_all(letters.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()?;
        debug!("wrote {} bytes to {}", letters.len() + 1, self.path.display());
        Ok(())
    }

    /// Reads back the whole file, trailing newline included.
    pub fn read(&self) -> io::Result<String> {
        let mut file = File::open(&self.path)?;
        let mut content = String::with_capacity(LETTER_COUNT + 1);
        file.read_to_string(&mut content)?;
        debug!("read {} bytes from {}", content.len(), self.path.display());
        Ok(content)
    }

    /// True if `content` is exactly ten lowercase letters and a newline.
    pub fn is_well_formed(content: &str) -> bool {
        let bytes = content.as_bytes();
        bytes.len() == LETTER_COUNT + 1
            && bytes[..LETTER_COUNT].iter().all(u8::is_ascii_lowercase)
            && bytes[LETTER_COUNT] == b'\n'
    }
}
