use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_LOCALE: &str = "af-za";
pub const DEFAULT_DIRECTORY: &str = "dictionaries";

/// `<directory>/<locale>.txt`
pub fn dictionary_path<P: AsRef<Path>>(directory: P, locale: &str) -> PathBuf {
    directory.as_ref().join(format!("{locale}.txt"))
}

/// Drop an affix annotation (everything from the first `/`) and any digits.
pub fn clean_line(line: &str) -> String {
    let word = match line.find('/') {
        Some(idx) => &line[..idx],
        None => line,
    };

    word.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Copy `reader` to `writer` one cleaned line at a time. Returns the number
/// of lines written.
pub fn clean<R: BufRead, W: Write>(reader: R, mut writer: W) -> io::Result<usize> {
    let mut count = 0;

    for line in reader.lines() {
        writeln!(writer, "{}", clean_line(&line?))?;
        count += 1;
    }

    writer.flush()?;
    Ok(count)
}
