use crate::error;
use crate::lang::Error;
use encoding_rs::WINDOWS_1251;
use std::io::BufRead;

type Result<T> = std::result::Result<T, Error>;

/// ## INPUT reader
///
/// Whitespace separated words taken from a line-buffered stream. Words
/// flow across line boundaries; only a trailing string target cares
/// where a line ends.

pub struct InputStream<R> {
    reader: R,
    line: String,
    cursor: usize,
}

impl<R: BufRead> InputStream<R> {
    pub fn new(reader: R) -> InputStream<R> {
        InputStream {
            reader,
            line: String::new(),
            cursor: 0,
        }
    }

    fn next_line(&mut self) -> Result<()> {
        self.cursor = 0;
        match read_text(&mut self.reader)? {
            Some(line) => {
                self.line = line;
                Ok(())
            }
            None => {
                self.line.clear();
                Err(error!(InputPastEnd))
            }
        }
    }

    fn skip_blanks(&mut self) {
        self.cursor += self.line[self.cursor..]
            .bytes()
            .take_while(|b| b.is_ascii_whitespace())
            .count();
    }

    pub fn read_word(&mut self) -> Result<String> {
        loop {
            self.skip_blanks();
            if self.cursor < self.line.len() {
                break;
            }
            self.next_line()?;
        }
        let rest = &self.line[self.cursor..];
        let len = rest
            .bytes()
            .take_while(|b| !b.is_ascii_whitespace())
            .count();
        let word = rest[..len].to_string();
        self.cursor += len;
        Ok(word)
    }

    /// The rest of the current line without leading blanks, or the whole
    /// next line when nothing is left on this one.
    pub fn read_rest_of_line(&mut self) -> Result<String> {
        self.skip_blanks();
        if self.cursor >= self.line.len() {
            self.next_line()?;
            self.skip_blanks();
        }
        let rest = self.line[self.cursor..].trim_end_matches(&['\r', '\n'][..]);
        let text = rest.to_string();
        self.cursor = self.line.len();
        Ok(text)
    }
}

/// One line of text with its line ending, or `None` at end of stream.
/// A line that is not valid UTF-8 is decoded as Windows-1251.
pub fn read_text<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut bytes = vec![];
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    Ok(Some(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            let (text, _) = WINDOWS_1251.decode_without_bom_handling(e.as_bytes());
            text.into_owned()
        }
    }))
}
