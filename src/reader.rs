//! Reads the whole input into memory as a list of lines

use std::io::{self, Read};

/// Read every line from `input` until end of input.
///
/// `\n`, `\r\n` and a lone `\r` all terminate a line. A final terminator does
/// not produce an extra empty line. Invalid UTF-8 is replaced, not rejected.
pub fn read_lines<R: Read + ?Sized>(input: &mut R) -> io::Result<Vec<String>> {
    let mut buffer = Vec::new();
    input.read_to_end(&mut buffer)?;

    Ok(split_lines(&String::from_utf8_lossy(&buffer)))
}

fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(pos) => {
                lines.push(rest[..pos].to_string());
                let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + terminator..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(text: &str) -> Vec<String> {
        read_lines(&mut Cursor::new(text.as_bytes().to_vec())).expect("reading from memory")
    }

    #[test]
    fn test_empty_input() {
        assert!(read("").is_empty());
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(read("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(read("a\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_lines_are_kept() {
        assert_eq!(read("\n"), vec![""]);
        assert_eq!(read("a\n\n  \nb"), vec!["a", "", "  ", "b"]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let lines = read_lines(&mut Cursor::new(vec![b'o', b'k', 0xff, b'\n'])).expect("read");
        assert_eq!(lines, vec!["ok\u{FFFD}"]);
    }
}
