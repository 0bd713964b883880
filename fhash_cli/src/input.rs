//! Path list ingestion
//!
//! Reads candidate paths one per line, skipping blank lines and `#`
//! comments, from a file or standard input.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Read a path list from a reader, one path per line
pub fn read_path_list<R: BufRead>(reader: R) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        paths.push(PathBuf::from(line));
    }

    Ok(paths)
}

/// Read a path list from a file
pub fn paths_from_file(path: &Path) -> io::Result<Vec<PathBuf>> {
    let file = File::open(path)?;
    read_path_list(BufReader::new(file))
}

/// Read a path list from standard input
pub fn paths_from_stdin() -> io::Result<Vec<PathBuf>> {
    read_path_list(io::stdin().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_path_list_skips_blanks_and_comments() {
        let input = "a.txt\n\n# a comment\n  b.txt  \n#another\nc/d.txt\n";
        let paths = read_path_list(Cursor::new(input)).unwrap();

        assert_eq!(
            paths,
            vec![
                PathBuf::from("a.txt"),
                PathBuf::from("b.txt"),
                PathBuf::from("c/d.txt"),
            ]
        );
    }

    #[test]
    fn test_read_path_list_empty_input() {
        let paths = read_path_list(Cursor::new("")).unwrap();
        assert!(paths.is_empty());
    }
}
