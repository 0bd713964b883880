//! File filtering by size, extension, and glob pattern
//!
//! A filter is configured once, compiled into a [`FileFilter`], and shared
//! read-only by every scan task. Matching is pure: it looks only at the
//! candidate path and its pre-fetched size.

use crate::error::ConfigError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Filter criteria as configured by the caller
///
/// Zero size bounds mean unbounded. Within each category a non-empty
/// allow-list takes precedence over the deny-list.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Skip files smaller than this size (0 = no minimum)
    pub min_size: u64,
    /// Skip files larger than this size (0 = no maximum)
    pub max_size: u64,
    /// Only process files with these extensions
    pub include_exts: Vec<String>,
    /// Skip files with these extensions
    pub exclude_exts: Vec<String>,
    /// Include glob patterns
    pub include_globs: Vec<String>,
    /// Exclude glob patterns
    pub exclude_globs: Vec<String>,
}

impl FilterOptions {
    /// Compile the options into a filter, validating glob syntax
    pub fn build(self) -> Result<FileFilter, ConfigError> {
        Ok(FileFilter {
            min_size: self.min_size,
            max_size: self.max_size,
            include_exts: self.include_exts.iter().map(|e| normalize_ext(e)).collect(),
            exclude_exts: self.exclude_exts.iter().map(|e| normalize_ext(e)).collect(),
            include_globs: build_globset(&self.include_globs)?,
            exclude_globs: build_globset(&self.exclude_globs)?,
        })
    }
}

/// Compiled filter predicate
#[derive(Debug)]
pub struct FileFilter {
    min_size: u64,
    max_size: u64,
    include_exts: Vec<String>,
    exclude_exts: Vec<String>,
    include_globs: Option<GlobSet>,
    exclude_globs: Option<GlobSet>,
}

impl FileFilter {
    /// Return true if the file passes every configured criterion
    ///
    /// Evaluation order: size bounds, then extensions, then globs. A
    /// category with nothing configured always passes.
    pub fn matches(&self, path: &Path, size: u64) -> bool {
        if self.max_size > 0 && size > self.max_size {
            return false;
        }
        if self.min_size > 0 && size < self.min_size {
            return false;
        }

        self.matches_extension(path) && self.matches_glob(path)
    }

    /// Extension check: the allow-list, when non-empty, wins over the
    /// deny-list
    fn matches_extension(&self, path: &Path) -> bool {
        let ext = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .unwrap_or_default();

        if !self.include_exts.is_empty() {
            return self.include_exts.iter().any(|e| *e == ext);
        }

        if !self.exclude_exts.is_empty() && self.exclude_exts.iter().any(|e| *e == ext) {
            return false;
        }

        true
    }

    /// Glob check against both the separator-normalized full path and the
    /// final path component
    fn matches_glob(&self, path: &Path) -> bool {
        let full = normalize_separators(path);
        let base = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if let Some(include) = &self.include_globs {
            if !include.is_match(full.as_str()) && !include.is_match(base.as_str()) {
                return false;
            }
        }

        if let Some(exclude) = &self.exclude_globs
            && (exclude.is_match(full.as_str()) || exclude.is_match(base.as_str()))
        {
            return false;
        }

        true
    }
}

/// Ensure an extension is lowercase and carries a leading dot
fn normalize_ext(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.is_empty() || ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

fn normalize_separators(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>, ConfigError> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).map_err(|e| ConfigError::invalid_pattern(pattern, e))?;
        builder.add(glob);
    }

    let globset = builder
        .build()
        .map_err(|e| ConfigError::invalid_pattern("<combined>", e))?;
    Ok(Some(globset))
}

/// Parse a size threshold with an optional unit suffix
///
/// Accepts decimal integers with case-insensitive B, K/KB, M/MB, G/GB or
/// T/TB suffixes at powers of 1024.
pub fn parse_size(input: &str) -> Result<u64, ConfigError> {
    let s = input.trim().to_uppercase();
    if s.is_empty() {
        return Err(ConfigError::invalid_size(input));
    }

    let (digits, multiplier) = if let Some(d) = s.strip_suffix("KB").or_else(|| s.strip_suffix('K'))
    {
        (d, 1u64 << 10)
    } else if let Some(d) = s.strip_suffix("MB").or_else(|| s.strip_suffix('M')) {
        (d, 1u64 << 20)
    } else if let Some(d) = s.strip_suffix("GB").or_else(|| s.strip_suffix('G')) {
        (d, 1u64 << 30)
    } else if let Some(d) = s.strip_suffix("TB").or_else(|| s.strip_suffix('T')) {
        (d, 1u64 << 40)
    } else if let Some(d) = s.strip_suffix('B') {
        (d, 1)
    } else {
        (s.as_str(), 1)
    };

    let value: u64 = digits
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid_size(input))?;

    Ok(value * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(options: FilterOptions) -> FileFilter {
        options.build().unwrap()
    }

    #[test]
    fn test_empty_filter_accepts_everything() {
        let f = filter(FilterOptions::default());
        assert!(f.matches(Path::new("anything.bin"), 0));
        assert!(f.matches(Path::new("/deep/path/noext"), u64::MAX));
    }

    #[test]
    fn test_size_bounds() {
        let f = filter(FilterOptions {
            min_size: 10,
            max_size: 100,
            ..Default::default()
        });

        assert!(!f.matches(Path::new("a"), 9));
        assert!(f.matches(Path::new("a"), 10));
        assert!(f.matches(Path::new("a"), 100));
        assert!(!f.matches(Path::new("a"), 101));
    }

    #[test]
    fn test_zero_bound_means_unbounded() {
        let only_min = filter(FilterOptions {
            min_size: 10,
            ..Default::default()
        });
        assert!(only_min.matches(Path::new("a"), u64::MAX));

        let only_max = filter(FilterOptions {
            max_size: 10,
            ..Default::default()
        });
        assert!(only_max.matches(Path::new("a"), 0));
    }

    #[test]
    fn test_include_extensions() {
        let f = filter(FilterOptions {
            include_exts: vec!["txt".to_string(), ".MD".to_string()],
            ..Default::default()
        });

        assert!(f.matches(Path::new("notes.txt"), 1));
        assert!(f.matches(Path::new("README.md"), 1));
        assert!(f.matches(Path::new("LOUD.TXT"), 1));
        assert!(!f.matches(Path::new("image.png"), 1));
        assert!(!f.matches(Path::new("no_extension"), 1));
    }

    #[test]
    fn test_exclude_extensions() {
        let f = filter(FilterOptions {
            exclude_exts: vec![".log".to_string(), "tmp".to_string()],
            ..Default::default()
        });

        assert!(!f.matches(Path::new("debug.log"), 1));
        assert!(!f.matches(Path::new("scratch.tmp"), 1));
        assert!(f.matches(Path::new("notes.txt"), 1));
    }

    #[test]
    fn test_include_extensions_win_over_exclude() {
        let f = filter(FilterOptions {
            include_exts: vec![".txt".to_string()],
            exclude_exts: vec![".txt".to_string()],
            ..Default::default()
        });

        // Allow-list takes precedence when both match
        assert!(f.matches(Path::new("notes.txt"), 1));
        assert!(!f.matches(Path::new("other.md"), 1));
    }

    #[test]
    fn test_include_globs_full_path_and_basename() {
        let f = filter(FilterOptions {
            include_globs: vec!["report_?.csv".to_string()],
            ..Default::default()
        });

        assert!(f.matches(Path::new("report_1.csv"), 1));
        // Basename matching lets a bare pattern hit nested files
        assert!(f.matches(Path::new("/data/2024/report_2.csv"), 1));
        assert!(!f.matches(Path::new("report_10.csv"), 1));
    }

    #[test]
    fn test_exclude_globs() {
        let f = filter(FilterOptions {
            exclude_globs: vec!["*.bak".to_string(), "cache/*".to_string()],
            ..Default::default()
        });

        assert!(!f.matches(Path::new("old.bak"), 1));
        assert!(!f.matches(Path::new("cache/entry"), 1));
        assert!(f.matches(Path::new("data/entry"), 1));
    }

    #[test]
    fn test_include_globs_win_over_exclude() {
        let f = filter(FilterOptions {
            include_globs: vec!["*.txt".to_string()],
            exclude_globs: vec!["*.txt".to_string()],
            ..Default::default()
        });

        assert!(f.matches(Path::new("notes.txt"), 1));
    }

    #[test]
    fn test_invalid_glob_is_config_error() {
        let result = FilterOptions {
            include_globs: vec!["[unclosed".to_string()],
            ..Default::default()
        }
        .build();

        assert!(matches!(result, Err(ConfigError::InvalidPattern { .. })));
    }

    #[test]
    fn test_parse_size_plain_and_suffixed() {
        assert_eq!(parse_size("100").unwrap(), 100);
        assert_eq!(parse_size("100B").unwrap(), 100);
        assert_eq!(parse_size("4k").unwrap(), 4 * 1024);
        assert_eq!(parse_size("4KB").unwrap(), 4 * 1024);
        assert_eq!(parse_size("2MB").unwrap(), 2 * 1024 * 1024);
        assert_eq!(parse_size("1G").unwrap(), 1024 * 1024 * 1024);
        assert_eq!(parse_size("1tb").unwrap(), 1u64 << 40);
        assert_eq!(parse_size(" 10 MB ").unwrap(), 10 * 1024 * 1024);
    }

    #[test]
    fn test_parse_size_rejects_garbage() {
        for input in ["", "12x", "MB", "-5", "1.5G"] {
            assert!(parse_size(input).is_err(), "accepted {input:?}");
        }
    }
}
