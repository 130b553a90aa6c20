use crate::Result;
use crate::log::entry::{ProfilingEntry, Timestamp};
use crate::log::error::DecodeError;
use crate::record::RecordLayout;
use crate::record::layout::{NAME_TOKEN, OPERATION_TOKEN, TIME_TOKEN};
use crate::record::Operation;

use anyhow::Context;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Substring that marks a line as carrying profiling data.
pub const PROFILING_MARKER: &str = "<SOOT_PROFILING>";

// Capture:
// 1) hour: integer
// 2) minute: integer
// 3) seconds: float/integer
// Anything after a further ':' is ignored.
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\d+):(\d+):([0-9]+(?:\.[0-9]*)?)(?::.*)?$"#).expect("valid time regex")
});

pub fn is_profiling_line(line: &str) -> bool {
    line.contains(PROFILING_MARKER)
}

/// Decode a marker line into a `ProfilingEntry`.
///
/// Expected columns (whitespace-separated):
/// date  time  pid  tid  level  tag  name  operation  ...  count
///
/// Example:
/// 10-12 14:03:05.123 1234 1234 D <SOOT_PROFILING>: com.app.Foo read counter = 7
pub fn decode_line(line: &str) -> std::result::Result<ProfilingEntry, DecodeError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let layout = RecordLayout::from_token_count(tokens.len()).ok_or(DecodeError::TokenCount {
        found: tokens.len(),
    })?;

    let time = parse_time(tokens[TIME_TOKEN])?;
    let count_str = tokens[layout.count_token()];
    let count = count_str.parse::<u64>().map_err(|_| DecodeError::Number {
        field: "count",
        value: count_str.to_string(),
    })?;

    Ok(ProfilingEntry {
        time,
        name: tokens[NAME_TOKEN].to_string(),
        operation: Operation::from_token(tokens[OPERATION_TOKEN]),
        count,
    })
}

/// Parse "14:03:05.123" into Timestamp { hour: 14, minute: 3, seconds: 5 }.
fn parse_time(s: &str) -> std::result::Result<Timestamp, DecodeError> {
    let caps = TIME_RE
        .captures(s)
        .ok_or_else(|| DecodeError::TimeField(s.to_string()))?;

    let number = |idx: usize, field: &'static str| {
        let raw = &caps[idx];
        raw.parse::<u32>().map_err(|_| DecodeError::Number {
            field,
            value: raw.to_string(),
        })
    };
    let hour = number(1, "hour")?;
    let minute = number(2, "minute")?;

    let raw_seconds = &caps[3];
    let seconds = raw_seconds
        .parse::<f64>()
        .ok()
        .filter(|s| *s <= u32::MAX as f64)
        .ok_or_else(|| DecodeError::Number {
            field: "seconds",
            value: raw_seconds.to_string(),
        })?;

    Ok(Timestamp {
        hour,
        minute,
        seconds: seconds.trunc() as u32,
    })
}

/// Read the whole log file into memory.
pub fn read_log_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read log file {}", path.display()))
}

/// Decode every marker line of `text`, in file order, paired with its 1-based line number.
///
/// Lines without the marker are skipped without being tokenized.
pub fn profiling_entries(
    text: &str,
) -> impl Iterator<Item = (usize, std::result::Result<ProfilingEntry, DecodeError>)> + '_ {
    text.lines()
        .enumerate()
        .filter(|(_, line)| is_profiling_line(line))
        .map(|(lineno, line)| (lineno + 1, decode_line(line)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const READ_LINE: &str =
        "10-12 14:03:05.123  1234  1234 D <SOOT_PROFILING>: com.app.Foo read counter = 7";
    const CALL_LINE: &str =
        "10-12 14:03:16.500  1234  1234 D <SOOT_PROFILING>: com.app.Foo.bar function call counter = 3";

    #[test]
    fn filter_requires_marker() {
        assert!(is_profiling_line(READ_LINE));
        assert!(!is_profiling_line(
            "10-12 14:03:05.123  1234  1234 I ActivityManager: Start proc"
        ));
        assert!(!is_profiling_line(""));
    }

    #[test]
    fn decodes_read_write_layout() {
        let entry = decode_line(READ_LINE).unwrap();
        assert_eq!(
            entry,
            ProfilingEntry {
                time: Timestamp {
                    hour: 14,
                    minute: 3,
                    seconds: 5,
                },
                name: "com.app.Foo".to_string(),
                operation: Operation::Read,
                count: 7,
            }
        );
    }

    #[test]
    fn decodes_function_call_layout() {
        let entry = decode_line(CALL_LINE).unwrap();
        assert_eq!(entry.name, "com.app.Foo.bar");
        assert_eq!(entry.operation, Operation::Function);
        assert_eq!(entry.count, 3);
        assert_eq!(entry.time.seconds, 16);
    }

    #[test]
    fn unknown_operation_still_decodes() {
        let line = "10-12 14:03:05 1 1 D <SOOT_PROFILING>: com.app.Foo serial id = 2";
        let entry = decode_line(line).unwrap();
        assert_eq!(entry.operation, Operation::Unknown("serial".to_string()));
        assert_eq!(entry.count, 2);
    }

    #[test]
    fn wrong_token_count_is_rejected() {
        let line = "10-12 14:03:05 <SOOT_PROFILING>: com.app.Foo read 7";
        assert_eq!(decode_line(line), Err(DecodeError::TokenCount { found: 6 }));
    }

    #[test]
    fn time_field_needs_three_parts() {
        let line = "10-12 14:03 1 1 D <SOOT_PROFILING>: com.app.Foo read counter = 7";
        assert_eq!(
            decode_line(line),
            Err(DecodeError::TimeField("14:03".to_string()))
        );
    }

    #[test]
    fn extra_time_parts_are_ignored() {
        let line = "10-12 14:03:05:99 1 1 D <SOOT_PROFILING>: com.app.Foo read counter = 7";
        let entry = decode_line(line).unwrap();
        assert_eq!(entry.time.to_string(), "14:3:5");
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let line = "10-12 14:03:05 1 1 D <SOOT_PROFILING>: com.app.Foo read counter = seven";
        assert_eq!(
            decode_line(line),
            Err(DecodeError::Number {
                field: "count",
                value: "seven".to_string(),
            })
        );
    }

    #[test]
    fn negative_count_is_rejected() {
        let line = "10-12 14:03:05 1 1 D <SOOT_PROFILING>: com.app.Foo read counter = -1";
        assert!(matches!(
            decode_line(line),
            Err(DecodeError::Number { field: "count", .. })
        ));
    }

    #[test]
    fn entries_skip_unmarked_lines_and_keep_line_numbers() {
        let text = format!("boot\n{}\nshort line\n{}\n", READ_LINE, CALL_LINE);
        let got: Vec<(usize, String)> = profiling_entries(&text)
            .map(|(lno, e)| (lno, e.unwrap().name))
            .collect();
        assert_eq!(
            got,
            vec![
                (2, "com.app.Foo".to_string()),
                (4, "com.app.Foo.bar".to_string()),
            ]
        );
    }

    #[test]
    fn short_unmarked_lines_never_reach_the_decoder() {
        let text = "a b\n\nno marker here at all\n";
        assert_eq!(profiling_entries(text).count(), 0);
    }
}
