/// One aligned pair of output lines, compared positionally. `None` marks the
/// "N/D" side: that output ran out of lines before this row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub obtained: Option<String>,
    pub expected: Option<String>,
}

impl ComparisonRow {
    /// A missing line never matches anything, not even a missing line on the
    /// other side.
    pub fn matches(&self) -> bool {
        match (&self.obtained, &self.expected) {
            (Some(obtained), Some(expected)) => obtained == expected,
            _ => false,
        }
    }
}

/// Line-by-line alignment of the program's output against the expected one.
///
/// `passed` is raw equality of the two full texts, not derived from the rows:
/// outputs differing only in trailing whitespace or newlines produce an
/// all-matching row table and still fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
    pub passed: bool,
}

pub fn compare(obtained: &str, expected: &str) -> Comparison {
    let obtained_lines: Vec<&str> = obtained.lines().collect();
    let expected_lines: Vec<&str> = expected.lines().collect();
    let num_rows = obtained_lines.len().max(expected_lines.len());

    let rows = (0..num_rows)
        .map(|i| ComparisonRow {
            obtained: obtained_lines.get(i).map(|s| s.to_string()),
            expected: expected_lines.get(i).map(|s| s.to_string()),
        })
        .collect();

    Comparison {
        rows,
        passed: obtained == expected,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn row(obtained: Option<&str>, expected: Option<&str>) -> ComparisonRow {
        ComparisonRow {
            obtained: obtained.map(str::to_string),
            expected: expected.map(str::to_string),
        }
    }

    #[test]
    fn equal_outputs_pass_with_all_rows_matching() {
        let cmp = compare("1\n2\n3", "1\n2\n3");
        assert!(cmp.passed);
        assert_eq!(cmp.rows.len(), 3);
        assert!(cmp.rows.iter().all(ComparisonRow::matches));
    }

    #[test]
    fn shorter_obtained_output_is_padded_with_missing_lines() {
        let cmp = compare("1\n2", "1\n2\n3");
        assert!(!cmp.passed);
        assert_eq!(cmp.rows.len(), 3);
        assert_eq!(cmp.rows[2], row(None, Some("3")));
        assert!(!cmp.rows[2].matches());
    }

    #[test]
    fn shorter_expected_output_is_padded_symmetrically() {
        let cmp = compare("1\n2\n3", "1");
        assert_eq!(cmp.rows.len(), 3);
        assert_eq!(cmp.rows[1], row(Some("2"), None));
        assert_eq!(cmp.rows[2], row(Some("3"), None));
    }

    #[test]
    fn trailing_newline_fails_despite_all_rows_matching() {
        let cmp = compare("1\n2\n3\n", "1\n2\n3");
        assert!(!cmp.passed);
        assert_eq!(cmp.rows.len(), 3);
        assert!(cmp.rows.iter().all(ComparisonRow::matches));
    }

    #[test]
    fn missing_lines_never_match() {
        assert!(!row(None, Some("x")).matches());
        assert!(!row(Some("x"), None).matches());
        // Two missing lines represent absence on each side, never equality.
        assert!(!row(None, None).matches());
    }

    #[test]
    fn crlf_input_is_split_like_lf() {
        let cmp = compare("1\r\n2\r\n", "1\n2\n");
        assert_eq!(cmp.rows.len(), 2);
        assert!(cmp.rows.iter().all(ComparisonRow::matches));
        // Raw texts differ, so the verdict is still a fail.
        assert!(!cmp.passed);
    }

    #[test]
    fn empty_outputs_compare_equal_with_no_rows() {
        let cmp = compare("", "");
        assert!(cmp.passed);
        assert!(cmp.rows.is_empty());
    }
}
