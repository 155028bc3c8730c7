pub use url::Url;

/// The judge publishes at most this many open tests per exercise.
/// Fixed by the judge's layout, never derived from the index page.
pub const MAX_TEST_INDEX: u32 = 10;

/// Range of exercise/test indices the judge currently publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub exercise_count: u32,
    pub max_test_index: u32,
}

impl AvailabilityWindow {
    pub fn new(exercise_count: u32) -> Self {
        Self {
            exercise_count,
            max_test_index: MAX_TEST_INDEX,
        }
    }

    pub fn contains(&self, exercise: u32, test: u32) -> bool {
        (1..=self.exercise_count).contains(&exercise) && (1..=self.max_test_index).contains(&test)
    }
}

/// One open test of one exercise: the stdin to feed the program and the
/// stdout the judge expects back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testcase {
    pub exercise: u32,
    pub test: u32,
    pub input: String,
    pub expected: String,
}

/// Which of the pair of fixture files to download (`arqNN.in` / `arqNN.out`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TestDataKind {
    In,
    Out,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn availability_window_bounds() {
        let w = AvailabilityWindow::new(7);
        assert_eq!(w.max_test_index, MAX_TEST_INDEX);

        assert!(w.contains(1, 1));
        assert!(w.contains(7, 10));

        assert!(!w.contains(0, 1));
        assert!(!w.contains(8, 1));
        assert!(!w.contains(1, 0));
        assert!(!w.contains(1, 11));
    }

    #[test]
    fn test_data_kind_renders_as_file_extension() {
        assert_eq!(TestDataKind::In.to_string(), "in");
        assert_eq!(TestDataKind::Out.to_string(), "out");
    }
}
