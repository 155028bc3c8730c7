use reqwest::StatusCode;
use url::Url;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Test {test:02} is outside the judge's open test range 01-{max_test_index:02}")]
    TestIndexOutOfRange { test: u32, max_test_index: u32 },

    #[error("Exercise {exercise:02} is not published (judge currently lists {exercise_count} exercises)")]
    ExerciseNotPublished { exercise: u32, exercise_count: u32 },

    #[error("Failed to parse as URL '{url}'")]
    InvalidSyntaxUrl {
        url: String,

        #[source]
        source: url::ParseError,
    },

    #[error("Not a judge base URL '{0}' (missing course path segment)")]
    NotJudgeBaseUrl(Url),

    #[error("Unexpected response code '{got}' (expected '{expected}') while requesting to {requested_url}")]
    UnexpectedResponseCode {
        got: StatusCode,
        expected: StatusCode,
        requested_url: String,
    },

    #[error("Http error: {0}")]
    Http(#[from] reqwest::Error),
}
