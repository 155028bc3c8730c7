use once_cell::sync::Lazy;
use url::Url;

use crate::error::*;
use crate::model::TestDataKind;

/// Exercise index page of the MC102 offering. The trailing course segment
/// drives both the fixture URLs and the index-page link marker.
pub static DEFAULT_BASE_URL: Lazy<Url> =
    Lazy::new(|| Url::parse("https://susy.ic.unicamp.br:9999/mc102").unwrap());

/// Two-digit zero-padded index, as the judge names its fixture files.
/// Larger indices keep all their digits.
pub fn format_index(n: u32) -> String {
    format!("{:02}", n)
}

/// Last non-empty path segment of the base URL (e.g. "mc102").
pub fn course_code(base_url: &Url) -> Result<&str> {
    base_url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .ok_or_else(|| Error::NotJudgeBaseUrl(base_url.clone()))
}

/// Each index-page line containing this marker corresponds to one published
/// exercise.
pub fn index_link_marker(base_url: &Url) -> Result<String> {
    let course = course_code(base_url)?;
    Ok(format!(r#"HREF="../../{}/"#, course))
}

/// `{base}/{exercise:02}/dados/arq{test:02}.{in|out}`
pub fn fixture_url(base_url: &Url, exercise: u32, test: u32, kind: TestDataKind) -> Result<Url> {
    crate::util::parse_url(format!(
        "{}/{}/dados/arq{}.{}",
        base_url.as_str().trim_end_matches('/'),
        format_index(exercise),
        format_index(test),
        kind,
    ))
}
