use url::Url;

use super::urls;
use crate::{error::*, model::*, util};

/// The judge serves HTTPS with a self-signed certificate, so certificate
/// verification can be turned off. It stays on unless the caller opts out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    pub verify_tls: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self { verify_tls: true }
    }
}

pub struct SusyClient {
    http: reqwest::Client,
}

impl SusyClient {
    pub fn new(opts: ClientOptions) -> Self {
        Self {
            http: reqwest::Client::builder()
                .danger_accept_invalid_certs(!opts.verify_tls)
                .gzip(true)
                .build()
                .unwrap(),
        }
    }

    /// Fetches the exercise index page and counts the published exercises.
    pub async fn fetch_availability(&self, base_url: &Url) -> Result<AvailabilityWindow> {
        let marker = urls::index_link_marker(base_url)?;
        let page = util::fetch_text(&self.http, base_url.clone()).await?;
        let exercise_count = count_published_exercises(&page, &marker);
        Ok(AvailabilityWindow::new(exercise_count))
    }

    /// Downloads one fixture file of one test.
    ///
    /// The availability window is re-checked on every call; the index page is
    /// never cached. An out-of-range test number fails before any request is
    /// made, so it is rejected no matter which exercise is asked for.
    pub async fn fetch_test_data(
        &self,
        base_url: &Url,
        exercise: u32,
        test: u32,
        kind: TestDataKind,
    ) -> Result<String> {
        if !(1..=MAX_TEST_INDEX).contains(&test) {
            return Err(Error::TestIndexOutOfRange {
                test,
                max_test_index: MAX_TEST_INDEX,
            });
        }

        let window = self.fetch_availability(base_url).await?;
        if !window.contains(exercise, test) {
            return Err(Error::ExerciseNotPublished {
                exercise,
                exercise_count: window.exercise_count,
            });
        }

        let url = urls::fixture_url(base_url, exercise, test, kind)?;
        util::fetch_text(&self.http, url).await
    }

    /// Downloads the input/expected-output pair for one test of one exercise.
    pub async fn fetch_testcase(
        &self,
        base_url: &Url,
        exercise: u32,
        test: u32,
    ) -> Result<Testcase> {
        let input = self
            .fetch_test_data(base_url, exercise, test, TestDataKind::In)
            .await?;
        let expected = self
            .fetch_test_data(base_url, exercise, test, TestDataKind::Out)
            .await?;
        Ok(Testcase {
            exercise,
            test,
            input,
            expected,
        })
    }
}

fn count_published_exercises(index_page: &str, marker: &str) -> u32 {
    index_page
        .lines()
        .filter(|line| line.contains(marker))
        .count() as u32
}

#[cfg(test)]
mod test {
    use super::*;

    const INDEX_PAGE: &str = r#"<HTML>
<HEAD><TITLE>MC102</TITLE></HEAD>
<BODY>
<H2>MC102 - Exercises</H2>
<UL>
<LI><A HREF="../../mc102/01/">Lab 01</A>
<LI><A HREF="../../mc102/02/">Lab 02</A>
<LI><A HREF="../../mc102/03/">Lab 03</A>
</UL>
</BODY>
</HTML>"#;

    #[test]
    fn counts_lines_containing_the_marker() {
        assert_eq!(
            count_published_exercises(INDEX_PAGE, r#"HREF="../../mc102/"#),
            3
        );
    }

    #[test]
    fn counts_zero_when_marker_is_absent() {
        assert_eq!(
            count_published_exercises(INDEX_PAGE, r#"HREF="../../mc202/"#),
            0
        );
        assert_eq!(count_published_exercises("", r#"HREF="../../mc102/"#), 0);
    }
}
