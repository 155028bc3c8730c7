use susy_webclient::susy::urls;
use susy_webclient::*;

#[tokio::test]
async fn out_of_range_test_is_rejected_without_touching_the_network() {
    // Unroutable base URL: if the client tried a request, this test would
    // hang or fail with an Http error instead of the range error.
    let base = Url::parse("https://susy.invalid:9999/mc102").unwrap();
    let cli = SusyClient::new(ClientOptions::default());

    for exercise in [1, 5, 999] {
        let err = cli
            .fetch_test_data(&base, exercise, 11, TestDataKind::In)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::TestIndexOutOfRange {
                test: 11,
                max_test_index: MAX_TEST_INDEX,
            }
        ));
    }

    let err = cli
        .fetch_test_data(&base, 1, 0, TestDataKind::Out)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::TestIndexOutOfRange { test: 0, .. }));
}

#[tokio::test]
async fn default_base_url_points_at_the_judge() {
    let base = &*urls::DEFAULT_BASE_URL;
    assert_eq!(base.scheme(), "https");
    assert_eq!(urls::course_code(base).unwrap(), "mc102");

    let url = urls::fixture_url(base, 1, 1, TestDataKind::In).unwrap();
    assert_eq!(
        url.as_str(),
        "https://susy.ic.unicamp.br:9999/mc102/01/dados/arq01.in"
    );
}

#[test]
fn tls_verification_is_on_by_default() {
    assert!(ClientOptions::default().verify_tls);
}
