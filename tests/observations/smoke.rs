use chrono::NaiveDate;
use httpmock::Method::GET;

use crate::common;
use fredapi_rs::ObservationsBuilder;

#[tokio::test]
async fn fetch_returns_typed_rows_for_a_minimal_payload() {
    let server = common::setup_server();

    // Bare-bones payload: rows only, none of the envelope bookkeeping.
    let body = r#"{"observations":[
        {"date":"2020-01-01","value":"123.4"},
        {"date":"2020-04-01","value":"."}
    ]}"#;

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(common::OBSERVATIONS_PATH)
            .query_param("series_id", "ATNHPIUS16180Q")
            .query_param("api_key", "testkey")
            .query_param("file_type", "json");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let client = common::client_builder(&server).build().unwrap();

    let obs = ObservationsBuilder::new(&client, "ATNHPIUS16180Q")
        .api_key("testkey")
        .fetch()
        .await
        .unwrap();

    mock.assert();

    assert_eq!(obs.len(), 2);
    assert_eq!(obs[0].date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    assert_eq!(obs[0].value, Some(123.4));
    assert_eq!(obs[1].date, NaiveDate::from_ymd_opt(2020, 4, 1).unwrap());
    assert_eq!(
        obs[1].value, None,
        "the '.' placeholder must become a missing value"
    );
}
