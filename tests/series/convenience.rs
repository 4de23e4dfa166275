use chrono::NaiveDate;
use httpmock::Method::GET;

use crate::common;
use fredapi_rs::Series;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[tokio::test]
async fn fetch_goes_through_the_observations_endpoint() {
    let server = common::setup_server();

    let body = common::two_row_body();
    let mock = common::mock_observations(&server, "GDP", &body);

    let client = common::client_with_key(&server, "k");
    let gdp = Series::new(&client, "GDP");

    let obs = gdp.fetch().await.unwrap();

    mock.assert();
    assert_eq!(gdp.id(), "GDP");
    assert_eq!(obs.len(), 2);
}

#[tokio::test]
async fn between_sends_the_date_window() {
    let server = common::setup_server();
    let body = common::two_row_body();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(common::OBSERVATIONS_PATH)
            .query_param("series_id", "GDP")
            .query_param("observation_start", "2020-01-01")
            .query_param("observation_end", "2020-06-30");
        then.status(200)
            .header("content-type", "application/json")
            .body(&body);
    });

    let client = common::client_with_key(&server, "k");
    let obs = Series::new(&client, "GDP")
        .between(d(2020, 1, 1), d(2020, 6, 30))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(obs.len(), 2);
}

#[tokio::test]
async fn latest_asks_for_one_row_in_descending_order() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(common::OBSERVATIONS_PATH)
            .query_param("series_id", "GDP")
            .query_param("sort_order", "desc")
            .query_param("limit", "1");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"observations":[{"date":"2025-04-01","value":"30353.902"}]}"#);
    });

    let client = common::client_with_key(&server, "k");
    let latest = Series::new(&client, "GDP").latest().await.unwrap();

    mock.assert();

    let row = latest.expect("series has data");
    assert_eq!(row.date, d(2025, 4, 1));
    assert_eq!(row.value, Some(30353.902));
}

#[tokio::test]
async fn latest_of_an_empty_series_is_none() {
    let server = common::setup_server();

    let mock = common::mock_observations(&server, "EMPTY", r#"{"observations":[]}"#);

    let client = common::client_with_key(&server, "k");
    let latest = Series::new(&client, "EMPTY").latest().await.unwrap();

    mock.assert();
    assert!(latest.is_none());
}
