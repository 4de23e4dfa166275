use chrono::NaiveDate;
use httpmock::Method::GET;

use crate::common;
use fredapi_rs::{AggregationMethod, Frequency, ObservationsBuilder, SortOrder, Units};

#[tokio::test]
async fn every_builder_setting_reaches_the_query_string() {
    let server = common::setup_server();
    let body = common::two_row_body();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(common::OBSERVATIONS_PATH)
            .query_param("series_id", "CPIAUCSL")
            .query_param("api_key", "k")
            .query_param("file_type", "json")
            .query_param("observation_start", "2019-01-01")
            .query_param("observation_end", "2020-12-31")
            .query_param("sort_order", "desc")
            .query_param("limit", "100")
            .query_param("offset", "5")
            .query_param("units", "pch")
            .query_param("frequency", "q")
            .query_param("aggregation_method", "eop");
        then.status(200)
            .header("content-type", "application/json")
            .body(&body);
    });

    let client = common::client_with_key(&server, "k");

    let _ = ObservationsBuilder::new(&client, "CPIAUCSL")
        .observation_start(NaiveDate::from_ymd_opt(2019, 1, 1).unwrap())
        .observation_end(NaiveDate::from_ymd_opt(2020, 12, 31).unwrap())
        .sort_order(SortOrder::Desc)
        .limit(100)
        .offset(5)
        .units(Units::Pch)
        .frequency(Frequency::Quarterly)
        .aggregation(AggregationMethod::EndOfPeriod)
        .fetch()
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn unset_parameters_stay_out_of_the_query_string() {
    let server = common::setup_server();
    let body = common::two_row_body();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(common::OBSERVATIONS_PATH)
            .query_param("series_id", "GDP")
            .query_param_missing("observation_start")
            .query_param_missing("sort_order")
            .query_param_missing("limit")
            .query_param_missing("units");
        then.status(200)
            .header("content-type", "application/json")
            .body(&body);
    });

    let client = common::client_with_key(&server, "k");
    let _ = ObservationsBuilder::new(&client, "GDP").fetch().await.unwrap();

    mock.assert();
}

/// Reserved characters in a series id or key must not corrupt the query
/// string; both are percent-encoded on the way out.
#[tokio::test]
async fn series_ids_and_keys_are_percent_encoded() {
    let server = common::setup_server();
    let body = common::two_row_body();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(common::OBSERVATIONS_PATH)
            .query_param("series_id", "BAD&ID")
            .query_param("api_key", "k=with&chars");
        then.status(200)
            .header("content-type", "application/json")
            .body(&body);
    });

    let client = common::client_builder(&server).build().unwrap();

    let _ = ObservationsBuilder::new(&client, "BAD&ID")
        .api_key("k=with&chars")
        .fetch()
        .await
        .unwrap();

    mock.assert();
}
