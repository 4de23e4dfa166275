use chrono::NaiveDate;

use crate::common;
use fredapi_rs::ObservationsBuilder;

#[tokio::test]
async fn fetch_full_exposes_the_envelope_metadata() {
    let server = common::setup_server();

    let body = common::two_row_body();
    let mock = common::mock_observations(&server, "GDP", &body);

    let client = common::client_with_key(&server, "k");
    let resp = ObservationsBuilder::new(&client, "GDP")
        .fetch_full()
        .await
        .unwrap();

    mock.assert();

    assert_eq!(resp.observations.len(), 2);

    let meta = &resp.meta;
    assert_eq!(
        meta.observation_start,
        Some(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
    );
    assert_eq!(
        meta.observation_end,
        Some(NaiveDate::from_ymd_opt(2020, 6, 30).unwrap())
    );
    assert_eq!(meta.units.as_deref(), Some("lin"));
    assert_eq!(meta.order_by.as_deref(), Some("observation_date"));
    assert_eq!(meta.sort_order.as_deref(), Some("asc"));
    assert_eq!(meta.count, Some(2));
    assert_eq!(meta.offset, Some(0));
    assert_eq!(meta.limit, Some(100_000));
}

#[tokio::test]
async fn absent_envelope_fields_stay_none() {
    let server = common::setup_server();

    let body = r#"{"observations":[{"date":"2020-01-01","value":"1.0"}]}"#;
    let mock = common::mock_observations(&server, "GDP", body);

    let client = common::client_with_key(&server, "k");
    let resp = ObservationsBuilder::new(&client, "GDP")
        .fetch_full()
        .await
        .unwrap();

    mock.assert();

    assert_eq!(resp.meta.observation_start, None);
    assert_eq!(resp.meta.count, None);
    assert_eq!(resp.meta.units, None);
}
