use chrono::NaiveDate;
use fredapi_rs::{FredClient, Series};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The key comes from FRED_API_KEY unless one is configured on the
    // builder (or per call). Get a free key at
    // https://fred.stlouisfed.org/docs/api/api_key.html
    let client = FredClient::builder().build()?;

    // 1. Fetch a whole series.
    let gdp = Series::new(&client, "GDP");
    let observations = gdp.fetch().await?;
    println!("--- {} ---", gdp.id());
    println!("{} observations", observations.len());
    if let Some(first) = observations.first() {
        println!("first: {} = {:?}", first.date, first.value);
    }
    println!();

    // 2. The most recent reading.
    if let Some(latest) = gdp.latest().await? {
        println!("latest: {} = {:?}", latest.date, latest.value);
    }
    println!();

    // 3. A fixed window, endpoints inclusive.
    let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
    let window = gdp.between(start, end).await?;
    println!("--- GDP {start} to {end} ---");
    for obs in &window {
        match obs.value {
            Some(v) => println!("  {}: {v}", obs.date),
            None => println!("  {}: (no data)", obs.date),
        }
    }

    Ok(())
}
