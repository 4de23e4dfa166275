use fredapi_rs::{
    AggregationMethod, FredClient, Frequency, ObservationsBuilder, SortOrder, Units,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = FredClient::builder().build()?;

    // 1. CPI as percent change from a year ago, aggregated to quarters.
    let yoy = ObservationsBuilder::new(&client, "CPIAUCSL")
        .units(Units::Pc1)
        .frequency(Frequency::Quarterly)
        .aggregation(AggregationMethod::EndOfPeriod)
        .sort_order(SortOrder::Desc)
        .limit(8)
        .fetch()
        .await?;

    println!("--- CPI, percent change from a year ago (last 8 quarters) ---");
    for obs in &yoy {
        match obs.value {
            Some(v) => println!("  {}: {v:.2}%", obs.date),
            None => println!("  {}: (no data)", obs.date),
        }
    }
    println!();

    // 2. The full response also carries the envelope metadata.
    let full = ObservationsBuilder::new(&client, "UNRATE")
        .sort_order(SortOrder::Desc)
        .limit(12)
        .fetch_full()
        .await?;

    println!("--- UNRATE envelope ---");
    println!("count:    {:?}", full.meta.count);
    println!("units:    {:?}", full.meta.units);
    println!("order_by: {:?}", full.meta.order_by);
    println!("rows:     {}", full.observations.len());
    println!();

    // 3. Raw rows keep the service's value strings, "." placeholder and all.
    let raw = ObservationsBuilder::new(&client, "UNRATE")
        .sort_order(SortOrder::Desc)
        .limit(3)
        .fetch_raw()
        .await?;

    println!("--- UNRATE, raw rows ---");
    for row in &raw {
        println!("  {}: {:?}", row.date, row.value);
    }

    Ok(())
}
