//! Polars `DataFrame` integration.
//!
//! Run with: cargo run --example 03_dataframe --features dataframe

use fredapi_rs::{FredClient, Series, ToDataFrame};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = FredClient::builder().build()?;

    let observations = Series::new(&client, "GDP").fetch().await?;
    let df = observations.to_dataframe()?;

    println!("DataFrame shape: {:?}", df.shape());
    println!("{}", df.head(Some(5)));

    // Nulls in the value column are the service's missing-data placeholder.
    println!(
        "missing values: {}",
        df.column("value")?.null_count()
    );

    Ok(())
}
