//! Converts an RFC 3339 timestamp to Unix epoch counts.

use rfc3339_time::{epoch, parse, Error};

fn main() -> Result<(), Error> {
    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "2024-05-01T10:47:40.123456+01:00".to_string());

    let ts = parse(&text)?;
    println!("Unix timestamp: {}", epoch::to_seconds(&ts)?);
    println!("Unix timestamp (milliseconds): {}", epoch::to_millis(&ts)?);
    println!("Unix timestamp (microseconds): {}", epoch::to_micros(&ts)?);
    println!("Unix timestamp (nanoseconds): {}", epoch::to_nanos(&ts)?);
    Ok(())
}
