//! Prints the civil fields of an RFC 3339 timestamp.

use rfc3339_time::{parse, Error};

fn main() -> Result<(), Error> {
    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "2024-05-01T10:47:40Z".to_string());

    let ts = parse(&text)?;
    println!(
        "Parsed date: {}/{}/{}",
        ts.day(),
        ts.month(),
        ts.year()
    );
    println!(
        "Parsed time: {:02}:{:02}:{:02} (+{} ns, offset {} s)",
        ts.hour(),
        ts.minute(),
        ts.second(),
        ts.nanosecond(),
        ts.offset_seconds()
    );
    Ok(())
}
