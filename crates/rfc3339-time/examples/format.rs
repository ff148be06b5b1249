//! Prints the current time as RFC 3339 text.

use rfc3339_time::{format_into, Error, Timestamp, MAX_FORMATTED_LEN};

fn main() -> Result<(), Error> {
    let now = Timestamp::now_utc();

    let mut buf = [0u8; MAX_FORMATTED_LEN];
    let len = format_into(&now, &mut buf)?;
    println!("Current time: {}", String::from_utf8_lossy(&buf[..len]));
    Ok(())
}
