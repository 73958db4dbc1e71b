//! Basic feed row decoding example.
//!
//! Demonstrates how to use `decode_feed()` to pull trailing IDs and the
//! embedded schedule out of raw feed rows without any network access.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p gamefeed-decoder --example decode_rows
//! ```

use gamefeed_decoder::decode_feed;

fn main() {
    // A few raw rows (tab-separated) in the feed's native layout.
    let feed = "20240301\t0\t20240401\t0\t0\t0\t999999\t0\t1\t0\t2\t15\t20\t0\t150\t1200\t0\n\
                20240301\t800\t20240401\t2100\t0\t0\t999999\t0\t1\t0\t0\t9\t1\t800\t1000\t0\t1001\t1\n\
                20240301\t0\t20240401\t0\t0\t0\t7\t150\t1200\t0\n";

    for (index, row) in decode_feed(feed).iter().enumerate() {
        println!("row {index}");
        println!("  ids: {:?}", row.ids);

        match &row.schedule {
            Some(schedule) => {
                println!("  layout: {}", schedule.variant_label());
                for line in row.schedule_text.lines() {
                    println!("  schedule: {line}");
                }
            }
            None => println!("  (no schedule)"),
        }

        for warning in &row.warnings {
            println!("  warning: {warning}");
        }
    }
}
