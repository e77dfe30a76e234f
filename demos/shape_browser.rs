//! Walk the shape catalog, auto-framing each shape and printing the
//! parameter rows a host UI would show.
//!
//! Run with `RUST_LOG=debug` to watch the framing scans.

use anyhow::Result;
use blockcam::ShapeKind;

fn main() -> Result<()> {
    env_logger::init();

    let mut browser = blockcam::default();

    for &kind in ShapeKind::all() {
        let result = browser.select_shape(kind)?;
        match result.distance() {
            Some(distance) => println!("{:<10} framed at {:.1}", kind.to_string(), distance),
            None => println!("{:<10} does not fit into view", kind.to_string()),
        }
    }

    browser.select_color("Coral")?;
    browser.set_side(2.0)?;

    println!();
    for item in browser.parameter_items() {
        println!("{:<6} {}", item.title, item.value);
    }

    Ok(())
}
