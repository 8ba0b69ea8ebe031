//! Walks a small photo library through a trail and prints what it knows.
//!
//! Run with `FILE_TRAIL_LOG_MODE=verbose` to see completion events.

use file_trail::{hydrate, init_logger, Result, Trail};

const NOVEMBER: &str = "/var/home/jdoe/Pictures/2022/11";
const DECEMBER: &str = "/var/home/jdoe/Pictures/2022/12";

fn main() -> Result<()> {
    if let Err(e) = init_logger(false, false).install() {
        eprintln!("logger already installed: {e}");
    }

    let mut trail = Trail::new();
    trail.visit(format!("{NOVEMBER}/IMG_6532.PNG"))?;
    trail.visit(format!("{NOVEMBER}/IMG_6533.PNG"))?;

    println!("hasVisited {NOVEMBER}: {}", trail.has_visited(NOVEMBER));
    println!(
        "hasVisited /var/home/jdoe/Pictures/2022: {}",
        trail.has_visited("/var/home/jdoe/Pictures/2022")
    );
    println!("hasVisited /: {}", trail.has_visited("/"));

    println!("\nBefore visiting {DECEMBER}:");
    println!("hasVisited {DECEMBER}: {}", trail.has_visited(DECEMBER));
    println!("hasCompleted {NOVEMBER}: {}", trail.has_completed(NOVEMBER));

    trail.visit(format!("{DECEMBER}/IMG_6534.PNG"))?;

    println!("\nAfter visiting {DECEMBER}:");
    println!("hasVisited {DECEMBER}: {}", trail.has_visited(DECEMBER));
    println!("hasCompleted {NOVEMBER}: {}", trail.has_completed(NOVEMBER));

    let serialized = trail.serialize();
    println!("serialize: {serialized}");

    let restored = hydrate(&serialized)?;
    println!(
        "hydrate: {} visits, last directory {}",
        restored.len(),
        restored.last_directory().unwrap_or("-")
    );

    Ok(())
}
