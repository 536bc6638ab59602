//! Standalone maintenance tool: collapses stored samples that share a
//! whole-second timestamp, keeping one representative per second. Run it
//! by hand against the same store the API uses; it is not wired into the
//! scheduler or the HTTP layer.

use colored::*;
use std::env;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    println!("Deduplicating metrics collection...");

    let db = match db::connect(&url).await {
        Ok(db) => db,
        Err(e) => {
            println!("{} {e}", "failed".red());
            std::process::exit(1);
        }
    };

    match db::store::deduplicate(&db).await {
        Ok(outcome) => {
            println!(
                "{} scanned {}, kept {}, removed {}",
                "done".green(),
                outcome.scanned,
                outcome.kept,
                outcome.removed
            );
        }
        Err(e) => {
            println!("{} {e}", "failed".red());
            std::process::exit(1);
        }
    }
}
