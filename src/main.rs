//! dwlog main entrypoint.

use dwlog::run;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        dwlog::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
