mod cmd;
mod util;

use clap::Parser;

#[tokio::main]
async fn main() {
    env_logger::init();

    let app = cmd::GlobalArgs::parse();
    app.exec().await.unwrap_or_else(|e| {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    });
}
