use std::env;
use std::fs::File;
use std::time::Duration;

use muster_admin::{AdminApp, AppConfig};
use simplelog::{Config, LevelFilter, WriteLogger};

#[tokio::main]
async fn main() {
    let log_file = File::create("muster-admin.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let base_url = env::var("MUSTER_API_URL")
        .unwrap_or_else(|_| "http://localhost:3000/api".to_string());
    let token = env::var("MUSTER_API_TOKEN").ok();

    let config = AppConfig {
        base_url,
        token,
        timeout: Duration::from_secs(30),
    };

    let app = match AdminApp::build(config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };

    if let Err(e) = app.start().await {
        eprintln!("Error: {e}");
        return;
    }

    for entry in app.visible_menu() {
        println!("{}  {}", entry.route, entry.title);
    }

    app.institutes.open().await;
    let view = app.institutes.view();
    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error: {e}"),
    }

    for toast in app.take_toasts() {
        println!("[{:?}] {}", toast.level, toast.message);
    }
}
