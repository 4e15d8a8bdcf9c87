// Actix server setup

use cotacao_gateway::config::Settings;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Starting Currency Quote Gateway API ...");
    let settings = Settings::new().expect("Failed to load configuration");
    cotacao_gateway::api::start_server(settings).await
}
