use ragchat::config;
use ragchat::proxy::{self, ProxyState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let state = ProxyState::from_env();
    println!("Forwarding /api/chat to {}/ask", config::backend_url());

    proxy::serve(&config::proxy_addr(), state).await
}
