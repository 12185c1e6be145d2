use std::net::SocketAddr;

use schedule_server::{start_server, SerpConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = SerpConfig::from_env()?;
    let addr: SocketAddr = "0.0.0.0:8080".parse()?;
    println!("Running service at http://{}", addr);
    start_server(config, addr).await
}
