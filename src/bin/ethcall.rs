use ethcall::{config::Config, eth::EthClient, report::Outcome};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let outcome = match Config::from_env() {
        Ok(config) => {
            let eth = EthClient::new(&config.url);
            ethcall::run(&eth, &config.call, &config.block).await
        }
        Err(report) => Outcome::from(report),
    };

    if outcome.is_success() {
        println!("{outcome}");
    } else {
        eprintln!("{outcome}");
    }
}
