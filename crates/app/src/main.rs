use tracing::info;

use orderflow_app::{AppConfig, OrderRequest};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env(std::env::args().nth(1));
    orderflow_observability::init_with(config.log_format);
    config.log_warnings();

    let request = match &config.request_path {
        Some(path) => OrderRequest::from_file(path)?,
        None => {
            info!("no order request given; running the sample order");
            OrderRequest::sample()
        }
    };

    let placed = orderflow_app::run(&config, request)?;
    println!("{}", placed.order_id);
    Ok(())
}
