use axum::serve;
use cwa_proxy::{
    app, build_app_state, get_config_info, get_log_level, setup_logger, DEFAULT_CWA_BASE_URL,
};
use log::info;
use std::{net::SocketAddr, str::FromStr};
use tokio::{net::TcpListener, signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli: cwa_proxy::Cli = get_config_info();
    setup_logger().level(get_log_level(&cli)).apply()?;

    let base_url = cli
        .cwa_base_url
        .unwrap_or(String::from(DEFAULT_CWA_BASE_URL));
    let app_state = build_app_state(base_url, cli.cwa_api_key)?;

    let socket_addr = SocketAddr::from_str(&format!(
        "{}:{}",
        cli.domain.unwrap_or(String::from("127.0.0.1")),
        cli.port.unwrap_or(String::from("3000"))
    ))?;

    let std_listener = std::net::TcpListener::bind(socket_addr)?;
    std_listener.set_nonblocking(true)?;
    let listener = TcpListener::from_std(std_listener)?;

    info!("listening on http://{}", socket_addr);

    let app = app(app_state);
    serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
