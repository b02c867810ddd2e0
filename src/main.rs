#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use std::path::PathBuf;

    use actix_files::Files;
    use actix_web::middleware::DefaultHeaders;
    use actix_web::web::Data;
    use actix_web::{App, HttpServer};
    use leptos::config::get_configuration;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use tracing_subscriber::EnvFilter;

    use devfolio::frontend;
    use devfolio::web::{routes, tls, AppState};

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let key_path = PathBuf::from(
        std::env::var("TLS_KEY_PATH").unwrap_or_else(|_| "localhost-key.pem".to_string()),
    );
    let cert_path = PathBuf::from(
        std::env::var("TLS_CERT_PATH").unwrap_or_else(|_| "localhost.pem".to_string()),
    );

    // Missing TLS material is fatal; refuse to bind anything.
    let tls_config = match tls::load_server_config(&key_path, &cert_path) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(
                "{err}. Generate a local certificate (e.g. `mkcert localhost`) before starting."
            );
            std::process::exit(1);
        }
    };

    let conf = get_configuration(None).expect("failed to read Leptos configuration");
    let mut addr = conf.leptos_options.site_addr;
    if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
        addr.set_port(port);
    }

    let state = AppState::from_env();

    tracing::info!("HTTPS/HTTP-2 server running on https://{addr}");
    tracing::info!("protocol support: HTTP/2 (h2), HTTP/1.1; TLS 1.2 through TLS 1.3");
    tracing::info!("admin login: POST https://{addr}/admin/login");

    HttpServer::new(move || {
        let page_routes = generate_route_list(frontend::App);
        let leptos_options = &conf.leptos_options;
        let site_root = leptos_options.site_root.clone().to_string();

        App::new()
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("X-Frame-Options", "DENY"))
                    .add(("Referrer-Policy", "strict-origin-when-cross-origin")),
            )
            .configure(|cfg| routes::configure(cfg, state.clone()))
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .service(Files::new("/assets", site_root.clone()))
            .leptos_routes(page_routes, {
                let leptos_options = leptos_options.clone();
                move || frontend::shell(leptos_options.clone())
            })
            .app_data(Data::new(leptos_options.to_owned()))
    })
    .bind_rustls_0_23(addr, tls_config)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The binary only exists with the server feature; cargo-leptos builds
    // the wasm side through the `hydrate` library target instead.
}
