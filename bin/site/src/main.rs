#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    harbor_site::telemetry::init_server();

    if let Err(report) = serve().await {
        tracing::error!("{report}");
        std::process::exit(1);
    }
}

#[cfg(feature = "ssr")]
async fn serve() -> Result<(), rootcause::prelude::Report<harbor_site::error::SiteError>> {
    use axum::{Router, http::header, routing::get};
    use harbor_site::{app::App, config::SiteConfig, error::SiteError};
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::{services::ServeDir, trace::TraceLayer};

    // Load configuration from environment
    let config = SiteConfig::from_env().map_err(|e| SiteError::Config {
        details: e.to_string(),
    })?;
    tracing::info!(public_url = %config.public_url, "Loaded configuration");

    let conf = get_configuration(None).map_err(|e| SiteError::LeptosConfig {
        details: e.to_string(),
    })?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    // The route table is static, so the sitemap is rendered once.
    let sitemap = harbor_navigation::sitemap::render(&config.public_url);

    let app = Router::new()
        .route(
            "/sitemap.xml",
            get(move || {
                let body = sitemap.clone();
                async move { ([(header::CONTENT_TYPE, "application/xml")], body) }
            }),
        )
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler::<LeptosOptions, _>(shell))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| SiteError::Bind {
            addr: addr.to_string(),
            details: e.to_string(),
        })?;

    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(|e| SiteError::Serve {
            details: e.to_string(),
        })?;

    Ok(())
}

#[cfg(feature = "ssr")]
fn shell(options: leptos::prelude::LeptosOptions) -> impl leptos::prelude::IntoView {
    use harbor_site::app::App;
    use leptos::prelude::*;
    use leptos_meta::*;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href="/pkg/harbor-site.css"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Only used for WASM builds; hydration happens in lib.rs
}
