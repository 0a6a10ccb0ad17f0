#![allow(non_snake_case)]

mod app;
mod components;
mod config;
mod context;
mod sections;
mod theme;

#[cfg(test)]
mod test_util;

fn main() {
    #[cfg(feature = "desktop")]
    launch_desktop();

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(app::App);
}

#[cfg(feature = "desktop")]
fn launch_desktop() {
    use clap::Parser;
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    let args = config::Args::parse();
    setup_logging(args.log_filter());

    let site = args.site_config();
    let title = args.window_title(&site);
    tracing::info!(
        "Starting '{}' ({}x{}, motion {:?})",
        title,
        args.width,
        args.height,
        site.motion
    );
    config::install(site);

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}

#[cfg(feature = "desktop")]
fn setup_logging(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}
