mod app;
mod components;
mod config;
mod context;
mod navigator;
mod pages;
mod routes;
mod storage;

use app::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracing_web::MakeWebConsoleWriter;

fn main() {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    tracing_subscriber::registry().with(console_layer).init();

    yew::Renderer::<App>::new().render();
}
