use clap::Parser;

use tracing_subscriber::EnvFilter;

mod app;
mod args;
mod canvas;

use app::App;
use args::Args;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // clion needs help in trait annotation
    let args = <Args as Parser>::parse();

    let app = match App::new(&args) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            eprintln!("{e}");
            std::process::exit(-1);
        }
    };

    app.run();
}
