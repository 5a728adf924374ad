use std::io;

use tracing_subscriber::EnvFilter;

use calcpro::app::App;
use calcpro::cli::Cli;
use calcpro::config::Config;
use calcpro::session::Session;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    // Logs go to stderr so the display on stdout stays clean.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = cli.apply_to(Config::load(cli.config.as_deref()));
    let session = Session::new(config.initial_state());
    let mut app = App::new(session, &config, cli.json);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.keys.is_empty() {
        tracing::info!("calcpro v{} ready", env!("CARGO_PKG_VERSION"));
        app.run(io::stdin().lock(), &mut out)
    } else {
        app.apply_keys(&cli.keys.join(" "), &mut out)
    }
}
