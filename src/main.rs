// Entrypoint for the CLI application.
// - Keeps `main` small: resolve credentials, build the API client and hand
//   it to the menu loop.
// - Missing credentials are the one fatal error; they end the process with
//   status 1 before the menu is shown.

use clap::Parser;
use log::LevelFilter;
use tourney_cli::{
    api::ApiClient,
    config::{Config, PASS_VAR, URL_VAR, USER_VAR},
    output,
    prompt::{install_interrupt_handler, DialoguerPrompter},
    ui::main_menu,
};

#[derive(Parser)]
#[command(name = "tourney")]
#[command(about = "Interactive manager for tournament records", long_about = None)]
struct Cli {
    /// Base URL of the tournament API, e.g. https://example.org
    #[arg(long, env = URL_VAR)]
    url: Option<String>,

    /// Username for basic authentication
    #[arg(long, env = USER_VAR)]
    user: Option<String>,

    /// Password for basic authentication (prefer the environment variable)
    #[arg(long, env = PASS_VAR, hide_env_values = true)]
    password: Option<String>,

    /// Log requests and menu actions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    } else if verbose {
        builder.filter(None, LevelFilter::Debug);
    } else {
        // Interactive output goes to the terminal; keep the log quiet.
        builder.filter(None, LevelFilter::Warn);
    }
    builder.init();
}

fn main() -> anyhow::Result<()> {
    // A .env file never overrides variables that are already set.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logger(cli.verbose);

    // Ctrl-C at a prompt must cancel that prompt, not end the process.
    install_interrupt_handler()?;

    let mut prompter = DialoguerPrompter;
    let config = Config::resolve(cli.url, cli.user, cli.password, &mut prompter)?;
    log::debug!("resolved {:?}", config);

    let api = match ApiClient::new(&config) {
        Ok(api) => api,
        Err(e) => {
            output::print_error("Error", &e.to_string());
            std::process::exit(1);
        }
    };

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(&api, &mut prompter)?;
    Ok(())
}
