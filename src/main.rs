use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use common_tags::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use common_tags::handlers::helpers::random_session_id;
use common_tags::handlers::signup::{render_signup_page, signup_form};
use common_tags::models::{AppState, Message};
use common_tags::routes::build_router;

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    match AppState::from_env() {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(%e, "Invalid configuration");
            eprintln!("{}: {}", yansi::Paint::red("Invalid configuration"), e);
            process::exit(1);
        }
    }
}

async fn start_server(state: AppState, host: &str, port: u16) {
    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_router(state);
    tracing::info!(%addr, "Starting common-tags demo server");
    println!(
        "{} {}",
        yansi::Paint::new("Demo server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Stop the process using this port, or pass a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

#[derive(Parser)]
#[command(
    name = "common-tags",
    author,
    version,
    about = "Demo for the common-tags template helpers",
    long_about = r#"Renders a sign-up page built entirely from the common-tags helpers:
render_form, render_field, field_label, submit_button, render_messages,
page_title and the smart_date / checkbox_or_radio filters.

Examples:
  common-tags serve --port 5000
  common-tags demo > page.html
"#,
    after_help = "Use `common-tags <subcommand> --help` for subcommand options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the demo web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Print the rendered demo page to stdout
    Demo {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Render the form with validation errors, as after a bad submit
        #[arg(long, default_value_t = false)]
        invalid: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    match cli.command {
        None => {
            let state = build_state_from_env(None);
            start_server(state, DEFAULT_HOST, DEFAULT_PORT).await;
        }
        Some(Commands::Serve { host, port, env_file }) => {
            let state = build_state_from_env(env_file.as_deref());
            start_server(state, &host, port).await;
        }
        Some(Commands::Demo { env_file, invalid }) => {
            let state = build_state_from_env(env_file.as_deref());
            let sid = random_session_id();
            let mut form = signup_form();
            let mut messages = vec![Message::from("Rendered from the command line")];
            if invalid {
                form.bind(&Default::default());
                form.validate();
                messages.push(Message::error("Please correct the errors below."));
            }
            match render_signup_page(&state, state.render_context(&sid), &form, &messages) {
                Ok(html) => println!("{}", html),
                Err(e) => {
                    tracing::error!(%e, "Template render error");
                    eprintln!("{}: {}", yansi::Paint::red("Render failed"), e);
                    process::exit(1);
                }
            }
        }
    }
}
