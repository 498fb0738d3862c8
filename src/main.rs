use std::io::{self, IsTerminal, Read};
use std::path::Path;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "simple-evite",
    version,
    about = "Resolve invitation text overlay styling and send event reminders"
)]
struct Cli {
    /// Overlay style (light, dark, vibrant, muted, elegant, bold)
    #[arg(short = 's', long = "style")]
    style: Option<String>,

    /// Text position (center, top, bottom, left, right)
    #[arg(short = 'p', long = "position")]
    position: Option<String>,

    /// Text size (small, medium, large, extra-large)
    #[arg(short = 'S', long = "size")]
    size: Option<String>,

    /// Force the text shadow on or off
    #[arg(long = "shadow")]
    shadow: Option<bool>,

    /// Force the background panel on or off
    #[arg(long = "background")]
    background: Option<bool>,

    /// Background panel opacity (0.0 to 1.0)
    #[arg(long = "background-opacity")]
    background_opacity: Option<f64>,

    /// Show overlay style options and exit
    #[arg(long = "show-style-options")]
    show_style_options: bool,

    /// Show text position options and exit
    #[arg(long = "show-position-options")]
    show_position_options: bool,

    /// Show text size options and exit
    #[arg(long = "show-size-options")]
    show_size_options: bool,

    /// Generate a new invitation share token and exit
    #[arg(long = "new-share-token")]
    new_share_token: bool,

    /// Render a reminder email from JSON on stdin without sending
    #[arg(long = "preview-reminder")]
    preview_reminder: bool,

    /// Send a reminder email from JSON on stdin
    #[arg(long = "send-reminder")]
    send_reminder: bool,

    /// Run the HTTP API server
    #[arg(long = "serve")]
    serve: bool,

    /// Listen address for --serve
    #[arg(long = "addr", default_value = "127.0.0.1:3008")]
    addr: String,

    /// Read extra settings from a local TOML file
    #[arg(short = 'r', long = "read-settings")]
    read_settings: Option<String>,

    /// Enable verbose logging
    #[arg(long = "verbose")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    simple_evite::logging::init(cli.verbose)?;

    if cli.serve {
        let settings_path = cli.read_settings.as_deref().map(Path::new);
        let settings = simple_evite::settings::load_settings(settings_path)?;
        return simple_evite::server::run_server(settings, cli.addr).await;
    }

    let needs_input = cli.preview_reminder
        || cli.send_reminder
        || !(cli.show_style_options
            || cli.show_position_options
            || cli.show_size_options
            || cli.new_share_token);
    let input = if needs_input && !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Some(buffer)
    } else {
        None
    };

    let output = simple_evite::run(
        simple_evite::Config {
            style: cli.style,
            position: cli.position,
            size: cli.size,
            shadow: cli.shadow,
            background: cli.background,
            background_opacity: cli.background_opacity,
            settings_path: cli.read_settings,
            show_style_options: cli.show_style_options,
            show_position_options: cli.show_position_options,
            show_size_options: cli.show_size_options,
            new_share_token: cli.new_share_token,
            preview_reminder: cli.preview_reminder,
            send_reminder: cli.send_reminder,
        },
        input,
    )
    .await?;

    println!("{}", output);
    Ok(())
}
