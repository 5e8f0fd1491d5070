//! Binary entrypoint for the fortune cookie CLI.
//!
//! Commands:
//! - `reveal [--lang <code>] [--seed <n>] [--meta]` - draw a fortune and write its PNG preview
//! - `share <network> [--lang <code>] [--seed <n>]` - print the share target for a network
//! - `copy [--lang <code>] [--seed <n>]` - draw a fortune and copy the share payload
//! - `lang <code>` - persist the preferred locale
//! - `locales` - list supported locales
//! - `init` - create a starter `fortune-cookie.toml`
//!
//! See the library crate docs for module-level details: `fortune_cookie::`.
use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::path::Path;
use std::time::Instant;

use fortune_cookie::config::Config;
use fortune_cookie::locale::{LocaleStore, LANG_PARAM};
use fortune_cookie::platform::{DeviceClass, DeviceDetector, FixedDevice, UserAgentDetector};
use fortune_cookie::preferences::FilePreferences;
use fortune_cookie::session::FortuneApp;
use fortune_cookie::share::clipboard::{spawn_copy, TerminalClipboard};
use fortune_cookie::share::png::PngSurface;
use fortune_cookie::share::{download_labels, Network};

#[derive(Parser)]
#[command(name = "fortune-cookie")]
#[command(about = "Crack a fortune cookie and share the proverb")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "fortune-cookie.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Options shared by every command that draws a fortune.
#[derive(Args)]
struct DrawArgs {
    /// Locale code, as if the page was opened with `?lang=<code>`
    #[arg(short, long)]
    lang: Option<String>,

    /// Seed for a reproducible draw
    #[arg(short, long)]
    seed: Option<u64>,

    /// User agent used to pick mobile or desktop share targets
    #[arg(long)]
    user_agent: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reveal a fortune and write its social preview image
    Reveal {
        #[command(flatten)]
        draw: DrawArgs,

        /// Also print the document title and meta tags
        #[arg(long)]
        meta: bool,

        /// Skip writing the preview image
        #[arg(long)]
        no_preview: bool,
    },
    /// Reveal a fortune and print the share target of one network
    Share {
        /// whatsapp, instagram, twitter (or x), facebook
        network: Network,

        #[command(flatten)]
        draw: DrawArgs,
    },
    /// Reveal a fortune and copy the share text and link to the clipboard
    Copy {
        #[command(flatten)]
        draw: DrawArgs,
    },
    /// Persist the preferred locale
    Lang {
        /// en, pt, es, fr or it
        code: String,
    },
    /// List supported locales
    Locales,
    /// Create a default configuration file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let pre_config = match cli.command {
        Commands::Init => None,
        _ => Config::load(&cli.config).await.ok(),
    };
    init_logging(&pre_config, cli.verbose);
    if pre_config.is_none() && !matches!(cli.command, Commands::Init) {
        info!("No usable config at {}; using defaults", cli.config);
    }
    let config = pre_config.unwrap_or_default();

    match cli.command {
        Commands::Init => {
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Locales => {
            let app = start_app(&config, None)?;
            for option in app.language_options() {
                let marker = if option.selected { "*" } else { " " };
                println!("{} {}  {}", marker, option.locale, option.name);
            }
        }
        Commands::Lang { code } => {
            let mut app = start_app(&config, None)?;
            app.set_locale_code(&code)
                .map_err(|e| anyhow!("Failed to set locale {}: {}", code, e))?;
            println!(
                "{} ({})",
                app.catalog().language_names.get(app.locale()),
                app.preferences().path().display()
            );
        }
        Commands::Reveal {
            draw,
            meta,
            no_preview,
        } => {
            let mut app = start_app(&config, draw.lang.as_deref())?;
            let mut rng = make_rng(draw.seed);
            let fortune = app.reveal(rng.as_mut())?.to_string();
            println!("{}\n", app.catalog().today_label);
            println!("  \"{}\"\n", fortune);

            if !no_preview {
                let mut surface = PngSurface::new();
                let image = app.render_preview(&mut surface)?.clone();
                let dir = Path::new(&config.preview.output_dir);
                tokio::fs::create_dir_all(dir)
                    .await
                    .map_err(|e| anyhow!("Failed to create {}: {}", dir.display(), e))?;
                let path = dir.join(image.file_name(chrono::Utc::now().timestamp_millis()));
                tokio::fs::write(&path, &image.data)
                    .await
                    .map_err(|e| anyhow!("Failed to write preview {}: {}", path.display(), e))?;
                let (label, _) = download_labels(app.locale());
                println!("{}: {}", label, path.display());
            }
            if meta {
                println!("\n{}", app.document_meta().to_html());
            }
            println!("{}", app.prompt());
        }
        Commands::Share { network, draw } => {
            let mut app = start_app(&config, draw.lang.as_deref())?;
            let device = detector(draw.user_agent.as_deref());
            let mut rng = make_rng(draw.seed);
            app.reveal(rng.as_mut())?;
            let mut clipboard = TerminalClipboard::new();
            let target = app.share(network, device.as_ref(), &mut clipboard, Instant::now())?;
            println!("{}", network.label(app.catalog()));
            if let Some(notice) = target.notice {
                println!("\n{}\n", notice);
            }
            for open in &target.opens {
                if open.delay.is_zero() {
                    println!("{}", open.url);
                } else {
                    println!("{} (after {} ms)", open.url, open.delay.as_millis());
                }
            }
        }
        Commands::Copy { draw } => {
            let mut app = start_app(&config, draw.lang.as_deref())?;
            let device = detector(draw.user_agent.as_deref());
            let mut rng = make_rng(draw.seed);
            app.reveal(rng.as_mut())?;
            let artifact = app.share_artifact()?;
            let labels = app.catalog().share_labels;
            let rx = spawn_copy(
                TerminalClipboard::new(),
                artifact.clipboard_payload,
                labels,
                device.device_class(),
                app.copy_timings(),
            );
            let (_clipboard, report) = rx
                .await
                .map_err(|e| anyhow!("Clipboard task ended without a report: {}", e))?;
            app.mark_copied(report, Instant::now());
            info!("copy finished via {:?} tier", report.tier);
            println!("{}", labels.copied);
        }
    }

    Ok(())
}

fn start_app(config: &Config, lang: Option<&str>) -> Result<FortuneApp<FilePreferences>> {
    let query = lang
        .map(|code| format!("?{}={}", LANG_PARAM, code))
        .unwrap_or_default();
    let platform_tag = std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LANG"))
        .ok();
    let preferences = FilePreferences::new(
        config.preferences.path.clone(),
        config.preferences.key.clone(),
    );
    FortuneApp::start(
        config,
        LocaleStore::builtin(),
        preferences,
        &query,
        platform_tag.as_deref(),
    )
    .map_err(|e| anyhow!("Cannot start with site.base_url {}: {}", config.site.base_url, e))
}

fn make_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    }
}

fn detector(user_agent: Option<&str>) -> Box<dyn DeviceDetector> {
    match user_agent {
        Some(ua) => Box::new(UserAgentDetector::new(ua)),
        None => Box::new(FixedDevice(DeviceClass::Desktop)),
    }
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides config
    let base_level = match (verbosity, config) {
        (0, Some(cfg)) => cfg.logging.level_filter(),
        (0, None) => log::LevelFilter::Info,
        (1, _) => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let mut open_error = None;
    let log_file = config.as_ref().and_then(|cfg| cfg.logging.file.clone());
    match log_file {
        Some(file) => match std::fs::OpenOptions::new().create(true).append(true).open(&file) {
            Ok(f) => {
                let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
                // Mirror to the console only when a person is watching
                let is_tty = atty::is(atty::Stream::Stdout);
                builder.format(move |fmt, record| {
                    let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                    let line = format!("{} [{}] {}", ts, record.level(), record.args());
                    if let Ok(mut guard) = write_mutex.lock() {
                        let _ = writeln!(guard, "{}", line);
                    }
                    if is_tty {
                        writeln!(fmt, "{}", line)
                    } else {
                        Ok(())
                    }
                });
            }
            Err(e) => {
                open_error = Some(format!("Cannot open log file {}: {}", file, e));
                builder.format(|fmt, record| {
                    let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                    writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
                });
            }
        },
        None => {
            builder.format(|fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
            });
        }
    }
    let _ = builder.try_init();
    if let Some(msg) = open_error {
        warn!("{}", msg);
    }
}
