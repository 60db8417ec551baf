//! Love Week Card CLI
//!
//! Headless view of the card's scroll engine: builds the standard page
//! against a synthetic layout and reports what the desktop app would do.
//!
//! ## Usage
//!
//! ```bash
//! # Pinned ranges the coordinator installs
//! lovecard plan
//!
//! # Where a scroll gesture ending at these fractions settles
//! lovecard snap 0.15 0.3 0.97
//!
//! # Resolved styles 1200 px down the page
//! lovecard frame 1200 --json
//!
//! # Sections and navbar anchors
//! lovecard content
//!
//! # Effective configuration
//! lovecard --width 390 --height 844 config
//! ```

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use lovecard_core::content::RECIPIENT;
use lovecard_core::layout::PageLayout;
use lovecard_core::sections::{self, Section};
use lovecard_core::{
    logging, nav, AnimationScope, Anchor, CardConfig, CoordinatorOutcome, ScrollSession,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};

/// Love Week Card - scroll engine inspector
#[derive(Parser)]
#[command(name = "lovecard")]
#[command(version = "0.1.0")]
#[command(about = "Love Week Card - scroll engine inspector")]
#[command(
    long_about = "Builds the Love Week page headlessly and prints pinned ranges, snap targets and resolved styles."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: <config dir>/lovecard/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Viewport width in px
    #[arg(long, global = true)]
    width: Option<f64>,

    /// Viewport height in px
    #[arg(long, global = true)]
    height: Option<f64>,

    /// Seed for the floating heart motions
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the coordinator and print the pinned ranges
    Plan {
        /// Print the coordinator outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the snap target for each scroll fraction
    Snap {
        /// Scroll fractions in [0, 1]
        #[arg(required = true, allow_negative_numbers = true)]
        fractions: Vec<f64>,
    },

    /// Print the resolved styles at a scroll offset
    Frame {
        /// Scroll offset in px
        scroll_y: f64,

        /// Seconds of clock time before the frame is sampled
        #[arg(long, default_value_t = 5.0)]
        elapsed: f64,

        /// Only print elements whose key starts with this prefix
        #[arg(long)]
        only: Option<String>,

        /// Print the frame as JSON
        #[arg(long)]
        json: bool,
    },

    /// List sections and navbar anchors
    Content,

    /// Print the effective configuration as JSON
    Config,
}

/// The standard page mounted on a synthetic layout.
struct Page {
    session: ScrollSession,
    _scopes: Vec<AnimationScope>,
    layout: PageLayout,
    outcome: CoordinatorOutcome,
}

fn load_config(cli: &Cli) -> Result<CardConfig> {
    let mut config = CardConfig::load_or_default(cli.config.as_deref())?;
    if let Some(width) = cli.width {
        config.window.width = width;
    }
    if let Some(height) = cli.height {
        config.window.height = height;
    }
    config.validate()?;
    Ok(config)
}

async fn build_page(config: &CardConfig, seed: Option<u64>) -> Result<Page> {
    let session = ScrollSession::new(sections::participants(), config.clone());
    let scopes = {
        let mut rng: Box<dyn RngCore> = match seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::rng()),
        };
        sections::install_page(&session, rng.as_mut())?
    };

    let layout = sections::synthetic_layout(config.window.viewport(), &config.flow_heights);
    debug!(
        document_height = layout.document_height,
        max_scroll = layout.max_scroll(),
        "synthetic layout"
    );
    session.set_layout(layout.clone());

    let outcome = session.coordinate().await;
    info!(observers = session.registry().len(), "page built");
    Ok(Page {
        session,
        _scopes: scopes,
        layout,
        outcome,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(logging::filter_for_verbosity(cli.verbose));

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Plan { json } => {
            let page = build_page(&config, cli.seed).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&page.outcome)?);
                return Ok(());
            }

            let viewport = config.window.viewport();
            println!("Love Week for {}", RECIPIENT);
            println!();
            println!("Viewport: {}x{}", viewport.width, viewport.height);
            println!("Document height: {:.0} px", page.layout.document_height);
            println!("Max scroll: {:.0} px", page.layout.max_scroll());
            println!();
            match &page.outcome {
                CoordinatorOutcome::Installed { ranges, .. } => {
                    println!("Pinned ranges ({}):", ranges.len());
                    for (i, range) in ranges.iter().enumerate() {
                        println!(
                            "  {:>2}  {:.4} .. {:.4}  center {:.4}",
                            i + 1,
                            range.start,
                            range.end,
                            range.center
                        );
                    }
                }
                CoordinatorOutcome::NoPinnedRegions => println!("No pinned regions."),
                CoordinatorOutcome::NoScrollableDistance => println!("Page does not scroll."),
                CoordinatorOutcome::Cancelled => println!("Coordinator cancelled."),
            }
        }

        Commands::Snap { fractions } => {
            let page = build_page(&config, cli.seed).await?;
            let Some(plan) = page.session.registry().snap_plan() else {
                bail!("no snap observer installed ({:?})", page.outcome);
            };
            for v in fractions {
                let target = plan.snap_to(v);
                if target == v {
                    println!("{:.4} -> {:.4} (free)", v, target);
                } else {
                    println!(
                        "{:.4} -> {:.4} ({:.0} px -> {:.0} px)",
                        v,
                        target,
                        v * plan.max_scroll(),
                        target * plan.max_scroll()
                    );
                }
            }
        }

        Commands::Frame {
            scroll_y,
            elapsed,
            only,
            json,
        } => {
            if !scroll_y.is_finite() {
                bail!("scroll offset must be a finite number");
            }
            let page = build_page(&config, cli.seed).await?;
            let mut frame = page.session.frame(scroll_y, elapsed);
            if let Some(prefix) = &only {
                frame.styles.retain(|key, _| key.as_str().starts_with(prefix.as_str()));
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&frame)?);
                return Ok(());
            }

            println!("Frame at {:.0} px ({} elements)", frame.scroll_y, frame.styles.len());
            for (key, style) in &frame.styles {
                println!("  {:<28} {}", key.as_str(), style.to_css());
            }
            if !frame.events.is_empty() {
                println!();
                println!("Events:");
                for event in &frame.events {
                    println!("  {} {:?}", event.label, event.event);
                }
            }
            if nav::is_scrolled(scroll_y, config.nav_threshold) {
                println!();
                println!("Navbar: scrolled");
            }
        }

        Commands::Content => {
            let layout =
                sections::synthetic_layout(config.window.viewport(), &config.flow_heights);
            let vh = config.window.height;

            println!("Sections:");
            for section in Section::all() {
                let pin = section
                    .pin_trigger()
                    .and_then(|t| t.pin_spacing(vh))
                    .map(|spacing| format!("pinned +{:.0} px", spacing))
                    .unwrap_or_else(|| "free".to_string());
                let anchor = section
                    .anchor()
                    .map(|a| format!("#{}", a.id()))
                    .unwrap_or_default();
                println!("  {:<16} {:<18} {}", section.name(), pin, anchor);
            }
            println!();
            println!("Anchors:");
            for anchor in Anchor::ALL {
                let offset = nav::anchor_offset(&layout, anchor)
                    .map(|y| format!("{:.0} px", y))
                    .unwrap_or_else(|| "(unmeasured)".to_string());
                println!("  {:<12} {:<16} {}", anchor.id(), anchor.label(), offset);
            }
        }

        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
