//! Headless driver for the vitrine widgets.
//!
//! Runs the carousel or the gallery on a virtual clock (optionally paced
//! against the wall clock) and logs what a viewer would see.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use vitrine::carousel::{CarouselController, CarouselEvent};
use vitrine::content::{GalleryLayout, Palette};
use vitrine::gallery::ScrollDriver;
use vitrine::layout::{BreakpointObserver, Viewport};
use vitrine::options::Options;
use vitrine::schedule::{ManualScheduler, RealtimeRunner, Reactor, Scheduler};
use vitrine::view::{GalleryView, TrackView};

#[derive(Parser)]
#[command(name = "vitrine", version, about = "Run vitrine widgets headlessly")]
struct Cli {
    /// Options preset (TOML). Defaults are used when omitted.
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the palette carousel and log every hero change.
    Simulate(SimulateArgs),
    /// Run the gallery scroll driver for a number of frames.
    Gallery {
        /// Frames to run at 60 Hz.
        #[arg(long, default_value_t = 600)]
        frames: u32,
        /// Gallery layout JSON; the default strip when omitted.
        #[arg(long)]
        layout: Option<PathBuf>,
        /// Send a wheel event on this frame.
        #[arg(long)]
        wheel_at: Option<u32>,
    },
    /// Print the options JSON schema.
    Schema,
    /// List option presets in a directory.
    Presets {
        /// Directory holding `*.toml` presets.
        #[arg(default_value = "assets/presets")]
        dir: PathBuf,
    },
}

#[derive(Args)]
struct SimulateArgs {
    /// Virtual time to run, in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    duration_ms: u64,
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1200.0)]
    width: f32,
    /// Palette JSON; the brand palette when omitted.
    #[arg(long)]
    palette: Option<PathBuf>,
    /// Pace virtual time against the wall clock.
    #[arg(long)]
    realtime: bool,
    /// Wall-clock speed multiplier for --realtime.
    #[arg(long, default_value_t = 1.0)]
    speed: f32,
    /// Hover the focal card at this time, in milliseconds.
    #[arg(long)]
    hover_at_ms: Option<u64>,
    /// How long the scripted hover lasts.
    #[arg(long, default_value_t = 2000)]
    hover_for_ms: u64,
    /// Resize the viewport at this time, in milliseconds.
    #[arg(long)]
    resize_at_ms: Option<u64>,
    /// Viewport width after the scripted resize.
    #[arg(long, default_value_t = 400.0)]
    resize_width: f32,
}

/// Scripted gesture in a simulation run.
#[derive(Debug, Clone, Copy)]
enum Action {
    HoverOn,
    HoverOff,
    Resize(f32),
}

impl SimulateArgs {
    fn script(&self) -> Vec<(Duration, Action)> {
        let mut script = Vec::new();
        if let Some(at) = self.hover_at_ms {
            script.push((Duration::from_millis(at), Action::HoverOn));
            script.push((
                Duration::from_millis(at + self.hover_for_ms),
                Action::HoverOff,
            ));
        }
        if let Some(at) = self.resize_at_ms {
            script.push((
                Duration::from_millis(at),
                Action::Resize(self.resize_width),
            ));
        }
        script.sort_by_key(|&(at, _)| at);
        script
    }
}

/// Carousel wrapper that logs hero changes as they happen.
struct Traced {
    carousel: CarouselController,
    palette: Palette,
    hero: usize,
    slides: u32,
}

impl Reactor for Traced {
    type Event = CarouselEvent;

    fn handle(
        &mut self,
        event: CarouselEvent,
        scheduler: &mut dyn Scheduler<CarouselEvent>,
    ) {
        self.carousel.handle(event, scheduler);
        let hero = self.carousel.hero_index();
        if hero != self.hero {
            self.hero = hero;
            self.slides += 1;
            let name = self
                .palette
                .get_wrapped(hero)
                .map(|s| s.name.replace('\n', " "))
                .unwrap_or_default();
            log::info!(
                "{:>7}ms  hero -> {hero} {name}",
                scheduler.now().as_millis()
            );
        }
    }
}

fn load_options(path: Option<&Path>) -> anyhow::Result<Options> {
    path.map_or_else(
        || Ok(Options::default()),
        |p| {
            Options::load(p)
                .with_context(|| format!("loading options {}", p.display()))
        },
    )
}

fn run(
    sched: &mut ManualScheduler<CarouselEvent>,
    traced: &mut Traced,
    runner: Option<RealtimeRunner>,
    duration: Duration,
) {
    match runner {
        Some(runner) => runner.run_for(sched, traced, duration),
        None => sched.advance(duration, traced),
    }
}

fn simulate(
    options: Options,
    args: &SimulateArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let palette = args.palette.as_deref().map_or_else(
        || Ok(Palette::brand()),
        |p| {
            Palette::load(p)
                .with_context(|| format!("loading palette {}", p.display()))
        },
    )?;
    let runner = args
        .realtime
        .then(|| RealtimeRunner::with_speed(args.speed));
    let duration = Duration::from_millis(args.duration_ms);

    let mut breakpoints = BreakpointObserver::new(options.layout.clone());
    let mut viewport = |width: f32| {
        if let Some(bp) = breakpoints.observe(width) {
            log::info!("breakpoint {bp:?} at {width}px");
        }
        breakpoints
            .current()
            .map(|bp| Viewport::new(width, bp))
    };

    let Some(initial) = viewport(args.width) else {
        anyhow::bail!("could not classify width {}", args.width);
    };
    let carousel = CarouselController::new(
        palette.len(),
        initial,
        options.carousel,
        options.layout,
    );
    log::info!(
        "{} cards per side, hero offset {:.1}px",
        carousel.geometry().side_count,
        carousel.geometry().resting_offset
    );

    let mut sched = ManualScheduler::default();
    let mut traced = Traced {
        carousel,
        palette,
        hero: 0,
        slides: 0,
    };
    traced.carousel.mount(&mut sched);

    for (at, action) in args.script() {
        if at >= duration {
            break;
        }
        let step = at.saturating_sub(sched.now());
        run(&mut sched, &mut traced, runner, step);
        let c = &mut traced.carousel;
        match action {
            Action::HoverOn => {
                let focal = c.focal_position();
                c.pointer_enter(focal, &mut sched);
                log::info!("{:>7}ms  hover on position {focal}", at.as_millis());
            }
            Action::HoverOff => {
                c.pointer_leave(0, &mut sched);
                log::info!("{:>7}ms  hover off", at.as_millis());
            }
            Action::Resize(width) => {
                if let Some(next) = viewport(width) {
                    c.resize(next, &mut sched);
                    log::info!("{:>7}ms  resize to {width}px", at.as_millis());
                }
            }
        }
    }
    let remaining = duration.saturating_sub(sched.now());
    run(&mut sched, &mut traced, runner, remaining);

    let view = TrackView::build(&traced.carousel, &traced.palette, sched.now());
    traced.carousel.dispose(&mut sched);
    writeln!(
        out,
        "{} slides in {}ms, hero {} ({} cards rendered, background {})",
        traced.slides,
        duration.as_millis(),
        traced.hero,
        view.cards.len(),
        view.background.map_or_else(|| "none".to_owned(), |c| c.to_string()),
    )?;
    Ok(())
}

fn gallery(
    options: Options,
    frames: u32,
    layout: Option<&Path>,
    wheel_at: Option<u32>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let layout = layout.map_or_else(
        || Ok(GalleryLayout::default()),
        |p| {
            GalleryLayout::load(p)
                .with_context(|| format!("loading layout {}", p.display()))
        },
    )?;
    let mut sched = ManualScheduler::default();
    let mut driver = ScrollDriver::new(layout.content_width, options.gallery);
    driver.start(&mut sched);

    match wheel_at {
        Some(at) if at < frames => {
            sched.run_frames(at, &mut driver);
            driver.wheel(&mut sched);
            log::info!("wheel at frame {at}, offset {}", driver.offset());
            sched.run_frames(frames - at, &mut driver);
        }
        _ => sched.run_frames(frames, &mut driver),
    }

    let view = GalleryView::build(&layout, &driver);
    driver.dispose(&mut sched);
    writeln!(
        out,
        "offset {:.1} of {} after {frames} frames ({} advanced, {} tiles)",
        view.scroll_left,
        layout.content_width,
        driver.frames_advanced(),
        view.tiles.len(),
    )?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let cli = Cli::parse();
    let options = load_options(cli.options.as_deref())?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Command::Simulate(args) => simulate(options, &args, &mut out),
        Command::Gallery {
            frames,
            layout,
            wheel_at,
        } => gallery(options, frames, layout.as_deref(), wheel_at, &mut out),
        Command::Schema => {
            let schema = serde_json::to_string_pretty(&Options::json_schema())?;
            writeln!(out, "{schema}")?;
            Ok(())
        }
        Command::Presets { dir } => {
            for name in Options::list_presets(&dir) {
                writeln!(out, "{name}")?;
            }
            Ok(())
        }
    }
}
