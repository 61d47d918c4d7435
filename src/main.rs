#[macro_use]
extern crate derive_more;

use std::path::PathBuf;

use clap::Parser;
use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::run;
use ggez::ContextBuilder;
use log::info;

use crate::app::prefs::Prefs;
use crate::app::App;
use crate::error::{AppError, AppErrorConversion, AppResult};
use crate::game::Variant;

mod app;
mod basic;
mod error;
mod food;
mod game;
mod snake;

#[derive(Parser)]
#[command(name = "trail_snake")]
#[command(version, about = "Snake that drags its body along its own trail")]
struct Cli {
    /// Which version of the rules to play
    #[arg(long, value_enum, default_value_t = Variant::Wrapping)]
    variant: Variant,

    /// Window width
    #[arg(long, default_value_t = 800.)]
    width: f32,

    /// Window height
    #[arg(long, default_value_t = 600.)]
    height: f32,

    /// Game ticks per second
    #[arg(long, default_value_t = 10.)]
    fps: f64,

    /// Distance the head covers per second
    #[arg(long, default_value_t = 210.)]
    speed: f32,

    /// Upper bound on the number of body segments
    #[arg(long, default_value_t = 1024)]
    max_segments: usize,

    /// Seed for food placement, random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Directory containing head.png, body.png and food.png
    #[arg(long, default_value = "resources")]
    resources: PathBuf,
}

impl From<Cli> for Prefs {
    fn from(cli: Cli) -> Self {
        Prefs::default()
            .dimensions(cli.width, cli.height)
            .fps(cli.fps)
            .move_speed(cli.speed)
            .max_segments(cli.max_segments)
            .variant(cli.variant)
            .seed(cli.seed)
            .resources(cli.resources)
    }
}

fn main() -> AppResult {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let prefs = Prefs::from(Cli::parse());
    prefs
        .validate()
        .map_err(AppError::from)
        .with_trace_step("main")?;

    info!("starting {} variant at {} ticks per second", prefs.variant, prefs.fps);

    let ws = WindowSetup::default().title("Trail Snake");
    let wm = WindowMode::default().dimensions(prefs.width, prefs.height);

    let (ctx, event_loop) = ContextBuilder::new("trail_snake", "gorilskij")
        .window_setup(ws)
        .window_mode(wm)
        .add_resource_path(prefs.resources.clone())
        .build()?;

    let app = App::new(&ctx, prefs).with_trace_step("main")?;
    run(ctx, event_loop, app)
}

#[test]
fn test_cli_defaults_match_prefs() {
    let prefs = Prefs::from(Cli::parse_from(["trail_snake"]));
    let defaults = Prefs::default();

    assert_eq!(prefs.board(), defaults.board());
    assert_eq!(prefs.fps, defaults.fps);
    assert_eq!(prefs.move_speed, defaults.move_speed);
    assert_eq!(prefs.max_segments, defaults.max_segments);
    assert_eq!(prefs.variant, defaults.variant);
    assert_eq!(prefs.seed, None);
    assert_eq!(prefs.resources, defaults.resources);
}

#[test]
fn test_cli_variant() {
    let prefs = Prefs::from(Cli::parse_from(["trail_snake", "--variant", "ending", "--seed", "3"]));
    assert_eq!(prefs.variant, Variant::Ending);
    assert_eq!(prefs.seed, Some(3));
}
