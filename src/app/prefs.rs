use std::error::Error;
use std::path::PathBuf;

use ggez::graphics::Color;

use crate::{basic::Board, game::Variant};

#[derive(Debug, Display, PartialEq)]
pub enum PrefsError {
    #[display(fmt = "window dimensions must be finite and positive (got {}x{})", _0, _1)]
    Dimensions(f32, f32),
    #[display(fmt = "tick rate must be between 0.01 and 1000 (got {})", _0)]
    Fps(f64),
    #[display(fmt = "move speed must be positive (got {})", _0)]
    MoveSpeed(f32),
    #[display(fmt = "collision margin must be positive (got {})", _0)]
    Margin(f32),
    #[display(fmt = "sprite size must be positive (got {})", _0)]
    SpriteSize(f32),
    #[display(fmt = "the snake must be allowed at least one segment")]
    MaxSegments,
}

impl Error for PrefsError {}

pub struct Prefs {
    pub width: f32,
    pub height: f32,
    /// Game ticks per second
    pub fps: f64,
    /// Distance the head covers per second
    pub move_speed: f32,
    /// Head and food collide when strictly closer than this
    pub margin: f32,
    pub sprite_size: f32,
    pub max_segments: usize,

    pub variant: Variant,
    /// Fixed seed for reproducible food placement
    pub seed: Option<u64>,

    pub resources: PathBuf,
    pub background_color: Color,
    pub font_size: f32,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            width: 800.,
            height: 600.,
            fps: 10.,
            move_speed: 210.,
            margin: 20.,
            sprite_size: 20.,
            max_segments: 1024,

            variant: Variant::Wrapping,
            seed: None,

            resources: PathBuf::from("resources"),
            background_color: Color::new(0.129, 0.129, 0.129, 1.),
            font_size: 18.,
        }
    }
}

// builder
impl Prefs {
    #[must_use]
    pub fn dimensions(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn fps(mut self, fps: f64) -> Self {
        self.fps = fps;
        self
    }

    #[must_use]
    pub fn move_speed(mut self, move_speed: f32) -> Self {
        self.move_speed = move_speed;
        self
    }

    #[must_use]
    pub fn max_segments(mut self, max_segments: usize) -> Self {
        self.max_segments = max_segments;
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn resources(mut self, resources: PathBuf) -> Self {
        self.resources = resources;
        self
    }
}

fn positive(x: f32) -> bool {
    x.is_finite() && x > 0.
}

impl Prefs {
    pub const MIN_FPS: f64 = 0.01;
    pub const MAX_FPS: f64 = 1000.;

    pub fn board(&self) -> Board {
        Board { width: self.width, height: self.height }
    }

    // NaN and infinities fail every check
    pub fn validate(&self) -> Result<(), PrefsError> {
        if !(positive(self.width) && positive(self.height)) {
            return Err(PrefsError::Dimensions(self.width, self.height));
        }
        if !(Self::MIN_FPS..=Self::MAX_FPS).contains(&self.fps) {
            return Err(PrefsError::Fps(self.fps));
        }
        if !positive(self.move_speed) {
            return Err(PrefsError::MoveSpeed(self.move_speed));
        }
        if !positive(self.margin) {
            return Err(PrefsError::Margin(self.margin));
        }
        if !positive(self.sprite_size) {
            return Err(PrefsError::SpriteSize(self.sprite_size));
        }
        if self.max_segments == 0 {
            return Err(PrefsError::MaxSegments);
        }
        Ok(())
    }
}

#[test]
fn test_default_prefs() {
    let prefs = Prefs::default();
    assert_eq!(prefs.validate(), Ok(()));
    assert_eq!(prefs.board(), Board { width: 800., height: 600. });
    assert_eq!(prefs.variant, Variant::Wrapping);
}

#[test]
fn test_invalid_prefs() {
    let cases = [
        (Prefs::default().dimensions(0., 600.), PrefsError::Dimensions(0., 600.)),
        (Prefs::default().fps(0.), PrefsError::Fps(0.)),
        (Prefs::default().fps(1e-20), PrefsError::Fps(1e-20)),
        (Prefs::default().fps(1e12), PrefsError::Fps(1e12)),
        (Prefs::default().fps(f64::INFINITY), PrefsError::Fps(f64::INFINITY)),
        (
            Prefs::default().dimensions(f32::INFINITY, 600.),
            PrefsError::Dimensions(f32::INFINITY, 600.),
        ),
        (Prefs::default().move_speed(-1.), PrefsError::MoveSpeed(-1.)),
        (
            Prefs::default().move_speed(f32::INFINITY),
            PrefsError::MoveSpeed(f32::INFINITY),
        ),
        (Prefs::default().max_segments(0), PrefsError::MaxSegments),
    ];
    for (prefs, expect) in cases {
        assert_eq!(prefs.validate(), Err(expect));
    }

    let nan = Prefs::default().fps(f64::NAN);
    assert!(matches!(nan.validate(), Err(PrefsError::Fps(_))));

    let mut prefs = Prefs::default();
    prefs.margin = f32::NAN;
    assert!(matches!(prefs.validate(), Err(PrefsError::Margin(_))));
    prefs.margin = 20.;
    prefs.sprite_size = f32::INFINITY;
    assert_eq!(prefs.validate(), Err(PrefsError::SpriteSize(f32::INFINITY)));

    for fps in [Prefs::MIN_FPS, Prefs::MAX_FPS] {
        assert_eq!(Prefs::default().fps(fps).validate(), Ok(()));
    }
}
