use clap::Args;

use crate::error::{AirTypeError, AtResult};
use crate::geometry::Rect;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub geometry: GeometryParams,
    #[command(flatten)]
    pub suggest: SuggestParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geometry: GeometryParams::default(),
            suggest: SuggestParams::default(),
        }
    }
}

/// Screen-space dimensions for the key grids. The engine receives these
/// explicitly at construction; nothing reads process-wide configuration.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct GeometryParams {
    #[arg(long, default_value_t = 800.0)]
    pub keyboard_width: f32,

    #[arg(long, default_value_t = 320.0)]
    pub keyboard_height: f32,

    /// Height of the typed-text area above the keyboard band.
    #[arg(long, default_value_t = 150.0)]
    pub text_area_height: f32,

    /// Height of the suggestion bar between text area and keys.
    #[arg(long, default_value_t = 60.0)]
    pub suggestions_height: f32,

    /// Horizontal share of the keyboard band given to the main grid;
    /// the numeric pad takes the rest.
    #[arg(long, default_value_t = 0.75)]
    pub main_grid_fraction: f32,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            keyboard_width: 800.0,
            keyboard_height: 320.0,
            text_area_height: 150.0,
            suggestions_height: 60.0,
            main_grid_fraction: 0.75,
        }
    }
}

impl GeometryParams {
    /// Top edge of the keyboard band (below text area and suggestion bar).
    pub fn band_top(&self) -> f32 {
        self.text_area_height + self.suggestions_height
    }

    /// Bounding box of the main (alphanumeric) grid.
    pub fn main_bounds(&self) -> Rect {
        Rect {
            x: 0.0,
            y: self.band_top(),
            w: self.keyboard_width * self.main_grid_fraction,
            h: self.keyboard_height,
        }
    }

    /// Bounding box of the numeric pad grid.
    pub fn pad_bounds(&self) -> Rect {
        let main_w = self.keyboard_width * self.main_grid_fraction;
        Rect {
            x: main_w,
            y: self.band_top(),
            w: self.keyboard_width - main_w,
            h: self.keyboard_height,
        }
    }

    pub fn validate(&self) -> AtResult<()> {
        if self.keyboard_width <= 0.0 || self.keyboard_height <= 0.0 {
            return Err(AirTypeError::Config(
                "keyboard dimensions must be positive".to_string(),
            ));
        }
        if !(self.main_grid_fraction > 0.0 && self.main_grid_fraction < 1.0) {
            return Err(AirTypeError::Config(format!(
                "main_grid_fraction must be in (0, 1), got {}",
                self.main_grid_fraction
            )));
        }
        Ok(())
    }
}

/// Knobs for the suggestion ranker and corpus filter.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct SuggestParams {
    /// Upper bound on suggestions returned per query.
    #[arg(long, default_value_t = 3)]
    pub max_suggestions: usize,

    /// Corpus words shorter than this are dropped at load time.
    #[arg(long, default_value_t = 3)]
    pub min_word_len: usize,

    /// Corpus words longer than this are dropped at load time.
    #[arg(long, default_value_t = 10)]
    pub max_word_len: usize,
}

impl Default for SuggestParams {
    fn default() -> Self {
        Self {
            max_suggestions: 3,
            min_word_len: 3,
            max_word_len: 10,
        }
    }
}
