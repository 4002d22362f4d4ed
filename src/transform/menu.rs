use std::io::{BufRead, Write};

use crate::foundation::error::{RtvidError, RtvidResult};
use crate::transform::engine::Transform;

/// Brightness delta bounds offered by the menu.
pub const DELTA_RANGE: std::ops::RangeInclusive<i32> = -100..=100;
/// Threshold level bounds offered by the menu.
pub const LEVEL_RANGE: std::ops::RangeInclusive<i32> = 0..=255;
/// Level used when the threshold prompt gets no usable number.
pub const DEFAULT_LEVEL: i32 = 128;

/// Which transform the operator picked, before parameters are attached.
///
/// Anything unrecognized resolves to [`EffectChoice::Invert`]; bad input is never an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EffectChoice {
    #[default]
    Invert,
    Brightness,
    Threshold,
}

impl EffectChoice {
    /// Menu numbering: 1 invert, 2 brightness, 3 threshold.
    pub fn from_menu_number(n: i64) -> Self {
        match n {
            2 => Self::Brightness,
            3 => Self::Threshold,
            _ => Self::Invert,
        }
    }

    /// Accept a menu number or a name, case-insensitively.
    pub fn parse_lenient(raw: &str) -> Self {
        let raw = raw.trim();
        if let Ok(n) = raw.parse::<i64>() {
            return Self::from_menu_number(n);
        }
        match raw.to_ascii_lowercase().replace('-', "_").as_str() {
            "brightness" | "brightness_adjust" => Self::Brightness,
            "threshold" => Self::Threshold,
            _ => Self::Invert,
        }
    }

    /// Attach the parameter this choice needs, clamped into its menu range; the other one is
    /// ignored.
    pub fn into_transform(self, delta: i32, level: i32) -> Transform {
        let transform = match self {
            Self::Invert => Transform::Invert,
            Self::Brightness => Transform::BrightnessAdjust { delta },
            Self::Threshold => Transform::Threshold { level },
        };
        clamp_params(transform)
    }
}

/// Bound `delta` to [`DELTA_RANGE`] and `level` to [`LEVEL_RANGE`].
pub fn clamp_params(transform: Transform) -> Transform {
    match transform {
        Transform::Invert => Transform::Invert,
        Transform::BrightnessAdjust { delta } => Transform::BrightnessAdjust {
            delta: clamp_to(i64::from(delta), &DELTA_RANGE),
        },
        Transform::Threshold { level } => Transform::Threshold {
            level: clamp_to(i64::from(level), &LEVEL_RANGE),
        },
    }
}

/// Run the interactive effect menu over `input`/`output`.
///
/// The chosen parameter is clamped into [`DELTA_RANGE`] or [`LEVEL_RANGE`]. Unparsable answers
/// fall back to Invert, a zero delta, or [`DEFAULT_LEVEL`]. End of input behaves like an
/// unparsable answer.
pub fn prompt_selection<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> RtvidResult<Transform> {
    write!(
        output,
        "Choose Processing Effect:\n1) Invert\n2) Brightness Adjust\n3) Threshold\n> "
    )
    .map_err(prompt_io)?;
    output.flush().map_err(prompt_io)?;

    let choice = read_int(input)?
        .map(EffectChoice::from_menu_number)
        .unwrap_or_default();

    let transform = match choice {
        EffectChoice::Invert => Transform::Invert,
        EffectChoice::Brightness => {
            write!(output, "Enter brightness delta (-100 to +100): ").map_err(prompt_io)?;
            output.flush().map_err(prompt_io)?;
            let delta = read_int(input)?.unwrap_or(0);
            Transform::BrightnessAdjust {
                delta: clamp_to(delta, &DELTA_RANGE),
            }
        }
        EffectChoice::Threshold => {
            write!(output, "Enter threshold (0-255): ").map_err(prompt_io)?;
            output.flush().map_err(prompt_io)?;
            let level = read_int(input)?.unwrap_or(i64::from(DEFAULT_LEVEL));
            Transform::Threshold {
                level: clamp_to(level, &LEVEL_RANGE),
            }
        }
    };

    tracing::debug!(%transform, "effect selected");
    Ok(transform)
}

/// Non-UTF-8 bytes are just another unparsable answer; only I/O failures are errors.
fn read_int<R: BufRead>(input: &mut R) -> RtvidResult<Option<i64>> {
    let mut line = Vec::new();
    input
        .read_until(b'\n', &mut line)
        .map_err(|e| RtvidError::report(format!("read menu input: {e}")))?;
    Ok(String::from_utf8_lossy(&line).trim().parse::<i64>().ok())
}

fn clamp_to(v: i64, range: &std::ops::RangeInclusive<i32>) -> i32 {
    v.clamp(i64::from(*range.start()), i64::from(*range.end())) as i32
}

fn prompt_io(e: std::io::Error) -> RtvidError {
    RtvidError::report(format!("write menu prompt: {e}"))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/menu.rs"]
mod tests;
