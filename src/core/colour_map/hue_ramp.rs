use crate::core::data::colour::Colour;
use crate::core::data::hsl::Hsl;
use crate::core::ports::colour_map::ColourMap;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HueRampError {
    ZeroMaxIterations,
    IterationsExceedMax { iterations: u32, max_iterations: u32 },
}

impl fmt::Display for HueRampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iteration count {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for HueRampError {}

/// The full-spectrum colour mapping: escaping points walk the hue wheel
/// and brighten with escape speed, points that reached the iteration
/// bound render black.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HueRampColourMap {
    max_iterations: u32,
}

impl HueRampColourMap {
    pub fn new(max_iterations: u32) -> Result<Self, HueRampError> {
        if max_iterations == 0 {
            return Err(HueRampError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl ColourMap for HueRampColourMap {
    type T = u32;
    type Failure = HueRampError;

    fn map(&self, iterations: u32) -> Result<Colour, HueRampError> {
        if iterations > self.max_iterations {
            return Err(HueRampError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        let t = f64::from(iterations) / f64::from(self.max_iterations);
        let hsl = Hsl {
            hue: t * 360.0,
            saturation: 100.0,
            lightness: 50.0 + t * 50.0,
        };

        Ok(hsl.to_colour())
    }
}
