use std::fmt;
use std::str::FromStr;

use crate::error::ColorMapError;

/// Which renderer draws the sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chip {
    /// Static chart drawn on the CPU.
    Cpu,
    /// Interactive GPU-backed turntable view.
    Gpu,
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chip::Cpu => f.write_str("cpu"),
            Chip::Gpu => f.write_str("gpu"),
        }
    }
}

impl FromStr for Chip {
    type Err = ColorMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpu" => Ok(Chip::Cpu),
            "gpu" => Ok(Chip::Gpu),
            other => Err(ColorMapError::UnsupportedChip(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_display() {
        for chip in [Chip::Cpu, Chip::Gpu] {
            assert_eq!(chip.to_string().parse::<Chip>().unwrap(), chip);
        }
    }

    #[test]
    fn rejects_unknown_chip() {
        assert!(matches!(
            "tpu".parse::<Chip>(),
            Err(ColorMapError::UnsupportedChip(_))
        ));
    }
}
