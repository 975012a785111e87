use std::fmt;
use std::str::FromStr;

/// Mode of a key, as reported by key analysis and MusicXML `<mode>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
        }
    }

    /// Name with an initial capital, as used in titles ("Major", "Minor")
    pub fn capitalized(&self) -> &'static str {
        match self {
            Mode::Major => "Major",
            Mode::Minor => "Minor",
        }
    }

    /// Distance in fifths from the tonic to the key signature
    ///
    /// A minor shares C major's signature: three fifths below its tonic.
    pub fn fifths_offset(&self) -> i32 {
        match self {
            Mode::Major => 0,
            Mode::Minor => -3,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "major" | "ionian" => Ok(Mode::Major),
            "minor" | "aeolian" => Ok(Mode::Minor),
            other => Err(format!("Unsupported mode: '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalized() {
        assert_eq!(Mode::Major.capitalized(), "Major");
        assert_eq!(Mode::Minor.capitalized(), "Minor");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Minor".parse::<Mode>().unwrap(), Mode::Minor);
        assert_eq!("ionian".parse::<Mode>().unwrap(), Mode::Major);
        assert!("dorian".parse::<Mode>().is_err());
    }
}
