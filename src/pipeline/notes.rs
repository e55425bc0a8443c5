//! Note name table
//!
//! Maps note names such as `A4` or `CSHARP4` to semitone offsets from A4.
//! Sharps may also be written with `#` (`C#4`). The keyword `pause` denotes
//! silence.

/// Keyword for a silent note
pub const PAUSE_KEYWORD: &str = "pause";

/// Numeric id of a pause, outside any real semitone offset
pub const PAUSE_ID: i32 = i32::MIN;

/// The pitch of a note, or a pause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Semitone offset from A4
    Pitch(i32),
    Pause,
}

impl Tone {
    pub fn is_pause(&self) -> bool {
        matches!(self, Tone::Pause)
    }

    /// Numeric id, with pauses mapped to [`PAUSE_ID`]
    pub fn id(&self) -> i32 {
        match self {
            Tone::Pitch(offset) => *offset,
            Tone::Pause => PAUSE_ID,
        }
    }

    /// Frequency in Hz (equal temperament, A4 = 440 Hz). Pauses have none.
    pub fn frequency(&self) -> Option<f32> {
        match self {
            Tone::Pitch(offset) => Some(frequency(*offset)),
            Tone::Pause => None,
        }
    }
}

/// Frequency of a semitone offset from A4
pub fn frequency(offset: i32) -> f32 {
    440.0 * 2f32.powf(offset as f32 / 12.0)
}

// ASHARP5 and B5 share the value 14 in the reference data; kept as-is.
const NOTE_TABLE: &[(&str, i32)] = &[
    ("A0", -48),
    ("ASHARP0", -47),
    ("B0", -46),
    ("C1", -45),
    ("CSHARP1", -44),
    ("D1", -43),
    ("DSHARP1", -42),
    ("E1", -41),
    ("F1", -40),
    ("FSHARP1", -39),
    ("G1", -38),
    ("GSHARP1", -37),
    ("A1", -36),
    ("ASHARP1", -35),
    ("B1", -34),
    ("C2", -33),
    ("CSHARP2", -32),
    ("D2", -31),
    ("DSHARP2", -30),
    ("E2", -29),
    ("F2", -28),
    ("FSHARP2", -27),
    ("G2", -26),
    ("GSHARP2", -25),
    ("A2", -24),
    ("ASHARP2", -23),
    ("B2", -22),
    ("C3", -21),
    ("CSHARP3", -20),
    ("D3", -19),
    ("DSHARP3", -18),
    ("E3", -17),
    ("F3", -16),
    ("FSHARP3", -15),
    ("G3", -14),
    ("GSHARP3", -13),
    ("A3", -12),
    ("ASHARP3", -11),
    ("B3", -10),
    ("C4", -9),
    ("CSHARP4", -8),
    ("D4", -7),
    ("DSHARP4", -6),
    ("E4", -5),
    ("F4", -4),
    ("FSHARP4", -3),
    ("G4", -2),
    ("GSHARP4", -1),
    ("A4", 0),
    ("ASHARP4", 1),
    ("B4", 2),
    ("C5", 3),
    ("CSHARP5", 4),
    ("D5", 5),
    ("DSHARP5", 6),
    ("E5", 7),
    ("F5", 8),
    ("FSHARP5", 9),
    ("G5", 10),
    ("GSHARP5", 11),
    ("A5", 12),
    ("ASHARP5", 14),
    ("B5", 14),
    ("C6", 15),
];

/// Look up a note name
///
/// Returns `None` for names not in the table.
pub fn lookup(name: &str) -> Option<Tone> {
    if name == PAUSE_KEYWORD {
        return Some(Tone::Pause);
    }

    if name.contains('#') {
        let spelled = name.replace('#', "SHARP");
        return lookup_pitch(&spelled);
    }

    lookup_pitch(name)
}

fn lookup_pitch(name: &str) -> Option<Tone> {
    NOTE_TABLE
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|&(_, offset)| Tone::Pitch(offset))
}

/// All note names in the table, lowest first
pub fn names() -> impl Iterator<Item = &'static str> {
    NOTE_TABLE.iter().map(|&(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_reference_pitch() {
        assert_eq!(lookup("A4"), Some(Tone::Pitch(0)));
        assert_eq!(lookup("A3"), Some(Tone::Pitch(-12)));
        assert_eq!(lookup("A0"), Some(Tone::Pitch(-48)));
        assert_eq!(lookup("C6"), Some(Tone::Pitch(15)));
    }

    #[test]
    fn test_lookup_sharps() {
        assert_eq!(lookup("CSHARP4"), Some(Tone::Pitch(-8)));
        assert_eq!(lookup("C#4"), lookup("CSHARP4"));
        assert_eq!(lookup("F#2"), Some(Tone::Pitch(-27)));
    }

    #[test]
    fn test_lookup_pause() {
        assert_eq!(lookup("pause"), Some(Tone::Pause));
        assert_eq!(Tone::Pause.id(), i32::MIN);
        assert!(Tone::Pause.frequency().is_none());
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(lookup("H4"), None);
        assert_eq!(lookup("a4"), None);
        assert_eq!(lookup("C7"), None);
        assert_eq!(lookup("PAUSE"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_duplicated_entry_is_preserved() {
        assert_eq!(lookup("ASHARP5"), lookup("B5"));
        assert_eq!(lookup("A5"), Some(Tone::Pitch(12)));
    }

    #[test]
    fn test_pause_differs_from_every_pitch() {
        for name in names() {
            let tone = lookup(name).unwrap();
            assert_ne!(tone, Tone::Pause);
            assert_ne!(tone.id(), PAUSE_ID);
        }
    }

    #[test]
    fn test_frequency() {
        assert_eq!(frequency(0), 440.0);
        assert!((frequency(12) - 880.0).abs() < 1e-3);
        assert!((frequency(-12) - 220.0).abs() < 1e-3);
        assert!((frequency(3) - 523.2511).abs() < 1e-2);
    }
}
