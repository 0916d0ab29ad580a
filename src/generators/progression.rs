// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord progression generator.
//!
//! Produces an ordered sequence of chord symbols from a parameter set:
//! the scale vocabulary constrains the candidates, a 5% roll may swap
//! in the suspended pool, an independent 5% roll may offer the tritone
//! substitute, and immediate repetition is filtered out.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::music::chord::{suspended_pool, ChordSymbol, SUB_V7};
use crate::music::scale::ScaleType;
use crate::params::{FirstChord, ProgressionParams};

/// Probability of swapping the option set for the suspended pool
const SUSPENDED_PROBABILITY: f64 = 0.05;
/// Probability of offering the tritone substitute
const TRITONE_SUB_PROBABILITY: f64 = 0.05;

/// A generated progression with its parameter snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordProgression {
    /// The generated chord symbols, in order
    pub chords: Vec<ChordSymbol>,
    /// Snapshot of the parameters that produced this progression
    pub params: ProgressionParams,
    /// Randomly generated song name
    pub song_name: String,
}

impl ChordProgression {
    /// Generate a progression from entropy-seeded randomness
    pub fn generate(params: &ProgressionParams) -> Result<Self> {
        let mut rng = StdRng::from_entropy();
        Self::generate_with(params, &mut rng)
    }

    /// Generate a progression using the caller's RNG
    pub fn generate_with<R: Rng>(params: &ProgressionParams, rng: &mut R) -> Result<Self> {
        let chords = generate_progression(params, rng)?;
        Ok(Self {
            chords,
            params: params.clone(),
            song_name: super::name::song_name(rng),
        })
    }
}

/// Generate a chord symbol sequence of exactly `params.length` elements
pub fn generate_progression<R: Rng>(
    params: &ProgressionParams,
    rng: &mut R,
) -> Result<Vec<ChordSymbol>> {
    params.validate()?;

    let vocabulary = params.scale_type.chords();
    let sus_pool = suspended_pool(vocabulary);

    let first = match &params.first_chord {
        FirstChord::Any => vocabulary[rng.gen_range(0..vocabulary.len())].to_string(),
        // Used verbatim; validity for the scale is the caller's concern
        FirstChord::Symbol(symbol) => symbol.clone(),
    };

    let mut progression = Vec::with_capacity(params.length as usize);
    progression.push(first);

    for i in 1..params.length as usize {
        let mut options: Vec<&str> = vocabulary.to_vec();

        if params.allow_borrowed_suspended
            && rng.gen::<f64>() < SUSPENDED_PROBABILITY
            && !sus_pool.is_empty()
        {
            options = sus_pool.clone();
        }

        // Independent roll: both flags gate the tritone substitute,
        // regardless of whether the suspended swap fired
        if params.allow_tritone_sub
            && params.allow_borrowed_suspended
            && rng.gen::<f64>() < TRITONE_SUB_PROBABILITY
        {
            options.push(SUB_V7);
        }

        let previous = progression[i - 1].as_str();
        let filtered: Vec<&str> = options
            .iter()
            .filter(|&&chord| chord != previous)
            .copied()
            .collect();

        // Repetition is tolerated rather than failing when exclusion
        // would leave nothing to pick
        let finals = if filtered.is_empty() { &options } else { &filtered };

        progression.push(finals[rng.gen_range(0..finals.len())].to_string());
    }

    Ok(progression)
}

/// Valid first-chord selections for a scale type
pub fn first_chord_options(scale_type: ScaleType) -> &'static [&'static str] {
    scale_type.chords()
}

/// Re-derive a first-chord selection after a scale change: a selection
/// still valid for the scale is kept (Any always is), anything else
/// resets to the first vocabulary entry
pub fn reconcile_first_chord(scale_type: ScaleType, current: &FirstChord) -> FirstChord {
    match current {
        FirstChord::Any => FirstChord::Any,
        FirstChord::Symbol(symbol) => {
            if scale_type.chords().contains(&symbol.as_str()) {
                current.clone()
            } else {
                FirstChord::Symbol(scale_type.chords()[0].to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::music::chord::semitones;
    use crate::music::Key;

    fn params(scale_type: ScaleType, length: u8) -> ProgressionParams {
        ProgressionParams {
            scale_type,
            length,
            first_chord: FirstChord::Any,
            ..Default::default()
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xC0FFEE)
    }

    #[test]
    fn test_exact_length_all_scales() {
        let mut rng = rng();
        for scale in ScaleType::ALL {
            for length in 2..=16 {
                let chords = generate_progression(&params(scale, length), &mut rng).unwrap();
                assert_eq!(chords.len(), length as usize);
            }
        }
    }

    #[test]
    fn test_all_symbols_from_vocabulary() {
        let mut rng = rng();
        for scale in ScaleType::ALL {
            let chords = generate_progression(&params(scale, 16), &mut rng).unwrap();
            for chord in &chords {
                assert!(
                    scale.chords().contains(&chord.as_str()),
                    "{} not in {} vocabulary",
                    chord,
                    scale
                );
            }
        }
    }

    #[test]
    fn test_no_immediate_repetition() {
        let mut rng = rng();
        let mut p = params(ScaleType::Major, 16);
        p.allow_borrowed_suspended = true;
        p.allow_tritone_sub = true;
        for _ in 0..200 {
            let chords = generate_progression(&p, &mut rng).unwrap();
            for pair in chords.windows(2) {
                assert_ne!(pair[0], pair[1], "adjacent repeat in {:?}", chords);
            }
        }
    }

    #[test]
    fn test_fixed_first_chord() {
        let mut rng = rng();
        let p = ProgressionParams {
            length: 2,
            first_chord: FirstChord::Symbol("I".to_string()),
            ..Default::default()
        };
        for _ in 0..200 {
            let chords = generate_progression(&p, &mut rng).unwrap();
            assert_eq!(chords[0], "I");
            // Second element drawn from the vocabulary minus "I"
            assert!(["ii", "iii", "IV", "V", "vi", "vii°"].contains(&chords[1].as_str()));
        }
    }

    #[test]
    fn test_first_chord_not_validated() {
        let mut rng = rng();
        let p = ProgressionParams {
            length: 4,
            first_chord: FirstChord::Symbol("bVII".to_string()),
            ..Default::default()
        };
        let chords = generate_progression(&p, &mut rng).unwrap();
        assert_eq!(chords[0], "bVII");
    }

    #[test]
    fn test_no_suspended_without_flag() {
        let mut rng = rng();
        let p = params(ScaleType::Major, 16);
        for _ in 0..200 {
            let chords = generate_progression(&p, &mut rng).unwrap();
            assert!(chords.iter().all(|c| !c.contains("sus") && c != SUB_V7));
        }
    }

    #[test]
    fn test_no_tritone_sub_without_borrowed() {
        let mut rng = rng();
        let mut p = params(ScaleType::Major, 16);
        p.allow_tritone_sub = true;
        for _ in 0..200 {
            let chords = generate_progression(&p, &mut rng).unwrap();
            assert!(chords.iter().all(|c| c != SUB_V7));
        }
    }

    #[test]
    fn test_generated_symbols_mapped() {
        // Everything generated for these scales must encode
        let mut rng = rng();
        for scale in [
            ScaleType::Any,
            ScaleType::Major,
            ScaleType::NaturalMinor,
            ScaleType::HarmonicMinor,
        ] {
            let mut p = params(scale, 16);
            p.allow_borrowed_suspended = true;
            p.allow_tritone_sub = true;
            for _ in 0..50 {
                let chords = generate_progression(&p, &mut rng).unwrap();
                for chord in &chords {
                    assert!(semitones(chord).is_some(), "{} unmapped", chord);
                }
            }
        }
    }

    #[test]
    fn test_invalid_length() {
        let mut rng = rng();
        assert!(matches!(
            generate_progression(&params(ScaleType::Major, 1), &mut rng),
            Err(Error::LengthOutOfRange(1))
        ));
        assert!(generate_progression(&params(ScaleType::Major, 17), &mut rng).is_err());
    }

    #[test]
    fn test_progression_snapshot() {
        let p = ProgressionParams {
            key: Key::D,
            length: 8,
            ..Default::default()
        };
        let progression = ChordProgression::generate(&p).unwrap();
        assert_eq!(progression.params, p);
        assert_eq!(progression.chords.len(), 8);
        assert!(!progression.song_name.is_empty());
    }

    #[test]
    fn test_first_chord_options() {
        assert_eq!(first_chord_options(ScaleType::Major).len(), 7);
        assert_eq!(first_chord_options(ScaleType::Any).len(), 16);
    }

    #[test]
    fn test_reconcile_first_chord() {
        // Still valid: kept
        let kept = reconcile_first_chord(ScaleType::Major, &FirstChord::Symbol("V".to_string()));
        assert_eq!(kept, FirstChord::Symbol("V".to_string()));

        // Invalid after scale change: reset to the first vocabulary entry
        let reset = reconcile_first_chord(
            ScaleType::NaturalMinor,
            &FirstChord::Symbol("I".to_string()),
        );
        assert_eq!(reset, FirstChord::Symbol("i".to_string()));

        // Any survives every scale
        assert_eq!(
            reconcile_first_chord(ScaleType::HarmonicMinor, &FirstChord::Any),
            FirstChord::Any
        );
    }
}
