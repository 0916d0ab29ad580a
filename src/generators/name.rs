// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song name generator.
//!
//! Names are six uppercase letters alternating consonant/vowel,
//! followed by three decimal digits (e.g. "TAXOLU042").

use rand::Rng;

const CONSONANTS: [char; 19] = [
    'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'V', 'W', 'X', 'Z',
];
const VOWELS: [char; 6] = ['A', 'E', 'I', 'O', 'U', 'Y'];

/// Generate a random pronounceable song name
pub fn song_name<R: Rng>(rng: &mut R) -> String {
    let mut name = String::with_capacity(9);
    for _ in 0..3 {
        name.push(CONSONANTS[rng.gen_range(0..CONSONANTS.len())]);
        name.push(VOWELS[rng.gen_range(0..VOWELS.len())]);
    }
    for _ in 0..3 {
        name.push(char::from_digit(rng.gen_range(0..10), 10).unwrap_or('0'));
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_name_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let name = song_name(&mut rng);
            assert_eq!(name.len(), 9);

            let chars: Vec<char> = name.chars().collect();
            for i in [0, 2, 4] {
                assert!(CONSONANTS.contains(&chars[i]), "bad consonant in {}", name);
            }
            for i in [1, 3, 5] {
                assert!(VOWELS.contains(&chars[i]), "bad vowel in {}", name);
            }
            for i in 6..9 {
                assert!(chars[i].is_ascii_digit(), "bad digit in {}", name);
            }
        }
    }

    #[test]
    fn test_names_vary() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = song_name(&mut rng);
        let b = song_name(&mut rng);
        assert_ne!(a, b);
    }
}
