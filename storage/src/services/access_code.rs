//! Invitation access codes.

use rand::{Rng, thread_rng};

pub const CODE_LENGTH: usize = 6;

// Uppercase letters and digits minus the visually ambiguous I, O, 0, 1.
const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Generate a human-enterable access code. Uniqueness is not guaranteed
/// here; the unique constraint on `invitations.access_code` is the
/// collision guard and callers retry on violation.
pub fn generate_access_code() -> String {
    let mut rng = thread_rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_length() {
        for _ in 0..100 {
            assert_eq!(generate_access_code().len(), CODE_LENGTH);
        }
    }

    #[test]
    fn test_code_avoids_ambiguous_characters() {
        for _ in 0..1000 {
            let code = generate_access_code();
            assert!(
                code.chars().all(|c| !"IO01".contains(c)),
                "ambiguous character in {code}"
            );
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
            );
        }
    }
}
