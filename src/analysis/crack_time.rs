//! Crack-time estimation from character-set entropy.

use super::rules::{has_digit, has_lowercase, has_special, has_uppercase};

pub const DEFAULT_GUESSES_PER_SECOND: f64 = 1e9;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;
const DECADE: f64 = 315_360_000.0;

/// Bucketed estimate of how long an offline brute force would take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrackTime {
    Instant,
    Seconds,
    Minutes,
    Hours,
    Days,
    Years,
    Centuries,
}

impl CrackTime {
    pub fn label(&self) -> &'static str {
        match self {
            CrackTime::Instant => "Instant 💀",
            CrackTime::Seconds => "Seconds 😬",
            CrackTime::Minutes => "Minutes 😑",
            CrackTime::Hours => "Hours 👀",
            CrackTime::Days => "Days 😎",
            CrackTime::Years => "Years 😈",
            CrackTime::Centuries => "Centuries 🧠",
        }
    }

    fn from_seconds(seconds: f64) -> Self {
        let scale = [
            (MINUTE, CrackTime::Seconds),
            (HOUR, CrackTime::Minutes),
            (DAY, CrackTime::Hours),
            (YEAR, CrackTime::Days),
            (DECADE, CrackTime::Years),
        ];

        scale
            .iter()
            .find(|(limit, _)| seconds < *limit)
            .map(|(_, bucket)| *bucket)
            .unwrap_or(CrackTime::Centuries)
    }
}

/// Size of the alphabet an attacker would have to search.
fn charset_size(password: &str) -> u32 {
    let mut charset = 0;
    if has_lowercase(password) {
        charset += 26;
    }
    if has_uppercase(password) {
        charset += 26;
    }
    if has_digit(password) {
        charset += 10;
    }
    if has_special(password) {
        charset += 32;
    }
    charset
}

/// Entropy in bits, 0 when the password has no recognisable characters.
pub fn entropy_bits(password: &str) -> f64 {
    let charset = charset_size(password);
    if charset == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * f64::from(charset).log2()
}

pub fn estimate_crack_time(password: &str, guesses_per_second: f64) -> CrackTime {
    let entropy = entropy_bits(password);
    if entropy == 0.0 {
        return CrackTime::Instant;
    }

    // Overflows to infinity for long passwords, which lands in Centuries.
    let seconds = entropy.exp2() / guesses_per_second;
    CrackTime::from_seconds(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(password: &str) -> CrackTime {
        estimate_crack_time(password, DEFAULT_GUESSES_PER_SECOND)
    }

    #[test]
    fn test_empty_password_is_instant() {
        assert_eq!(estimate(""), CrackTime::Instant);
        assert_eq!(entropy_bits(""), 0.0);
    }

    #[test]
    fn test_short_lowercase_is_seconds() {
        assert_eq!(estimate("abc"), CrackTime::Seconds);
    }

    #[test]
    fn test_buckets_grow_with_length() {
        // 26^n / 1e9 seconds
        assert_eq!(estimate("abcdefgh"), CrackTime::Minutes);
        assert_eq!(estimate("abcdefghij"), CrackTime::Days);
        assert_eq!(estimate("abcdefghijkl"), CrackTime::Years);
        assert_eq!(estimate("abcdefghijklm"), CrackTime::Centuries);
    }

    #[test]
    fn test_digits_only() {
        // 10^13 / 1e9 = 10_000 seconds
        assert_eq!(estimate("1234567890123"), CrackTime::Hours);
    }

    #[test]
    fn test_unicode_digits_widen_charset() {
        // lowercase 26 + digits 10 + special 32
        assert_eq!(charset_size("abc١٢٣"), 68);
        assert_eq!(entropy_bits("abc١٢٣"), 6.0 * 68f64.log2());
    }

    #[test]
    fn test_very_long_password_does_not_overflow() {
        let long = "aB3$".repeat(200);
        assert_eq!(estimate(&long), CrackTime::Centuries);
    }

    #[test]
    fn test_guess_rate_shifts_bucket() {
        assert_eq!(estimate_crack_time("abcdefgh", 1e12), CrackTime::Seconds);
    }

    #[test]
    fn test_labels() {
        assert_eq!(CrackTime::Instant.label(), "Instant 💀");
        assert_eq!(CrackTime::Centuries.label(), "Centuries 🧠");
    }
}
