use crate::Generator;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use tinylink_core::shortcode::MAX_LENGTH;
use tinylink_core::{CoreError, ShortCode};
use typed_builder::TypedBuilder;

/// Number of shuffled characters kept before filtering.
pub const DEFAULT_PREFIX_LEN: usize = 11;

/// Derives a short code from the characters of the URL itself.
///
/// The URL's code points are permuted with a Fisher-Yates shuffle, the first
/// `prefix_len` of them are kept, and everything that is not an ASCII letter,
/// ASCII digit or Cyrillic letter is stripped. The code can therefore be
/// shorter than `prefix_len`, and different URLs may produce the same code.
///
/// The RNG is seeded once and shared behind a lock. Inject a seeded RNG to
/// get reproducible codes.
#[derive(Debug, TypedBuilder)]
pub struct ShuffleGenerator<R> {
    #[builder(setter(transform = |rng: R| Mutex::new(rng)))]
    rng: Mutex<R>,
    #[builder(default = DEFAULT_PREFIX_LEN)]
    prefix_len: usize,
}

impl ShuffleGenerator<StdRng> {
    /// Creates a generator whose RNG is seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::builder().rng(StdRng::from_os_rng()).build()
    }
}

impl<R: RngCore> ShuffleGenerator<R> {
    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    fn shuffled_prefix(&self, original_url: &str) -> String {
        let mut chars: Vec<char> = original_url.chars().collect();
        chars.shuffle(&mut *self.rng.lock());

        chars
            .into_iter()
            .take(self.prefix_len)
            .filter(|c| ShortCode::is_code_char(*c))
            .collect()
    }
}

impl<R: RngCore + Send + 'static> Generator for ShuffleGenerator<R> {
    fn generate(&self, original_url: &str) -> Result<ShortCode, CoreError> {
        let code = self.shuffled_prefix(original_url);
        if code.is_empty() {
            return Err(CoreError::InvalidShortCode(format!(
                "no letters or digits to build a short code from '{}'",
                original_url
            )));
        }
        ShortCode::new(code)
    }

    fn validate(&self) -> Result<(), CoreError> {
        if !(1..=MAX_LENGTH).contains(&self.prefix_len) {
            return Err(CoreError::InvalidShortCode(format!(
                "prefix length {} is outside 1..={}",
                self.prefix_len, MAX_LENGTH
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> ShuffleGenerator<StdRng> {
        ShuffleGenerator::builder()
            .rng(StdRng::seed_from_u64(seed))
            .build()
    }

    fn sorted(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn code_is_bounded_and_filtered() {
        let generator = seeded(7);

        for _ in 0..100 {
            let code = generator
                .generate("https://example.org/some/long/path?q=1")
                .unwrap();
            let len = code.as_str().chars().count();
            assert!((1..=DEFAULT_PREFIX_LEN).contains(&len));
            assert!(code.as_str().chars().all(ShortCode::is_code_char));
        }
    }

    #[test]
    fn code_uses_only_characters_from_the_url() {
        let generator = seeded(42);
        let url = "https://example.org/path";

        let code = generator.generate(url).unwrap();
        for c in code.as_str().chars() {
            assert!(url.contains(c), "'{}' is not in the url", c);
        }
    }

    #[test]
    fn short_url_keeps_all_its_code_characters() {
        let generator = seeded(3);

        let code = generator.generate("a.b/c").unwrap();
        assert_eq!(sorted(code.as_str()), sorted("abc"));
    }

    #[test]
    fn cyrillic_letters_survive_filtering() {
        let generator = seeded(5);

        let code = generator.generate("пример").unwrap();
        assert_eq!(sorted(code.as_str()), sorted("пример"));
    }

    #[test]
    fn same_seed_gives_same_codes() {
        let first = seeded(99);
        let second = seeded(99);

        for _ in 0..10 {
            let url = "https://example.org/path";
            assert_eq!(first.generate(url).unwrap(), second.generate(url).unwrap());
        }
    }

    #[test]
    fn rng_state_advances_between_calls() {
        let generator = seeded(11);
        let url = "https://example.org/abcdefghijklmnopqrstuvwxyz";

        let codes: std::collections::HashSet<_> =
            (0..20).map(|_| generator.generate(url).unwrap()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn url_without_code_characters_fails() {
        let generator = seeded(1);

        assert!(matches!(
            generator.generate("://///"),
            Err(CoreError::InvalidShortCode(_))
        ));
        assert!(generator.generate("").is_err());
    }

    #[test]
    fn custom_prefix_len() {
        let generator = ShuffleGenerator::builder()
            .rng(StdRng::seed_from_u64(2))
            .prefix_len(4)
            .build();

        assert_eq!(generator.prefix_len(), 4);
        let code = generator.generate("abcdefghijklmnop").unwrap();
        assert_eq!(code.as_str().chars().count(), 4);
    }

    #[test]
    fn prefix_len_must_fit_a_short_code() {
        let with_len = |prefix_len| {
            ShuffleGenerator::builder()
                .rng(StdRng::seed_from_u64(0))
                .prefix_len(prefix_len)
                .build()
        };

        assert!(seeded(0).validate().is_ok());
        assert!(with_len(1).validate().is_ok());
        assert!(with_len(MAX_LENGTH).validate().is_ok());

        assert!(with_len(0).validate().is_err());
        assert!(with_len(MAX_LENGTH + 1).validate().is_err());
    }
}
