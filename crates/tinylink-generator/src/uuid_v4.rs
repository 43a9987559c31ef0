use crate::Generator;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tinylink_core::{CoreError, ShortCode};
use uuid::Builder;

/// Number of hex digits kept from the UUID.
pub const CODE_LEN: usize = 8;

/// Generates codes from the leading hex digits of a random version 4 UUID.
///
/// Every call draws 16 fresh bytes from the RNG, so codes differ between
/// calls. With 32 bits of entropy per code, collisions are possible but rare.
#[derive(Debug)]
pub struct UuidGenerator<R> {
    rng: Mutex<R>,
}

impl UuidGenerator<StdRng> {
    /// Creates a generator whose RNG is seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: RngCore> UuidGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl<R: RngCore + Send + 'static> Generator for UuidGenerator<R> {
    fn generate(&self, _original_url: &str) -> Result<ShortCode, CoreError> {
        let mut bytes = [0u8; 16];
        self.rng.lock().fill_bytes(&mut bytes);

        let uuid = Builder::from_random_bytes(bytes).into_uuid();
        let mut simple = uuid.simple().to_string();
        simple.truncate(CODE_LEN);

        Ok(ShortCode::new_unchecked(simple))
    }
}
