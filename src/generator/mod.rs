/// Card layout generation and card-set building
pub mod layout;
/// Pool construction for each content mode
pub mod pool;
/// Seeded randomness and Fisher–Yates shuffling
pub mod shuffle;

pub use layout::{FreeSpace, generate_card, generate_card_set};
pub use pool::{ContentMode, NumberRange, build_pool, parse_word_list};
pub use shuffle::{CardRng, shuffled};
