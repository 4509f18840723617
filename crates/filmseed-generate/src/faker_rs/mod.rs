mod adapter;
mod locales;

pub use adapter::{FakeSource, PASSWORD_LENGTH, PASSWORD_SPECIALS};
pub use locales::LocaleKey;
