use chrono::{Datelike, Months, NaiveDate};
use fake::Fake;
use fake::faker::internet::{en as internet_en, pt_br as internet_pt_br};
use fake::faker::lorem::en::Word;
use fake::faker::name::{en as name_en, pt_br as name_pt_br};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::errors::GenerationError;
use crate::faker_rs::locales::LocaleKey;

pub const PASSWORD_LENGTH: usize = 10;
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*()_+";

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

const MAX_AGE_YEARS: u32 = 115;
const MIN_TEXT_CHARS: usize = 5;
const SENTENCE_MODE_CHARS: usize = 25;
const MAX_SENTENCE_ATTEMPTS: usize = 100;

/// Seeded fake-data source for one table.
pub struct FakeSource {
    locale: LocaleKey,
    reference_date: NaiveDate,
    rng: ChaCha8Rng,
}

impl FakeSource {
    pub fn new(locale: LocaleKey, reference_date: NaiveDate, rng: ChaCha8Rng) -> Self {
        Self {
            locale,
            reference_date,
            rng,
        }
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Pick one element of a non-empty slice.
    pub fn choice<T: Copy>(&mut self, values: &[T]) -> T {
        values[self.rng.random_range(0..values.len())]
    }

    /// Email on a reserved example domain.
    pub fn email(&mut self) -> String {
        match self.locale {
            LocaleKey::EnUs => internet_en::SafeEmail().fake_with_rng(&mut self.rng),
            LocaleKey::PtBr => internet_pt_br::SafeEmail().fake_with_rng(&mut self.rng),
        }
    }

    /// Password with at least one special, digit, upper and lower character.
    pub fn password(&mut self) -> String {
        let classes = [PASSWORD_SPECIALS, DIGITS, UPPER, LOWER];
        let mut chars: Vec<char> = classes
            .iter()
            .map(|class| self.pick_char(class))
            .collect();

        let pool: String = classes.concat();
        while chars.len() < PASSWORD_LENGTH {
            let ch = self.pick_char(&pool);
            chars.push(ch);
        }

        for idx in (1..chars.len()).rev() {
            let swap = self.rng.random_range(0..=idx);
            chars.swap(idx, swap);
        }
        chars.into_iter().collect()
    }

    pub fn first_name(&mut self) -> String {
        match self.locale {
            LocaleKey::EnUs => name_en::FirstName().fake_with_rng(&mut self.rng),
            LocaleKey::PtBr => name_pt_br::FirstName().fake_with_rng(&mut self.rng),
        }
    }

    pub fn last_name(&mut self) -> String {
        match self.locale {
            LocaleKey::EnUs => name_en::LastName().fake_with_rng(&mut self.rng),
            LocaleKey::PtBr => name_pt_br::LastName().fake_with_rng(&mut self.rng),
        }
    }

    /// Birth date of someone between 0 and 115 years old.
    pub fn date_of_birth(&mut self) -> Result<NaiveDate, GenerationError> {
        let start = self
            .reference_date
            .checked_sub_months(Months::new(MAX_AGE_YEARS * 12))
            .ok_or_else(|| {
                GenerationError::InvalidOptions(format!(
                    "reference date {} is too early for birth dates",
                    self.reference_date
                ))
            })?;
        self.date_between(start, self.reference_date)
    }

    /// Date between January 1 of the current decade and the reference date.
    pub fn date_this_decade(&mut self) -> Result<NaiveDate, GenerationError> {
        let year = self.reference_date.year();
        let start = NaiveDate::from_ymd_opt(year - year.rem_euclid(10), 1, 1).ok_or_else(|| {
            GenerationError::InvalidOptions(format!(
                "no decade start for reference date {}",
                self.reference_date
            ))
        })?;
        self.date_between(start, self.reference_date)
    }

    /// Lorem text of at most `max_chars` characters, ending with a period.
    pub fn text(&mut self, max_chars: usize) -> Result<String, GenerationError> {
        if max_chars < MIN_TEXT_CHARS {
            return Err(GenerationError::InvalidOptions(format!(
                "text needs at least {MIN_TEXT_CHARS} characters, got {max_chars}"
            )));
        }

        if max_chars >= SENTENCE_MODE_CHARS {
            for _ in 0..MAX_SENTENCE_ATTEMPTS {
                let text = self.sentences(max_chars);
                if !text.is_empty() {
                    return Ok(text);
                }
            }
        }

        Ok(self.words_text(max_chars))
    }

    fn sentences(&mut self, max_chars: usize) -> String {
        let mut text = String::new();
        loop {
            let words = self.rng.random_range(3..=9);
            let sentence = self.sentence(words);
            let extra = if text.is_empty() { 0 } else { 1 };
            if text.len() + extra + sentence.len() > max_chars {
                return text;
            }
            if extra == 1 {
                text.push(' ');
            }
            text.push_str(&sentence);
        }
    }

    fn sentence(&mut self, words: usize) -> String {
        let words: Vec<String> = (0..words).map(|_| self.word()).collect();
        format!("{}.", capitalize(&words.join(" ")))
    }

    // Leaves room for the trailing period.
    fn words_text(&mut self, max_chars: usize) -> String {
        let budget = max_chars - 1;
        loop {
            let mut text = String::new();
            loop {
                let word = self.word();
                let extra = if text.is_empty() { 0 } else { 1 };
                if text.len() + extra + word.len() > budget {
                    break;
                }
                if extra == 1 {
                    text.push(' ');
                }
                text.push_str(&word);
            }
            if !text.is_empty() {
                return format!("{}.", capitalize(&text));
            }
        }
    }

    fn word(&mut self) -> String {
        Word().fake_with_rng(&mut self.rng)
    }

    fn pick_char(&mut self, class: &str) -> char {
        let bytes = class.as_bytes();
        bytes[self.rng.random_range(0..bytes.len())] as char
    }

    fn date_between(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<NaiveDate, GenerationError> {
        let span = (end - start).num_days();
        if span < 0 {
            return Err(GenerationError::InvalidOptions(format!(
                "empty date range {start}..={end}"
            )));
        }
        let offset = self.rng.random_range(0..=span);
        start
            .checked_add_days(chrono::Days::new(offset as u64))
            .ok_or_else(|| GenerationError::InvalidOptions(format!("date overflow after {start}")))
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
