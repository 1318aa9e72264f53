//! Letter mapping, digit reduction and the vowel/consonant split.

use crate::domain::model::{CharValue, LifePath, NameNumbers, NumerologySystem, Reduction, Settings};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// A..Z
const PYTHAGOREAN_VALUES: [u32; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 2, 3, 4, 5, 6, 7, 8,
];

/// A..Z
const CHALDEAN_VALUES: [u32; 26] = [
    1, 2, 3, 4, 5, 8, 3, 5, 1, 1, 2, 3, 4, 5, 7, 8, 1, 2, 3, 4, 6, 6, 6, 5, 1, 7,
];

pub const MASTER_NUMBERS: [u64; 3] = [11, 22, 33];

const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("static pattern compiles"));

/// 去除非英數字元並轉成大寫
pub fn clean_name(name: &str) -> String {
    NON_ALPHANUMERIC.replace_all(name, "").to_ascii_uppercase()
}

pub fn system_value(c: char, system: NumerologySystem) -> u32 {
    if !c.is_ascii_uppercase() {
        return 0;
    }
    let idx = (c as u8 - b'A') as usize;
    match system {
        NumerologySystem::Pythagorean => PYTHAGOREAN_VALUES[idx],
        NumerologySystem::Chaldean => CHALDEAN_VALUES[idx],
    }
}

/// Mapped value of one cleaned character. Digits count as themselves only when
/// `digits_as_numbers` is set; everything else falls back to 0.
pub fn letter_value(c: char, system: NumerologySystem, digits_as_numbers: bool) -> u32 {
    match c.to_digit(10) {
        Some(d) if digits_as_numbers => d,
        Some(_) => 0,
        None => system_value(c, system),
    }
}

pub fn alphabet_position(c: char) -> u32 {
    if let Some(d) = c.to_digit(10) {
        return d;
    }
    if c.is_ascii_uppercase() {
        (c as u8 - b'A' + 1) as u32
    } else {
        0
    }
}

pub fn breakdown(name: &str, system: NumerologySystem, digits_as_numbers: bool) -> Vec<CharValue> {
    clean_name(name)
        .chars()
        .map(|c| CharValue {
            character: c,
            value: letter_value(c, system, digits_as_numbers),
        })
        .collect()
}

pub fn is_master_number(n: u64) -> bool {
    MASTER_NUMBERS.contains(&n)
}

fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeated digit summing until a single digit remains, or a master number
/// when `keep_master` is set. `steps` always starts with `n`.
pub fn digital_root(n: u64, keep_master: bool) -> (u64, Vec<u64>) {
    let mut n = n;
    let mut steps = vec![n];
    loop {
        if keep_master && is_master_number(n) {
            break;
        }
        if n < 10 {
            break;
        }
        n = digit_sum(n);
        steps.push(n);
    }
    (n, steps)
}

pub fn reduce_number(n: u64, keep_master: bool) -> Reduction {
    let (value, steps) = digital_root(n, keep_master);
    Reduction {
        total: n,
        value,
        steps,
    }
}

pub fn reduce_list(values: &[u32], keep_master: bool) -> Reduction {
    let total: u64 = values.iter().map(|&v| u64::from(v)).sum();
    reduce_number(total, keep_master)
}

pub fn is_vowel(c: char, y_as_vowel: bool) -> bool {
    if c.is_ascii_digit() {
        return false;
    }
    if c == 'Y' {
        return y_as_vowel;
    }
    VOWELS.contains(&c)
}

/// 分成母音與子音，數字兩邊都不算
pub fn split_breakdown(breakdown: &[CharValue], y_as_vowel: bool) -> (Vec<CharValue>, Vec<CharValue>) {
    breakdown
        .iter()
        .copied()
        .filter(|cv| !cv.character.is_ascii_digit())
        .partition(|cv| is_vowel(cv.character, y_as_vowel))
}

fn values_of(chars: &[CharValue]) -> Vec<u32> {
    chars.iter().map(|cv| cv.value).collect()
}

pub fn compute_numerology(name: &str, settings: &Settings) -> NameNumbers {
    let breakdown = breakdown(name, settings.system, settings.digits_as_numbers);
    let (vowels, consonants) = split_breakdown(&breakdown, settings.y_as_vowel);

    let expression = reduce_list(&values_of(&breakdown), settings.keep_master);
    let soul_urge = reduce_list(&values_of(&vowels), settings.keep_master);
    let personality = reduce_list(&values_of(&consonants), settings.keep_master);

    tracing::debug!(
        "Computed name numbers: expression={}, soul_urge={}, personality={}",
        expression.value,
        soul_urge.value,
        personality.value
    );

    NameNumbers {
        cleaned_name: clean_name(name),
        breakdown,
        vowels,
        consonants,
        expression,
        soul_urge,
        personality,
    }
}

pub fn compute_life_path(date: NaiveDate, keep_master: bool) -> LifePath {
    let year = date.year().unsigned_abs();
    let month = date.month();
    let day = date.day();

    let (year_reduced, year_steps) = digital_root(u64::from(year), keep_master);
    let (month_reduced, month_steps) = digital_root(u64::from(month), keep_master);
    let (day_reduced, day_steps) = digital_root(u64::from(day), keep_master);

    let sum_total = year_reduced + month_reduced + day_reduced;
    let (final_number, final_steps) = digital_root(sum_total, keep_master);

    LifePath {
        year,
        month,
        day,
        year_reduced,
        year_steps,
        month_reduced,
        month_steps,
        day_reduced,
        day_steps,
        sum_total,
        final_number,
        final_steps,
    }
}
