const ROMAN_NUMERALS: &[(i64, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Clamps the lazily computed `value` into `floor..=ceiling`. When
/// `floor > ceiling` the ceiling wins.
///
/// ```
/// let current_exp = 187;
/// assert_eq!(utils::numeric::clamp(0, 100, || current_exp), 100);
/// ```
pub fn clamp<T: PartialOrd>(floor: T, ceiling: T, value: impl FnOnce() -> T) -> T {
    let value = value();
    let value = if value < floor { floor } else { value };
    if value > ceiling { ceiling } else { value }
}

/// Largest value `roman` writes out; the numerals stop at "MMMCMXCIX".
pub const MAX_ROMAN: f64 = 3999.0;

/// Roman numeral for the integer part of `value`; "N" (nulla) for zero,
/// negative, NaN or infinite values and for anything above `MAX_ROMAN`.
pub fn roman(value: f64) -> String {
    if !(value > 0.0 && value < MAX_ROMAN + 1.0) {
        return "N".to_string();
    }

    let mut number = value as i64;
    let mut output = String::new();
    for (amount, numeral) in ROMAN_NUMERALS {
        while number >= *amount {
            output.push_str(numeral);
            number -= amount;
        }
    }
    output
}

/// Formats a number of seconds as a clock duration.
///
/// With `dynamic` the hours are dropped when zero and the leading field is
/// not padded ("9:41", "1:02:05"); otherwise every field is two digits
/// ("00:09:41").
pub fn hhmmss(seconds: f64, dynamic: bool) -> String {
    let hours = (seconds / 3600.0) as i64;
    let minutes = (seconds / 60.0) as i64 % 60;
    let secs = (seconds % 60.0) as i64;

    if !dynamic {
        return format!("{hours:02}:{minutes:02}:{secs:02}");
    }
    if hours == 0 {
        format!("{minutes}:{secs:02}")
    } else {
        format!("{hours}:{minutes:02}:{secs:02}")
    }
}
