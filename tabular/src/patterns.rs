use once_cell::sync::Lazy;
use regex::Regex;

pub static INTEGER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+$").expect("Failed to compile integer regex"));

pub static REAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d?\.\d+|\d+\.\d?)$").expect("Failed to compile real number regex")
});

pub static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}:\d{2}(:\d{2})?$").expect("Failed to compile time regex"));

pub static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Failed to compile date regex"));

pub static DATE_TIME_FRACTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2} )?\d{2}:\d{2}:\d{2}\.\d+$")
        .expect("Failed to compile fractional date-time regex")
});

pub static DATE_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}(:\d{2}(\.\d+)?)?$")
        .expect("Failed to compile date-time regex")
});
