//! Wall-clock helpers: the past/upcoming split and start time formats.

use time::{format_description::FormatItem, macros::format_description, OffsetDateTime, PrimitiveDateTime};

static MEDIUM: &[FormatItem<'static>] = format_description!(
    "[weekday repr:short] [month repr:short] [day], [year] [hour repr:12 padding:none]:[minute][period]"
);
static FULL: &[FormatItem<'static>] = format_description!(
    "[weekday] [month repr:long] [day padding:none], [year] at [hour repr:12 padding:none]:[minute][period]"
);
static INPUT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

static ACCEPTED: [&[FormatItem<'static>]; 4] = [
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
];

/// Current UTC time without offset, the way start times are stored.
pub fn now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}

/// A show is upcoming only when it starts strictly after `now`.
pub fn is_upcoming(start: PrimitiveDateTime, now: PrimitiveDateTime) -> bool {
    start > now
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            upcoming: Vec::new(),
        }
    }
}

pub fn partition<T, I, F>(items: I, now: PrimitiveDateTime, start_of: F) -> Partition<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> PrimitiveDateTime,
{
    let mut split = Partition::default();
    for item in items {
        if is_upcoming(start_of(&item), now) {
            split.upcoming.push(item);
        } else {
            split.past.push(item);
        }
    }
    split
}

pub fn parse_start(input: &str) -> Option<PrimitiveDateTime> {
    let input = input.trim();
    ACCEPTED
        .iter()
        .find_map(|format| PrimitiveDateTime::parse(input, format).ok())
}

/// e.g. `Tue May 21, 2019 9:30PM`
pub fn format_medium(at: PrimitiveDateTime) -> String {
    at.format(MEDIUM).unwrap_or_else(|_| at.to_string())
}

/// e.g. `Tuesday May 21, 2019 at 9:30PM`
pub fn format_full(at: PrimitiveDateTime) -> String {
    at.format(FULL).unwrap_or_else(|_| at.to_string())
}

/// The format the show form is prefilled with.
pub fn format_input(at: PrimitiveDateTime) -> String {
    at.format(INPUT).unwrap_or_else(|_| at.to_string())
}
