//! Weekdays and ordered weekday sets

use crate::error::{Result, ScheduleError};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A day of the week numbered 0-6, with 0 = Sunday
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weekday(u8);

impl Weekday {
    pub const SUNDAY: Weekday = Weekday(0);
    pub const MONDAY: Weekday = Weekday(1);
    pub const TUESDAY: Weekday = Weekday(2);
    pub const WEDNESDAY: Weekday = Weekday(3);
    pub const THURSDAY: Weekday = Weekday(4);
    pub const FRIDAY: Weekday = Weekday(5);
    pub const SATURDAY: Weekday = Weekday(6);

    const SHORT_NAMES: [&'static str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    const NAMES: [&'static str; 7] = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];

    /// Create a weekday from its Sunday-first number
    pub fn new(number: u32) -> Result<Self> {
        if number > 6 {
            return Err(ScheduleError::InvalidWeekday(number));
        }
        Ok(Weekday(number as u8))
    }

    /// Number of days since Sunday (0-6)
    pub fn number(self) -> u8 {
        self.0
    }

    pub fn short_name(self) -> &'static str {
        Self::SHORT_NAMES[self.0 as usize]
    }

    pub fn name(self) -> &'static str {
        Self::NAMES[self.0 as usize]
    }

    /// All seven weekdays, Sunday first
    pub fn all() -> impl Iterator<Item = Weekday> {
        (0..7u8).map(Weekday)
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday(day.num_days_from_sunday() as u8)
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day.0 {
            0 => chrono::Weekday::Sun,
            1 => chrono::Weekday::Mon,
            2 => chrono::Weekday::Tue,
            3 => chrono::Weekday::Wed,
            4 => chrono::Weekday::Thu,
            5 => chrono::Weekday::Fri,
            _ => chrono::Weekday::Sat,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Weekday {
    type Err = ScheduleError;

    /// Accepts the number (`3`), the short name (`wed`) or the full name (`wednesday`)
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();

        if let Ok(number) = normalized.parse::<u32>() {
            return Weekday::new(number);
        }

        Weekday::all()
            .find(|day| {
                day.short_name().to_lowercase() == normalized
                    || day.name().to_lowercase() == normalized
            })
            .ok_or_else(|| ScheduleError::InvalidEdit(format!("Unknown weekday: '{}'", s)))
    }
}

/// A set of weekdays, always iterated in ascending numeric order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DaySet(u8);

impl DaySet {
    const ALL_BITS: u8 = 0b0111_1111;

    pub fn empty() -> Self {
        DaySet(0)
    }

    /// Every day of the week, {0..6}
    pub fn full() -> Self {
        DaySet(Self::ALL_BITS)
    }

    /// Mon, Wed, Fri: the days a habit gets when it first becomes weekly
    pub fn weekly_default() -> Self {
        DaySet::from_weekdays([Weekday::MONDAY, Weekday::WEDNESDAY, Weekday::FRIDAY])
    }

    /// Build a set from day numbers; duplicates collapse
    pub fn from_days<I>(days: I) -> Result<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut set = DaySet::empty();
        for n in days {
            set.insert(Weekday::new(n)?);
        }
        Ok(set)
    }

    pub fn from_weekdays<I>(days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        days.into_iter().fold(DaySet::empty(), DaySet::with)
    }

    fn bit(day: Weekday) -> u8 {
        1 << day.0
    }

    fn with(self, day: Weekday) -> Self {
        DaySet(self.0 | Self::bit(day))
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= Self::bit(day);
    }

    pub fn remove(&mut self, day: Weekday) {
        self.0 &= !Self::bit(day);
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_full(&self) -> bool {
        self.0 == Self::ALL_BITS
    }

    pub fn is_subset(&self, other: &DaySet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn intersection(&self, other: &DaySet) -> DaySet {
        DaySet(self.0 & other.0)
    }

    /// Days in `self` that are not in `other`
    pub fn difference(&self, other: &DaySet) -> DaySet {
        DaySet(self.0 & !other.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::all().filter(move |day| self.contains(*day))
    }

    /// Day numbers in ascending order
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().map(Weekday::number).collect()
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.iter().map(Weekday::short_name).collect();
        f.write_str(&names.join(", "))
    }
}

impl Serialize for DaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_vec().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DaySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let days = Vec::<u32>::deserialize(deserializer)?;
        DaySet::from_days(days).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_range() {
        assert!(Weekday::new(0).is_ok());
        assert!(Weekday::new(6).is_ok());
        match Weekday::new(7) {
            Err(ScheduleError::InvalidWeekday(7)) => {}
            other => panic!("Expected InvalidWeekday, got {:?}", other),
        }
    }

    #[test]
    fn test_weekday_chrono_conversion() {
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::SUNDAY);
        assert_eq!(Weekday::from(chrono::Weekday::Sat), Weekday::SATURDAY);
        for day in Weekday::all() {
            let chrono_day: chrono::Weekday = day.into();
            assert_eq!(Weekday::from(chrono_day), day);
        }
    }

    #[test]
    fn test_weekday_parse() {
        assert_eq!("3".parse::<Weekday>().unwrap(), Weekday::WEDNESDAY);
        assert_eq!("wed".parse::<Weekday>().unwrap(), Weekday::WEDNESDAY);
        assert_eq!("Sunday".parse::<Weekday>().unwrap(), Weekday::SUNDAY);
        assert!("9".parse::<Weekday>().is_err());
        assert!("someday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_dayset_ascending_and_unique() {
        let set = DaySet::from_days([5, 1, 3, 1]).unwrap();
        assert_eq!(set.to_vec(), vec![1, 3, 5]);
        assert_eq!(set.len(), 3);
        assert_eq!(set, DaySet::weekly_default());
    }

    #[test]
    fn test_dayset_rejects_out_of_range() {
        assert!(DaySet::from_days([0, 7]).is_err());
    }

    #[test]
    fn test_dayset_set_operations() {
        let a = DaySet::from_days([3, 5, 6]).unwrap();
        let b = DaySet::from_days([1, 2, 3]).unwrap();
        assert_eq!(a.intersection(&b).to_vec(), vec![3]);
        assert_eq!(a.difference(&b).to_vec(), vec![5, 6]);
        assert!(DaySet::from_days([3]).unwrap().is_subset(&a));
        assert!(!a.is_subset(&b));
        assert!(DaySet::empty().is_subset(&b));
        assert!(DaySet::full().is_full());
    }

    #[test]
    fn test_dayset_display() {
        assert_eq!(DaySet::weekly_default().to_string(), "Mon, Wed, Fri");
        assert_eq!(DaySet::empty().to_string(), "none");
    }

    #[test]
    fn test_dayset_serde() {
        let json = serde_json::to_string(&DaySet::from_days([6, 0]).unwrap()).unwrap();
        assert_eq!(json, "[0,6]");

        let parsed: DaySet = serde_json::from_str("[4,2,2]").unwrap();
        assert_eq!(parsed.to_vec(), vec![2, 4]);

        assert!(serde_json::from_str::<DaySet>("[8]").is_err());
    }
}
