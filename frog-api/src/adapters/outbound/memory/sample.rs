use time::macros::date;

use crate::domain::models::{IntensityLevel, NewEntry};

/// A handful of entries to make a fresh local instance look lived in.
pub fn sample_entries() -> Vec<NewEntry> {
    vec![
        NewEntry::new(date!(2016 - 01 - 02), 2, 10.0).with_intensity(IntensityLevel::High),
        NewEntry::new(date!(2016 - 01 - 02), 6, 12.0)
            .with_intensity(IntensityLevel::High)
            .excluded(),
        NewEntry::new(date!(2016 - 01 - 03), 10, 30.0)
            .with_intensity(IntensityLevel::Medium)
            .with_notes("Walked the dog around the lake."),
        NewEntry::new(date!(2016 - 01 - 04), 3, 42.0).with_intensity(IntensityLevel::Low),
        NewEntry::new(date!(2016 - 01 - 05), 2, 15.0).with_intensity(IntensityLevel::Medium),
        NewEntry::new(date!(2016 - 01 - 06), 11, 24.0)
            .with_intensity(IntensityLevel::High)
            .with_notes("New personal best on the bench press!"),
        NewEntry::new(date!(2016 - 01 - 08), 8, 30.0).with_intensity(IntensityLevel::Medium),
    ]
}
