//! Semester calendar
//!
//! Observing time is allocated per half-year semester, written as a four-digit
//! year followed by a tag: `2024A`, `2024B`. Which semester a date falls in is
//! a property of the observatory, not of this crate, so composites take it as
//! a [`SemesterCalendar`].

/// Maps a calendar date to the code of the semester containing it.
pub trait SemesterCalendar {
    /// The semester code (e.g. `2024B`) for the given date.
    fn semester_for(&self, month: u32, day: u32, year: i32) -> String;
}

impl<F> SemesterCalendar for F
where
    F: Fn(u32, u32, i32) -> String,
{
    fn semester_for(&self, month: u32, day: u32, year: i32) -> String {
        self(month, day, year)
    }
}

/// The default calendar.
///
/// Semester A runs from 1 February to 31 July. Semester B runs from 1 August
/// to 31 January, so January belongs to the previous year's B.
///
/// ```
/// use meridian::semester::{ObservatoryCalendar, SemesterCalendar};
///
/// let calendar = ObservatoryCalendar;
/// assert_eq!(calendar.semester_for(2, 1, 2024), "2024A");
/// assert_eq!(calendar.semester_for(8, 1, 2024), "2024B");
/// assert_eq!(calendar.semester_for(1, 31, 2025), "2024B");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObservatoryCalendar;

impl SemesterCalendar for ObservatoryCalendar {
    fn semester_for(&self, month: u32, _day: u32, year: i32) -> String {
        match month {
            1 => semester_code(year - 1, 'B'),
            2..=7 => semester_code(year, 'A'),
            _ => semester_code(year, 'B'),
        }
    }
}

/// Format a semester code.
pub fn semester_code(year: i32, tag: char) -> String {
    format!("{:04}{}", year, tag)
}
