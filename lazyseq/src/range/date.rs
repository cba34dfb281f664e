use strum_macros::{Display, EnumString};

use crate::error;
use crate::sequence::{materialize, BoxedIter, Comparator, Cursor, Seq, Sequence};

const SECOND: i64 = 1000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// The calendar field a date range steps through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DateField {
    Millisecond,
    Second,
    Minute,
    #[strum(to_string = "hour", serialize = "hour_of_day")]
    Hour,
    #[strum(
        to_string = "day",
        serialize = "day_of_month",
        serialize = "day_of_year",
        serialize = "day_of_week"
    )]
    Day,
    Month,
    Year,
}

impl DateField {
    /// Look a field up by name.
    pub fn parse(name: &str) -> error::Result<Self> {
        name.parse()
            .map_err(|_| error::Error::InvalidArgument(format!("unknown date field: {name}")))
    }

    /// A rough length of one unit, used to estimate the size of a range.
    ///
    /// Months always count as 31 days, so the estimate never falls short.
    pub fn unit_millis(self) -> i64 {
        match self {
            DateField::Millisecond => 1,
            DateField::Second => SECOND,
            DateField::Minute => MINUTE,
            DateField::Hour => HOUR,
            DateField::Day => DAY,
            DateField::Month => 31 * DAY,
            DateField::Year => 365 * DAY,
        }
    }

    /// Whether every unit has the same length.
    fn is_fixed(self) -> bool {
        !matches!(self, DateField::Month | DateField::Year)
    }

    /// `date` moved by `amount` units, or `None` when out of range.
    ///
    /// Months and years keep the day of the month where possible and clamp
    /// it to the end of shorter months otherwise.
    pub fn shift(self, date: chrono::NaiveDateTime, amount: i64) -> Option<chrono::NaiveDateTime> {
        let delta = match self {
            DateField::Millisecond => chrono::TimeDelta::try_milliseconds(amount)?,
            DateField::Second => chrono::TimeDelta::try_seconds(amount)?,
            DateField::Minute => chrono::TimeDelta::try_minutes(amount)?,
            DateField::Hour => chrono::TimeDelta::try_hours(amount)?,
            DateField::Day => chrono::TimeDelta::try_days(amount)?,
            DateField::Month => return shift_months(date, amount),
            DateField::Year => return shift_months(date, amount.checked_mul(12)?),
        };
        date.checked_add_signed(delta)
    }
}

fn shift_months(date: chrono::NaiveDateTime, months: i64) -> Option<chrono::NaiveDateTime> {
    let magnitude = chrono::Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

/// Dates stepped from `begin` by a number of calendar units.
///
/// `begin` itself is not an element: the first element is one step after it.
/// Iteration stops before passing `end`, which is included when a step lands
/// on it exactly. Every element is computed from `begin`, so stepping by
/// months from the 31st yields the last day of shorter months without
/// drifting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DateRange {
    begin: chrono::NaiveDateTime,
    end: chrono::NaiveDateTime,
    step: i64,
    field: DateField,
}

impl DateRange {
    pub fn new(
        begin: chrono::NaiveDateTime,
        end: chrono::NaiveDateTime,
        step: i64,
        field: DateField,
    ) -> error::Result<Self> {
        error::require(step != 0, "step must not be zero")?;
        if step > 0 {
            error::require(end >= begin, "end must not be before begin if step is positive")?;
        } else {
            error::require(end <= begin, "end must not be after begin if step is negative")?;
        }
        Ok(Self {
            begin,
            end,
            step,
            field,
        })
    }

    /// Start configuring a range. The step defaults to one day.
    pub fn builder(begin: chrono::NaiveDateTime, end: chrono::NaiveDateTime) -> DateRangeBuilder {
        DateRangeBuilder {
            begin,
            end,
            step: 1,
            field: DateField::Day,
        }
    }

    pub fn begin(&self) -> chrono::NaiveDateTime {
        self.begin
    }

    pub fn end(&self) -> chrono::NaiveDateTime {
        self.end
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn field(&self) -> DateField {
        self.field
    }

    /// `begin` moved by `k` steps.
    fn nth(&self, k: i64) -> Option<chrono::NaiveDateTime> {
        self.field.shift(self.begin, self.step.checked_mul(k)?)
    }

    fn passes_end(&self, date: chrono::NaiveDateTime) -> bool {
        if self.step > 0 {
            date > self.end
        } else {
            date < self.end
        }
    }

    fn fits(&self, k: i64) -> bool {
        self.nth(k).is_some_and(|date| !self.passes_end(date))
    }

    /// Whether `date` is `begin` or lies strictly between `begin` and `end`.
    ///
    /// This is a bounds check and does not match iteration: `begin` is
    /// contained but never yielded, `end` is yielded when a step lands on it
    /// but is not contained, and dates between steps are contained too.
    pub fn contains(&self, date: chrono::NaiveDateTime) -> bool {
        if date == self.begin {
            return true;
        }
        if self.end < self.begin {
            self.end < date && date < self.begin
        } else {
            self.begin < date && date < self.end
        }
    }

    pub fn cursor(&self) -> DateRangeIter {
        DateRangeIter {
            range: *self,
            next: 1,
            done: false,
        }
    }

    /// The same elements in the opposite order, when that can be expressed
    /// as a range.
    fn reversed(&self, len: usize) -> Option<Self> {
        if !self.field.is_fixed() {
            return None;
        }
        let len = i64::try_from(len).ok()?;
        Some(Self {
            begin: self.nth(len.checked_add(1)?)?,
            end: self.nth(1)?,
            step: self.step.checked_neg()?,
            field: self.field,
        })
    }

    fn sub_range(&self, start: usize, end: usize) -> Option<Self> {
        if !self.field.is_fixed() {
            return None;
        }
        Some(Self {
            begin: self.nth(i64::try_from(start).ok()?)?,
            end: self.nth(i64::try_from(end).ok()?)?,
            step: self.step,
            field: self.field,
        })
    }
}

impl Sequence<chrono::NaiveDateTime> for DateRange {
    fn len(&self) -> usize {
        if self.begin == self.end {
            return 0;
        }
        let millis = (self.end - self.begin).num_milliseconds();
        let unit = self.field.unit_millis().saturating_mul(self.step);
        let mut guess = (millis / unit).abs();
        // the estimate is off for months and leap years
        while guess > 0 && !self.fits(guess) {
            log::trace!("date range size estimate {} overshoots, lowering", guess);
            guess -= 1;
        }
        while self.fits(guess + 1) {
            log::trace!("date range size estimate {} falls short, raising", guess);
            guess += 1;
        }
        usize::try_from(guess).unwrap_or(usize::MAX)
    }

    fn iter(&self) -> BoxedIter<'_, chrono::NaiveDateTime> {
        Box::new(self.cursor())
    }

    fn duplicate(&self) -> Seq<chrono::NaiveDateTime> {
        Seq::new(*self)
    }

    fn is_empty(&self) -> bool {
        !self.fits(1)
    }

    fn into_iter_owned(self: Box<Self>) -> BoxedIter<'static, chrono::NaiveDateTime> {
        Box::new(self.cursor())
    }

    fn slice(self: Box<Self>, start: usize, end: usize) -> Seq<chrono::NaiveDateTime> {
        let end = end.min(self.len());
        let start = start.min(end);
        if start == end {
            return Seq::default();
        }
        match self.sub_range(start, end) {
            Some(range) => Seq::new(range),
            None => materialize::slice(self.iter(), start, end),
        }
    }

    fn sort_natural(
        self: Box<Self>,
        _compare: Comparator<'_, chrono::NaiveDateTime>,
    ) -> Seq<chrono::NaiveDateTime> {
        if self.step > 0 {
            Seq::from_box(self)
        } else {
            self.reverse()
        }
    }

    fn reverse(self: Box<Self>) -> Seq<chrono::NaiveDateTime> {
        let len = self.len();
        if len == 0 {
            return Seq::from_box(self);
        }
        match self.reversed(len) {
            Some(range) => Seq::new(range),
            None => materialize::reverse(self.iter()),
        }
    }
}

impl From<DateRange> for Seq<chrono::NaiveDateTime> {
    fn from(range: DateRange) -> Self {
        Seq::new(range)
    }
}

/// Configures a [`DateRange`]. Validation happens in `build`.
#[derive(Debug, Clone)]
pub struct DateRangeBuilder {
    begin: chrono::NaiveDateTime,
    end: chrono::NaiveDateTime,
    step: i64,
    field: DateField,
}

impl DateRangeBuilder {
    /// Set the number of units per step. Negative steps walk backward.
    pub fn step(&mut self, step: i64) -> &mut Self {
        self.step = step;
        self
    }

    pub fn field(&mut self, field: DateField) -> &mut Self {
        self.field = field;
        self
    }

    /// Set the field by name, such as `"month"` or `"day_of_year"`.
    pub fn field_name(&mut self, name: &str) -> error::Result<&mut Self> {
        Ok(self.field(DateField::parse(name)?))
    }

    /// Build the [`DateRange`].
    pub fn build(&self) -> error::Result<DateRange> {
        DateRange::new(self.begin, self.end, self.step, self.field)
    }
}

pub struct DateRangeIter {
    range: DateRange,
    next: i64,
    done: bool,
}

impl Iterator for DateRangeIter {
    type Item = chrono::NaiveDateTime;

    fn next(&mut self) -> Option<chrono::NaiveDateTime> {
        if self.done {
            return None;
        }
        match self.range.nth(self.next) {
            Some(date) if !self.range.passes_end(date) => {
                self.next += 1;
                Some(date)
            }
            _ => {
                self.done = true;
                None
            }
        }
    }
}

impl Cursor for DateRangeIter {}
