use chrono::{DateTime, TimeZone, Utc};
use log::debug;

use crate::{
    error::Result,
    locale::Locale,
    time::TimeUnit::{self, Day, Hour, Minute, Second},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The reference lies before the target
    Past,
    Future,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    JustNow,
    FewSeconds,
    AMinute,
    Minutes(u64),
    AnHour,
    Hours(u64),
    ADay,
    Days(u64),
    OverAYear,
}

#[derive(Debug, Clone, Copy)]
enum Span {
    Fixed(Bucket),
    Counted(TimeUnit, fn(u64) -> Bucket),
}

/// Disjoint inclusive magnitude ranges in milliseconds, in ascending order. The future
/// direction uses the same table on the absolute difference.
const BUCKETS: [(i64, i64, Span); 8] = [
    (0, Second.ms(1), Span::Fixed(Bucket::JustNow)),
    (Second.ms(2), Second.ms(45), Span::Fixed(Bucket::FewSeconds)),
    (Second.ms(46), Second.ms(75), Span::Fixed(Bucket::AMinute)),
    (Second.ms(76), Minute.ms(45), Span::Counted(Minute, Bucket::Minutes)),
    (Minute.ms(46), Minute.ms(75), Span::Fixed(Bucket::AnHour)),
    (Minute.ms(76), Hour.ms(22), Span::Counted(Hour, Bucket::Hours)),
    (Hour.ms(23), Hour.ms(26), Span::Fixed(Bucket::ADay)),
    (Hour.ms(27), Day.ms(360), Span::Counted(Day, Bucket::Days)),
];

impl Bucket {
    /// Classifies a signed difference. The first range holding the magnitude wins;
    /// anything no range holds is `OverAYear`.
    pub fn classify(diff_ms: i64) -> (Direction, Bucket) {
        let direction = if diff_ms >= 0 {
            Direction::Past
        } else {
            Direction::Future
        };
        let magnitude = diff_ms.unsigned_abs().min(i64::MAX as u64) as i64;

        let bucket = BUCKETS
            .iter()
            .find(|(lower, upper, _)| (*lower..=*upper).contains(&magnitude))
            .map_or(Bucket::OverAYear, |(_, _, span)| match span {
                Span::Fixed(bucket) => *bucket,
                Span::Counted(unit, counted) => counted(unit.count_in(magnitude)),
            });

        (direction, bucket)
    }
}

/// Difference `target - reference` in milliseconds, with both instants snapped to whole
/// seconds after a 200ms bias so sub-second jitter cannot move a boundary value.
pub fn rounded_diff_ms<A: TimeZone, B: TimeZone>(
    reference: &DateTime<A>,
    target: &DateTime<B>,
) -> i64 {
    let snap = |ms: i64| ms.saturating_add(200).div_euclid(1000);
    let reference = snap(reference.timestamp_millis());
    let target = snap(target.timestamp_millis());
    target.saturating_sub(reference).saturating_mul(1000)
}

/// Phrases time differences in one locale.
#[derive(Debug, Clone, Default)]
pub struct Humanizer {
    locale: Locale,
}

impl Humanizer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn humanize_diff<A: TimeZone, B: TimeZone>(
        &self,
        reference: &DateTime<A>,
        target: &DateTime<B>,
    ) -> Result<String> {
        self.humanize_ms(rounded_diff_ms(reference, target))
    }

    /// Same as `humanize_diff` with the current time as target.
    pub fn humanize_since<A: TimeZone>(&self, reference: &DateTime<A>) -> Result<String> {
        self.humanize_diff(reference, &Utc::now())
    }

    /// Phrases an already rounded difference.
    pub fn humanize_ms(&self, diff_ms: i64) -> Result<String> {
        let (direction, bucket) = Bucket::classify(diff_ms);
        debug!("diff of {diff_ms}ms classified as {bucket:?} ({direction:?})");
        self.render(direction, bucket)
    }

    pub fn render(&self, direction: Direction, bucket: Bucket) -> Result<String> {
        let phrases = &self.locale.phrases;

        let fragment = match bucket {
            Bucket::JustNow => {
                return Ok(match direction {
                    Direction::Past => phrases.just_now,
                    Direction::Future => phrases.right_now,
                }
                .to_owned());
            }
            Bucket::OverAYear => {
                return Ok(match direction {
                    Direction::Past => phrases.over_a_year_past,
                    Direction::Future => phrases.over_a_year_future,
                }
                .to_owned());
            }
            Bucket::FewSeconds => phrases.few_seconds.to_owned(),
            Bucket::AMinute => phrases.a_minute.to_owned(),
            Bucket::AnHour => phrases.an_hour.to_owned(),
            Bucket::ADay => phrases.a_day.to_owned(),
            Bucket::Minutes(count) => self.locale.pluralize(count, Minute)?,
            Bucket::Hours(count) => self.locale.pluralize(count, Hour)?,
            Bucket::Days(count) => self.locale.pluralize(count, Day)?,
        };

        Ok(match direction {
            Direction::Past => phrases.render_past(&fragment),
            Direction::Future => phrases.render_future(&fragment),
        })
    }
}

/// English phrase for `target - reference`.
pub fn humanize_diff<A: TimeZone, B: TimeZone>(
    reference: &DateTime<A>,
    target: &DateTime<B>,
) -> Result<String> {
    Humanizer::default().humanize_diff(reference, target)
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;
    use crate::{
        error::Error,
        plural::{PluralRule, PluralTable},
    };

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 6, 27, 12, 0, 0).unwrap()
    }

    fn en(delta_ms: i64) -> String {
        let reference = base();
        let target = reference + TimeDelta::milliseconds(delta_ms);
        humanize_diff(&reference, &target).unwrap()
    }

    fn ru(delta_ms: i64) -> String {
        let humanizer = Humanizer::new(Locale::russian());
        let reference = base();
        let target = reference + TimeDelta::milliseconds(delta_ms);
        humanizer.humanize_diff(&reference, &target).unwrap()
    }

    #[test]
    fn test_past_boundaries() {
        assert_eq!(en(0), "just now");
        assert_eq!(en(Second.ms(1)), "just now");
        assert_eq!(en(Second.ms(2)), "a few seconds ago");
        assert_eq!(en(Second.ms(45)), "a few seconds ago");
        assert_eq!(en(Second.ms(46)), "a minute ago");
        assert_eq!(en(Second.ms(75)), "a minute ago");
        assert_eq!(en(Second.ms(76)), "1 minute ago");
        assert_eq!(en(Minute.ms(5)), "5 minutes ago");
        assert_eq!(en(Minute.ms(45)), "45 minutes ago");
        assert_eq!(en(Minute.ms(46)), "an hour ago");
        assert_eq!(en(Minute.ms(75)), "an hour ago");
        assert_eq!(en(Minute.ms(76)), "1 hour ago");
        assert_eq!(en(Hour.ms(22)), "22 hours ago");
        assert_eq!(en(Hour.ms(23)), "a day ago");
        assert_eq!(en(Hour.ms(26)), "a day ago");
        assert_eq!(en(Hour.ms(27)), "1 day ago");
        assert_eq!(en(Day.ms(360)), "360 days ago");
        assert_eq!(en(Day.ms(361)), "more than a year ago");
        assert_eq!(en(Day.ms(400)), "more than a year ago");
    }

    #[test]
    fn test_future_boundaries() {
        assert_eq!(en(-Second.ms(1)), "right now");
        assert_eq!(en(-Second.ms(2)), "in a few seconds");
        assert_eq!(en(-Second.ms(45)), "in a few seconds");
        assert_eq!(en(-Second.ms(46)), "in a minute");
        assert_eq!(en(-Second.ms(75)), "in a minute");
        assert_eq!(en(-Second.ms(76)), "in 1 minute");
        assert_eq!(en(-Minute.ms(5)), "in 5 minutes");
        assert_eq!(en(-Minute.ms(45)), "in 45 minutes");
        assert_eq!(en(-Minute.ms(46)), "in an hour");
        assert_eq!(en(-Minute.ms(75)), "in an hour");
        assert_eq!(en(-Minute.ms(76)), "in 1 hour");
        assert_eq!(en(-Hour.ms(7)), "in 7 hours");
        assert_eq!(en(-Hour.ms(22)), "in 22 hours");
        assert_eq!(en(-Hour.ms(23)), "in a day");
        assert_eq!(en(-Hour.ms(24)), "in a day");
        assert_eq!(en(-Hour.ms(26)), "in a day");
        assert_eq!(en(-Hour.ms(27)), "in 1 day");
        assert_eq!(en(-Day.ms(7)), "in 7 days");
        assert_eq!(en(-Day.ms(360)), "in 360 days");
        assert_eq!(en(-Day.ms(361)), "in more than a year");
        assert_eq!(en(-Day.ms(400)), "in more than a year");
    }

    #[test]
    fn test_values_between_ranges_are_over_a_year() {
        let between = [
            Minute.ms(45) + Second.ms(1),
            Minute.ms(45) + Second.ms(30),
            Minute.ms(75) + Second.ms(1),
            Hour.ms(22) + Second.ms(1),
            Hour.ms(26) + Second.ms(1),
        ];
        for delta in between {
            assert_eq!(en(delta), "more than a year ago", "{delta}ms");
            assert_eq!(en(-delta), "in more than a year", "-{delta}ms");
        }
        assert_eq!(ru(Minute.ms(45) + Second.ms(1)), "более года назад");
    }

    #[test]
    fn test_counted_ranges_use_their_unit() {
        assert_eq!(Bucket::classify(Minute.ms(45)), (Direction::Past, Bucket::Minutes(45)));
        assert_eq!(Bucket::classify(-Hour.ms(22)), (Direction::Future, Bucket::Hours(22)));
        assert_eq!(Bucket::classify(Day.ms(360)), (Direction::Past, Bucket::Days(360)));
    }

    #[test]
    fn test_sub_second_jitter_is_rounded() {
        assert_eq!(en(900), "just now");
        assert_eq!(en(Second.ms(45) + 700), "a few seconds ago");
        assert_eq!(en(-300), "right now");
    }

    #[test]
    fn test_past_and_future_share_count() {
        for delta in [Minute.ms(7), Hour.ms(5), Day.ms(12)] {
            let past = en(delta);
            let future = en(-delta);
            let fragment = past.strip_suffix(" ago").unwrap();
            assert_eq!(future, format!("in {fragment}"));
        }
    }

    #[test]
    fn test_russian_phrases() {
        assert_eq!(ru(0), "только что");
        assert_eq!(ru(Second.ms(30)), "несколько секунд назад");
        assert_eq!(ru(Second.ms(60)), "минуту назад");
        assert_eq!(ru(Minute.ms(2)), "2 минуты назад");
        assert_eq!(ru(Minute.ms(21)), "21 минуту назад");
        assert_eq!(ru(Minute.ms(11)), "11 минут назад");
        assert_eq!(ru(Hour.ms(1)), "час назад");
        assert_eq!(ru(Hour.ms(5)), "5 часов назад");
        assert_eq!(ru(Day.ms(2)), "2 дня назад");
        assert_eq!(ru(Day.ms(400)), "более года назад");
        assert_eq!(ru(-Minute.ms(3)), "через 3 минуты");
        assert_eq!(ru(-Day.ms(1)), "через день");
        assert_eq!(ru(-Day.ms(400)), "более чем через год");
        assert_eq!(ru(-500), "прямо сейчас");
    }

    #[test]
    fn test_missing_word_forms_fail_fast() {
        let locale = Locale {
            rule: PluralRule::English,
            words: PluralTable::new(),
            ..Locale::english()
        };
        let humanizer = Humanizer::new(locale);
        assert_eq!(humanizer.humanize_ms(Second.ms(30)).unwrap(), "a few seconds ago");
        assert_eq!(
            humanizer.humanize_ms(Minute.ms(5)),
            Err(Error::MissingWordForms(Minute))
        );
    }

    #[test]
    fn test_classify_extremes() {
        assert_eq!(
            Bucket::classify(i64::MIN),
            (Direction::Future, Bucket::OverAYear)
        );
        assert_eq!(
            Bucket::classify(i64::MAX),
            (Direction::Past, Bucket::OverAYear)
        );
    }

    #[test]
    fn test_humanize_since() {
        let reference = Utc::now() - TimeDelta::minutes(10);
        assert_eq!(
            Humanizer::default().humanize_since(&reference).unwrap(),
            "10 minutes ago"
        );
    }
}
