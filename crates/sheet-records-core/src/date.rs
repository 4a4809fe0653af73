//! OLE automation dates
//!
//! Date cells hold a floating point day count: the integer part is days since
//! 1899-12-30 and the fractional part is the time of day. Before the epoch the
//! integer part counts backwards but the fraction still counts forwards, so
//! `-1.25` is 1899-12-29 06:00, not 1899-12-28 18:00.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

const MS_PER_DAY: i64 = 86_400_000;

/// Days from 1899-12-30 to 1970-01-01
const UNIX_EPOCH_SERIAL: i64 = 25_569;

/// Serials must lie strictly between these (0100-01-01 and 9999-12-31 inclusive)
const MIN_SERIAL: f64 = -657_435.0;
const MAX_SERIAL: f64 = 2_958_466.0;

/// Convert a serial day count to a date and time, rounded to the millisecond
///
/// Returns `None` for values outside the representable range, and for NaN or
/// infinities.
pub fn from_ole_date(value: f64) -> Option<NaiveDateTime> {
    if !(value > MIN_SERIAL && value < MAX_SERIAL) {
        return None;
    }

    let half = if value >= 0.0 { 0.5 } else { -0.5 };
    let mut millis = (value * MS_PER_DAY as f64 + half) as i64;
    if millis < 0 {
        millis -= (millis % MS_PER_DAY) * 2;
    }

    NaiveDateTime::default().checked_add_signed(Duration::milliseconds(
        millis - UNIX_EPOCH_SERIAL * MS_PER_DAY,
    ))
}

/// Convert a date and time to its serial day count
pub fn to_ole_date(value: NaiveDateTime) -> f64 {
    let mut millis = value
        .signed_duration_since(NaiveDateTime::default())
        .num_milliseconds()
        + UNIX_EPOCH_SERIAL * MS_PER_DAY;

    if millis < 0 {
        let frac = millis % MS_PER_DAY;
        if frac != 0 {
            millis -= (MS_PER_DAY + frac) * 2;
        }
    }

    millis as f64 / MS_PER_DAY as f64
}

/// Date part of a serial day count
pub fn date_from_ole(value: f64) -> Option<NaiveDate> {
    from_ole_date(value).map(|dt| dt.date())
}

/// Serial day count of midnight on a date
pub fn date_to_ole(value: NaiveDate) -> f64 {
    to_ole_date(NaiveDateTime::new(value, NaiveTime::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(from_ole_date(0.0), Some(dt(1899, 12, 30, 0, 0, 0)));
        assert_eq!(to_ole_date(dt(1899, 12, 30, 0, 0, 0)), 0.0);
        assert_eq!(from_ole_date(25_569.0), Some(dt(1970, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn test_known_dates() {
        assert_eq!(date_to_ole(NaiveDate::from_ymd_opt(2021, 6, 8).unwrap()), 44_355.0);
        assert_eq!(
            date_from_ole(44_355.0),
            NaiveDate::from_ymd_opt(2021, 6, 8)
        );
        assert_eq!(from_ole_date(44_355.75), Some(dt(2021, 6, 8, 18, 0, 0)));
        assert_eq!(to_ole_date(dt(2021, 6, 8, 18, 0, 0)), 44_355.75);
    }

    #[test]
    fn test_negative_serial_keeps_forward_time() {
        assert_eq!(from_ole_date(-1.25), Some(dt(1899, 12, 29, 6, 0, 0)));
        assert_eq!(to_ole_date(dt(1899, 12, 29, 6, 0, 0)), -1.25);
        assert_eq!(from_ole_date(-1.0), Some(dt(1899, 12, 29, 0, 0, 0)));
        assert_eq!(to_ole_date(dt(1899, 12, 29, 0, 0, 0)), -1.0);
    }

    #[test]
    fn test_rounds_to_millisecond() {
        let one_ms = 1.0 / MS_PER_DAY as f64;
        let parsed = from_ole_date(one_ms * 0.4).unwrap();
        assert_eq!(parsed, dt(1899, 12, 30, 0, 0, 0));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(from_ole_date(MAX_SERIAL), None);
        assert_eq!(from_ole_date(MIN_SERIAL), None);
        assert_eq!(from_ole_date(f64::NAN), None);
        assert_eq!(from_ole_date(f64::INFINITY), None);
        assert!(from_ole_date(MAX_SERIAL - 1.0).is_some());
    }
}
