use crate::categories::Weekday;

/// Day-type classification derived from the translated weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCategory {
    Weekday,
    Weekend,
}

impl DayCategory {
    /// Display label; the weekday class keeps the upstream "weekdays"
    /// spelling.
    pub fn label(self) -> &'static str {
        match self {
            DayCategory::Weekday => "weekdays",
            DayCategory::Weekend => "weekend",
        }
    }
}

/// Humidity band derived from the rescaled humidity percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HumidityBand {
    TooDry,
    Ideal,
    TooHumid,
}

impl HumidityBand {
    pub fn label(self) -> &'static str {
        match self {
            HumidityBand::TooDry => "too_dry",
            HumidityBand::Ideal => "ideal",
            HumidityBand::TooHumid => "too_humid",
        }
    }
}

/// Rescales a raw humidity ratio in [0, 1] to a percentage in [0, 100].
///
/// Must run before [`classify_humidity`]; the band thresholds are defined on
/// the percentage scale.
pub fn scale_humidity(ratio: f64) -> f64 {
    ratio * 100.0
}

/// Classifies a day as weekend or weekday.
///
/// Weekend iff the day is Saturday or Sunday. Operates on the translated
/// weekday, never the raw code, so weekday translation must run first.
pub fn classify_day(day: Weekday) -> DayCategory {
    match day {
        Weekday::Saturday | Weekday::Sunday => DayCategory::Weekend,
        _ => DayCategory::Weekday,
    }
}

/// Classifies a humidity percentage into a band.
///
/// Thresholds: `< 45` too dry, `45 <= v < 65` ideal, `>= 65` too humid. The
/// input must already be on the 0-100 percentage scale.
pub fn classify_humidity(percent: f64) -> HumidityBand {
    if percent < 45.0 {
        HumidityBand::TooDry
    } else if percent < 65.0 {
        HumidityBand::Ideal
    } else {
        HumidityBand::TooHumid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_day_is_total_over_all_weekdays() {
        for day in Weekday::ALL {
            let expected = match day {
                Weekday::Saturday | Weekday::Sunday => DayCategory::Weekend,
                _ => DayCategory::Weekday,
            };
            assert_eq!(classify_day(day), expected, "{}", day.label());
        }
    }

    #[test]
    fn test_exactly_saturday_and_sunday_are_weekend() {
        let weekend: Vec<Weekday> = Weekday::ALL
            .into_iter()
            .filter(|d| classify_day(*d) == DayCategory::Weekend)
            .collect();
        assert_eq!(weekend, vec![Weekday::Sunday, Weekday::Saturday]);
    }

    #[test]
    fn test_humidity_band_boundaries() {
        assert_eq!(classify_humidity(44.9), HumidityBand::TooDry);
        assert_eq!(classify_humidity(45.0), HumidityBand::Ideal);
        assert_eq!(classify_humidity(64.9), HumidityBand::Ideal);
        assert_eq!(classify_humidity(65.0), HumidityBand::TooHumid);
    }

    #[test]
    fn test_humidity_rescale_round_trip() {
        let percent = scale_humidity(0.65);
        assert_eq!(percent, 65.0);
        assert_eq!(classify_humidity(percent), HumidityBand::TooHumid);
    }

    #[test]
    fn test_day_category_labels() {
        assert_eq!(DayCategory::Weekday.label(), "weekdays");
        assert_eq!(DayCategory::Weekend.label(), "weekend");
    }
}
