use crate::error::{PipelineError, Result};

/// A categorical cell as it moves through normalization.
///
/// Raw input carries small integer codes; translation replaces them with
/// fixed labels. Keeping the two states tagged means a translator can tell
/// the difference and reject a second translation pass instead of silently
/// re-mapping a label.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryCell {
    Code(i64),
    Label(String),
}

impl CategoryCell {
    /// Returns the untranslated code, or fails if this cell was already
    /// translated.
    pub fn code(&self, field: &'static str) -> Result<i64> {
        match self {
            CategoryCell::Code(code) => Ok(*code),
            CategoryCell::Label(label) => Err(PipelineError::AlreadyTranslated {
                field,
                label: label.clone(),
            }),
        }
    }
}

/// Season of the observation. Coded 1-4 in the raw files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1 => Ok(Season::Spring),
            2 => Ok(Season::Summer),
            3 => Ok(Season::Fall),
            4 => Ok(Season::Winter),
            _ => Err(PipelineError::UnknownCategoryCode {
                field: "season",
                code,
            }),
        }
    }

    pub fn from_cell(cell: &CategoryCell) -> Result<Self> {
        Self::from_code(cell.code("season")?)
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

/// Calendar month. Coded 1-12 in the raw files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1 => Ok(Month::Jan),
            2 => Ok(Month::Feb),
            3 => Ok(Month::Mar),
            4 => Ok(Month::Apr),
            5 => Ok(Month::May),
            6 => Ok(Month::Jun),
            7 => Ok(Month::Jul),
            8 => Ok(Month::Aug),
            9 => Ok(Month::Sep),
            10 => Ok(Month::Oct),
            11 => Ok(Month::Nov),
            12 => Ok(Month::Dec),
            _ => Err(PipelineError::UnknownCategoryCode {
                field: "month",
                code,
            }),
        }
    }

    pub fn from_cell(cell: &CategoryCell) -> Result<Self> {
        Self::from_code(cell.code("month")?)
    }

    pub fn label(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }
}

/// Weather situation bucket. Coded 1-4 in the raw files; label spellings
/// match the upstream dataset documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherSituation {
    Clear,
    Misty,
    LightRainsnow,
    HeavyRainsnow,
}

impl WeatherSituation {
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1 => Ok(WeatherSituation::Clear),
            2 => Ok(WeatherSituation::Misty),
            3 => Ok(WeatherSituation::LightRainsnow),
            4 => Ok(WeatherSituation::HeavyRainsnow),
            _ => Err(PipelineError::UnknownCategoryCode {
                field: "weather_situation",
                code,
            }),
        }
    }

    pub fn from_cell(cell: &CategoryCell) -> Result<Self> {
        Self::from_code(cell.code("weather_situation")?)
    }

    pub fn label(self) -> &'static str {
        match self {
            WeatherSituation::Clear => "Clear",
            WeatherSituation::Misty => "Misty",
            WeatherSituation::LightRainsnow => "Light_rainsnow",
            WeatherSituation::HeavyRainsnow => "Heavy_rainsnow",
        }
    }
}

/// Day of week. Coded 0=Sunday .. 6=Saturday in the raw files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Weekday::Sunday),
            1 => Ok(Weekday::Monday),
            2 => Ok(Weekday::Tuesday),
            3 => Ok(Weekday::Wednesday),
            4 => Ok(Weekday::Thursday),
            5 => Ok(Weekday::Friday),
            6 => Ok(Weekday::Saturday),
            _ => Err(PipelineError::UnknownCategoryCode {
                field: "one_of_week",
                code,
            }),
        }
    }

    pub fn from_cell(cell: &CategoryCell) -> Result<Self> {
        Self::from_code(cell.code("one_of_week")?)
    }

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];
}

/// Observation year. The raw files cover two calendar years, coded 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Year {
    Y2011,
    Y2012,
}

impl Year {
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Year::Y2011),
            1 => Ok(Year::Y2012),
            _ => Err(PipelineError::UnknownCategoryCode { field: "year", code }),
        }
    }

    pub fn from_cell(cell: &CategoryCell) -> Result<Self> {
        Self::from_code(cell.code("year")?)
    }

    pub fn label(self) -> &'static str {
        match self {
            Year::Y2011 => "2011",
            Year::Y2012 => "2012",
        }
    }
}
