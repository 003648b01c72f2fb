use serde::{Deserialize, Serialize};
use std::fmt;

/// Target date for one aggregation, parsed from `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "[i64; 3]", try_from = "[i64; 3]")]
pub struct ScheduleDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl ScheduleDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Splits on `-` and reads three integers. No calendar validation:
    /// `2025-02-31` parses, it just never matches a real record.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.trim().split('-');
        let year = parts.next()?.trim().parse::<i32>().ok()?;
        let month = parts.next()?.trim().parse::<u32>().ok()?;
        let day = parts.next()?.trim().parse::<u32>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn ymd(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }
}

impl fmt::Display for ScheduleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl From<ScheduleDate> for [i64; 3] {
    fn from(date: ScheduleDate) -> Self {
        [i64::from(date.year), i64::from(date.month), i64::from(date.day)]
    }
}

impl TryFrom<[i64; 3]> for ScheduleDate {
    type Error = String;

    fn try_from([year, month, day]: [i64; 3]) -> Result<Self, Self::Error> {
        Ok(Self {
            year: i32::try_from(year).map_err(|e| e.to_string())?,
            month: u32::try_from(month).map_err(|e| e.to_string())?,
            day: u32::try_from(day).map_err(|e| e.to_string())?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interviewee {
    pub name: String,
    pub id: i64,
}

/// One room at one time range on one day, with everyone booked into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    #[serde(rename = "interviewDate")]
    pub date: ScheduleDate,
    pub time_range: String,
    pub room_name: String,
    pub interviewers: Vec<String>,
    pub interviewees: Vec<Interviewee>,
}

impl ScheduleSlot {
    pub fn has_interviewee(&self, id: i64) -> bool {
        self.interviewees.iter().any(|i| i.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub schedules: Vec<ScheduleSlot>,
    pub message: String,
}

impl ScheduleResult {
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            schedules: Vec::new(),
            message: message.into(),
        }
    }
}
