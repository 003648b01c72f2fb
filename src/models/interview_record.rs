use serde::{Deserialize, Serialize};

/// Naive local start time as sent by the backend:
/// `[year, month, day, hour, minute, ...]`. Anything past the minute is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct ScheduledAt {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ScheduledAt {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self { year, month, day, hour, minute }
    }

    pub fn ymd(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }
}

impl TryFrom<Vec<i64>> for ScheduledAt {
    type Error = String;

    fn try_from(parts: Vec<i64>) -> Result<Self, Self::Error> {
        if parts.len() < 5 {
            return Err(format!(
                "scheduledAt needs at least 5 components, got {}",
                parts.len()
            ));
        }
        let year = i32::try_from(parts[0]).map_err(|_| format!("bad year {}", parts[0]))?;
        let component = |idx: usize, name: &str| {
            u32::try_from(parts[idx]).map_err(|_| format!("bad {} {}", name, parts[idx]))
        };
        Ok(Self {
            year,
            month: component(1, "month")?,
            day: component(2, "day")?,
            hour: component(3, "hour")?,
            minute: component(4, "minute")?,
        })
    }
}

impl From<ScheduledAt> for Vec<i64> {
    fn from(at: ScheduledAt) -> Self {
        vec![
            i64::from(at.year),
            i64::from(at.month),
            i64::from(at.day),
            i64::from(at.hour),
            i64::from(at.minute),
        ]
    }
}

/// One feed row: a single candidate booked into an interview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRecord {
    pub interviewee_id: i64,
    #[serde(alias = "applicantName")]
    pub name: String,
    pub scheduled_at: ScheduledAt,
    #[serde(default, alias = "interviewer")]
    pub interviewers: Option<String>,
    #[serde(alias = "interviewLocation")]
    pub room_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<serde_json::Value>,
}
