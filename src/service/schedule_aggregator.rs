use std::collections::HashMap;
use std::sync::Arc;

use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use super::records_provider::InterviewRecordsProvider;
use crate::errors::FetchError;
use crate::models::interview_record::InterviewRecord;
use crate::models::schedule::{Interviewee, ScheduleDate, ScheduleResult, ScheduleSlot};

type SlotKey = (ScheduleDate, String, String);

/// Folds the flat interview feed into per-room, per-time-range slots for a
/// single day. Holds no state between calls.
#[derive(Clone)]
pub struct ScheduleAggregator {
    provider: Arc<dyn InterviewRecordsProvider>,
}

impl ScheduleAggregator {
    pub fn new(provider: Arc<dyn InterviewRecordsProvider>) -> Self {
        Self { provider }
    }

    /// Never fails: every upstream problem comes back as an empty schedule
    /// list with a message.
    pub async fn schedules_for_date(&self, date: &str) -> ScheduleResult {
        let span = info_span!("schedules_for_date", request_id = %Uuid::new_v4(), date);
        let label = ScheduleDate::parse(date)
            .map(|target| target.to_string())
            .unwrap_or_else(|| date.to_string());
        async move {
            match self.try_schedules_for_date(date).await {
                Ok(slots) if slots.is_empty() => {
                    info!("No schedule slots for {}", label);
                    ScheduleResult::empty(format!("No interview schedule for {}", label))
                }
                Ok(slots) => {
                    info!("Built {} schedule slot(s)", slots.len());
                    let message = format!(
                        "Found {} interview schedule(s) for {}",
                        slots.len(),
                        label
                    );
                    ScheduleResult {
                        schedules: slots,
                        message,
                    }
                }
                Err(e) => {
                    warn!(kind = e.kind(), "Failed to load interview records: {}", e);
                    ScheduleResult::empty(format!(
                        "No interview schedule available ({})",
                        e.kind()
                    ))
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Same as [`Self::schedules_for_date`] but keeps the failure visible.
    pub async fn try_schedules_for_date(
        &self,
        date: &str,
    ) -> Result<Vec<ScheduleSlot>, FetchError> {
        let target = ScheduleDate::parse(date);
        if target.is_none() {
            warn!("Unparseable schedule date {:?}; nothing will match", date);
        }
        let records = self.provider.fetch_records().await?;
        Ok(match target {
            Some(target) => aggregate(&records, target),
            None => Vec::new(),
        })
    }
}

/// Groups the records for `date` by (date, room, time range) in first-seen
/// order. The first record of a group fixes its room, time range and
/// interviewers; later records only add interviewees not already present.
pub fn aggregate(records: &[InterviewRecord], date: ScheduleDate) -> Vec<ScheduleSlot> {
    let mut slots: Vec<ScheduleSlot> = Vec::new();
    let mut index: HashMap<SlotKey, usize> = HashMap::new();

    for record in records
        .iter()
        .filter(|record| record.scheduled_at.ymd() == date.ymd())
    {
        let time_range = format_time_range(record.scheduled_at.hour, record.scheduled_at.minute);
        let key: SlotKey = (date, record.room_no.clone(), time_range.clone());

        let slot_idx = *index.entry(key).or_insert_with(|| {
            slots.push(ScheduleSlot {
                date,
                time_range,
                room_name: record.room_no.clone(),
                interviewers: parse_interviewers(record.interviewers.as_deref().unwrap_or("")),
                interviewees: Vec::new(),
            });
            slots.len() - 1
        });

        let slot = &mut slots[slot_idx];
        if !slot.has_interviewee(record.interviewee_id) {
            slot.interviewees.push(Interviewee {
                name: record.name.clone(),
                id: record.interviewee_id,
            });
        }
    }

    slots
}

/// `"HH:MM - HH:MM"` with a fixed one-hour length. The end hour is not
/// wrapped, so 23:30 gives `"23:30 - 24:30"`. Computed in `u64` so any
/// `u32` hour from the feed formats without overflow.
pub fn format_time_range(hour: u32, minute: u32) -> String {
    format!(
        "{:02}:{:02} - {:02}:{:02}",
        hour,
        minute,
        u64::from(hour) + 1,
        minute
    )
}

pub fn parse_interviewers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
