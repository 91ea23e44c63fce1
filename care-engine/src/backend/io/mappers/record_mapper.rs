//! src/backend/io/mappers/record_mapper.rs

use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use shared::Record as SharedRecord;

use crate::backend::domain::models::Record as DomainRecord;

use super::{DATE_FORMAT, DATE_TIME_FORMAT};

const NAIVE_DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Mapper to convert between shared Record DTOs and domain Record models.
pub struct RecordMapper;

impl RecordMapper {
    /// Converts a shared Record DTO to a domain Record model.
    pub fn to_domain(dto: SharedRecord) -> Result<DomainRecord> {
        let date = Self::parse_date_time(&dto.date)
            .map_err(|e| anyhow!("Failed to parse date of record {}: {}", dto.id, e))?;

        Ok(DomainRecord {
            id: dto.id,
            pet_id: dto.pet_id,
            task_type_id: dto.task_type_id,
            date,
            value: dto.value,
            note: dto.note,
        })
    }

    /// Converts a domain Record model to a shared Record DTO.
    pub fn to_dto(domain: &DomainRecord) -> SharedRecord {
        SharedRecord {
            id: domain.id.clone(),
            pet_id: domain.pet_id.clone(),
            task_type_id: domain.task_type_id.clone(),
            date: domain.date.format(DATE_TIME_FORMAT).to_string(),
            value: domain.value,
            note: domain.note.clone(),
        }
    }

    /// Parse a record timestamp into local wall-clock time.
    ///
    /// Timestamps carrying an offset are converted to the local zone, naive
    /// timestamps are taken as local already, and a bare date means midnight.
    pub fn parse_date_time(input: &str) -> Result<NaiveDateTime> {
        let input = input.trim();

        if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
            return Ok(instant.with_timezone(&Local).naive_local());
        }
        for format in NAIVE_DATE_TIME_FORMATS {
            if let Ok(date_time) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(date_time);
            }
        }
        NaiveDate::parse_from_str(input, DATE_FORMAT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(|| anyhow!("unrecognised timestamp '{}'", input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn create_test_dto(date: &str) -> SharedRecord {
        SharedRecord {
            id: "r1".to_string(),
            pet_id: "p1".to_string(),
            task_type_id: "1".to_string(),
            date: date.to_string(),
            value: Some(4.1),
            note: Some("早上空腹".to_string()),
        }
    }

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_parse_naive_timestamps() {
        assert_eq!(RecordMapper::parse_date_time("2024-01-01T08:30:00").unwrap(), local(2024, 1, 1, 8, 30));
        assert_eq!(RecordMapper::parse_date_time("2024-01-01T08:30:00.250").unwrap().date(), local(2024, 1, 1, 0, 0).date());
        assert_eq!(RecordMapper::parse_date_time("2024-01-01 08:30:00").unwrap(), local(2024, 1, 1, 8, 30));
        assert_eq!(RecordMapper::parse_date_time("2024-01-01T08:30").unwrap(), local(2024, 1, 1, 8, 30));
        assert_eq!(RecordMapper::parse_date_time("2024-01-01").unwrap(), local(2024, 1, 1, 0, 0));
    }

    #[test]
    fn test_parse_offset_timestamp_converts_to_local() {
        let expected = Utc
            .with_ymd_and_hms(2024, 1, 1, 23, 30, 0)
            .unwrap()
            .with_timezone(&Local)
            .naive_local();

        assert_eq!(RecordMapper::parse_date_time("2024-01-01T23:30:00Z").unwrap(), expected);
    }

    #[test]
    fn test_unparseable_date_is_an_error() {
        let err = RecordMapper::to_domain(create_test_dto("yesterday")).unwrap_err();
        assert!(err.to_string().contains("record r1"));
    }

    #[test]
    fn test_record_round_trip() {
        let dto = create_test_dto("2024-01-01T08:30:00");
        let domain = RecordMapper::to_domain(dto.clone()).expect("Failed to map record");

        assert_eq!(domain.date, local(2024, 1, 1, 8, 30));
        assert_eq!(RecordMapper::to_dto(&domain), dto);
    }
}
