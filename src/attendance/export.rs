//! CSV export of a day's attendance.

use std::collections::HashMap;
use std::io;

use chrono::NaiveDateTime;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Employee};

/// Header row of the attendance export.
pub const EXPORT_HEADER: [&str; 6] = [
    "Date",
    "Employee",
    "Department",
    "Status",
    "Check In",
    "Check Out",
];

const MISSING: &str = "-";

fn format_time(time: Option<NaiveDateTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// Writes attendance records as CSV.
///
/// Employees are looked up by id to show their name and department; an
/// unknown employee is shown by id with no department. Missing times and
/// departments are written as `-`.
///
/// # Example
///
/// ```
/// use attendance_engine::attendance::export_day_sheet_csv;
/// use attendance_engine::models::{AttendanceRecord, AttendanceStatus, Employee};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let records = vec![AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date,
///     status: AttendanceStatus::Absent,
///     check_in: None,
///     check_out: None,
///     shift_id: None,
///     remarks: None,
/// }];
/// let employees = vec![Employee {
///     id: "emp_001".to_string(),
///     first_name: "Amina".to_string(),
///     last_name: "Rahman".to_string(),
///     department: Some("Finance".to_string()),
/// }];
///
/// let mut out = Vec::new();
/// export_day_sheet_csv(&records, &employees, &mut out).unwrap();
/// let csv = String::from_utf8(out).unwrap();
/// assert_eq!(
///     csv,
///     "Date,Employee,Department,Status,Check In,Check Out\n\
///      2026-03-02,Amina Rahman,Finance,absent,-,-\n"
/// );
/// ```
pub fn export_day_sheet_csv<W: io::Write>(
    records: &[AttendanceRecord],
    employees: &[Employee],
    writer: W,
) -> EngineResult<()> {
    let by_id: HashMap<&str, &Employee> = employees.iter().map(|e| (e.id.as_str(), e)).collect();

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(EXPORT_HEADER)?;

    for record in records {
        let employee = by_id.get(record.employee_id.as_str());
        let name = employee
            .map(|e| e.full_name())
            .unwrap_or_else(|| record.employee_id.clone());
        let department = employee
            .and_then(|e| e.department.clone())
            .unwrap_or_else(|| MISSING.to_string());

        csv.write_record([
            record.date.to_string(),
            name,
            department,
            record.status.to_string(),
            format_time(record.check_in),
            format_time(record.check_out),
        ])?;
    }

    csv.flush().map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })?;
    Ok(())
}
