//! Active shift selection.
//!
//! Several shifts may be configured and active at once (typically a standard
//! shift and a Ramadan shift during the fasting month). Attendance is
//! classified against exactly one of them.

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftConfig;

/// Picks the shift attendance should be classified against.
///
/// Among shifts with `is_active` set, a Ramadan shift is preferred; otherwise
/// the first active shift in configuration order is returned.
///
/// # Errors
///
/// Returns [`EngineError::NoActiveShift`] when no shift is active. No default
/// shift is synthesized.
///
/// # Example
///
/// ```
/// use attendance_engine::attendance::select_active_shift;
/// use attendance_engine::models::ShiftConfig;
///
/// let shift = |id: &str, is_ramadan: bool| ShiftConfig {
///     id: id.to_string(),
///     name: id.to_string(),
///     start_time: "09:00".parse().unwrap(),
///     end_time: "17:00".parse().unwrap(),
///     grace_minutes: 15,
///     is_ramadan,
///     is_active: true,
/// };
///
/// let shifts = vec![shift("general", false), shift("ramadan", true)];
/// assert_eq!(select_active_shift(&shifts).unwrap().id, "ramadan");
/// ```
pub fn select_active_shift(shifts: &[ShiftConfig]) -> EngineResult<&ShiftConfig> {
    let mut active = shifts.iter().filter(|s| s.is_active);

    let first = active.next().ok_or(EngineError::NoActiveShift)?;
    if first.is_ramadan {
        return Ok(first);
    }

    Ok(active.find(|s| s.is_ramadan).unwrap_or(first))
}
