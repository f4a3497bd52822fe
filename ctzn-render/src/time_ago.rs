use crate::api::Time;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

// largest first
const UNITS: [(i64, &str); 6] = [
    (365 * DAY, "year"),
    (30 * DAY, "month"),
    (7 * DAY, "week"),
    (DAY, "day"),
    (HOUR, "hour"),
    (MINUTE, "minute"),
];

/// Describes `then` relative to `now`, eg. "3 hours ago"
pub fn time_ago(then: Time, now: Time) -> String {
    let secs = (now - then).num_seconds();
    for (len, unit) in UNITS {
        let n = secs.abs() / len;
        if n == 0 {
            continue;
        }
        let plural = if n == 1 { "" } else { "s" };
        return match secs > 0 {
            true => format!("{n} {unit}{plural} ago"),
            false => format!("in {n} {unit}{plural}"),
        };
    }
    String::from("just now")
}
