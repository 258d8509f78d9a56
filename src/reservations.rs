//! Appointment booking glue: small-group bookings are handled by Toast, so
//! all we do is assemble the reserve URL and hand it to the browser.

use anyhow::{anyhow, Result};
use reqwest::Url;

const RESERVE_BASE: &str =
    "https://tables.toasttab.com/restaurants/53b9850f-5bee-49b3-8c53-dd4ce8ac0070/reserve";

pub const MAX_ONLINE_PARTY: u8 = 6;

/// Slots offered by the online widget.
pub const TIME_SLOTS: &[&str] = &[
    "11:00 AM", "11:30 AM", "12:00 PM", "12:30 PM", "1:00 PM",
    "5:00 PM", "5:30 PM", "6:00 PM", "6:30 PM", "7:00 PM",
];

/// "5:30 PM" -> "17:30". Accepts the 12-hour strings from `TIME_SLOTS`.
fn to_24_hour(time: &str) -> Result<String> {
    let (clock, meridiem) = time
        .split_once(' ')
        .ok_or_else(|| anyhow!("bad time format: {time}"))?;
    let (hour, minute) = clock
        .split_once(':')
        .ok_or_else(|| anyhow!("bad time format: {time}"))?;
    let hour: u8 = hour.parse()?;
    if hour == 0 || hour > 12 {
        return Err(anyhow!("bad hour in time: {time}"));
    }
    let minute: u8 = minute.parse()?;
    if minute > 59 {
        return Err(anyhow!("bad minute in time: {time}"));
    }

    let hour = match (meridiem, hour) {
        ("AM", 12) => 0,
        ("AM", h) => h,
        ("PM", 12) => 12,
        ("PM", h) => h + 12,
        _ => return Err(anyhow!("bad meridiem in time: {time}")),
    };
    Ok(format!("{hour:02}:{minute:02}"))
}

/// Builds the external Toast reserve URL for a small-group appointment.
/// `date` is YYYY-MM-DD from the form; `time` is one of `TIME_SLOTS`.
pub fn booking_url(party_size: u8, date: &str, time: &str) -> Result<Url> {
    if date.is_empty() {
        return Err(anyhow!("please select a date"));
    }
    let time24 = to_24_hour(time)?;
    // Toast expects a zoned timestamp; the restaurant is in the Pacific zone.
    let date_time = format!("{date}T{time24}:00.000-08:00");
    let url = Url::parse_with_params(
        RESERVE_BASE,
        &[
            ("partySize", party_size.to_string()),
            ("dateTime", date_time),
        ],
    )?;
    Ok(url)
}

/// Hands a URL to the platform browser. Best effort; booking still works by
/// pasting the URL shown on screen.
pub fn open_external(url: &str) {
    use std::process::{Command, Stdio};

    #[cfg(target_os = "macos")]
    let opener = "open";
    #[cfg(not(target_os = "macos"))]
    let opener = "xdg-open";

    let _ = Command::new(opener)
        .arg(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_24_hour_morning_and_afternoon() {
        assert_eq!(to_24_hour("11:00 AM").unwrap(), "11:00");
        assert_eq!(to_24_hour("12:30 PM").unwrap(), "12:30");
        assert_eq!(to_24_hour("1:00 PM").unwrap(), "13:00");
        assert_eq!(to_24_hour("7:00 PM").unwrap(), "19:00");
        assert_eq!(to_24_hour("12:15 AM").unwrap(), "00:15");
    }

    #[test]
    fn test_to_24_hour_rejects_garbage() {
        assert!(to_24_hour("noonish").is_err());
        assert!(to_24_hour("13:00 PM").is_err());
        assert!(to_24_hour("5:30").is_err());
        assert!(to_24_hour("5:xx PM").is_err());
        assert!(to_24_hour("5:61 PM").is_err());
    }

    #[test]
    fn test_every_slot_converts() {
        for slot in TIME_SLOTS {
            assert!(to_24_hour(slot).is_ok(), "slot {slot} failed");
        }
    }

    #[test]
    fn test_booking_url_encodes_date_time() {
        let url = booking_url(4, "2026-09-12", "6:30 PM").unwrap();
        assert!(url.as_str().starts_with(RESERVE_BASE));
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("partySize".to_string(), "4".to_string())));
        assert!(pairs.contains(&(
            "dateTime".to_string(),
            "2026-09-12T18:30:00.000-08:00".to_string()
        )));
    }

    #[test]
    fn test_booking_url_requires_date() {
        assert!(booking_url(2, "", "6:30 PM").is_err());
    }
}
