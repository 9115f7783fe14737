use std::time::Duration;

use anyhow::{bail, Result};

/// Suffix to nanoseconds multiplier (order matters: "ms" must be tried before "m")
const UNITS: &[(&str, f64)] = &[
    ("ns", 1.0),
    ("µs", 1_000.0),
    ("us", 1_000.0),
    ("ms", 1_000_000.0),
    ("s", 1_000_000_000.0),
    ("m", 60_000_000_000.0),
    ("h", 3_600_000_000_000.0),
];

/// Parse duration strings like "2s", "500ms", "1.5m", "16.958µs" or "1m30s"
///
/// Compound forms are summed segment by segment.
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();
    if s.is_empty() {
        bail!("Empty duration");
    }

    let mut rest = s;
    let mut nanos = 0.0;
    while !rest.is_empty() {
        let split = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
            .unwrap_or(rest.len());
        let (num, tail) = rest.split_at(split);
        let tail = tail.trim_start();

        let Some((suffix, multiplier)) = UNITS.iter().find(|(u, _)| tail.starts_with(u)) else {
            bail!("Unknown duration format: {}", s);
        };
        let val: f64 = num.trim().parse()?;
        if !val.is_finite() || val < 0.0 {
            bail!("Duration must be a non-negative number: {}", s);
        }
        nanos += val * multiplier;
        rest = tail[suffix.len()..].trim_start();
    }

    Ok(Duration::from_nanos(nanos as u64))
}

/// Parse a duration that must be strictly positive (clap value parser).
pub fn parse_positive_duration(s: &str) -> Result<Duration> {
    let d = parse_duration(s)?;
    if d.is_zero() {
        bail!("Duration must be greater than zero");
    }
    Ok(d)
}

/// Format a duration for display
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        "0ns".to_string()
    } else if nanos < 1_000 {
        format!("{}ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.2}µs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{}ms", d.as_millis())
    } else if d.as_secs() < 60 {
        format!("{}s", trim_float(d.as_secs_f64()))
    } else {
        format!("{}m", trim_float(d.as_secs_f64() / 60.0))
    }
}

/// Two decimals at most, without trailing zeros ("1.50" -> "1.5", "2.00" -> "2").
fn trim_float(v: f64) -> String {
    let s = format!("{:.2}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seconds() {
        let d = parse_duration("29.992671083s").unwrap();
        assert!((d.as_secs_f64() - 29.992671083).abs() < 0.0001);
    }

    #[test]
    fn test_parse_milliseconds() {
        let d = parse_duration("500ms").unwrap();
        assert_eq!(d, Duration::from_millis(500));
    }

    #[test]
    fn test_parse_microseconds() {
        let d = parse_duration("16.958µs").unwrap();
        assert_eq!(d.as_nanos(), 16958);
    }

    #[test]
    fn test_parse_minutes_and_hours() {
        assert_eq!(parse_duration("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3600));
    }

    #[test]
    fn test_parse_compound() {
        assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
        assert_eq!(
            parse_duration("1h0m0.5s").unwrap(),
            Duration::from_millis(3_600_500)
        );
        assert_eq!(parse_duration("2s500ms").unwrap(), Duration::from_millis(2500));
        assert!(parse_duration("1m30").is_err());
        assert!(parse_duration("1mxs").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_duration("soon").is_err());
        assert!(parse_duration("10").is_err());
        assert!(parse_duration("-1s").is_err());
    }

    #[test]
    fn test_positive_rejects_zero() {
        assert!(parse_positive_duration("0s").is_err());
        assert_eq!(
            parse_positive_duration("1s").unwrap(),
            Duration::from_secs(1)
        );
    }

    #[test]
    fn test_format() {
        assert_eq!(format_duration(Duration::from_secs(2)), "2s");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_secs(240)), "4m");
    }
}
