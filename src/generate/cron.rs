//! Cron expression building, validation, and description.
//!
//! Works on standard five-field expressions: minute, hour, day-of-month,
//! month, day-of-week. Each field accepts `*`, `*/step`, single values,
//! ranges (`a-b`, optionally `/step`), and comma lists of those.

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CronError {
    #[error("a cron expression has 5 fields (minute hour day-of-month month day-of-week), got {0}")]
    WrongFieldCount(usize),
    #[error("invalid {field} field '{value}': {reason}")]
    BadField {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// The five cron fields in order, with their valid ranges.
const FIELDS: [(&str, u32, u32); 5] = [
    ("minute", 0, 59),
    ("hour", 0, 23),
    ("day-of-month", 1, 31),
    ("month", 1, 12),
    ("day-of-week", 0, 6),
];

/// A validated five-field cron expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronExpr {
    fields: [String; 5],
}

impl fmt::Display for CronExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields.join(" "))
    }
}

impl CronExpr {
    /// Build an expression from individual fields, defaulting each to `*`.
    pub fn build(
        minute: Option<&str>,
        hour: Option<&str>,
        day_of_month: Option<&str>,
        month: Option<&str>,
        day_of_week: Option<&str>,
    ) -> Result<Self, CronError> {
        let values = [minute, hour, day_of_month, month, day_of_week];
        let mut fields: [String; 5] = Default::default();
        for (i, value) in values.iter().enumerate() {
            let value = value.unwrap_or("*").trim();
            let (name, min, max) = FIELDS[i];
            validate_field(value, name, min, max)?;
            fields[i] = value.to_string();
        }
        Ok(Self { fields })
    }

    /// Parse and validate a whole expression.
    pub fn parse(expr: &str) -> Result<Self, CronError> {
        let parts: Vec<&str> = expr.split_whitespace().collect();
        if parts.len() != 5 {
            return Err(CronError::WrongFieldCount(parts.len()));
        }
        Self::build(
            Some(parts[0]),
            Some(parts[1]),
            Some(parts[2]),
            Some(parts[3]),
            Some(parts[4]),
        )
    }

    /// Describe the expression in words.
    pub fn describe(&self) -> String {
        const DAYS: [&str; 7] = [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ];
        const MONTHS: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];

        let mut parts = Vec::new();
        parts.push(match (self.fields[0].as_str(), self.fields[1].as_str()) {
            ("*", "*") => "every minute".to_string(),
            (minute, "*") => format!("{} of every hour", describe_field(minute, "minute", None)),
            ("*", hour) => format!("every minute of {}", describe_field(hour, "hour", None)),
            (minute, hour) => format!(
                "{} past {}",
                describe_field(minute, "minute", None),
                describe_field(hour, "hour", None)
            ),
        });
        if self.fields[2] != "*" {
            parts.push(format!(
                "on {}",
                describe_field(&self.fields[2], "day-of-month", None)
            ));
        }
        if self.fields[3] != "*" {
            parts.push(format!(
                "in {}",
                describe_field(&self.fields[3], "month", Some(&MONTHS))
            ));
        }
        if self.fields[4] != "*" {
            parts.push(format!(
                "on {}",
                describe_field(&self.fields[4], "day-of-week", Some(&DAYS))
            ));
        }
        format!("At {}", parts.join(", "))
    }
}

/// Name a single field value in words: `*/5` → "every 5 minutes",
/// `1,15` → "minute 1 and 15", `9-17` → "hour 9 through 17".
fn describe_field(value: &str, unit: &str, names: Option<&[&str]>) -> String {
    if let Some(step) = value.strip_prefix("*/") {
        return format!("every {step} {unit}s");
    }
    let label = |v: &str| -> String {
        match (names, v.parse::<usize>()) {
            (Some(names), Ok(n)) => {
                // Month names are 1-based, weekday names 0-based
                let offset = if unit == "month" { 1 } else { 0 };
                names
                    .get(n - offset)
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| v.to_string())
            }
            _ => v.to_string(),
        }
    };
    let items: Vec<String> = value
        .split(',')
        .map(|item| match item.split_once('-') {
            Some((a, b)) => {
                let b = b.split_once('/').map(|(b, _)| b).unwrap_or(b);
                format!("{} through {}", label(a), label(b))
            }
            None => label(item),
        })
        .collect();
    let joined = items.join(" and ");
    if names.is_some() {
        joined
    } else {
        format!("{unit} {joined}")
    }
}

fn validate_field(value: &str, field: &'static str, min: u32, max: u32) -> Result<(), CronError> {
    let err = |reason: String| CronError::BadField {
        field,
        value: value.to_string(),
        reason,
    };
    if value.is_empty() {
        return Err(err("empty field".into()));
    }
    for item in value.split(',') {
        let (range, step) = match item.split_once('/') {
            Some((range, step)) => (range, Some(step)),
            None => (item, None),
        };
        if let Some(step) = step {
            match step.parse::<u32>() {
                Ok(0) => return Err(err("step must be at least 1".into())),
                Ok(_) => {}
                Err(_) => return Err(err(format!("'{step}' is not a valid step"))),
            }
            if range != "*" && !range.contains('-') {
                return Err(err("a step needs a '*' or range base".into()));
            }
        }
        if range == "*" {
            continue;
        }
        let bounds: Vec<&str> = range.split('-').collect();
        if bounds.len() > 2 {
            return Err(err(format!("'{range}' is not a value or range")));
        }
        let mut parsed = Vec::with_capacity(2);
        for bound in &bounds {
            match bound.parse::<u32>() {
                Ok(n) if (min..=max).contains(&n) => parsed.push(n),
                Ok(n) => return Err(err(format!("{n} is outside {min}-{max}"))),
                Err(_) => return Err(err(format!("'{bound}' is not a number"))),
            }
        }
        if parsed.len() == 2 && parsed[0] > parsed[1] {
            return Err(err(format!("range {range} runs backwards")));
        }
    }
    Ok(())
}

/// Common ready-made expressions, shown by `devbelt cron presets`.
pub fn presets() -> Vec<(&'static str, &'static str)> {
    vec![
        ("* * * * *", "Every minute"),
        ("*/5 * * * *", "Every 5 minutes"),
        ("0 * * * *", "Every hour"),
        ("0 0 * * *", "Every day at midnight"),
        ("0 9 * * 1-5", "Weekdays at 09:00"),
        ("0 0 * * 0", "Every Sunday at midnight"),
        ("0 0 1 * *", "First of every month at midnight"),
        ("0 0 1 1 *", "Every January 1st at midnight"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_defaults_to_every_minute() {
        let expr = CronExpr::build(None, None, None, None, None).unwrap();
        assert_eq!(expr.to_string(), "* * * * *");
    }

    #[test]
    fn build_assembles_fields_in_order() {
        let expr = CronExpr::build(Some("30"), Some("4"), Some("1"), None, None).unwrap();
        assert_eq!(expr.to_string(), "30 4 1 * *");
    }

    #[test]
    fn parse_roundtrips_display() {
        let expr = CronExpr::parse("*/15 9-17 * * 1-5").unwrap();
        assert_eq!(expr.to_string(), "*/15 9-17 * * 1-5");
    }

    #[test]
    fn wrong_field_count_is_an_error() {
        assert!(matches!(
            CronExpr::parse("* * * *"),
            Err(CronError::WrongFieldCount(4))
        ));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(CronExpr::parse("60 * * * *").is_err());
        assert!(CronExpr::parse("* 24 * * *").is_err());
        assert!(CronExpr::parse("* * 0 * *").is_err());
        assert!(CronExpr::parse("* * * 13 *").is_err());
        assert!(CronExpr::parse("* * * * 7").is_err());
    }

    #[test]
    fn malformed_items_are_rejected() {
        assert!(CronExpr::parse("a * * * *").is_err());
        assert!(CronExpr::parse("1-2-3 * * * *").is_err());
        assert!(CronExpr::parse("5-1 * * * *").is_err());
        assert!(CronExpr::parse("*/0 * * * *").is_err());
        assert!(CronExpr::parse("5/2 * * * *").is_err());
    }

    #[test]
    fn lists_ranges_and_steps_validate() {
        assert!(CronExpr::parse("0,15,30,45 * * * *").is_ok());
        assert!(CronExpr::parse("* * * * 1-5").is_ok());
        assert!(CronExpr::parse("0-30/5 * * * *").is_ok());
    }

    #[test]
    fn describe_every_minute() {
        let expr = CronExpr::parse("* * * * *").unwrap();
        assert_eq!(expr.describe(), "At every minute");
    }

    #[test]
    fn describe_step_minutes() {
        let expr = CronExpr::parse("*/5 * * * *").unwrap();
        assert_eq!(expr.describe(), "At every 5 minutes of every hour");
    }

    #[test]
    fn describe_weekday_mornings() {
        let expr = CronExpr::parse("0 9 * * 1-5").unwrap();
        assert_eq!(
            expr.describe(),
            "At minute 0 past hour 9, on Monday through Friday"
        );
    }

    #[test]
    fn describe_month_names() {
        let expr = CronExpr::parse("0 0 1 1 *").unwrap();
        assert_eq!(
            expr.describe(),
            "At minute 0 past hour 0, on day-of-month 1, in January"
        );
    }

    #[test]
    fn presets_all_validate() {
        for (expr, _) in presets() {
            CronExpr::parse(expr).unwrap();
        }
    }
}
