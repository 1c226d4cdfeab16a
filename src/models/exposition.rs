use std::fmt::{self, Display, Write};

/// Value of the `up` metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Up,
    Down,
}

impl Availability {
    pub fn from_healthy(healthy: bool) -> Self {
        if healthy {
            Availability::Up
        } else {
            Availability::Down
        }
    }

    /// Up only if both are up
    pub fn and(self, other: Availability) -> Self {
        Availability::from_healthy(self == Availability::Up && other == Availability::Up)
    }
}

impl Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Availability::Up => f.write_str("1"),
            Availability::Down => f.write_str("0"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub name: &'static str,
    pub labels: Vec<(&'static str, String)>,
    pub value: String,
}

impl Sample {
    pub fn new(name: &'static str, value: String) -> Self {
        Self {
            name,
            labels: vec![],
            value,
        }
    }

    pub fn with_label(mut self, key: &'static str, value: String) -> Self {
        self.labels.push((key, value));
        self
    }
}

impl Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name)?;
        if !self.labels.is_empty() {
            f.write_char('{')?;
            for (i, (key, value)) in self.labels.iter().enumerate() {
                if i > 0 {
                    f.write_char(',')?;
                }
                write!(f, "{}=\"{}\"", key, escape_label_value(value))?;
            }
            f.write_char('}')?;
        }
        writeln!(f, " {}", self.value)
    }
}

/// Text exposition payload for one scrape, samples rendered in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exposition {
    pub samples: Vec<Sample>,
}

impl Exposition {
    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }
}

impl Display for Exposition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for sample in &self.samples {
            Display::fmt(sample, f)?;
        }
        Ok(())
    }
}

/// Escapes backslash, double quote and line feed as required inside a quoted label value.
/// Other control and non-ASCII characters are written as `\u{..}`, so the output is always printable ASCII.
pub fn escape_label_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            c if c.is_ascii() && !c.is_ascii_control() => escaped.push(c),
            c => escaped.extend(c.escape_unicode()),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_without_labels() {
        let sample = Sample::new("etherscan_up", "1".to_string());
        assert_eq!(sample.to_string(), "etherscan_up 1\n");
    }

    #[test]
    fn test_sample_with_labels() {
        let sample = Sample::new("etherscan_balance", "0.5".to_string())
            .with_label("account", "0xabc".to_string())
            .with_label("currency", "eth".to_string());
        assert_eq!(sample.to_string(), "etherscan_balance{account=\"0xabc\",currency=\"eth\"} 0.5\n");
    }

    #[test]
    fn test_label_escaping() {
        assert_eq!(escape_label_value("plain"), "plain");
        assert_eq!(escape_label_value("a\"b"), "a\\\"b");
        assert_eq!(escape_label_value("a\nb"), "a\\nb");
        assert_eq!(escape_label_value("a\\b"), "a\\\\b");
        let sample = Sample::new("m", "1".to_string()).with_label("account", "x\"} 1\nevil 2".to_string());
        assert_eq!(sample.to_string(), "m{account=\"x\\\"} 1\\nevil 2\"} 1\n");
        assert_eq!(sample.to_string().lines().count(), 1);
    }

    #[test]
    fn test_label_escaping_control_and_unicode() {
        assert_eq!(escape_label_value("0x\u{e9}\r\tz"), "0x\\u{e9}\\u{d}\\u{9}z");
        let sample = Sample::new("m", "1".to_string()).with_label("account", "a\rb\u{2028}c".to_string());
        let text = sample.to_string();
        assert!(text.is_ascii());
        assert!(!text.contains('\r'));
        assert_eq!(text, "m{account=\"a\\u{d}b\\u{2028}c\"} 1\n");
    }

    #[test]
    fn test_exposition_keeps_order() {
        let mut exposition = Exposition::default();
        exposition.push(Sample::new("b", "2".to_string()));
        exposition.push(Sample::new("a", "1".to_string()));
        assert_eq!(exposition.to_string(), "b 2\na 1\n");
    }

    #[test]
    fn test_availability() {
        assert_eq!(Availability::Up.to_string(), "1");
        assert_eq!(Availability::Down.to_string(), "0");
        assert_eq!(Availability::Up.and(Availability::Down), Availability::Down);
        assert_eq!(Availability::Up.and(Availability::Up), Availability::Up);
        assert_eq!(Availability::from_healthy(false), Availability::Down);
    }
}
