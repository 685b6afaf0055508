use std::cmp::Ordering;
use std::fmt;

/// Direction of a price move. An unchanged price has no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Increased,
    Decreased,
}

impl ChangeType {
    /// `None` when the price did not move.
    pub fn between(previous: u64, current: u64) -> Option<Self> {
        match current.cmp(&previous) {
            Ordering::Less => Some(ChangeType::Decreased),
            Ordering::Greater => Some(ChangeType::Increased),
            Ordering::Equal => None,
        }
    }
}

/// One line item of the run's notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    PriceChange {
        change: ChangeType,
        name: String,
        previous: u64,
        current: u64,
        url: String,
    },
    FetchFailed {
        url: String,
        reason: String,
    },
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::PriceChange { change, name, previous, current, url } => {
                let status = match change {
                    ChangeType::Decreased => "📉 値下がり",
                    ChangeType::Increased => "📈 値上がり",
                };
                write!(
                    f,
                    "{} 検知\n{}\n{} → {}\n{}",
                    status,
                    name,
                    format_yen(*previous),
                    format_yen(*current),
                    url
                )
            }
            Alert::FetchFailed { url, reason } => write!(f, "⚠️ 取得失敗\n{}\n{}", url, reason),
        }
    }
}

/// Whole-yen amount with thousands separators, e.g. `9,500円`.
pub fn format_yen(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push('円');
    grouped
}
