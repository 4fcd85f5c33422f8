use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Compute,
    Database,
    Storage,
    Llm,
    Auth,
    Monitoring,
    Serverless,
}

impl Category {
    /// Every category, in listing order.
    pub const ALL: [Category; 7] = [
        Category::Compute,
        Category::Database,
        Category::Storage,
        Category::Llm,
        Category::Auth,
        Category::Monitoring,
        Category::Serverless,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compute => "compute",
            Self::Database => "database",
            Self::Storage => "storage",
            Self::Llm => "llm",
            Self::Auth => "auth",
            Self::Monitoring => "monitoring",
            Self::Serverless => "serverless",
        }
    }

    /// Plural heading used when printing grouped listings.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Compute => "COMPUTE",
            Self::Database => "DATABASES",
            Self::Storage => "STORAGE",
            Self::Llm => "LLM APIS",
            Self::Auth => "AUTH",
            Self::Monitoring => "MONITORING",
            Self::Serverless => "SERVERLESS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compute" => Ok(Self::Compute),
            "database" | "databases" | "db" => Ok(Self::Database),
            "storage" => Ok(Self::Storage),
            "llm" | "llms" => Ok(Self::Llm),
            "auth" => Ok(Self::Auth),
            "monitoring" | "monitor" => Ok(Self::Monitoring),
            "serverless" => Ok(Self::Serverless),
            other => Err(format!(
                "unknown category: {other} (expected one of: compute, database, storage, llm, auth, monitoring, serverless)"
            )),
        }
    }
}

/// How long a free tier lasts once you sign up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OfferDuration {
    #[serde(rename = "forever")]
    Forever,
    #[serde(rename = "12mo")]
    TwelveMonths,
    #[serde(rename = "trial")]
    Trial,
}

impl fmt::Display for OfferDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forever => f.write_str("forever"),
            Self::TwelveMonths => f.write_str("12 months"),
            Self::Trial => f.write_str("trial"),
        }
    }
}

/// Reset cadence of a limit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Minute,
    Day,
    Month,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minute => f.write_str("min"),
            Self::Day => f.write_str("day"),
            Self::Month => f.write_str("month"),
        }
    }
}

/// One quantitative constraint of a free tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Limit {
    pub resource: String,
    pub amount: f64,
    pub unit: String,
    /// `None` means a one-time cap that never resets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

impl Limit {
    /// Format an amount compactly: "100k", "500M", "24", "2.5".
    pub fn fmt_amount(n: f64) -> String {
        let trim = |v: f64| {
            if v.fract() == 0.0 {
                format!("{v:.0}")
            } else {
                let s = format!("{v:.1}");
                s.trim_end_matches(".0").to_string()
            }
        };
        let abs = n.abs();
        if abs >= 1e9 {
            format!("{}B", trim(n / 1e9))
        } else if abs >= 1e6 {
            format!("{}M", trim(n / 1e6))
        } else if abs >= 1e4 {
            format!("{}k", trim(n / 1e3))
        } else {
            trim(n)
        }
    }

    /// Amount, unit and cadence without the resource name, e.g. "160 GB/month".
    pub fn quota(&self) -> String {
        let base = format!("{} {}", Self::fmt_amount(self.amount), self.unit);
        match self.period {
            Some(p) => format!("{base}/{p}"),
            None => base,
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.resource, self.quota())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FreeTier {
    pub description: String,
    #[serde(default)]
    pub limits: Vec<Limit>,
    pub duration: OfferDuration,
}

/// One free-tier offering in the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub free_tier: FreeTier,
    pub requires_cc: bool,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl Provider {
    /// Short sign-up label: "No CC" or "CC required".
    pub fn cc_label(&self) -> &'static str {
        if self.requires_cc {
            "CC required"
        } else {
            "No CC"
        }
    }
}
