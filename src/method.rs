use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::locale::Locale;

/// The four supported assessment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Reba,
    Rula,
    Owas,
    Niosh,
}

impl Method {
    pub const ALL: [Method; 4] = [Method::Reba, Method::Rula, Method::Owas, Method::Niosh];

    pub fn name(&self) -> &'static str {
        match self {
            Method::Reba => "REBA",
            Method::Rula => "RULA",
            Method::Owas => "OWAS",
            Method::Niosh => "NIOSH",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            Method::Reba => "Rapid Entire Body Assessment",
            Method::Rula => "Rapid Upper Limb Assessment",
            Method::Owas => "Ovako Working Posture Analysis",
            Method::Niosh => "NIOSH Lifting Equation",
        }
    }

    /// One-line summary of what the method is suited for
    pub fn description(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Method::Reba, Locale::En) => "Whole-body assessment, suited to varied tasks",
            (Method::Reba, Locale::Fa) => "ارزیابی کل بدن - مناسب برای کارهای متنوع",
            (Method::Rula, Locale::En) => "Upper-limb assessment, suited to manual tasks",
            (Method::Rula, Locale::Fa) => "ارزیابی اندام فوقانی - مناسب برای کارهای دستی",
            (Method::Owas, Locale::En) => "Working posture analysis, suited to industrial tasks",
            (Method::Owas, Locale::Fa) => "ارزیابی پوسچر کاری - مناسب برای کارهای صنعتی",
            (Method::Niosh, Locale::En) => "Lifting equation, suited to manual load handling",
            (Method::Niosh, Locale::Fa) => "معادله بلند کردن NIOSH - مناسب برای جابجایی بار",
        }
    }

    /// Accent color used when rendering the method name
    pub fn color(&self) -> &'static str {
        match self {
            Method::Reba => "#1f6feb",
            Method::Rula => "#388bfd",
            Method::Owas => "#3fb950",
            Method::Niosh => "#e3b341",
        }
    }
}

impl FromStr for Method {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "REBA" => Ok(Method::Reba),
            "RULA" => Ok(Method::Rula),
            "OWAS" => Ok(Method::Owas),
            "NIOSH" => Ok(Method::Niosh),
            _ => bail!("Unknown method '{}' (expected REBA, RULA, OWAS or NIOSH)", s.trim()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
