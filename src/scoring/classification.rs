//! Risk bands and their presentation text
//!
//! Thresholding (score -> band) and wording (band + locale -> level/action)
//! are kept apart: the band constructors below are the only place a
//! threshold lives, and `band_text` is the only place text lives.

use serde::{Serialize, Serializer};

use crate::locale::Locale;
use crate::method::Method;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RebaBand {
    Negligible,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RebaBand {
    /// 1 -> negligible, 2-3 -> low, 4-7 -> medium, 8-10 -> high, 11+ -> very high
    pub fn from_total(total: i32) -> Self {
        match total {
            i32::MIN..=1 => RebaBand::Negligible,
            2..=3 => RebaBand::Low,
            4..=7 => RebaBand::Medium,
            8..=10 => RebaBand::High,
            _ => RebaBand::VeryHigh,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RulaBand {
    Acceptable,
    InvestigateFurther,
    InvestigateSoon,
    InvestigateImmediately,
}

impl RulaBand {
    /// 1-2 -> acceptable, 3-4 -> investigate further, 5-6 -> investigate soon,
    /// 7+ -> investigate immediately
    pub fn from_total(total: i32) -> Self {
        match total {
            i32::MIN..=2 => RulaBand::Acceptable,
            3..=4 => RulaBand::InvestigateFurther,
            5..=6 => RulaBand::InvestigateSoon,
            _ => RulaBand::InvestigateImmediately,
        }
    }
}

/// OWAS action category. The discriminant is the category number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OwasCategory {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

impl OwasCategory {
    pub fn number(&self) -> u8 {
        *self as u8
    }
}

impl Serialize for OwasCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NioshBand {
    Safe,
    Moderate,
    HighRisk,
}

impl NioshBand {
    /// LI <= 1 -> safe, LI <= 2 -> moderate, otherwise high risk
    pub fn from_lifting_index(li: f64) -> Self {
        if li <= 1.0 {
            NioshBand::Safe
        } else if li <= 2.0 {
            NioshBand::Moderate
        } else {
            NioshBand::HighRisk
        }
    }
}

/// A band from any method. Serializes as its kebab-case key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskBand {
    Reba(RebaBand),
    Rula(RulaBand),
    Owas(OwasCategory),
    Niosh(NioshBand),
}

impl RiskBand {
    pub fn method(&self) -> Method {
        match self {
            RiskBand::Reba(_) => Method::Reba,
            RiskBand::Rula(_) => Method::Rula,
            RiskBand::Owas(_) => Method::Owas,
            RiskBand::Niosh(_) => Method::Niosh,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            RiskBand::Reba(RebaBand::Negligible) => "negligible",
            RiskBand::Reba(RebaBand::Low) => "low",
            RiskBand::Reba(RebaBand::Medium) => "medium",
            RiskBand::Reba(RebaBand::High) => "high",
            RiskBand::Reba(RebaBand::VeryHigh) => "very-high",
            RiskBand::Rula(RulaBand::Acceptable) => "acceptable",
            RiskBand::Rula(RulaBand::InvestigateFurther) => "investigate-further",
            RiskBand::Rula(RulaBand::InvestigateSoon) => "investigate-soon",
            RiskBand::Rula(RulaBand::InvestigateImmediately) => "investigate-immediately",
            RiskBand::Owas(OwasCategory::Low) => "low",
            RiskBand::Owas(OwasCategory::Medium) => "medium",
            RiskBand::Owas(OwasCategory::High) => "high",
            RiskBand::Owas(OwasCategory::Critical) => "critical",
            RiskBand::Niosh(NioshBand::Safe) => "safe",
            RiskBand::Niosh(NioshBand::Moderate) => "moderate",
            RiskBand::Niosh(NioshBand::HighRisk) => "high-risk",
        }
    }

    /// Severity on a shared 0 (none) to 4 (urgent) scale
    pub fn severity(&self) -> u8 {
        match self {
            RiskBand::Reba(RebaBand::Negligible) => 0,
            RiskBand::Reba(RebaBand::Low) => 1,
            RiskBand::Reba(RebaBand::Medium) => 2,
            RiskBand::Reba(RebaBand::High) => 3,
            RiskBand::Reba(RebaBand::VeryHigh) => 4,
            RiskBand::Rula(RulaBand::Acceptable) => 0,
            RiskBand::Rula(RulaBand::InvestigateFurther) => 2,
            RiskBand::Rula(RulaBand::InvestigateSoon) => 3,
            RiskBand::Rula(RulaBand::InvestigateImmediately) => 4,
            RiskBand::Owas(OwasCategory::Low) => 0,
            RiskBand::Owas(OwasCategory::Medium) => 2,
            RiskBand::Owas(OwasCategory::High) => 3,
            RiskBand::Owas(OwasCategory::Critical) => 4,
            RiskBand::Niosh(NioshBand::Safe) => 0,
            RiskBand::Niosh(NioshBand::Moderate) => 2,
            RiskBand::Niosh(NioshBand::HighRisk) => 4,
        }
    }

    /// Hex color marking the band's severity
    pub fn color(&self) -> &'static str {
        match self {
            RiskBand::Reba(RebaBand::Low) => "#84cc16",
            _ => match self.severity() {
                0 => "#16a34a",
                2 => "#f59e0b",
                3 => "#f97316",
                _ => "#dc2626",
            },
        }
    }
}

impl Serialize for RiskBand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Level, recommended action and color for a scored assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub band: RiskBand,
    pub level: &'static str,
    pub action: &'static str,
    pub color: &'static str,
}

pub fn classify(band: RiskBand, locale: Locale) -> Classification {
    let (level, action) = band_text(band, locale);
    Classification {
        band,
        level,
        action,
        color: band.color(),
    }
}

fn band_text(band: RiskBand, locale: Locale) -> (&'static str, &'static str) {
    use Locale::{En, Fa};

    match (band, locale) {
        (RiskBand::Reba(RebaBand::Negligible), En) => ("negligible", "No action necessary"),
        (RiskBand::Reba(RebaBand::Negligible), Fa) => ("بی‌خطر", "اقدام لازم نیست"),
        (RiskBand::Reba(RebaBand::Low), En) => ("low", "Change may be needed"),
        (RiskBand::Reba(RebaBand::Low), Fa) => ("پایین", "تغییر ممکن است لازم باشد"),
        (RiskBand::Reba(RebaBand::Medium), En) => ("medium", "Change needed"),
        (RiskBand::Reba(RebaBand::Medium), Fa) => ("متوسط", "تغییر لازم است"),
        (RiskBand::Reba(RebaBand::High), En) => ("high", "Change soon"),
        (RiskBand::Reba(RebaBand::High), Fa) => ("بالا", "تغییر هر چه زودتر"),
        (RiskBand::Reba(RebaBand::VeryHigh), En) => ("very-high", "Implement change immediately"),
        (RiskBand::Reba(RebaBand::VeryHigh), Fa) => ("بسیار بالا", "تغییر فوری ضروری"),

        (RiskBand::Rula(RulaBand::Acceptable), En) => ("acceptable", "Posture is acceptable"),
        (RiskBand::Rula(RulaBand::Acceptable), Fa) => ("قابل قبول", "وضعیت قابل قبول"),
        (RiskBand::Rula(RulaBand::InvestigateFurther), En) => {
            ("investigate-further", "Investigate further and improve")
        }
        (RiskBand::Rula(RulaBand::InvestigateFurther), Fa) => ("بررسی لازم است", "بررسی و بهبود"),
        (RiskBand::Rula(RulaBand::InvestigateSoon), En) => ("investigate-soon", "Investigate and change soon"),
        (RiskBand::Rula(RulaBand::InvestigateSoon), Fa) => ("بررسی سریع", "اصلاح هرچه زودتر"),
        (RiskBand::Rula(RulaBand::InvestigateImmediately), En) => {
            ("investigate-immediately", "Investigate and change immediately")
        }
        (RiskBand::Rula(RulaBand::InvestigateImmediately), Fa) => ("فوری", "اصلاح فوری"),

        (RiskBand::Owas(OwasCategory::Low), En) => ("low", "No action required"),
        (RiskBand::Owas(OwasCategory::Low), Fa) => ("سطح ۱ - کم‌خطر", "بدون نیاز به اقدام"),
        (RiskBand::Owas(OwasCategory::Medium), En) => ("medium", "Corrective action in the near future"),
        (RiskBand::Owas(OwasCategory::Medium), Fa) => ("سطح ۲ - متوسط", "اقدام در آینده نزدیک"),
        (RiskBand::Owas(OwasCategory::High), En) => ("high", "Corrective action as soon as possible"),
        (RiskBand::Owas(OwasCategory::High), Fa) => ("سطح ۳ - بالا", "اقدام در اسرع وقت"),
        (RiskBand::Owas(OwasCategory::Critical), En) => ("critical", "Corrective action immediately"),
        (RiskBand::Owas(OwasCategory::Critical), Fa) => ("سطح ۴ - بحرانی", "اقدام فوری"),

        (RiskBand::Niosh(NioshBand::Safe), En) => ("safe", "The load is safe to lift"),
        (RiskBand::Niosh(NioshBand::Safe), Fa) => ("ایمن", "بار بی‌خطر است"),
        (RiskBand::Niosh(NioshBand::Moderate), En) => {
            ("moderate", "Reduce the weight or improve lifting conditions")
        }
        (RiskBand::Niosh(NioshBand::Moderate), Fa) => ("ریسک متوسط", "کاهش وزن یا بهبود شرایط"),
        (RiskBand::Niosh(NioshBand::HighRisk), En) => ("high-risk", "Redesign the task"),
        (RiskBand::Niosh(NioshBand::HighRisk), Fa) => ("ریسک بالا", "طراحی مجدد وظیفه ضروری"),
    }
}
