use crate::locale::Locale;

/// One remediation the advisor can suggest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Remedy {
    MonitorHeight,
    Backrest,
    DeskHeight,
    Footrest,
    BreakSchedule,
    ChairSpec,
    Armrest,
    KeyboardPosition,
    DocumentHolder,
    ErgonomicMouse,
    StandingWorkstation,
    ToolLayout,
    InclinedSurface,
    /// Carries the recommended weight limit in kg
    ReduceLoad(f64),
    HorizontalDistance,
    LiftHeight,
    ReduceTwisting,
}

impl Remedy {
    pub fn icon(&self) -> &'static str {
        match self {
            Remedy::MonitorHeight => "🖥️",
            Remedy::Backrest => "🪑",
            Remedy::DeskHeight => "📐",
            Remedy::Footrest => "🦶",
            Remedy::BreakSchedule => "⏱️",
            Remedy::ChairSpec => "✏️",
            Remedy::Armrest => "💪",
            Remedy::KeyboardPosition => "⌨️",
            Remedy::DocumentHolder => "📄",
            Remedy::ErgonomicMouse => "🖱️",
            Remedy::StandingWorkstation => "🏗️",
            Remedy::ToolLayout => "🔧",
            Remedy::InclinedSurface => "📐",
            Remedy::ReduceLoad(_) => "⚖️",
            Remedy::HorizontalDistance => "📏",
            Remedy::LiftHeight => "⬆️",
            Remedy::ReduceTwisting => "🔄",
        }
    }

    pub fn title(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Remedy::MonitorHeight => "Monitor height",
                Remedy::Backrest => "Chair backrest",
                Remedy::DeskHeight => "Desk height",
                Remedy::Footrest => "Footrest",
                Remedy::BreakSchedule => "Break schedule",
                Remedy::ChairSpec => "Corrective chair specification",
                Remedy::Armrest => "Armrests",
                Remedy::KeyboardPosition => "Keyboard position",
                Remedy::DocumentHolder => "Document holder",
                Remedy::ErgonomicMouse => "Ergonomic mouse",
                Remedy::StandingWorkstation => "Standing workstation design",
                Remedy::ToolLayout => "Tool layout",
                Remedy::InclinedSurface => "Inclined work surface",
                Remedy::ReduceLoad(_) => "Reduce load weight",
                Remedy::HorizontalDistance => "Improve horizontal distance",
                Remedy::LiftHeight => "Lift height",
                Remedy::ReduceTwisting => "Reduce twisting",
            },
            Locale::Fa => match self {
                Remedy::MonitorHeight => "ارتفاع مانیتور",
                Remedy::Backrest => "پشتی صندلی",
                Remedy::DeskHeight => "ارتفاع میز",
                Remedy::Footrest => "تکیه‌گاه پا",
                Remedy::BreakSchedule => "برنامه استراحت",
                Remedy::ChairSpec => "مشخصات صندلی اصلاحی",
                Remedy::Armrest => "آرمچر (دسته صندلی)",
                Remedy::KeyboardPosition => "موقعیت کیبورد",
                Remedy::DocumentHolder => "نگهدارنده اسناد",
                Remedy::ErgonomicMouse => "موس ارگونومیک",
                Remedy::StandingWorkstation => "طراحی ایستگاه کاری ایستاده",
                Remedy::ToolLayout => "جانمایی ابزار",
                Remedy::InclinedSurface => "صفحه شیب‌دار",
                Remedy::ReduceLoad(_) => "کاهش وزن بار",
                Remedy::HorizontalDistance => "بهبود فاصله افقی",
                Remedy::LiftHeight => "ارتفاع بلند کردن",
                Remedy::ReduceTwisting => "کاهش چرخش",
            },
        }
    }

    pub fn detail(&self, locale: Locale) -> String {
        if let Remedy::ReduceLoad(rwl) = self {
            return match locale {
                Locale::En => format!(
                    "Recommended weight: {rwl} kg. If the load is heavier, split it into two parts."
                ),
                Locale::Fa => format!(
                    "وزن توصیه‌شده: {rwl} کیلوگرم. اگر بار سنگین‌تر است، آن را به دو بخش تقسیم کنید."
                ),
            };
        }

        let text = match locale {
            Locale::En => match self {
                Remedy::MonitorHeight => "Set the monitor so the line of sight to the middle of the screen is 15-20° below horizontal. Recommended height: eye level ± 5 cm.",
                Remedy::Backrest => "Use a chair with an adjustable backrest at 100-110° to the seat. If building one: backrest height 45-50 cm, width 45 cm.",
                Remedy::DeskHeight => "The work surface should be at seated elbow height. Measure elbow height from the floor and subtract 2-3 cm.",
                Remedy::Footrest => "A footrest adjustable from 0-15 cm with a 5-15° tilt is recommended. Minimum size: 45×35 cm.",
                Remedy::BreakSchedule => "Take a 5 minute active break every 30 minutes with neck, shoulder and back stretches.",
                Remedy::ChairSpec => "A chair with adjustable seat height of 38-52 cm, seat depth of 40-45 cm, ergonomic lumbar support and adjustable armrests.",
                Remedy::Armrest => "Armrests should sit at elbow height. Recommended height: 20-25 cm above the seat. Set the width to shoulder width.",
                Remedy::KeyboardPosition => "Keep the keyboard at elbow height, 10-15 cm from the body. Keyboard angle: 0 to -15° (tilted away).",
                Remedy::DocumentHolder => "Use a document holder next to the monitor to remove neck flexion.",
                Remedy::ErgonomicMouse => "Use a vertical mouse or a mouse with wrist support to reduce wrist deviation. Place it beside the keyboard on the same surface.",
                Remedy::StandingWorkstation => "Work surface for standing work: elbow height ± 5 cm. Use anti-fatigue matting or rubber flooring 15-20 mm thick.",
                Remedy::ToolLayout => "Keep frequently used tools within 30 cm of the body. Occasional tools within 30-60 cm.",
                Remedy::InclinedSurface => "For precision work: a table inclined 15-45° to reduce back flexion.",
                Remedy::HorizontalDistance => "Hold the load closer to the body. Ideal distance: 25 cm from the body. Use lifting aids or trolleys.",
                Remedy::LiftHeight => "Start the lift at hip height (75 cm). Raise the work surface to a suitable height.",
                Remedy::ReduceTwisting => "Avoid twisting the trunk while lifting. Line up the load's origin and destination.",
                Remedy::ReduceLoad(_) => "",
            },
            Locale::Fa => match self {
                Remedy::MonitorHeight => "ارتفاع مانیتور را به گونه‌ای تنظیم کنید که خط دید به وسط صفحه با زاویه ۱۵-۲۰ درجه به پایین باشد. ارتفاع توصیه‌شده: سطح چشم ± ۵ سانتی‌متر.",
                Remedy::Backrest => "صندلی با پشتی قابل تنظیم با زاویه ۱۰۰-۱۱۰ درجه نسبت به نشیمن. اگر صندلی می‌سازید: ارتفاع پشتی ۴۵-۵۰ سانتی‌متر، پهنا ۴۵ سانتی‌متر.",
                Remedy::DeskHeight => "ارتفاع سطح کار باید برابر ارتفاع آرنج (در حالت نشسته) باشد. اندازه‌گیری کنید: ارتفاع آرنج از زمین منهای ۲-۳ سانتی‌متر.",
                Remedy::Footrest => "زیرپایی با ارتفاع قابل تنظیم ۰-۱۵ سانتی‌متر و زاویه ۵-۱۵ درجه توصیه می‌شود. ابعاد: حداقل ۴۵×۳۵ سانتی‌متر.",
                Remedy::BreakSchedule => "هر ۳۰ دقیقه ۵ دقیقه استراحت اکتیو با کشش‌های گردن، شانه و پشت.",
                Remedy::ChairSpec => "صندلی با: ارتفاع نشیمن قابل تنظیم ۳۸-۵۲ سانتی‌متر، عمق نشیمن ۴۰-۴۵ سانتی‌متر، پشتی ارگونومیک کمری، دسته‌های قابل تنظیم.",
                Remedy::Armrest => "دسته صندلی باید در ارتفاع آرنج قرار گیرد. ارتفاع توصیه‌شده: ۲۰-۲۵ سانتی‌متر از نشیمن. تنظیم عرض: عرض شانه.",
                Remedy::KeyboardPosition => "کیبورد در ارتفاع آرنج، فاصله از بدن ۱۰-۱۵ سانتی‌متر. زاویه کیبورد: ۰-۱۵ درجه منفی (شیب به عقب).",
                Remedy::DocumentHolder => "از داکیومنت هولدر کنار مانیتور استفاده کنید تا خم شدن گردن حذف شود.",
                Remedy::ErgonomicMouse => "موس ورتیکال یا موس با کاور مچ برای کاهش انحراف مچ. فاصله موس از بدن: در کنار کیبورد در همان سطح.",
                Remedy::StandingWorkstation => "ارتفاع سطح کار برای کار ایستاده: ارتفاع آرنج ± ۵ سانتی‌متر. کف ضد‌خستگی یا کفپوش لاستیکی ضخامت ۱۵-۲۰ میلی‌متر.",
                Remedy::ToolLayout => "ابزار پرکاربرد در محدوده ۳۰ سانتی‌متری از بدن. ابزار گهگاه در محدوده ۳۰-۶۰ سانتی‌متر.",
                Remedy::InclinedSurface => "برای کارهای دقیق: میز با زاویه ۱۵-۴۵ درجه برای کاهش خمش پشت.",
                Remedy::HorizontalDistance => "بار را نزدیک‌تر به بدن نگه دارید. فاصله ایده‌آل: ۲۵ سانتی‌متر از بدن. از ابزار کمکی یا چرخ استفاده کنید.",
                Remedy::LiftHeight => "نقطه شروع بلند کردن باید در ارتفاع مفصل ران (۷۵ سانتی‌متر) باشد. سطح کار را به ارتفاع مناسب بیاورید.",
                Remedy::ReduceTwisting => "از چرخش تنه هنگام بلند کردن خودداری کنید. محل قرارگیری بار و مقصد را در امتداد هم قرار دهید.",
                Remedy::ReduceLoad(_) => "",
            },
        };
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_load_detail_embeds_limit() {
        let detail = Remedy::ReduceLoad(15.79).detail(Locale::En);
        assert!(detail.contains("15.79 kg"));
        let detail = Remedy::ReduceLoad(12.0).detail(Locale::Fa);
        assert!(detail.contains("12 کیلوگرم"));
    }

    #[test]
    fn test_icon_is_locale_independent() {
        assert_eq!(Remedy::DeskHeight.icon(), "📐");
        assert_eq!(Remedy::InclinedSurface.icon(), "📐");
        assert_ne!(
            Remedy::DeskHeight.title(Locale::En),
            Remedy::DeskHeight.title(Locale::Fa)
        );
    }
}
