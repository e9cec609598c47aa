//! 曜日ラベル
//!
//! 取り込み対象は平日5日分のシートのみ。ラベルはシート名と
//! マップのキーを兼ねる。

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

const LABELS: &[&str] = &["Пн", "Вт", "Ср", "Чт", "Пт"];

/// 平日（月〜金）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    /// シート順（月→金）
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// シート名として使われる短縮ラベル
    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }

    /// 日曜=0 とした曜日番号（月=1 … 金=5）
    pub fn ordinal(self) -> u32 {
        self.index() as u32 + 1
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|d| d.label() == label)
    }

    /// 曜日番号から変換。土日（0, 6）や範囲外は `None`
    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            1..=5 => Some(Self::ALL[(ordinal - 1) as usize]),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Weekday::Mon => 0,
            Weekday::Tue => 1,
            Weekday::Wed => 2,
            Weekday::Thu => 3,
            Weekday::Fri => 4,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(day) = Weekday::from_label(s) {
            return Ok(day);
        }
        match s.trim().to_lowercase().as_str() {
            "пн" | "mon" | "monday" | "1" => Ok(Weekday::Mon),
            "вт" | "tue" | "tuesday" | "2" => Ok(Weekday::Tue),
            "ср" | "wed" | "wednesday" | "3" => Ok(Weekday::Wed),
            "чт" | "thu" | "thursday" | "4" => Ok(Weekday::Thu),
            "пт" | "fri" | "friday" | "5" => Ok(Weekday::Fri),
            _ => Err(format!("Unknown day: {}. Use one of {}", s, LABELS.join(", "))),
        }
    }
}

// マップのキーとしても使うため、ラベル文字列そのものでシリアライズする
impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Weekday::from_label(&label).ok_or_else(|| de::Error::unknown_variant(&label, LABELS))
    }
}
