use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "ja", alias = "ja-JP")]
    Ja,
    #[serde(rename = "en", alias = "en-US")]
    En,
}

/// Fixed UI strings for one locale
pub struct Messages {
    pub item_label: fn(usize) -> String,
    pub same_price: &'static str,
    pub first_cheaper: &'static str,
    pub second_cheaper: &'static str,
    pub awaiting_input: &'static str,
    pub badge_waiting: &'static str,
    pub badge_cheapest: &'static str,
    pub badge_compared: &'static str,
}

fn ja_item_label(index: usize) -> String {
    format!("商品{}の100gあたり", index)
}

fn en_item_label(index: usize) -> String {
    format!("Product {} per 100g", index)
}

static JA_MESSAGES: Messages = Messages {
    item_label: ja_item_label,
    same_price: "どちらも同じ価格です",
    first_cheaper: "商品1のほうが安いです",
    second_cheaper: "商品2のほうが安いです",
    awaiting_input: "2つの商品に容量と価格を入力してください。",
    badge_waiting: "入力待ち",
    badge_cheapest: "最安",
    badge_compared: "比較対象",
};

static EN_MESSAGES: Messages = Messages {
    item_label: en_item_label,
    same_price: "Both products cost the same",
    first_cheaper: "Product 1 is cheaper",
    second_cheaper: "Product 2 is cheaper",
    awaiting_input: "Enter weight and price for both products.",
    badge_waiting: "Waiting for input",
    badge_cheapest: "Cheapest",
    badge_compared: "Compared",
};

impl Locale {
    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::Ja => &JA_MESSAGES,
            Locale::En => &EN_MESSAGES,
        }
    }

    /// Yen sign as each locale prints it (full-width in Japanese)
    pub fn currency_symbol(&self) -> &'static str {
        match self {
            Locale::Ja => "￥",
            Locale::En => "¥",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown locale '{}' (expected 'ja' or 'en')", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ja" | "ja-jp" | "ja_jp" => Ok(Locale::Ja),
            "en" | "en-us" | "en_us" => Ok(Locale::En),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
