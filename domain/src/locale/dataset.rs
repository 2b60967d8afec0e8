//! Dataset selection

use super::tag::Locale;

/// Dataset holding all low emission zones.
pub const ZONES_DATASET: &str = "zones_de";

/// Bundled FAQ variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqDataset {
    German,
    English,
}

impl FaqDataset {
    pub fn resource_name(&self) -> &'static str {
        match self {
            FaqDataset::German => "faqs_de",
            FaqDataset::English => "faqs_en",
        }
    }
}

/// Pick the FAQ dataset for a locale.
///
/// Only `de_DE` gets the German FAQs. Other German-language locales such
/// as `de_AT` get the English ones, because the answers describe rules
/// that apply in Germany.
pub fn select_faq_dataset(locale: &Locale) -> FaqDataset {
    if *locale == Locale::germany() {
        FaqDataset::German
    } else {
        FaqDataset::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_germany_selects_german() {
        assert_eq!(select_faq_dataset(&Locale::germany()), FaqDataset::German);
        assert_eq!(
            select_faq_dataset(&Locale::germany()).resource_name(),
            "faqs_de"
        );
    }

    #[test]
    fn test_other_german_locales_select_english() {
        for tag in ["de_AT", "de_CH", "de"] {
            let locale: Locale = tag.parse().unwrap();
            assert_eq!(select_faq_dataset(&locale), FaqDataset::English, "{tag}");
        }
    }

    #[test]
    fn test_english_selects_english() {
        assert_eq!(
            select_faq_dataset(&Locale::us()).resource_name(),
            "faqs_en"
        );
    }
}
