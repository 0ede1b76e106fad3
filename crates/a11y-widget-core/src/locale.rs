//! Localized UI strings.

use serde::{Deserialize, Serialize};

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    En,
    /// Turkish
    #[default]
    Tr,
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::En, Self::Tr];

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tr => "tr",
        }
    }

    /// Exact match on a locale code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// Resolve a requested locale, falling back to the default for anything
    /// unrecognized.
    pub fn resolve(requested: Option<&str>) -> Self {
        match requested {
            Some(code) => Self::from_code(code).unwrap_or_else(|| {
                tracing::debug!(code, "unknown locale, using default");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub const fn strings(self) -> &'static LocaleStrings {
        match self {
            Self::En => &EN,
            Self::Tr => &TR,
        }
    }
}

/// Every user-facing string of the widget for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleStrings {
    pub open_label: &'static str,
    pub close_label: &'static str,
    pub panel_title: &'static str,
    pub high_contrast: &'static str,
    pub text_size: &'static str,
    pub line_height: &'static str,
    pub color_filter: &'static str,
    pub animations: &'static str,
    pub magnifier: &'static str,
    pub contrast_adjust: &'static str,
    pub dyslexia: &'static str,
    pub highlight_links: &'static str,
    pub reset: &'static str,
    pub keyboard_hint: &'static str,
    pub text_size_default: &'static str,
    pub text_size_large: &'static str,
    pub text_size_xl: &'static str,
    pub line_height_default: &'static str,
    pub line_height_relaxed: &'static str,
    pub line_height_spacious: &'static str,
    pub filter_none: &'static str,
    pub filter_grayscale: &'static str,
    pub filter_sepia: &'static str,
    pub magnifier_default: &'static str,
    pub magnifier_medium: &'static str,
    pub magnifier_large: &'static str,
    pub contrast_default: &'static str,
    pub contrast_medium: &'static str,
    pub contrast_strong: &'static str,
    pub animations_label: &'static str,
    pub high_contrast_description: &'static str,
    pub magnifier_description: &'static str,
    pub dyslexia_description: &'static str,
    pub highlight_links_description: &'static str,
    pub persist_notice: &'static str,
    pub aria_announcement: &'static str,
}

impl LocaleStrings {
    /// Panel footer: the keyboard shortcut hint, then the storage notice.
    pub const fn footer_lines(&self) -> [&'static str; 2] {
        [self.keyboard_hint, self.persist_notice]
    }
}

pub static EN: LocaleStrings = LocaleStrings {
    open_label: "Open accessibility options",
    close_label: "Close accessibility options",
    panel_title: "Accessibility options",
    high_contrast: "High contrast",
    text_size: "Text size",
    line_height: "Line spacing",
    color_filter: "Color filter",
    animations: "Stop animations",
    magnifier: "Magnifier",
    contrast_adjust: "Contrast adjustment",
    dyslexia: "Dyslexia-friendly font",
    highlight_links: "Highlight links",
    reset: "Reset adjustments",
    keyboard_hint: "Keyboard shortcut: Ctrl + Alt + A",
    text_size_default: "Default",
    text_size_large: "Large",
    text_size_xl: "Extra large",
    line_height_default: "Default",
    line_height_relaxed: "1.5×",
    line_height_spacious: "2×",
    filter_none: "None",
    filter_grayscale: "Grayscale",
    filter_sepia: "Sepia",
    magnifier_default: "Off",
    magnifier_medium: "125%",
    magnifier_large: "150%",
    contrast_default: "Default",
    contrast_medium: "Increase (125%)",
    contrast_strong: "Increase (150%)",
    animations_label: "Pause animations and transitions",
    high_contrast_description: "Increase contrast for better readability.",
    magnifier_description: "Zoom the entire page for easier reading.",
    dyslexia_description: "Switch to a font that supports dyslexic readers.",
    highlight_links_description: "Underline and outline all links on the page.",
    persist_notice: "Settings are saved in this browser.",
    aria_announcement: "Accessibility widget ready",
};

pub static TR: LocaleStrings = LocaleStrings {
    open_label: "Erişilebilirlik seçeneklerini aç",
    close_label: "Erişilebilirlik seçeneklerini kapat",
    panel_title: "Erişilebilirlik seçenekleri",
    high_contrast: "Yüksek kontrast",
    text_size: "Metin boyutu",
    line_height: "Satır aralığı",
    color_filter: "Renk filtresi",
    animations: "Animasyonları durdur",
    magnifier: "Büyüteç",
    contrast_adjust: "Kontrast ayarı",
    dyslexia: "Disleksi dostu yazı tipi",
    highlight_links: "Bağlantıları vurgula",
    reset: "Ayarları sıfırla",
    keyboard_hint: "Klavye kısayolu: Ctrl + Alt + A",
    text_size_default: "Varsayılan",
    text_size_large: "Büyük",
    text_size_xl: "Çok büyük",
    line_height_default: "Varsayılan",
    line_height_relaxed: "1.5×",
    line_height_spacious: "2×",
    filter_none: "Yok",
    filter_grayscale: "Gri tonlama",
    filter_sepia: "Sepya",
    magnifier_default: "Kapalı",
    magnifier_medium: "%125",
    magnifier_large: "%150",
    contrast_default: "Varsayılan",
    contrast_medium: "Arttır (125%)",
    contrast_strong: "Arttır (150%)",
    animations_label: "Animasyonları ve geçişleri durdur",
    high_contrast_description: "Okunabilirliği artırmak için kontrastı yükseltir.",
    magnifier_description: "Sayfanın tamamını yakınlaştırır.",
    dyslexia_description: "Disleksiye uygun bir yazı tipine geçer.",
    highlight_links_description: "Sayfadaki bağlantıları vurgular.",
    persist_notice: "Ayarlar bu tarayıcıda saklanır.",
    aria_announcement: "Erişilebilirlik aracı hazır",
};
