//! Read-only, per-locale quiz content: the five questions and the strings the
//! front end renders around them.

use super::locale::Locale;
use super::scoring::{ScoreCategory, QUESTION_COUNT};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub index: usize,
    pub category: ScoreCategory,
    pub prompt: &'static str,
    pub options: [QuestionOption; 4],
}

impl Question {
    pub fn accepts(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value == value)
    }

    pub fn label_for(&self, value: &str) -> Option<&'static str> {
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultLabels {
    pub title: &'static str,
    pub name: &'static str,
    pub impact_score: &'static str,
    pub summary: &'static str,
    pub environmental_impact: &'static str,
    pub recommendations: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UiStrings {
    pub title: &'static str,
    pub name_prompt: &'static str,
    pub name_placeholder: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub see_results: &'static str,
    pub calculating: &'static str,
    pub results: ResultLabels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizCatalog {
    pub locale: Locale,
    pub strings: UiStrings,
    pub questions: [Question; QUESTION_COUNT],
}

impl QuizCatalog {
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

pub fn catalog(locale: Locale) -> &'static QuizCatalog {
    match locale {
        Locale::En => &EN,
        Locale::Id => &ID,
    }
}

const fn option(label: &'static str, value: &'static str) -> QuestionOption {
    QuestionOption { label, value }
}

static EN: QuizCatalog = QuizCatalog {
    locale: Locale::En,
    strings: UiStrings {
        title: "Carbon Footprint Calculator",
        name_prompt: "Let's start by getting your name:",
        name_placeholder: "Enter your name",
        previous: "Previous",
        next: "Next",
        see_results: "See Results",
        calculating: "Calculating your results...",
        results: ResultLabels {
            title: "Your Carbon Footprint Results",
            name: "Name",
            impact_score: "Impact Score",
            summary: "Summary",
            environmental_impact: "Environmental Impact",
            recommendations: "Recommendations",
        },
    },
    questions: [
        Question {
            index: 0,
            category: ScoreCategory::Transportation,
            prompt: "How often do you use public transportation?",
            options: [
                option("Never", "never"),
                option("Occasionally", "occasionally"),
                option("Regularly", "regularly"),
                option("Always", "always"),
            ],
        },
        Question {
            index: 1,
            category: ScoreCategory::Mode,
            prompt: "What's your primary mode of transportation?",
            options: [
                option("Car", "car"),
                option("Bicycle", "bicycle"),
                option("Walking", "walking"),
                option("Public Transport", "public"),
            ],
        },
        Question {
            index: 2,
            category: ScoreCategory::Meat,
            prompt: "How often do you eat meat?",
            options: [
                option("Daily", "daily"),
                option("Few times a week", "weekly"),
                option("Occasionally", "occasionally"),
                option("Never (Vegetarian/Vegan)", "never"),
            ],
        },
        Question {
            index: 3,
            category: ScoreCategory::Energy,
            prompt: "How do you manage your home energy usage?",
            options: [
                option("No special measures", "none"),
                option("Use energy-efficient appliances", "efficient"),
                option("Use renewable energy sources", "renewable"),
                option("Minimal energy usage", "minimal"),
            ],
        },
        Question {
            index: 4,
            category: ScoreCategory::Shopping,
            prompt: "How often do you purchase new clothes or electronics?",
            options: [
                option("Weekly", "weekly"),
                option("Monthly", "monthly"),
                option("Few times a year", "yearly"),
                option("Rarely", "rarely"),
            ],
        },
    ],
};

static ID: QuizCatalog = QuizCatalog {
    locale: Locale::Id,
    strings: UiStrings {
        title: "Kalkulator Jejak Karbon",
        name_prompt: "Mari mulai dengan nama Anda:",
        name_placeholder: "Masukkan nama Anda",
        previous: "Sebelumnya",
        next: "Selanjutnya",
        see_results: "Lihat Hasil",
        calculating: "Menghitung hasil Anda...",
        results: ResultLabels {
            title: "Hasil Jejak Karbon Anda",
            name: "Nama",
            impact_score: "Skor Dampak",
            summary: "Ringkasan",
            environmental_impact: "Dampak Lingkungan",
            recommendations: "Rekomendasi",
        },
    },
    questions: [
        Question {
            index: 0,
            category: ScoreCategory::Transportation,
            prompt: "Seberapa sering Anda menggunakan transportasi umum?",
            options: [
                option("Tidak Pernah", "never"),
                option("Kadang-kadang", "occasionally"),
                option("Secara Teratur", "regularly"),
                option("Selalu", "always"),
            ],
        },
        Question {
            index: 1,
            category: ScoreCategory::Mode,
            prompt: "Apa moda transportasi utama Anda?",
            options: [
                option("Mobil", "car"),
                option("Sepeda", "bicycle"),
                option("Berjalan", "walking"),
                option("Transport Umum", "public"),
            ],
        },
        Question {
            index: 2,
            category: ScoreCategory::Meat,
            prompt: "Seberapa sering Anda makan daging?",
            options: [
                option("Harian", "daily"),
                option("Beberapa kali seminggu", "weekly"),
                option("Kadang-kadang", "occasionally"),
                option("Tidak Pernah (Vegetarian/Vegan)", "never"),
            ],
        },
        Question {
            index: 3,
            category: ScoreCategory::Energy,
            prompt: "Bagaimana Anda mengelola penggunaan energi rumah Anda?",
            options: [
                option("Tidak ada tindakan khusus", "none"),
                option("Gunakan peralatan hemat energi", "efficient"),
                option("Gunakan sumber energi terbarukan", "renewable"),
                option("Penggunaan energi minimal", "minimal"),
            ],
        },
        Question {
            index: 4,
            category: ScoreCategory::Shopping,
            prompt: "Seberapa sering Anda membeli pakaian atau peralatan elektronik baru?",
            options: [
                option("Mingguan", "weekly"),
                option("Bulanan", "monthly"),
                option("Beberapa kali setahun", "yearly"),
                option("Jarang", "rarely"),
            ],
        },
    ],
};
