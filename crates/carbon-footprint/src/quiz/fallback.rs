use super::locale::Locale;
use super::scoring::NormalizedScore;
use crate::enrichment::EnrichmentResult;
use serde::Serialize;

pub const MODERATE_THRESHOLD: u8 = 30;
pub const HIGH_THRESHOLD: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Low,
    Moderate,
    High,
}

impl Bucket {
    pub const fn for_score(score: NormalizedScore) -> Self {
        let value = score.value();
        if value < MODERATE_THRESHOLD {
            Self::Low
        } else if value < HIGH_THRESHOLD {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

struct StaticContent {
    impact: &'static str,
    recommendations: &'static [&'static str],
}

const fn content(bucket: Bucket, locale: Locale) -> StaticContent {
    match (locale, bucket) {
        (Locale::En, Bucket::Low) => StaticContent {
            impact: "Your carbon footprint is relatively low. Great job!",
            recommendations: &[
                "Consider using even more renewable energy sources",
                "Encourage others to adopt your eco-friendly habits",
            ],
        },
        (Locale::En, Bucket::Moderate) => StaticContent {
            impact: "Your carbon footprint is moderate. There's room for improvement.",
            recommendations: &[
                "Try to use public transportation more often",
                "Reduce meat consumption",
                "Opt for energy-efficient appliances",
            ],
        },
        (Locale::En, Bucket::High) => StaticContent {
            impact: "Your carbon footprint is high. Significant changes could make a big difference.",
            recommendations: &[
                "Prioritize walking, cycling, or public transport over driving",
                "Reduce meat consumption and opt for plant-based meals more often",
                "Implement energy-saving measures at home",
                "Practice mindful consumption and reduce unnecessary purchases",
            ],
        },
        (Locale::Id, Bucket::Low) => StaticContent {
            impact: "Jejak karbon Anda relatif rendah. Kerja bagus!",
            recommendations: &[
                "Pertimbangkan untuk menggunakan lebih banyak sumber energi terbarukan",
                "Ajak orang lain untuk mengikuti kebiasaan ramah lingkungan Anda",
            ],
        },
        (Locale::Id, Bucket::Moderate) => StaticContent {
            impact: "Jejak karbon Anda sedang. Masih ada ruang untuk perbaikan.",
            recommendations: &[
                "Cobalah lebih sering menggunakan transportasi umum",
                "Kurangi konsumsi daging",
                "Pilih peralatan yang hemat energi",
            ],
        },
        (Locale::Id, Bucket::High) => StaticContent {
            impact: "Jejak karbon Anda tinggi. Perubahan yang signifikan bisa membuat perbedaan besar.",
            recommendations: &[
                "Utamakan berjalan kaki, bersepeda, atau transportasi umum daripada menyetir",
                "Kurangi konsumsi daging dan lebih sering pilih makanan nabati",
                "Terapkan langkah-langkah hemat energi di rumah",
                "Belanja dengan bijak dan kurangi pembelian yang tidak perlu",
            ],
        },
    }
}

/// Static impact statement and tips for the bucket the score falls in.
pub fn resolve(score: NormalizedScore, locale: Locale) -> EnrichmentResult {
    let content = content(Bucket::for_score(score), locale);
    EnrichmentResult {
        impact: content.impact.to_string(),
        recommendations: content
            .recommendations
            .iter()
            .map(|item| item.to_string())
            .collect(),
    }
}
