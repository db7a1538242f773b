use super::locale::Locale;
use super::scoring::NormalizedScore;
use serde::Serialize;
use url::form_urlencoded::byte_serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub page: String,
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
}

pub fn share_text(score: NormalizedScore, locale: Locale) -> String {
    match locale {
        Locale::En => format!(
            "I just calculated my carbon footprint! My impact score is {score}. Check yours too!"
        ),
        Locale::Id => format!(
            "Saya baru saja menghitung jejak karbon saya! Skor dampak saya {score}. Cek punyamu juga!"
        ),
    }
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

pub fn share_links(page_url: &str, score: NormalizedScore, locale: Locale) -> ShareLinks {
    let url = encode(page_url);
    let text = encode(&share_text(score, locale));
    let title = encode("My Carbon Footprint");

    ShareLinks {
        page: page_url.to_string(),
        facebook: format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
        twitter: format!("https://twitter.com/intent/tweet?text={text}&url={url}"),
        linkedin: format!(
            "https://www.linkedin.com/shareArticle?mini=true&url={url}&title={title}&summary={text}"
        ),
    }
}
