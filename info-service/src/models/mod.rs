//! The static product information document.
//!
//! Built once at startup and never mutated; the handler serves the same
//! document for the life of the process.

use once_cell::sync::Lazy;
use serde::Serialize;

pub static INFO_DOCUMENT: Lazy<InfoDocument> = Lazy::new(InfoDocument::new);

#[derive(Debug, Clone, Serialize)]
pub struct InfoDocument {
    pub name: &'static str,
    pub version: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub features: Vec<Feature>,
    pub browsers: Vec<&'static str>,
    pub github: &'static str,
    pub download: DownloadLinks,
    pub built_at: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DownloadLinks {
    pub chrome: &'static str,
    pub firefox: &'static str,
}

impl InfoDocument {
    fn new() -> Self {
        InfoDocument {
            name: "Evident",
            version: env!("CARGO_PKG_VERSION"),
            tagline: "Read news you can trust.",
            description: "Evident is a browser extension that analyzes news articles in real \
                time — scoring trust, detecting political bias, and highlighting questionable \
                claims directly on the page.",
            features: vec![
                Feature {
                    id: "trust_score",
                    title: "Trust Score",
                    description: "0–100 composite score weighing publisher credibility, \
                        political neutrality, content factuality, and claim quality.",
                },
                Feature {
                    id: "site_profile",
                    title: "Site Profile",
                    description: "Political bias bar and factual reporting rating sourced from \
                        Media Bias/Fact Check via live web search.",
                },
                Feature {
                    id: "highlights",
                    title: "Inline Highlights",
                    description: "Color-coded sentence highlights on the article itself — \
                        yellow, orange, or red by urgency.",
                },
                Feature {
                    id: "flags",
                    title: "Flag Analysis",
                    description: "Per-claim breakdown with confidence score, reasoning, and \
                        source links for every flagged statement.",
                },
                Feature {
                    id: "a11y",
                    title: "Accessibility Audit",
                    description: "Live DOM scan scoring the article page for heading structure, \
                        alt text, link quality, and more.",
                },
                Feature {
                    id: "audio",
                    title: "Audio Summary",
                    description: "AI-generated spoken summary of the analysis read aloud via \
                        ElevenLabs text-to-speech.",
                },
            ],
            browsers: vec!["Chrome", "Firefox"],
            github: "https://github.com/FallThunder/hack-at-davidson-26",
            download: DownloadLinks {
                chrome: "https://github.com/FallThunder/hack-at-davidson-26/releases/latest/download/evident-chrome.zip",
                firefox: "https://github.com/FallThunder/hack-at-davidson-26/releases/latest/download/evident-firefox.zip",
            },
            built_at: "Hack@Davidson 2026",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_has_exactly_six_features() {
        assert_eq!(INFO_DOCUMENT.features.len(), 6);
        for feature in &INFO_DOCUMENT.features {
            assert!(!feature.id.is_empty());
            assert!(!feature.title.is_empty());
            assert!(!feature.description.is_empty());
        }
    }

    #[test]
    fn serializes_with_documented_top_level_keys() {
        let value = serde_json::to_value(&*INFO_DOCUMENT).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "browsers",
                "built_at",
                "description",
                "download",
                "features",
                "github",
                "name",
                "tagline",
                "version",
            ]
        );
        assert_eq!(object["name"], "Evident");
        assert_eq!(object["download"]["chrome"], INFO_DOCUMENT.download.chrome);
    }
}
