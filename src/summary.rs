//! Human-readable digest of a playlist's summarized insights.

use std::fmt;

use crate::models::Playlist;

/// Marker the service puts in the name of faces it could not identify
/// ("Unknown #1", ...). English locales only.
const UNKNOWN_FACE: &str = "UNKNOWN";

/// A named element and how many times it appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrences {
    pub name: String,
    pub count: usize,
}

/// Face, brand and keyword counts from [`SummarizedInsights`](crate::SummarizedInsights).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsightsSummary {
    /// All faces, known or not.
    pub face_count: usize,
    pub unknown_faces: usize,
    /// Identified faces only.
    pub faces: Vec<Occurrences>,
    pub brands: Vec<Occurrences>,
    pub keywords: Vec<Occurrences>,
}

impl InsightsSummary {
    /// Summarize a playlist. A playlist without summarized insights yields an
    /// empty summary.
    pub fn from_playlist(playlist: &Playlist) -> Self {
        let Some(insights) = playlist.summarized_insights.as_ref() else {
            return Self::default();
        };

        let mut summary = Self {
            face_count: insights.faces.len(),
            ..Self::default()
        };

        for face in &insights.faces {
            if face.name.to_uppercase().contains(UNKNOWN_FACE) {
                summary.unknown_faces += 1;
            } else {
                summary.faces.push(Occurrences {
                    name: face.name.clone(),
                    count: face.appearances.len(),
                });
            }
        }

        summary.brands = insights
            .brands
            .iter()
            .map(|b| Occurrences {
                name: b.name.clone(),
                count: b.appearances.len(),
            })
            .collect();

        summary.keywords = insights
            .keywords
            .iter()
            .map(|k| Occurrences {
                name: k.name.clone(),
                count: k.appearances.len(),
            })
            .collect();

        summary
    }
}

impl fmt::Display for InsightsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "No of faces: {}", self.face_count)?;
        for face in &self.faces {
            writeln!(f, "  Face: {} (occurrences: {})", face.name, face.count)?;
        }
        if self.unknown_faces > 0 {
            writeln!(f, "  Unknown Faces Counted: {}", self.unknown_faces)?;
        }

        writeln!(f, "No of brands: {}", self.brands.len())?;
        for brand in &self.brands {
            writeln!(f, "  Brand: {} (occurrences: {})", brand.name, brand.count)?;
        }

        writeln!(f, "No of keywords: {}", self.keywords.len())?;
        for keyword in &self.keywords {
            writeln!(f, "  Keyword: {} (occurrences: {})", keyword.name, keyword.count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn playlist() -> Playlist {
        let appearance = json!({ "startSeconds": 0.0, "endSeconds": 1.0 });
        serde_json::from_value(json!({
            "id": "v1",
            "summarizedInsights": {
                "faces": [
                    { "id": 1, "name": "UNKNOWN #1", "appearances": [appearance] },
                    { "id": 2, "name": "Jane Doe", "appearances": [appearance, appearance, appearance] },
                ],
                "brands": [{ "id": 1, "name": "Contoso", "appearances": [appearance] }],
                "keywords": [
                    { "id": 1, "name": "rust", "appearances": [appearance, appearance] },
                    { "id": 2, "name": "video" },
                ],
            },
        }))
        .unwrap()
    }

    #[test]
    fn counts_unknown_and_named_faces() {
        let summary = InsightsSummary::from_playlist(&playlist());

        assert_eq!(summary.face_count, 2);
        assert_eq!(summary.unknown_faces, 1);
        assert_eq!(
            summary.faces,
            vec![Occurrences {
                name: "Jane Doe".into(),
                count: 3
            }]
        );
        assert_eq!(summary.brands[0].count, 1);
        assert_eq!(summary.keywords[1].count, 0);
    }

    #[test]
    fn unknown_match_ignores_case() {
        let playlist: Playlist = serde_json::from_value(json!({
            "summarizedInsights": { "faces": [{ "id": 1, "name": "Unknown #4" }] },
        }))
        .unwrap();
        let summary = InsightsSummary::from_playlist(&playlist);
        assert_eq!(summary.unknown_faces, 1);
        assert!(summary.faces.is_empty());
    }

    #[test]
    fn missing_summary_is_empty() {
        let summary = InsightsSummary::from_playlist(&Playlist::default());
        assert_eq!(summary, InsightsSummary::default());
    }

    #[test]
    fn display_renders_status_lines() {
        let text = InsightsSummary::from_playlist(&playlist()).to_string();
        assert!(text.contains("No of faces: 2"));
        assert!(text.contains("  Face: Jane Doe (occurrences: 3)"));
        assert!(text.contains("  Unknown Faces Counted: 1"));
        assert!(text.contains("  Brand: Contoso (occurrences: 1)"));
        assert!(text.contains("No of keywords: 2"));
    }
}
