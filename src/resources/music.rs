use serde::{Deserialize, Serialize};

use crate::schema::{ObjectShape, ValidationSchema};

use super::{Content, PanelCopy, Resource, ResourceKind};

pub const DEFAULT_URL: &str = "https://cool-fake-data.up.railway.app/api/music";

/// A track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Music {
    pub song_name: String,
    pub album: String,
    pub artist: String,
}

impl Resource for Music {
    const KIND: ResourceKind = ResourceKind::Music;

    fn schema() -> ValidationSchema<Self> {
        ValidationSchema::new(
            "music",
            ObjectShape::new()
                .string("songName")
                .string("album")
                .string("artist"),
        )
    }

    fn copy() -> PanelCopy {
        PanelCopy {
            loading: "🎧 Cueing up a track...",
            error_headline: "😔 Sorry, the DJ missed a beat. 😔",
            error_detail: "We couldn't cue up a track right now. Try again?",
            error_retry: "Play another song",
            content_retry: "Play something else",
        }
    }

    fn content(&self) -> Option<Content> {
        Some(Content {
            headline: format!("🎵 Now playing: {}", self.song_name),
            details: vec![
                format!("Artist: {}", self.artist),
                format!("Album: {}", self.album),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schema_accepts_track() {
        let music = Music::schema()
            .validate(&json!({"songName": "X", "album": "Y", "artist": "Z"}))
            .unwrap();
        assert_eq!(
            music,
            Music {
                song_name: "X".into(),
                album: "Y".into(),
                artist: "Z".into(),
            }
        );
    }

    #[test]
    fn schema_reports_missing_fields() {
        let err = Music::schema().validate(&json!({"songName": "X"})).unwrap_err();
        assert!(err.mentions("album"));
        assert!(err.mentions("artist"));
        assert!(!err.mentions("songName"));
    }

    #[test]
    fn content_leads_with_song() {
        let content = Music {
            song_name: "Song".into(),
            album: "Album".into(),
            artist: "Artist".into(),
        }
        .content()
        .unwrap();
        assert!(content.headline.ends_with("Now playing: Song"));
        assert_eq!(content.details, vec!["Artist: Artist", "Album: Album"]);
    }
}
