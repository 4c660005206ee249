// crates/scenefit-core/src/extract.rs
//
// Maps a timeline object to the media file it displays by probing a fixed
// list of effect/item parameter names.

use std::path::PathBuf;

use crate::edit::{ObjectId, SceneEdit};
use crate::media_types::{MediaKind, MediaSource};

/// One effect parameter that may hold a media file path.
#[derive(Clone, Copy, Debug)]
pub struct MediaCandidate {
    pub kind:   MediaKind,
    pub effect: &'static str,
    pub item:   &'static str,
}

/// Parameter names tried in order. Video entries come first so an object
/// carrying both kinds resolves as video. Japanese names match the host's
/// stock effects, English names its translated builds.
pub const DEFAULT_CANDIDATES: [MediaCandidate; 4] = [
    MediaCandidate { kind: MediaKind::Video, effect: "動画ファイル", item: "ファイル" },
    MediaCandidate { kind: MediaKind::Video, effect: "VideoFile",    item: "File" },
    MediaCandidate { kind: MediaKind::Image, effect: "画像ファイル", item: "ファイル" },
    MediaCandidate { kind: MediaKind::Image, effect: "ImageFile",    item: "File" },
];

/// Resolve `object` to a media source. An empty parameter value falls
/// through to the next candidate; no match means the object is not media
/// (text, shapes, audio) and the caller keeps scanning.
pub fn extract_media_source(
    edit:       &dyn SceneEdit,
    object:     ObjectId,
    candidates: &[MediaCandidate],
) -> Option<MediaSource> {
    for c in candidates {
        match edit.effect_value(object, c.effect, c.item) {
            Some(v) if !v.is_empty() => {
                return Some(MediaSource { kind: c.kind, path: PathBuf::from(v) });
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::Dimensions;
    use crate::memory::MemoryScene;

    fn scene() -> MemoryScene {
        MemoryScene::new(Dimensions::new(1280, 720))
    }

    #[test]
    fn resolves_japanese_video_effect() {
        let mut s = scene();
        let id = s.add_media_object(0, 0, "動画ファイル", "ファイル", "clip.mp4");
        let m = extract_media_source(&s, id, &DEFAULT_CANDIDATES).unwrap();
        assert_eq!(m.kind, MediaKind::Video);
        assert_eq!(m.path, PathBuf::from("clip.mp4"));
    }

    #[test]
    fn resolves_english_image_effect() {
        let mut s = scene();
        let id = s.add_media_object(0, 0, "ImageFile", "File", "photo.png");
        let m = extract_media_source(&s, id, &DEFAULT_CANDIDATES).unwrap();
        assert_eq!(m.kind, MediaKind::Image);
        assert_eq!(m.path, PathBuf::from("photo.png"));
    }

    #[test]
    fn video_outranks_image_on_the_same_object() {
        let mut s = scene();
        let id = s.add_media_object(0, 0, "画像ファイル", "ファイル", "poster.png");
        s.add_param(id, "動画ファイル", "ファイル", "movie.mp4");
        let m = extract_media_source(&s, id, &DEFAULT_CANDIDATES).unwrap();
        assert_eq!(m.kind, MediaKind::Video);
        assert_eq!(m.path, PathBuf::from("movie.mp4"));
    }

    #[test]
    fn empty_value_falls_through_to_next_candidate() {
        let mut s = scene();
        let id = s.add_media_object(0, 0, "動画ファイル", "ファイル", "");
        s.add_param(id, "ImageFile", "File", "fallback.bmp");
        let m = extract_media_source(&s, id, &DEFAULT_CANDIDATES).unwrap();
        assert_eq!(m.kind, MediaKind::Image);
        assert_eq!(m.path, PathBuf::from("fallback.bmp"));
    }

    #[test]
    fn non_media_object_yields_none() {
        let mut s = scene();
        let id = s.add_media_object(0, 0, "テキスト", "文字", "hello");
        assert_eq!(extract_media_source(&s, id, &DEFAULT_CANDIDATES), None);
    }

    #[test]
    fn item_name_must_match_too() {
        let mut s = scene();
        let id = s.add_media_object(0, 0, "動画ファイル", "再生速度", "2.0");
        assert_eq!(extract_media_source(&s, id, &DEFAULT_CANDIDATES), None);
    }
}
