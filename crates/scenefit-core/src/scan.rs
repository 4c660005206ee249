// crates/scenefit-core/src/scan.rs
//
// Timeline scan: which object counts as "first".

use crate::edit::{ObjectId, SceneEdit};

/// The first object on the timeline: minimum `(start, layer)` over each
/// layer's slot-0 object. Slot 0 is a layer's earliest object, so one lookup
/// per layer is enough. `None` on an empty timeline.
pub fn find_first_object(edit: &dyn SceneEdit) -> Option<ObjectId> {
    let max = edit.max_layer()?;
    let mut best: Option<(i64, u32, ObjectId)> = None;
    for layer in 0..=max {
        let Some(id) = edit.find_object(layer, 0) else { continue };
        let Some(p)  = edit.placement(id)         else { continue };
        let key = (p.start, p.layer);
        if best.map_or(true, |(s, l, _)| key < (s, l)) {
            best = Some((p.start, p.layer, id));
        }
    }
    best.map(|(_, _, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::Dimensions;
    use crate::memory::MemoryScene;

    #[test]
    fn empty_timeline_has_no_first_object() {
        let scene = MemoryScene::new(Dimensions::new(1280, 720));
        assert_eq!(find_first_object(&scene), None);
    }

    #[test]
    fn single_object_is_first() {
        let mut scene = MemoryScene::new(Dimensions::new(1280, 720));
        let id = scene.add_object(2, 40);
        assert_eq!(find_first_object(&scene), Some(id));
    }

    #[test]
    fn earliest_start_wins_across_layers() {
        let mut scene = MemoryScene::new(Dimensions::new(1280, 720));
        scene.add_object(0, 100);
        let early = scene.add_object(5, 10);
        scene.add_object(3, 50);
        assert_eq!(find_first_object(&scene), Some(early));
    }

    #[test]
    fn equal_starts_tie_break_to_lower_layer() {
        let mut scene = MemoryScene::new(Dimensions::new(1280, 720));
        scene.add_object(4, 25);
        let low = scene.add_object(1, 25);
        assert_eq!(find_first_object(&scene), Some(low));
    }

    #[test]
    fn layer_gaps_are_skipped() {
        let mut scene = MemoryScene::new(Dimensions::new(1280, 720));
        let only = scene.add_object(7, 0);
        assert_eq!(find_first_object(&scene), Some(only));
    }

    #[test]
    fn later_object_on_same_layer_is_ignored() {
        let mut scene = MemoryScene::new(Dimensions::new(1280, 720));
        let first = scene.add_object(0, 5);
        scene.add_object(0, 1_000);
        assert_eq!(find_first_object(&scene), Some(first));
    }
}
