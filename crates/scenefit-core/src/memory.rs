// crates/scenefit-core/src/memory.rs
//
// In-memory scene: the SceneEdit implementation tests and headless hosts
// use. Lookup semantics mirror a real host timeline: slots count a layer's
// objects in start order.

use crate::edit::{Dimensions, ObjectId, Placement, SceneEdit};

struct MemoryObject {
    layer:  u32,
    start:  i64,
    params: Vec<(String, String, String)>, // (effect, item, value)
}

pub struct MemoryScene {
    canvas:        Dimensions,
    objects:       Vec<MemoryObject>,
    log:           Vec<String>,
    canvas_writes: u32,
}

impl MemoryScene {
    pub fn new(canvas: Dimensions) -> Self {
        Self {
            canvas,
            objects:       Vec::new(),
            log:           Vec::new(),
            canvas_writes: 0,
        }
    }

    /// Place an object with no parameters (text, shapes, audio).
    pub fn add_object(&mut self, layer: u32, start: i64) -> ObjectId {
        let id = ObjectId(self.objects.len() as u64);
        self.objects.push(MemoryObject { layer, start, params: Vec::new() });
        id
    }

    /// Place an object carrying one effect parameter, typically a file path.
    pub fn add_media_object(
        &mut self,
        layer:  u32,
        start:  i64,
        effect: &str,
        item:   &str,
        value:  &str,
    ) -> ObjectId {
        let id = self.add_object(layer, start);
        self.add_param(id, effect, item, value);
        id
    }

    pub fn add_param(&mut self, object: ObjectId, effect: &str, item: &str, value: &str) {
        if let Some(o) = self.objects.get_mut(object.0 as usize) {
            o.params.push((effect.into(), item.into(), value.into()));
        }
    }

    pub fn log_lines(&self) -> &[String] {
        &self.log
    }

    /// How many times `set_canvas` ran. Lets tests assert "logged but did
    /// not mutate".
    pub fn canvas_writes(&self) -> u32 {
        self.canvas_writes
    }
}

impl SceneEdit for MemoryScene {
    fn canvas(&self) -> Dimensions {
        self.canvas
    }

    fn set_canvas(&mut self, size: Dimensions) {
        self.canvas = size;
        self.canvas_writes += 1;
    }

    fn max_layer(&self) -> Option<u32> {
        self.objects.iter().map(|o| o.layer).max()
    }

    fn find_object(&self, layer: u32, slot: u32) -> Option<ObjectId> {
        let mut on_layer: Vec<(i64, usize)> = self
            .objects
            .iter()
            .enumerate()
            .filter(|(_, o)| o.layer == layer)
            .map(|(i, o)| (o.start, i))
            .collect();
        on_layer.sort_by_key(|&(start, _)| start);
        on_layer.get(slot as usize).map(|&(_, i)| ObjectId(i as u64))
    }

    fn placement(&self, object: ObjectId) -> Option<Placement> {
        self.objects
            .get(object.0 as usize)
            .map(|o| Placement { layer: o.layer, start: o.start })
    }

    fn effect_value(&self, object: ObjectId, effect: &str, item: &str) -> Option<String> {
        self.objects.get(object.0 as usize)?.params.iter()
            .find(|(e, i, _)| e == effect && i == item)
            .map(|(_, _, v)| v.clone())
    }

    fn log(&mut self, line: &str) {
        self.log.push(line.to_string());
    }
}
