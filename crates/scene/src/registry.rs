use vitrine_mesh::TriMesh;

use crate::Transform;

/// One loaded model: its source path doubles as the display name, the
/// flattened geometry is fixed after load, only the transform mutates.
pub struct SceneObject {
    name: String,
    mesh: TriMesh,
    pub transform: Transform,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, mesh: TriMesh) -> Self {
        Self {
            name: name.into(),
            mesh,
            transform: Transform::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mesh(&self) -> &TriMesh {
        &self.mesh
    }
}

/// Ordered collection of scene objects with a single selection cursor.
/// Insertion order is load order and never changes.
#[derive(Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    selected: usize,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [SceneObject] {
        &mut self.objects
    }

    /// Index of the current selection. Meaningless when the scene is empty.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Advances the selection cursor cyclically. No-op on an empty scene.
    pub fn select_next(&mut self) {
        if !self.objects.is_empty() {
            self.selected = (self.selected + 1) % self.objects.len();
        }
    }

    pub fn selected(&self) -> Option<&SceneObject> {
        self.objects.get(self.selected)
    }

    pub fn selected_mut(&mut self) -> Option<&mut SceneObject> {
        self.objects.get_mut(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with(n: usize) -> Scene {
        let mesh = vitrine_obj::parse_obj(vitrine_test_data::OBJ_TRIANGLE.source.as_bytes())
            .expect("test model parses");
        let mut scene = Scene::new();
        for i in 0..n {
            scene.add(SceneObject::new(format!("model-{i}"), mesh.clone()));
        }
        scene
    }

    #[test]
    fn selection_cycles_modulo_len() {
        let mut scene = scene_with(3);
        assert_eq!(scene.selected_index(), 0);
        for k in 1..=7 {
            scene.select_next();
            assert_eq!(scene.selected_index(), k % 3);
        }
    }

    #[test]
    fn select_next_on_empty_scene_is_a_noop() {
        let mut scene = Scene::new();
        scene.select_next();
        scene.select_next();
        assert!(scene.selected().is_none());
        assert!(scene.selected_mut().is_none());
    }

    #[test]
    fn selected_returns_object_at_cursor() {
        let mut scene = scene_with(2);
        assert_eq!(scene.selected().unwrap().name(), "model-0");
        scene.select_next();
        assert_eq!(scene.selected().unwrap().name(), "model-1");
        scene.select_next();
        assert_eq!(scene.selected().unwrap().name(), "model-0");
    }
}
