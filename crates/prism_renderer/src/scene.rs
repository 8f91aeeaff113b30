//! Scene aggregate: entities, lights, and the queries shading relies on.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::entity::{Entity, EntityId};
use crate::hittable::{Hittable, RayHit};
use prism_core::{PointLight, SceneDescription, SceneError, SceneOptions, SceneResult};
use prism_math::Ray;

/// The nearest intersection along a ray, and the entity that produced it.
#[derive(Debug, Clone, Copy)]
pub struct SceneHit<'a> {
    pub hit: RayHit<'a>,
    pub entity: EntityId,
}

/// A renderable scene.
///
/// Entities and lights behave as sets: adding a value equal to one already
/// present has no effect. The scene is not modified while rendering.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    options: SceneOptions,
    entities: Vec<Entity>,
    lights: Vec<PointLight>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(options: SceneOptions) -> Self {
        Self {
            options,
            entities: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Build a scene from a description, sharing each named material
    /// between the entities that use it.
    pub fn from_description(description: &SceneDescription) -> SceneResult<Self> {
        description.validate()?;

        let materials: BTreeMap<&str, Arc<_>> = description
            .materials
            .iter()
            .map(|(name, material)| (name.as_str(), Arc::new(*material)))
            .collect();

        let mut scene = Scene::new(description.options);

        for (index, object) in description.objects.iter().enumerate() {
            let material = materials
                .get(object.material.as_str())
                .ok_or_else(|| SceneError::UnknownMaterial {
                    index,
                    name: object.material.clone(),
                })?;
            scene.add_entity(Entity::from_shape(&object.shape, Arc::clone(material)));
        }

        for light in &description.lights {
            scene.add_light(*light);
        }

        log::debug!(
            "Built scene '{}': {} entities, {} lights",
            description.name,
            scene.entities.len(),
            scene.lights.len()
        );

        Ok(scene)
    }

    /// Add an entity and return its handle.
    ///
    /// If an equal entity is already present, its handle is returned and
    /// nothing is added.
    pub fn add_entity(&mut self, entity: impl Into<Entity>) -> EntityId {
        let entity = entity.into();
        if let Some(index) = self.entities.iter().position(|e| *e == entity) {
            log::warn!("Ignoring duplicate {} (entity {})", entity.kind_name(), index);
            return EntityId(index);
        }

        self.entities.push(entity);
        EntityId(self.entities.len() - 1)
    }

    /// Add a point light. Returns false if an equal light is already present.
    pub fn add_light(&mut self, light: PointLight) -> bool {
        if self.lights.contains(&light) {
            log::warn!("Ignoring duplicate light at {:?}", light.position);
            return false;
        }
        self.lights.push(light);
        true
    }

    pub fn options(&self) -> &SceneOptions {
        &self.options
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Get an entity by handle.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0)
    }

    /// Get the number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if the scene has no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Find the closest intersection along a ray.
    ///
    /// Distance is measured from the ray origin. When two entities are hit
    /// at exactly the same distance, the one added first wins.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<SceneHit<'_>> {
        let mut nearest = None;
        let mut closest_so_far = f32::INFINITY;

        for (index, entity) in self.entities.iter().enumerate() {
            if let Some(hit) = entity.intersect(ray) {
                let distance = hit.position.distance_squared(ray.origin());
                if distance < closest_so_far {
                    closest_so_far = distance;
                    nearest = Some(SceneHit {
                        hit,
                        entity: EntityId(index),
                    });
                }
            }
        }

        nearest
    }

    /// Check whether `light` reaches a point on `entity`.
    ///
    /// The test ray starts at the light and travels towards the point, so the
    /// entity itself is the expected first hit; anything nearer occludes.
    pub fn is_lit(&self, entity: EntityId, hit: &RayHit, light: &PointLight) -> bool {
        let Some(ray) = Ray::towards(light.position, hit.position) else {
            // The light sits on the surface
            return true;
        };

        match self.nearest_hit(&ray) {
            Some(first) => first.entity == entity,
            None => true,
        }
    }

    /// Check whether any light reaches a point on `entity`.
    pub fn is_lit_by_any(&self, entity: EntityId, hit: &RayHit) -> bool {
        self.lights.iter().any(|light| self.is_lit(entity, hit, light))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plane, Sphere};
    use prism_core::{Color, Material, Shape};
    use prism_math::Vec3;

    fn material() -> Arc<Material> {
        Arc::new(Material::diffuse(Color::new(0.8, 0.8, 0.8)))
    }

    fn sphere(z: f32) -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, z), 1.0, material())
    }

    #[test]
    fn test_nearest_hit_ignores_insertion_order() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();

        for order in [[5.0, 10.0], [10.0, 5.0]] {
            let mut scene = Scene::new(SceneOptions::default());
            let ids: Vec<EntityId> = order.iter().map(|&z| scene.add_entity(sphere(z))).collect();
            let near_id = if order[0] == 5.0 { ids[0] } else { ids[1] };

            let nearest = scene.nearest_hit(&ray).unwrap();
            assert_eq!(nearest.entity, near_id);
            assert!((nearest.hit.position.z - 4.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_nearest_hit_miss() {
        let mut scene = Scene::new(SceneOptions::default());
        scene.add_entity(sphere(5.0));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z).unwrap();
        assert!(scene.nearest_hit(&ray).is_none());
        assert!(Scene::default().nearest_hit(&ray).is_none());
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut scene = Scene::new(SceneOptions::default());
        let a = scene.add_entity(sphere(5.0));
        let b = scene.add_entity(sphere(5.0));
        let c = scene.add_entity(sphere(8.0));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(scene.len(), 2);

        let light = PointLight::white(Vec3::new(0.0, 5.0, 0.0));
        assert!(scene.add_light(light));
        assert!(!scene.add_light(light));
        assert_eq!(scene.lights().len(), 1);
    }

    #[test]
    fn test_identical_shapes_stay_distinct_entities() {
        let mut scene = Scene::new(SceneOptions::default());
        let red = Arc::new(Material::diffuse(Color::new(1.0, 0.0, 0.0)));
        let blue = Arc::new(Material::diffuse(Color::new(0.0, 0.0, 1.0)));
        let a = scene.add_entity(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, red));
        let b = scene.add_entity(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, blue));

        assert_ne!(a, b);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_occluder_blocks_light() {
        let light = PointLight::white(Vec3::new(0.0, 10.0, 0.0));
        let floor = Plane::new(Vec3::ZERO, Vec3::Y, material());
        let occluder = Sphere::new(Vec3::new(0.0, 5.0, 0.0), 1.0, material());
        let ray = Ray::new(Vec3::new(0.0, 1.0, -1.0), Vec3::new(0.0, -1.0, 1.0)).unwrap();

        // With the occluder the point directly below it is in shadow
        let mut scene = Scene::new(SceneOptions::default());
        let floor_id = scene.add_entity(floor.clone());
        scene.add_entity(occluder);
        scene.add_light(light);

        let hit = scene.nearest_hit(&ray).unwrap();
        assert_eq!(hit.entity, floor_id);
        assert!(!scene.is_lit(floor_id, &hit.hit, &light));
        assert!(!scene.is_lit_by_any(floor_id, &hit.hit));

        // Removing it lets the light through
        let mut scene = Scene::new(SceneOptions::default());
        let floor_id = scene.add_entity(floor);
        scene.add_light(light);

        let hit = scene.nearest_hit(&ray).unwrap();
        assert!(scene.is_lit(floor_id, &hit.hit, &light));
        assert!(scene.is_lit_by_any(floor_id, &hit.hit));
    }

    #[test]
    fn test_lit_by_any_light() {
        let mut scene = Scene::new(SceneOptions::default());
        let floor_id = scene.add_entity(Plane::new(Vec3::ZERO, Vec3::Y, material()));
        scene.add_entity(Sphere::new(Vec3::new(0.0, 5.0, 0.0), 1.0, material()));
        let blocked = PointLight::white(Vec3::new(0.0, 10.0, 0.0));
        let open = PointLight::white(Vec3::new(10.0, 10.0, 0.0));
        scene.add_light(blocked);
        scene.add_light(open);

        let ray = Ray::new(Vec3::new(0.0, 1.0, -1.0), Vec3::new(0.0, -1.0, 1.0)).unwrap();
        let hit = scene.nearest_hit(&ray).unwrap();

        assert!(!scene.is_lit(floor_id, &hit.hit, &blocked));
        assert!(scene.is_lit(floor_id, &hit.hit, &open));
        assert!(scene.is_lit_by_any(floor_id, &hit.hit));
    }

    #[test]
    fn test_surface_does_not_shadow_itself() {
        let mut scene = Scene::new(SceneOptions::default());
        let id = scene.add_entity(sphere(5.0));
        let light = PointLight::white(Vec3::new(0.0, 5.0, 0.0));
        scene.add_light(light);

        let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();
        let hit = scene.nearest_hit(&ray).unwrap();
        assert!(scene.is_lit(id, &hit.hit, &light));
    }

    #[test]
    fn test_from_description() {
        let mut description = SceneDescription::new("test");
        description.add_material("grey", Material::diffuse(Color::splat(0.5)));
        description.add_object(
            Shape::Sphere {
                center: Vec3::new(0.0, 0.0, 5.0),
                radius: 1.0,
            },
            "grey",
        );
        description.add_object(
            Shape::Plane {
                point: Vec3::new(0.0, -1.0, 0.0),
                normal: Vec3::Y,
            },
            "grey",
        );
        description.add_light(PointLight::white(Vec3::new(0.0, 5.0, 0.0)));

        let scene = Scene::from_description(&description).unwrap();
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.lights().len(), 1);
        assert!(matches!(scene.entity(EntityId(0)), Some(Entity::Sphere(_))));

        description.add_object(
            Shape::Sphere {
                center: Vec3::ZERO,
                radius: 1.0,
            },
            "missing",
        );
        assert!(Scene::from_description(&description).is_err());
    }
}
