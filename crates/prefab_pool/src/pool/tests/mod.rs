//! Shared test host and cross-module lease scenarios


use crate::foundation::math::{unit_scale, Quat, Vec3};
use crate::pool::PoolHost;

/// State the recording host keeps per instance
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedObject {
    pub prototype: &'static str,
    pub active: bool,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub parent: Option<u32>,
}

/// Host that stores instances in a vector and records every call
#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub objects: Vec<RecordedObject>,
    pub instantiated: usize,
    pub calls: usize,
    pub warnings: Vec<String>,
    /// When set, `instantiate` hands back this id instead of a new one
    pub reissue: Option<u32>,
}

impl RecordingHost {
    pub fn object(&self, id: u32) -> &RecordedObject {
        &self.objects[id as usize]
    }

    pub fn object_mut(&mut self, id: u32) -> &mut RecordedObject {
        &mut self.objects[id as usize]
    }
}

impl PoolHost for RecordingHost {
    type Prototype = &'static str;
    type Instance = u32;
    type Parent = u32;

    fn instantiate(&mut self, prototype: &Self::Prototype) -> u32 {
        self.calls += 1;
        self.instantiated += 1;
        if let Some(id) = self.reissue {
            return id;
        }

        self.objects.push(RecordedObject {
            prototype: *prototype,
            active: true,
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: unit_scale(),
            parent: None,
        });
        u32::try_from(self.objects.len() - 1).unwrap()
    }

    fn set_active(&mut self, instance: &u32, active: bool) {
        self.calls += 1;
        self.object_mut(*instance).active = active;
    }

    fn apply_placement(&mut self, instance: &u32, position: Vec3, rotation: Quat) {
        self.calls += 1;
        let object = self.object_mut(*instance);
        object.position = position;
        object.rotation = rotation;
    }

    fn set_parent(&mut self, instance: &u32, parent: Option<&u32>) {
        self.calls += 1;
        self.object_mut(*instance).parent = parent.copied();
    }

    fn reset_scale(&mut self, instance: &u32) {
        self.calls += 1;
        self.object_mut(*instance).scale = unit_scale();
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
