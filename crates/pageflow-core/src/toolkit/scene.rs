//! Headless toolkit that keeps object state in memory.
//!
//! Drives tweens from a caller-supplied clock, so it works both for host runs
//! and for tests that step time by hand.

use heapless::{Deque, Vec};

use super::{Axis, Resolution, Toolkit, Tween};
use crate::transition::TransitionToken;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ObjectId(u8);

impl ObjectId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SceneObject {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub hidden: bool,
    pub radius: i32,
    pub border_width: i32,
    pub pad: i32,
    /// Children currently attached.
    pub children: u16,
    /// Number of times the object was cleaned.
    pub cleaned: u16,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SceneError {
    ObjectsExhausted,
    AnimationsExhausted,
    UnknownObject,
    /// Injected through [`SceneToolkit::fail_next_create`].
    OutOfMemory,
}

#[derive(Clone, Copy, Debug)]
struct RunningTween {
    obj: ObjectId,
    tween: Tween,
    token: TransitionToken,
    started_ms: u64,
}

pub struct SceneToolkit<const OBJECTS: usize, const ANIMS: usize> {
    resolution: Resolution,
    objects: Vec<SceneObject, OBJECTS>,
    tweens: Vec<RunningTween, ANIMS>,
    ready: Deque<TransitionToken, ANIMS>,
    now_ms: u64,
    root_scrollable: bool,
    fail_next_create: bool,
}

impl<const OBJECTS: usize, const ANIMS: usize> SceneToolkit<OBJECTS, ANIMS> {
    pub const fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            objects: Vec::new(),
            tweens: Vec::new(),
            ready: Deque::new(),
            now_ms: 0,
            root_scrollable: true,
            fail_next_create: false,
        }
    }

    pub fn object(&self, obj: ObjectId) -> Option<&SceneObject> {
        self.objects.get(obj.index())
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    pub fn root_scrollable(&self) -> bool {
        self.root_scrollable
    }

    /// Makes the next `create_object` fail.
    pub fn fail_next_create(&mut self) {
        self.fail_next_create = true;
    }

    pub fn set_resolution(&mut self, resolution: Resolution) {
        self.resolution = resolution;
    }

    /// Attaches a child widget to `obj`.
    pub fn add_child(&mut self, obj: ObjectId) -> Result<(), SceneError> {
        let object = self
            .objects
            .get_mut(obj.index())
            .ok_or(SceneError::UnknownObject)?;
        object.children = object.children.saturating_add(1);
        Ok(())
    }

    /// Moves the clock to `now_ms`, applies tween values, and queues finished tweens.
    ///
    /// Returns the number of tweens that finished during this step.
    pub fn advance(&mut self, now_ms: u64) -> usize {
        self.now_ms = self.now_ms.max(now_ms);

        let mut finished = 0;
        let mut index = 0;
        while index < self.tweens.len() {
            let running = self.tweens[index];
            let elapsed = self.now_ms.saturating_sub(running.started_ms);
            self.apply(running.obj, running.tween.axis, running.tween.value_at(elapsed));

            let done = elapsed >= running.tween.duration_ms as u64;
            if done && self.ready.push_back(running.token).is_ok() {
                self.tweens.swap_remove(index);
                finished += 1;
            } else {
                index += 1;
            }
        }

        finished
    }

    fn apply(&mut self, obj: ObjectId, axis: Axis, value: i32) {
        match axis {
            Axis::X => self.set_x(obj, value),
            Axis::Y => self.set_y(obj, value),
        }
    }

    fn with_object(&mut self, obj: ObjectId, update: impl FnOnce(&mut SceneObject)) {
        if let Some(object) = self.objects.get_mut(obj.index()) {
            update(object);
        }
    }
}

impl<const OBJECTS: usize, const ANIMS: usize> Toolkit for SceneToolkit<OBJECTS, ANIMS> {
    type Object = ObjectId;
    type Error = SceneError;

    fn resolution(&self) -> Resolution {
        self.resolution
    }

    fn create_object(&mut self) -> Result<ObjectId, SceneError> {
        if self.fail_next_create {
            self.fail_next_create = false;
            return Err(SceneError::OutOfMemory);
        }

        let index = u8::try_from(self.objects.len()).map_err(|_| SceneError::ObjectsExhausted)?;
        self.objects
            .push(SceneObject::default())
            .map_err(|_| SceneError::ObjectsExhausted)?;
        Ok(ObjectId(index))
    }

    fn set_hidden(&mut self, obj: ObjectId, hidden: bool) {
        self.with_object(obj, |object| object.hidden = hidden);
    }

    fn set_x(&mut self, obj: ObjectId, x: i32) {
        self.with_object(obj, |object| object.x = x);
    }

    fn set_y(&mut self, obj: ObjectId, y: i32) {
        self.with_object(obj, |object| object.y = y);
    }

    fn set_size(&mut self, obj: ObjectId, width: i32, height: i32) {
        self.with_object(obj, |object| {
            object.width = width;
            object.height = height;
        });
    }

    fn set_radius(&mut self, obj: ObjectId, radius: i32) {
        self.with_object(obj, |object| object.radius = radius);
    }

    fn set_border_width(&mut self, obj: ObjectId, width: i32) {
        self.with_object(obj, |object| object.border_width = width);
    }

    fn set_pad_all(&mut self, obj: ObjectId, pad: i32) {
        self.with_object(obj, |object| object.pad = pad);
    }

    fn clean(&mut self, obj: ObjectId) {
        self.with_object(obj, |object| {
            object.children = 0;
            object.cleaned = object.cleaned.saturating_add(1);
        });
    }

    fn animate(
        &mut self,
        obj: ObjectId,
        tween: Tween,
        token: TransitionToken,
    ) -> Result<(), SceneError> {
        if self.object(obj).is_none() {
            return Err(SceneError::UnknownObject);
        }

        self.tweens
            .push(RunningTween {
                obj,
                tween,
                token,
                started_ms: self.now_ms,
            })
            .map_err(|_| SceneError::AnimationsExhausted)?;
        self.apply(obj, tween.axis, tween.from);
        Ok(())
    }

    fn poll_ready(&mut self) -> Option<TransitionToken> {
        self.ready.pop_front()
    }

    fn set_root_scrollable(&mut self, scrollable: bool) {
        self.root_scrollable = scrollable;
    }
}
