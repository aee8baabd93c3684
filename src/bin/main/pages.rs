use log::{debug, info};
use pageflow_core::{
    Hooks, NavResult, PageId,
    toolkit::scene::{ObjectId, SceneToolkit},
};

use crate::DemoNavigator;

pub(super) type Scene = SceneToolkit<{ super::PAGE_CAPACITY }, { super::PAGE_CAPACITY }>;

pub(super) const HOME: PageId = 0;
pub(super) const LIBRARY: PageId = 1;
pub(super) const DETAILS: PageId = 2;
pub(super) const SETTINGS: PageId = 3;

/// Widgets each demo page attaches on load.
const WIDGETS_PER_PAGE: usize = 3;

pub(super) fn register(nav: &mut DemoNavigator) -> NavResult {
    for id in [HOME, LIBRARY, DETAILS, SETTINGS] {
        nav.create_page(id)?.with_hooks(hooks());
    }
    info!("demo: registered 4 pages");
    Ok(())
}

fn hooks() -> Hooks<Scene> {
    Hooks {
        on_load,
        will_appear: Some(will_appear),
        did_appear: Some(did_appear),
        will_disappear: None,
        did_disappear: Some(did_disappear),
        un_load,
    }
}

fn on_load(scene: &mut Scene, obj: ObjectId) {
    for _ in 0..WIDGETS_PER_PAGE {
        if let Err(err) = scene.add_child(obj) {
            info!("demo: add widget to {:?} failed: {:?}", obj, err);
            return;
        }
    }
    debug!("demo: {:?} loaded", obj);
}

fn will_appear(scene: &mut Scene, obj: ObjectId) {
    debug!("demo: {:?} will appear at t={}ms", obj, scene.now_ms());
}

fn did_appear(scene: &mut Scene, obj: ObjectId) {
    if let Some(object) = scene.object(obj) {
        info!(
            "demo: {:?} on screen at ({}, {}) t={}ms",
            obj,
            object.x,
            object.y,
            scene.now_ms()
        );
    }
}

fn did_disappear(scene: &mut Scene, obj: ObjectId) {
    debug!("demo: {:?} left the screen t={}ms", obj, scene.now_ms());
}

fn un_load(scene: &mut Scene, obj: ObjectId) {
    let widgets = scene.object(obj).map_or(0, |object| object.children);
    info!("demo: {:?} unloading {} widgets", obj, widgets);
}
