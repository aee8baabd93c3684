use super::*;
use crate::{
    options::Direction,
    page::Hooks,
    toolkit::{
        Axis, Resolution, Tween,
        scene::{ObjectId, SceneError, SceneToolkit},
    },
    transition::TransitionToken,
};

const A: PageId = 0;
const B: PageId = 1;
const C: PageId = 2;
const D: PageId = 3;
const FRAME_MS: u64 = 500;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Event {
    OnLoad,
    WillAppear,
    DidAppear,
    WillDisappear,
    DidDisappear,
    UnLoad,
    Show,
    Hide,
    Clean,
    Animate(Axis, i32, i32),
}

/// Scene toolkit that journals hooks and visible toolkit calls.
struct Recorder<const ANIMS: usize> {
    scene: SceneToolkit<8, ANIMS>,
    events: Vec<(Event, ObjectId)>,
}

impl<const ANIMS: usize> Recorder<ANIMS> {
    fn new() -> Self {
        Self {
            scene: SceneToolkit::new(Resolution::new(400, 240)),
            events: Vec::new(),
        }
    }

    fn record(&mut self, event: Event, obj: ObjectId) {
        self.events.push((event, obj));
    }
}

impl<const ANIMS: usize> Toolkit for Recorder<ANIMS> {
    type Object = ObjectId;
    type Error = SceneError;

    fn resolution(&self) -> Resolution {
        self.scene.resolution()
    }

    fn create_object(&mut self) -> Result<ObjectId, SceneError> {
        self.scene.create_object()
    }

    fn set_hidden(&mut self, obj: ObjectId, hidden: bool) {
        self.record(if hidden { Event::Hide } else { Event::Show }, obj);
        self.scene.set_hidden(obj, hidden);
    }

    fn set_x(&mut self, obj: ObjectId, x: i32) {
        self.scene.set_x(obj, x);
    }

    fn set_y(&mut self, obj: ObjectId, y: i32) {
        self.scene.set_y(obj, y);
    }

    fn set_size(&mut self, obj: ObjectId, width: i32, height: i32) {
        self.scene.set_size(obj, width, height);
    }

    fn set_radius(&mut self, obj: ObjectId, radius: i32) {
        self.scene.set_radius(obj, radius);
    }

    fn set_border_width(&mut self, obj: ObjectId, width: i32) {
        self.scene.set_border_width(obj, width);
    }

    fn set_pad_all(&mut self, obj: ObjectId, pad: i32) {
        self.scene.set_pad_all(obj, pad);
    }

    fn clean(&mut self, obj: ObjectId) {
        self.record(Event::Clean, obj);
        self.scene.clean(obj);
    }

    fn animate(
        &mut self,
        obj: ObjectId,
        tween: Tween,
        token: TransitionToken,
    ) -> Result<(), SceneError> {
        self.scene.animate(obj, tween, token)?;
        self.record(Event::Animate(tween.axis, tween.from, tween.to), obj);
        Ok(())
    }

    fn poll_ready(&mut self) -> Option<TransitionToken> {
        self.scene.poll_ready()
    }

    fn set_root_scrollable(&mut self, scrollable: bool) {
        self.scene.set_root_scrollable(scrollable);
    }
}

fn on_load<const M: usize>(tk: &mut Recorder<M>, obj: ObjectId) {
    tk.record(Event::OnLoad, obj);
    let _ = tk.scene.add_child(obj);
}

fn will_appear<const M: usize>(tk: &mut Recorder<M>, obj: ObjectId) {
    tk.record(Event::WillAppear, obj);
}

fn did_appear<const M: usize>(tk: &mut Recorder<M>, obj: ObjectId) {
    tk.record(Event::DidAppear, obj);
}

fn will_disappear<const M: usize>(tk: &mut Recorder<M>, obj: ObjectId) {
    tk.record(Event::WillDisappear, obj);
}

fn did_disappear<const M: usize>(tk: &mut Recorder<M>, obj: ObjectId) {
    tk.record(Event::DidDisappear, obj);
}

fn un_load<const M: usize>(tk: &mut Recorder<M>, obj: ObjectId) {
    tk.record(Event::UnLoad, obj);
}

fn recording_hooks<const M: usize>() -> Hooks<Recorder<M>> {
    Hooks {
        on_load: on_load::<M>,
        will_appear: Some(will_appear::<M>),
        did_appear: Some(did_appear::<M>),
        will_disappear: Some(will_disappear::<M>),
        did_disappear: Some(did_disappear::<M>),
        un_load: un_load::<M>,
    }
}

fn navigator_with<const M: usize>() -> Navigator<Recorder<M>, 4> {
    let mut nav = Navigator::new(Recorder::new());
    nav.init().unwrap();
    for id in [A, B, C, D] {
        nav.create_page(id)
            .unwrap()
            .with_hooks(recording_hooks::<M>());
    }
    nav.toolkit_mut().events.clear();
    nav
}

fn navigator() -> Navigator<Recorder<8>, 4> {
    navigator_with::<8>()
}

fn obj<const M: usize>(nav: &Navigator<Recorder<M>, 4>, id: PageId) -> ObjectId {
    nav.page(id).unwrap().object()
}

fn take_events<const M: usize>(nav: &mut Navigator<Recorder<M>, 4>) -> Vec<(Event, ObjectId)> {
    core::mem::take(&mut nav.toolkit_mut().events)
}

/// Runs the render loop until every transition has completed.
fn settle<const M: usize>(nav: &mut Navigator<Recorder<M>, 4>) {
    for _ in 0..8 {
        let now = nav.toolkit().scene.now_ms() + FRAME_MS;
        nav.toolkit_mut().scene.advance(now);
        nav.process_ready();
        if nav.is_idle() {
            return;
        }
    }
    panic!("transitions did not settle");
}

fn slide() -> Option<OpenOptions> {
    Some(OpenOptions::slide())
}

#[test]
fn create_page_is_hidden_and_sized_to_display() {
    let nav = navigator();
    let object = *nav.toolkit().scene.object(obj(&nav, C)).unwrap();

    assert!(object.hidden);
    assert_eq!((object.width, object.height), (400, 240));
}

#[test]
fn init_stops_root_scrolling() {
    let nav = navigator();
    assert!(!nav.toolkit().scene.root_scrollable());
    assert!(nav.history().is_empty());
}

#[test]
fn first_open_runs_appear_sequence() {
    let mut nav = navigator();
    let a = obj(&nav, A);

    nav.open_page(A, slide()).unwrap();

    assert_eq!(nav.history(), &[A]);
    assert_eq!(
        take_events(&mut nav),
        vec![
            (Event::OnLoad, a),
            (Event::Show, a),
            (Event::WillAppear, a),
            (Event::Animate(Axis::X, 400, 0), a),
        ]
    );
    assert!(matches!(nav.page(A).unwrap().state(), PageState::Appearing(_)));

    settle(&mut nav);

    assert_eq!(take_events(&mut nav), vec![(Event::DidAppear, a)]);
    assert_eq!(nav.page(A).unwrap().state(), PageState::Idle);
    assert!(!nav.toolkit().scene.object(a).unwrap().hidden);
    assert_eq!(nav.toolkit().scene.object(a).unwrap().x, 0);
}

#[test]
fn unanimated_open_completes_synchronously() {
    let mut nav = navigator();
    let a = obj(&nav, A);

    nav.open_page(A, None).unwrap();

    assert_eq!(
        take_events(&mut nav),
        vec![
            (Event::OnLoad, a),
            (Event::Show, a),
            (Event::WillAppear, a),
            (Event::DidAppear, a),
        ]
    );
    assert!(nav.is_idle());
}

#[test]
fn open_new_pushes_and_moves_previous_with_new_options() {
    let mut nav = navigator();
    let (a, b) = (obj(&nav, A), obj(&nav, B));
    nav.open_page(A, None).unwrap();
    take_events(&mut nav);

    nav.open_page(B, Some(OpenOptions::popup().with_target(Target::New)))
        .unwrap();

    assert_eq!(nav.history(), &[A, B]);
    assert_eq!(
        take_events(&mut nav),
        vec![
            (Event::WillDisappear, a),
            (Event::Animate(Axis::Y, 0, 5), a),
            (Event::OnLoad, b),
            (Event::Show, b),
            (Event::WillAppear, b),
            (Event::Animate(Axis::Y, 240, 15), b),
        ]
    );

    settle(&mut nav);

    let events = take_events(&mut nav);
    assert!(events.contains(&(Event::DidDisappear, a)));
    assert!(events.contains(&(Event::DidAppear, b)));
    // a popup leaves the page underneath visible and loaded
    assert!(!events.contains(&(Event::Hide, a)));
    assert!(!events.contains(&(Event::UnLoad, a)));
    assert_eq!(nav.toolkit().scene.object(b).unwrap().radius, 10);
}

#[test]
fn unanimated_open_hides_previous_before_loading_next() {
    let mut nav = navigator();
    let (a, b) = (obj(&nav, A), obj(&nav, B));
    nav.open_page(A, None).unwrap();
    take_events(&mut nav);

    nav.open_page(B, None).unwrap();

    assert_eq!(
        take_events(&mut nav),
        vec![
            (Event::WillDisappear, a),
            (Event::Hide, a),
            (Event::DidDisappear, a),
            (Event::OnLoad, b),
            (Event::Show, b),
            (Event::WillAppear, b),
            (Event::DidAppear, b),
        ]
    );
}

#[test]
fn open_replace_takes_previous_slot_and_unloads_it() {
    let mut nav = navigator();
    let a = obj(&nav, A);
    nav.open_page(A, None).unwrap();

    nav.open_page(B, Some(OpenOptions::slide().with_target(Target::Replace)))
        .unwrap();
    assert_eq!(nav.history(), &[B]);
    take_events(&mut nav);

    settle(&mut nav);

    let events = take_events(&mut nav);
    let a_events: Vec<Event> = events
        .iter()
        .filter(|(_, target)| *target == a)
        .map(|(event, _)| *event)
        .collect();
    assert_eq!(
        a_events,
        vec![Event::Hide, Event::DidDisappear, Event::UnLoad, Event::Clean]
    );

    let object = nav.toolkit().scene.object(a).unwrap();
    assert!(object.hidden);
    assert_eq!(object.children, 0);
    assert_eq!(object.cleaned, 1);
}

#[test]
fn replace_on_empty_history_pushes() {
    let mut nav = navigator();

    nav.open_page(C, Some(OpenOptions::default().with_target(Target::Replace)))
        .unwrap();

    assert_eq!(nav.history(), &[C]);
}

#[test]
fn reset_target_pushes_like_new() {
    let mut nav = navigator();
    nav.open_page(A, None).unwrap();

    nav.open_page(B, Some(OpenOptions::default().with_target(Target::Reset)))
        .unwrap();

    assert_eq!(nav.history(), &[A, B]);
}

#[test]
fn reopening_top_page_keeps_it_on_screen() {
    let mut nav = navigator();
    let a = obj(&nav, A);
    nav.open_page(A, slide()).unwrap();
    settle(&mut nav);
    take_events(&mut nav);

    nav.open_page(A, slide()).unwrap();

    assert_eq!(nav.history(), &[A, A]);
    assert_eq!(
        take_events(&mut nav),
        vec![
            (Event::OnLoad, a),
            (Event::Show, a),
            (Event::WillAppear, a),
            (Event::Animate(Axis::X, 400, 0), a),
        ]
    );

    settle(&mut nav);

    assert_eq!(take_events(&mut nav), vec![(Event::DidAppear, a)]);
    let object = nav.toolkit().scene.object(a).unwrap();
    assert!(!object.hidden);
    assert_eq!(object.x, 0);
}

#[test]
fn replacing_top_page_with_itself_does_not_unload_it() {
    let mut nav = navigator();
    let a = obj(&nav, A);
    let replace = Some(OpenOptions::slide().with_target(Target::Replace));
    nav.open_page(A, replace).unwrap();
    settle(&mut nav);
    take_events(&mut nav);

    nav.open_page(A, replace).unwrap();
    settle(&mut nav);

    assert_eq!(nav.history(), &[A]);
    let events = take_events(&mut nav);
    assert!(!events.contains(&(Event::UnLoad, a)));
    assert!(!events.contains(&(Event::Clean, a)));
    assert!(!nav.toolkit().scene.object(a).unwrap().hidden);
}

#[test]
fn open_without_options_pushes_but_unloads_with_stored_replace() {
    let mut nav = navigator();
    let a = obj(&nav, A);
    nav.open_page(A, None).unwrap();
    nav.open_page(B, Some(OpenOptions::default().with_target(Target::Replace)))
        .unwrap();
    nav.open_page(A, None).unwrap();
    assert_eq!(nav.history(), &[B, A]);
    take_events(&mut nav);

    // B still carries Target::Replace from its first open
    nav.open_page(B, None).unwrap();

    assert_eq!(nav.history(), &[B, A, B]);
    let a_events: Vec<Event> = take_events(&mut nav)
        .iter()
        .filter(|(_, target)| *target == a)
        .map(|(event, _)| *event)
        .collect();
    assert_eq!(
        a_events,
        vec![
            Event::WillDisappear,
            Event::Hide,
            Event::DidDisappear,
            Event::UnLoad,
            Event::Clean
        ]
    );
}

#[test]
fn back_with_short_history_is_noop() {
    let mut nav = navigator();
    assert_eq!(nav.back(), Ok(()));
    assert!(nav.history().is_empty());

    nav.open_page(A, None).unwrap();
    take_events(&mut nav);

    assert_eq!(nav.back(), Ok(()));
    assert_eq!(nav.history(), &[A]);
    assert!(take_events(&mut nav).is_empty());
}

#[test]
fn back_round_trip_reshows_previous_and_unloads_current() {
    let mut nav = navigator();
    let (a, b) = (obj(&nav, A), obj(&nav, B));
    nav.open_page(A, slide()).unwrap();
    settle(&mut nav);
    nav.open_page(B, slide()).unwrap();
    settle(&mut nav);
    take_events(&mut nav);

    nav.back().unwrap();

    assert_eq!(nav.history(), &[A]);
    assert_eq!(
        take_events(&mut nav),
        vec![
            (Event::WillDisappear, b),
            (Event::Animate(Axis::X, 0, 400), b),
            (Event::WillAppear, a),
            (Event::Show, a),
            (Event::Animate(Axis::X, -400, 0), a),
        ]
    );
    assert!(nav.page(A).unwrap().is_back());
    assert!(nav.page(B).unwrap().is_back());

    settle(&mut nav);

    let events = take_events(&mut nav);
    let b_events: Vec<Event> = events
        .iter()
        .filter(|(_, target)| *target == b)
        .map(|(event, _)| *event)
        .collect();
    assert_eq!(
        b_events,
        vec![Event::Hide, Event::DidDisappear, Event::UnLoad, Event::Clean]
    );
    assert!(events.contains(&(Event::DidAppear, a)));
    assert!(!events.contains(&(Event::UnLoad, a)));
}

#[test]
fn back_onto_same_page_only_reveals_it() {
    let mut nav = navigator();
    let a = obj(&nav, A);
    nav.open_page(A, slide()).unwrap();
    settle(&mut nav);
    nav.open_page(A, slide()).unwrap();
    settle(&mut nav);
    take_events(&mut nav);

    nav.back().unwrap();

    assert_eq!(nav.history(), &[A]);
    assert_eq!(
        take_events(&mut nav),
        vec![
            (Event::WillAppear, a),
            (Event::Show, a),
            (Event::Animate(Axis::X, -400, 0), a),
        ]
    );

    settle(&mut nav);

    assert_eq!(take_events(&mut nav), vec![(Event::DidAppear, a)]);
    let object = nav.toolkit().scene.object(a).unwrap();
    assert!(!object.hidden);
    assert_eq!(object.cleaned, 0);
}

#[test]
fn back_animates_revealed_page_with_departing_options() {
    let mut nav = navigator();
    let a = obj(&nav, A);
    nav.open_page(A, slide()).unwrap();
    settle(&mut nav);
    nav.open_page(B, Some(OpenOptions::popup())).unwrap();
    settle(&mut nav);
    take_events(&mut nav);

    nav.back().unwrap();

    let events = take_events(&mut nav);
    assert!(events.contains(&(Event::Animate(Axis::Y, 5, 0), a)));
    settle(&mut nav);
    assert_eq!(nav.toolkit().scene.object(a).unwrap().radius, 0);
}

#[test]
fn open_without_options_reuses_stored_options() {
    let mut nav = navigator();
    let b = obj(&nav, B);
    nav.open_page(A, None).unwrap();
    nav.open_page(B, slide()).unwrap();
    settle(&mut nav);
    nav.back().unwrap();
    settle(&mut nav);
    take_events(&mut nav);

    nav.open_page(B, None).unwrap();

    assert_eq!(nav.history(), &[A, B]);
    assert!(take_events(&mut nav).contains(&(Event::Animate(Axis::X, 400, 0), b)));
}

#[test]
fn direction_is_stored_but_not_consulted() {
    let mut nav = navigator();
    let a = obj(&nav, A);
    let options = OpenOptions::slide().with_direction(Direction::Bottom);

    nav.open_page(A, Some(options)).unwrap();

    assert_eq!(nav.page(A).unwrap().options(), options);
    assert!(take_events(&mut nav).contains(&(Event::Animate(Axis::X, 400, 0), a)));
}

#[test]
fn unregistered_page_is_rejected_without_mutation() {
    let mut nav: Navigator<Recorder<8>, 4> = Navigator::new(Recorder::new());
    nav.init().unwrap();
    nav.create_page(A).unwrap();
    nav.open_page(A, None).unwrap();
    take_events(&mut nav);

    assert_eq!(nav.open_page(B, slide()), Err(NavError::PageNotRegistered));
    assert_eq!(nav.history(), &[A]);
    assert!(take_events(&mut nav).is_empty());
}

#[test]
fn out_of_range_page_is_rejected() {
    let mut nav = navigator();
    assert_eq!(nav.open_page(4, None), Err(NavError::InvalidPageId));
    assert!(matches!(nav.create_page(9), Err(NavError::InvalidPageId)));
}

#[test]
fn full_history_is_rejected_without_mutation() {
    let mut nav = navigator();
    for id in [A, B, C, D] {
        nav.open_page(id, None).unwrap();
    }
    take_events(&mut nav);

    assert_eq!(nav.open_page(A, None), Err(NavError::HistoryFull));
    assert_eq!(nav.history(), &[A, B, C, D]);
    assert!(take_events(&mut nav).is_empty());
}

#[test]
fn navigation_during_transition_is_rejected() {
    let mut nav = navigator();
    nav.open_page(A, slide()).unwrap();
    take_events(&mut nav);

    assert_eq!(nav.open_page(B, slide()), Err(NavError::TransitionPending));
    assert_eq!(nav.history(), &[A]);
    assert!(take_events(&mut nav).is_empty());

    settle(&mut nav);
    assert_eq!(nav.open_page(B, slide()), Ok(()));
}

#[test]
fn back_during_transition_is_rejected() {
    let mut nav = navigator();
    nav.open_page(A, None).unwrap();
    nav.open_page(B, slide()).unwrap();

    assert_eq!(nav.back(), Err(NavError::TransitionPending));
    assert_eq!(nav.history(), &[A, B]);

    settle(&mut nav);
    assert_eq!(nav.back(), Ok(()));
    assert_eq!(nav.history(), &[A]);
}

#[test]
fn idle_pages_can_animate_while_others_are_in_flight() {
    let mut nav = navigator();
    nav.open_page(A, None).unwrap();
    nav.open_page(B, slide()).unwrap();
    settle(&mut nav);
    nav.open_page(C, Some(OpenOptions::popup())).unwrap();

    // B and C are busy, D is not involved
    assert!(!nav.is_idle());
    assert_eq!(nav.page(D).unwrap().state(), PageState::Idle);
    settle(&mut nav);
    assert_eq!(nav.history(), &[A, B, C]);
}

#[test]
fn tween_exhaustion_completes_synchronously() {
    let mut nav = navigator_with::<1>();
    let (a, b) = (obj(&nav, A), obj(&nav, B));
    nav.open_page(A, None).unwrap();
    take_events(&mut nav);

    // A's disappear takes the only tween; B's appear falls back to immediate completion
    nav.open_page(B, slide()).unwrap();

    let events = take_events(&mut nav);
    assert!(events.contains(&(Event::Animate(Axis::X, 0, -400), a)));
    assert!(events.contains(&(Event::DidAppear, b)));
    assert_eq!(nav.page(B).unwrap().state(), PageState::Idle);

    settle(&mut nav);
    assert!(take_events(&mut nav).contains(&(Event::DidDisappear, a)));
}

#[test]
fn ready_events_after_init_are_ignored() {
    let mut nav = navigator();
    nav.open_page(A, slide()).unwrap();
    nav.init().unwrap();
    take_events(&mut nav);

    nav.toolkit_mut().scene.advance(FRAME_MS);

    assert_eq!(nav.process_ready(), 0);
    assert!(take_events(&mut nav).is_empty());
    assert!(nav.is_idle());
}

#[test]
fn default_hooks_are_safe_noops() {
    let mut nav: Navigator<Recorder<8>, 4> = Navigator::new(Recorder::new());
    nav.init().unwrap();
    nav.create_page(A).unwrap();
    nav.create_page(B).unwrap();
    nav.open_page(A, None).unwrap();
    nav.open_page(B, slide()).unwrap();
    settle(&mut nav);

    assert_eq!(nav.back(), Ok(()));
    settle(&mut nav);
    assert_eq!(nav.current_page(), Some(A));
}
