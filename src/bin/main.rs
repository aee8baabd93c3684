use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Ticker};
use log::{LevelFilter, info};
use pageflow_core::{Navigator, OpenOptions, PageId, Target, toolkit::Resolution};

use pages::{DETAILS, HOME, LIBRARY, SETTINGS, Scene};

#[path = "main/pages.rs"]
mod pages;

const PAGE_CAPACITY: usize = 8;
const DISPLAY: Resolution = Resolution::new(400, 240);
const FRAME_MS: u64 = 16;

type DemoNavigator = Navigator<Scene, PAGE_CAPACITY>;

#[derive(Clone, Copy, Debug)]
enum Step {
    Open(PageId, Option<OpenOptions>),
    Back,
}

const SCRIPT: [Step; 6] = [
    Step::Open(HOME, None),
    Step::Open(LIBRARY, Some(OpenOptions::slide())),
    Step::Open(DETAILS, Some(OpenOptions::popup())),
    Step::Back,
    Step::Open(
        SETTINGS,
        Some(OpenOptions::slide().with_target(Target::Replace)),
    ),
    Step::Back,
];

fn run_step(nav: &mut DemoNavigator, step: Step) {
    let result = match step {
        Step::Open(id, options) => nav.open_page(id, options),
        Step::Back => nav.back(),
    };

    match result {
        Ok(()) => info!("nav: {:?} -> history={:?}", step, nav.history()),
        Err(err) => info!("nav: {:?} failed: {:?}", step, err),
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
    info!(
        "boot: pageflow demo display={}x{} pages={}",
        DISPLAY.width, DISPLAY.height, PAGE_CAPACITY
    );

    let mut nav = DemoNavigator::new(Scene::new(DISPLAY));
    if let Err(err) = nav.init() {
        info!("nav init failed: {:?}", err);
        return;
    }
    if let Err(err) = pages::register(&mut nav) {
        info!("page registration failed: {:?}", err);
        return;
    }

    let start = Instant::now();
    let mut ticker = Ticker::every(Duration::from_millis(FRAME_MS));
    let mut script = SCRIPT.iter().copied();

    loop {
        let now_ms = start.elapsed().as_millis();
        nav.toolkit_mut().advance(now_ms);
        let completed = nav.process_ready();
        if completed > 0 {
            info!("frame t={}ms: {} transition(s) done", now_ms, completed);
        }

        // next step only once every transition has settled
        if nav.is_idle() {
            match script.next() {
                Some(step) => run_step(&mut nav, step),
                None => {
                    info!("demo: script finished history={:?}", nav.history());
                    std::process::exit(0);
                }
            }
        }

        ticker.next().await;
    }
}
