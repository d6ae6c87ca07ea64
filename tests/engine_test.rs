//! Integration tests for the frame loop.
//!
//! Wires scenes, bindings, and the scheduler together the way a host
//! would: mirror layout in, advance simulated time frame by frame, read
//! properties back.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use scrollweave::core::contact::{ContactForm, SubmissionState};
use scrollweave::core::floating::{FloatingField, FloatingFieldGenerator, ParticleBurst};
use scrollweave::core::reveal::RevealOnEntry;
use scrollweave::core::scene::{LayoutBox, Scene};
use scrollweave::core::scheduler::{FrameScheduler, TaskStatus};
use scrollweave::core::scroll::layer_parallax_binding;
use scrollweave::core::timeline::TimelineState;
use scrollweave::core::view::{landing_intro, MediaCommand, View, ViewController};
use scrollweave::motion_config::{
    AudioConfig, BackgroundLayersConfig, FloatingFieldConfig, LandingConfig, MotionConfig,
    ParticleBurstConfig, RevealConfig,
};

const FRAME: Duration = Duration::from_millis(16);

fn run_frames(scheduler: &mut FrameScheduler, scene: &mut Scene, start: Instant, n: u32) -> Instant {
    let mut now = start;
    for _ in 0..n {
        now += FRAME;
        scheduler.tick(scene, now);
    }
    now
}

#[test]
fn test_background_layers_separate_with_scroll() {
    let mut scene = Scene::new(1280.0, 800.0);
    let page = scene.add_element(LayoutBox::new(0.0, 0.0, 1280.0, 800.0));
    let config = BackgroundLayersConfig::default();
    let layers: Vec<u32> = config
        .layer_speeds
        .iter()
        .map(|_| scene.add_element(LayoutBox::new(0.0, 0.0, 1280.0, config.layer_height)))
        .collect();

    let mut scheduler = FrameScheduler::new();
    let scope = scheduler.scope();
    for (layer, speed) in layers.iter().zip(config.layer_speeds) {
        let mut binding = layer_parallax_binding(page, *layer, speed, config.layer_height);
        scheduler.register(scope, move |scene, _| {
            binding.apply(scene);
            TaskStatus::Running
        });
    }

    // Page spans scroll −800 (top at viewport bottom) to 800 (bottom at
    // viewport top); scroll 0 is the midpoint.
    scene.set_scroll(0.0);
    scheduler.tick(&mut scene, Instant::now());

    let offsets: Vec<f32> = layers
        .iter()
        .map(|l| scene.props(*l).unwrap().y)
        .collect();
    // Faster layers rise further; all rise (negative y).
    for w in offsets.windows(2) {
        assert!(w[1] < w[0]);
    }
    assert!(offsets.iter().all(|y| *y < 0.0));
    // speed 0.8 layer at progress 0.5: −0.5 × 0.8 × 960 × 0.5 = −192.
    assert!((offsets[3] + 192.0).abs() < 0.5);
}

#[test]
fn test_reveal_toggles_across_threshold_in_frame_loop() {
    let mut scene = Scene::new(1280.0, 800.0);
    let section = scene.add_element(LayoutBox::new(0.0, 1200.0, 1280.0, 600.0));
    let card = scene.add_element(LayoutBox::new(100.0, 1250.0, 400.0, 200.0));
    let mut reveal = RevealOnEntry::new(section, vec![card], RevealConfig::default());

    let mut scheduler = FrameScheduler::new();
    let scope = scheduler.scope();
    scheduler.register(scope, move |scene, now| {
        reveal.update(scene, now);
        TaskStatus::Running
    });

    let t0 = Instant::now();
    // Section top at 1200, threshold line at scroll + 640.
    scene.set_scroll(0.0);
    let t1 = run_frames(&mut scheduler, &mut scene, t0, 5);
    assert_eq!(scene.props(card).unwrap().opacity, 0.0);

    scene.set_scroll(600.0);
    let t2 = run_frames(&mut scheduler, &mut scene, t1, 70); // ~1.1s
    assert_eq!(scene.props(card).unwrap().opacity, 1.0);
    assert_eq!(scene.props(card).unwrap().y, 0.0);

    // Scroll back up: the reveal reverses.
    scene.set_scroll(0.0);
    run_frames(&mut scheduler, &mut scene, t2, 70);
    assert_eq!(scene.props(card).unwrap().opacity, 0.0);
    assert_eq!(scene.props(card).unwrap().y, 50.0);
}

#[test]
fn test_intro_completion_spawns_burst_which_cleans_up() {
    let mut scene = Scene::new(1280.0, 800.0);
    let title = scene.add_element(LayoutBox::new(200.0, 300.0, 880.0, 120.0));
    let subtitle = scene.add_element(LayoutBox::new(300.0, 440.0, 680.0, 40.0));

    let burst_requested = Arc::new(AtomicBool::new(false));
    let flag = burst_requested.clone();
    let mut intro = landing_intro(title, subtitle, &LandingConfig::default())
        .on_complete(move || flag.store(true, Ordering::SeqCst));

    let t0 = Instant::now();
    intro.play(t0).unwrap();

    let mut scheduler = FrameScheduler::new();
    let scope = scheduler.scope();
    scheduler.register(scope, move |scene, now| {
        intro.update(scene, now);
        match intro.state() {
            TimelineState::Playing => TaskStatus::Running,
            _ => TaskStatus::Finished,
        }
    });

    // 1.5s + 1.2s − 0.8s overlap = 1.9s; run 2 seconds of frames.
    let after_intro = run_frames(&mut scheduler, &mut scene, t0, 125);
    assert!(burst_requested.load(Ordering::SeqCst));
    assert_eq!(scheduler.task_count(), 0);
    assert_eq!(scene.props(title).unwrap().opacity, 1.0);
    assert_eq!(scene.props(subtitle).unwrap().y, 0.0);

    // The host reacts to the completion by spawning the burst.
    let config = ParticleBurstConfig::default();
    let burst = Arc::new(Mutex::new(ParticleBurst::spawn(
        &mut scene,
        LayoutBox::new(0.0, 0.0, 1280.0, 800.0),
        &config,
        11,
        after_intro,
    )));
    assert_eq!(scene.len(), 2 + config.count);
    let burst_scope = scheduler.scope();
    let burst_task = burst.clone();
    scheduler.register(burst_scope, move |scene, now| {
        burst_task.lock().unwrap().update(scene, now)
    });

    run_frames(&mut scheduler, &mut scene, after_intro, 90);
    assert_eq!(scheduler.task_count(), 1);

    // Dismissing the landing view tears the burst down completely.
    scheduler.unregister_scope(burst_scope);
    burst.lock().unwrap().despawn(&mut scene);
    assert_eq!(scheduler.task_count(), 0);
    assert_eq!(burst.lock().unwrap().live_count(), 0);
    assert_eq!(scene.len(), 2);
}

#[test]
fn test_view_scope_teardown_removes_only_its_tasks() {
    let mut scene = Scene::new(1280.0, 800.0);
    let hero = scene.add_element(LayoutBox::new(0.0, 0.0, 1280.0, 2000.0));
    let mut scheduler = FrameScheduler::new();

    let landing_scope = scheduler.scope();
    let portfolio_scope = scheduler.scope();

    let specs =
        FloatingFieldGenerator::generate(&FloatingFieldConfig::default(), 1280.0, 2000.0, 3);
    let t0 = Instant::now();
    let field = Arc::new(Mutex::new(FloatingField::mount(
        &mut scene,
        hero,
        specs,
        t0,
    )));
    let field_task = field.clone();
    scheduler.register(landing_scope, move |scene, now| {
        field_task.lock().unwrap().update(scene, now);
        TaskStatus::Running
    });
    scheduler.register(portfolio_scope, |_, _| TaskStatus::Running);
    assert_eq!(scheduler.task_count(), 2);

    // Tear down the landing view: its particle task goes, and its
    // elements are unmounted by the same teardown path.
    scheduler.unregister_scope(landing_scope);
    field.lock().unwrap().unmount(&mut scene);
    assert_eq!(scheduler.task_count(), 1);
    assert_eq!(scene.len(), 1);

    // Remaining scope keeps ticking without touching removed elements.
    run_frames(&mut scheduler, &mut scene, t0, 3);
    assert_eq!(scheduler.task_count(), 1);
}

#[test]
fn test_landing_to_portfolio_round_trip() {
    let mut scene = Scene::new(1280.0, 800.0);
    let landing_root = scene.add_element(LayoutBox::new(0.0, 0.0, 1280.0, 800.0));
    let (mut controller, media_rx) =
        ViewController::new(LandingConfig::default(), AudioConfig::default());
    assert!(matches!(
        media_rx.try_recv(),
        Ok(MediaCommand::Configure { .. })
    ));

    let t0 = Instant::now();
    controller.enter_portfolio(landing_root, t0);
    let mut now = t0;
    while controller.is_transitioning() {
        now += FRAME;
        controller.update(&mut scene, now);
        assert!(now - t0 < Duration::from_secs(2), "transition never settled");
    }

    assert_eq!(controller.view(), View::Portfolio);
    assert_eq!(media_rx.try_recv(), Ok(MediaCommand::Play));
    assert!(media_rx.try_recv().is_err());

    scene.set_scroll(3000.0);
    controller.go_home(&mut scene);
    assert_eq!(scene.scroll_y, 0.0);
    assert_eq!(controller.view(), View::Landing);
    // The landing root is live again, ready for another intro.
    assert!(scene.element(landing_root).is_some());

    // Mute round trip rides the same channel.
    controller.toggle_mute();
    controller.toggle_mute();
    assert_eq!(media_rx.try_recv(), Ok(MediaCommand::SetMuted(true)));
    assert_eq!(media_rx.try_recv(), Ok(MediaCommand::SetMuted(false)));
}

#[test]
fn test_contact_form_polled_from_frame_loop() {
    let mut form = ContactForm::new();
    form.name = "Grace".into();
    form.email = "grace@example.com".into();
    form.subject = "Work".into();
    form.message = "Loved the parallax.".into();

    let t0 = Instant::now();
    form.submit(t0).unwrap();

    let mut now = t0;
    let mut confirmation = None;
    for _ in 0..150 {
        now += FRAME;
        if let Some(msg) = form.poll(now) {
            confirmation = Some(msg);
            break;
        }
    }
    assert!(confirmation.is_some());
    assert!(now - t0 >= Duration::from_secs(2));
    assert_eq!(form.state(), SubmissionState::Submitted);
    assert!(form.email.is_empty());
}

#[test]
fn test_default_config_drives_a_whole_page() {
    // Smoke test: one scene, every feature registered, many frames.
    let config = MotionConfig::default();
    let mut scene = Scene::new(1280.0, 800.0);
    let page = scene.add_element(LayoutBox::new(0.0, 0.0, 1280.0, 4000.0));
    let section = scene.add_element(LayoutBox::new(0.0, 1200.0, 1280.0, 800.0));
    let card = scene.add_element(LayoutBox::new(100.0, 1300.0, 400.0, 300.0));

    let mut scheduler = FrameScheduler::new();
    let scope = scheduler.scope();

    let mut binding = layer_parallax_binding(
        page,
        page,
        config.background_layers.layer_speeds[0],
        config.background_layers.layer_height,
    );
    scheduler.register(scope, move |scene, _| {
        binding.apply(scene);
        TaskStatus::Running
    });

    let mut reveal = RevealOnEntry::new(section, vec![card], config.reveal.clone());
    scheduler.register(scope, move |scene, now| {
        reveal.update(scene, now);
        TaskStatus::Running
    });

    let specs = FloatingFieldGenerator::generate(&config.floating_field, 1280.0, 4000.0, 99);
    let t0 = Instant::now();
    let mut field = FloatingField::mount(&mut scene, page, specs, t0);
    scheduler.register(scope, move |scene, now| {
        field.update(scene, now);
        TaskStatus::Running
    });

    let mut now = t0;
    for frame in 0..300u32 {
        now += FRAME;
        scene.set_scroll(frame as f32 * 10.0);
        scheduler.tick(&mut scene, now);
    }

    // Everything still registered and every element carries finite props.
    assert_eq!(scheduler.task_count(), 3);
    assert!(scene.props(card).unwrap().opacity >= 0.0);
    for id in 1..=scene.len() as u32 {
        if let Some(props) = scene.props(id) {
            assert!(props.x.is_finite() && props.y.is_finite());
            assert!((0.0..=1.0).contains(&props.opacity));
        }
    }
}
