//! Capture session: reads camera frames, extracts landmark frames in pixel
//! space, and saves the whole sequence on exit.

use anyhow::{Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use gesture_tracker::camera::Camera;
use gesture_tracker::config::Config;
use gesture_tracker::pose::{pixel_frame, preprocess_frame, PoseDetector, Sequence};
use gesture_tracker::render::MinifbRenderer;
use gesture_tracker::storage;

const CONFIG_PATH: &str = "config.toml";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let config = Config::load_or_default(CONFIG_PATH);

    println!("Gesture Tracker - Capture ({})", env!("GIT_VERSION"));
    println!("Model: {}", config.model.path);
    println!("保存先: {}", config.storage.pose_path);
    println!();
    println!("操作: [Esc] 終了 (終了時にシーケンスを保存)");
    println!();

    // SIGINT / SIGTERM → ループを抜けて保存に進む
    let interrupted = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&interrupted))?;
    signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(&interrupted))?;

    let mut camera = Camera::open(&config.camera)?;
    let (width, height) = camera.resolution();
    println!("Camera: {}x{}", width, height);

    let mut detector = PoseDetector::from_config(&config.model)?;
    println!("Model loaded");

    let mut renderer = if config.debug.view {
        Some(MinifbRenderer::new(
            "Gesture Tracker",
            width as usize,
            height as usize,
        )?)
    } else {
        None
    };

    let mut sequence: Sequence = Vec::new();
    let loop_result = capture_loop(
        &config,
        &mut camera,
        &mut detector,
        &mut renderer,
        &interrupted,
        &mut sequence,
    );

    // 中断やエラーでもここまでのシーケンスは必ず保存する。
    // 保存失敗はキャプチャ結果の喪失なので握りつぶさない。
    println!("Captured {} frames", sequence.len());
    let save_result = storage::save_sequence(&sequence, &config.storage.pose_path)
        .context("failed to save captured sequence");

    loop_result?;
    save_result?;
    println!("Saved: {}", config.storage.pose_path);
    Ok(())
}

fn capture_loop(
    config: &Config,
    camera: &mut Camera,
    detector: &mut PoseDetector,
    renderer: &mut Option<MinifbRenderer>,
    interrupted: &AtomicBool,
    sequence: &mut Sequence,
) -> Result<()> {
    let (width, height) = camera.resolution();
    let mut frame_count = 0u32;
    let mut fps_window = Instant::now();

    loop {
        if interrupted.load(Ordering::Relaxed) {
            break;
        }
        if let Some(r) = renderer.as_ref() {
            if !r.is_open() {
                break;
            }
        }

        let image = camera.read_frame()?;
        let tensor = preprocess_frame(&image, config.model.input_size)?;

        let detection = detector.detect(tensor)?;
        let frame = detection.as_ref().map(|d| pixel_frame(d, width, height));

        // 検出があったフレームだけシーケンスに積む
        if let Some(frame) = &frame {
            if !frame.is_empty() {
                if let Some(id) = config.debug.highlight {
                    if let Some(lm) = frame.by_id(id) {
                        tracing::debug!(id, x = lm.x, y = lm.y, "highlight landmark");
                    }
                }
                sequence.push(frame.clone());
            }
        }

        if let Some(r) = renderer.as_mut() {
            r.draw_image(&image)?;
            if let Some(frame) = &frame {
                r.draw_landmarks(frame, config.debug.highlight);
            }
            r.update()?;
        }

        frame_count += 1;
        if fps_window.elapsed().as_secs() >= 1 {
            println!("FPS: {}", frame_count);
            frame_count = 0;
            fps_window = Instant::now();
        }
    }

    Ok(())
}
