use anyhow::{Context, Result};
use ndarray::Array4;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Tensor;
use std::path::Path;

use crate::config::ModelConfig;

use super::extract::{Detection, NormalizedLandmark};
use super::landmark::LandmarkIndex;

/// BlazePose (full body) を使用したランドマーク検出器
pub struct PoseDetector {
    session: Session,
    input_size: i32,
    confidence: f32,
}

impl PoseDetector {
    /// ONNXモデルを読み込んで初期化
    pub fn new<P: AsRef<Path>>(model_path: P, input_size: i32, confidence: f32) -> Result<Self> {
        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .commit_from_file(model_path.as_ref())
            .context("Failed to load ONNX model")?;

        Ok(Self {
            session,
            input_size,
            confidence,
        })
    }

    /// 設定から作成
    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        Self::new(&config.path, config.input_size, config.confidence)
    }

    /// 前処理済みテンソルからランドマークを検出
    ///
    /// 入力: [1, N, N, 3] の f32 テンソル (0.0-1.0)
    /// 出力: 検出スコアが閾値以上なら33ランドマークのDetection、
    ///       人体が写っていなければ None
    pub fn detect(&mut self, input: Array4<f32>) -> Result<Option<Detection>> {
        let input_tensor = Tensor::from_array(input)?;
        let outputs = self
            .session
            .run(ort::inputs!["input_1" => input_tensor])
            .context("Inference failed")?;

        // Identity_1 は [1, 1] の存在スコア
        let score: ndarray::ArrayViewD<f32> = outputs["Identity_1"]
            .try_extract_array()
            .context("Failed to extract score tensor")?;
        if score[[0, 0]] < self.confidence {
            return Ok(None);
        }

        // Identity は [1, 195] = 33 x (x, y, z, visibility, presence)
        // 座標はモデル入力のピクセル空間
        let landmarks: ndarray::ArrayViewD<f32> = outputs["Identity"]
            .try_extract_array()
            .context("Failed to extract landmark tensor")?;

        let size = self.input_size as f32;
        let mut detected = Vec::with_capacity(LandmarkIndex::COUNT);
        for i in 0..LandmarkIndex::COUNT {
            let x = landmarks[[0, i * 5]] / size;
            let y = landmarks[[0, i * 5 + 1]] / size;
            let visibility = sigmoid(landmarks[[0, i * 5 + 3]]);
            detected.push(NormalizedLandmark::new(i as u32, x, y, visibility));
        }

        Ok(Some(Detection::new(detected)))
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
