use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub encoder: EncoderConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CameraConfig {
    /// カメラインデックス
    #[serde(default = "default_camera_index")]
    pub index: i32,
    /// キャプチャ幅
    #[serde(default = "default_camera_width")]
    pub width: u32,
    /// キャプチャ高さ
    #[serde(default = "default_camera_height")]
    pub height: u32,
    /// 要求FPS
    #[serde(default = "default_camera_fps")]
    pub fps: u32,
}

fn default_camera_index() -> i32 { 0 }
fn default_camera_width() -> u32 { 640 }
fn default_camera_height() -> u32 { 480 }
fn default_camera_fps() -> u32 { 60 }

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            index: default_camera_index(),
            width: default_camera_width(),
            height: default_camera_height(),
            fps: default_camera_fps(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// ONNXモデルのパス
    #[serde(default = "default_model_path")]
    pub path: String,
    /// モデル入力サイズ (正方形)
    #[serde(default = "default_input_size")]
    pub input_size: i32,
    /// 検出信頼度の閾値
    #[serde(default = "default_confidence")]
    pub confidence: f32,
}

fn default_model_path() -> String { "models/blazepose_full.onnx".to_string() }
fn default_input_size() -> i32 { 256 }
fn default_confidence() -> f32 { 0.7 }

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
            input_size: default_input_size(),
            confidence: default_confidence(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct EncoderConfig {
    /// 基準セグメント始点のランドマークID (左肩)
    #[serde(default = "default_reference_start")]
    pub reference_start: u32,
    /// 基準セグメント終点のランドマークID (右肩)
    #[serde(default = "default_reference_end")]
    pub reference_end: u32,
}

fn default_reference_start() -> u32 { 11 }
fn default_reference_end() -> u32 { 12 }

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            reference_start: default_reference_start(),
            reference_end: default_reference_end(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// 生シーケンスの保存先
    #[serde(default = "default_pose_path")]
    pub pose_path: String,
    /// 差分シーケンスの保存先
    #[serde(default = "default_gesture_path")]
    pub gesture_path: String,
}

fn default_pose_path() -> String { "poses.bin".to_string() }
fn default_gesture_path() -> String { "gestures.bin".to_string() }

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            pose_path: default_pose_path(),
            gesture_path: default_gesture_path(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    /// プレビューウィンドウを表示するか
    #[serde(default = "default_debug_view")]
    pub view: bool,
    /// 強調表示するランドマークID (右肘)
    #[serde(default = "default_highlight")]
    pub highlight: Option<u32>,
}

fn default_debug_view() -> bool { true }
fn default_highlight() -> Option<u32> { Some(14) }

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            view: default_debug_view(),
            highlight: default_highlight(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// 読み込みに失敗したらデフォルト設定を返す
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "config load failed ({}), using defaults: {e}",
                    path.as_ref().display()
                );
                Self::default()
            }
        }
    }
}
