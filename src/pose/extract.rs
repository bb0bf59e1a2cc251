use crate::pose::landmark::{Frame, Landmark};

/// 検出モデルが返す正規化ランドマーク
///
/// 座標は画像サイズに対する比率 (0.0〜1.0)。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedLandmark {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    /// 可視性スコア (0.0〜1.0)
    pub visibility: f32,
}

impl NormalizedLandmark {
    pub fn new(id: u32, x: f32, y: f32, visibility: f32) -> Self {
        Self { id, x, y, visibility }
    }
}

/// 1画像分の検出結果
#[derive(Debug, Clone, Default)]
pub struct Detection {
    pub landmarks: Vec<NormalizedLandmark>,
}

impl Detection {
    pub fn new(landmarks: Vec<NormalizedLandmark>) -> Self {
        Self { landmarks }
    }
}

/// 検出結果をピクセル空間のフレームに変換
///
/// `x = round(nx * w)`, `y = round(ny * h)`。検出順とIDを保持する。
/// 検出が空なら空フレームを返す。
pub fn pixel_frame(detection: &Detection, width: u32, height: u32) -> Frame {
    let mut frame = Frame::default();
    for lm in &detection.landmarks {
        let px = (lm.x * width as f32).round();
        let py = (lm.y * height as f32).round();
        frame.push(Landmark::new(lm.id, px, py));
    }
    frame
}
