use crate::config::EncoderConfig;
use crate::error::{GestureError, GestureResult};
use crate::pose::{Frame, Landmark, LandmarkIndex};

/// 正規化の基準となるランドマーク対
///
/// 終点 (`end`) が正規化後の原点になり、始点→終点のX/Y成分が
/// 各軸のスケールになる。デフォルトは両肩。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceSegment {
    pub start: u32,
    pub end: u32,
}

impl ReferenceSegment {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// 肩ペア (BlazePoseスキーマ)
    pub fn shoulders() -> Self {
        Self::new(
            LandmarkIndex::LeftShoulder as u32,
            LandmarkIndex::RightShoulder as u32,
        )
    }

    /// 設定から作成
    pub fn from_config(config: &EncoderConfig) -> Self {
        Self::new(config.reference_start, config.reference_end)
    }
}

impl Default for ReferenceSegment {
    fn default() -> Self {
        Self::shoulders()
    }
}

/// フレームを基準セグメント相対のスケール不変座標に変換
///
/// 全ランドマークを `(id, (x - ref2.x) / scale_x, (y - ref2.y) / scale_y)`
/// に写す。`scale_x = ref2.x - ref1.x`, `scale_y = ref2.y - ref1.y`。
/// カメラ距離と画角への依存がなくなり、セッション間で比較できる。
///
/// 基準ランドマークが見つからなければ MissingReferenceLandmark、
/// どちらかのスケールがちょうど0なら DegenerateReference。
pub fn encode_frame(frame: &Frame, reference: &ReferenceSegment) -> GestureResult<Frame> {
    let ref1 = frame
        .by_id(reference.start)
        .ok_or(GestureError::MissingReferenceLandmark(reference.start))?;
    let ref2 = frame
        .by_id(reference.end)
        .ok_or(GestureError::MissingReferenceLandmark(reference.end))?;

    let scale_x = ref2.x - ref1.x;
    let scale_y = ref2.y - ref1.y;
    if scale_x == 0.0 {
        return Err(GestureError::DegenerateReference { axis: 'x' });
    }
    if scale_y == 0.0 {
        return Err(GestureError::DegenerateReference { axis: 'y' });
    }

    let origin = *ref2;
    let encoded = frame
        .landmarks
        .iter()
        .map(|lm| {
            Landmark::new(
                lm.id,
                (lm.x - origin.x) / scale_x,
                (lm.y - origin.y) / scale_y,
            )
        })
        .collect();
    Ok(Frame::new(encoded))
}

/// シーケンス全体をエンコード
///
/// フレームごとに独立。最初に失敗したフレームの位置を添えて中断し、
/// 部分的な結果は返さない。
pub fn encode_sequence(
    frames: &[Frame],
    reference: &ReferenceSegment,
) -> GestureResult<Vec<Frame>> {
    frames
        .iter()
        .enumerate()
        .map(|(index, frame)| {
            encode_frame(frame, reference).map_err(|source| GestureError::FrameEncode {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq_f32(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() < eps
    }

    /// 肩2点 + 手首1点の最小フレーム
    fn shoulder_frame() -> Frame {
        Frame::new(vec![
            Landmark::new(11, 200.0, 300.0),
            Landmark::new(12, 400.0, 320.0),
            Landmark::new(15, 250.0, 500.0),
        ])
    }

    #[test]
    fn test_encode_reference_is_origin() {
        let encoded = encode_frame(&shoulder_frame(), &ReferenceSegment::shoulders()).unwrap();
        // ref2 (id 12) が原点、ref1 (id 11) は (-1, -1)
        let ref2 = encoded.by_id(12).unwrap();
        assert_eq!((ref2.x, ref2.y), (0.0, 0.0));
        let ref1 = encoded.by_id(11).unwrap();
        assert_eq!((ref1.x, ref1.y), (-1.0, -1.0));
    }

    #[test]
    fn test_encode_values() {
        let encoded = encode_frame(&shoulder_frame(), &ReferenceSegment::shoulders()).unwrap();
        // scale_x = 200, scale_y = 20
        let wrist = encoded.by_id(15).unwrap();
        assert!(approx_eq_f32(wrist.x, (250.0 - 400.0) / 200.0, 1e-6));
        assert!(approx_eq_f32(wrist.y, (500.0 - 320.0) / 20.0, 1e-6));
    }

    #[test]
    fn test_encode_scale_invariance() {
        // 一様スケール (カメラズーム相当) で結果が変わらない
        let frame = shoulder_frame();
        let scaled = Frame::new(
            frame
                .landmarks
                .iter()
                .map(|lm| Landmark::new(lm.id, lm.x * 2.0, lm.y * 2.0))
                .collect(),
        );
        let reference = ReferenceSegment::shoulders();
        let a = encode_frame(&frame, &reference).unwrap();
        let b = encode_frame(&scaled, &reference).unwrap();
        for (la, lb) in a.landmarks.iter().zip(&b.landmarks) {
            assert!(approx_eq_f32(la.x, lb.x, 1e-6));
            assert!(approx_eq_f32(la.y, lb.y, 1e-6));
        }
    }

    #[test]
    fn test_encode_translation_invariance() {
        let frame = shoulder_frame();
        let shifted = Frame::new(
            frame
                .landmarks
                .iter()
                .map(|lm| Landmark::new(lm.id, lm.x + 64.0, lm.y - 32.0))
                .collect(),
        );
        let reference = ReferenceSegment::shoulders();
        let a = encode_frame(&frame, &reference).unwrap();
        let b = encode_frame(&shifted, &reference).unwrap();
        for (la, lb) in a.landmarks.iter().zip(&b.landmarks) {
            assert!(approx_eq_f32(la.x, lb.x, 1e-5));
            assert!(approx_eq_f32(la.y, lb.y, 1e-5));
        }
    }

    #[test]
    fn test_encode_missing_reference() {
        let frame = Frame::new(vec![Landmark::new(0, 1.0, 2.0)]);
        let err = encode_frame(&frame, &ReferenceSegment::shoulders()).unwrap_err();
        assert!(matches!(err, GestureError::MissingReferenceLandmark(11)));
    }

    #[test]
    fn test_encode_degenerate_reference() {
        // 両肩のX座標が同一 -> 算術エラーではなく明示的に失敗
        let frame = Frame::new(vec![
            Landmark::new(11, 300.0, 100.0),
            Landmark::new(12, 300.0, 200.0),
        ]);
        let err = encode_frame(&frame, &ReferenceSegment::shoulders()).unwrap_err();
        assert!(matches!(err, GestureError::DegenerateReference { axis: 'x' }));
    }

    #[test]
    fn test_encode_custom_reference() {
        // スキーマ差し替え: 腰ペア (23, 24) を基準にする
        let frame = Frame::new(vec![
            Landmark::new(23, 100.0, 400.0),
            Landmark::new(24, 200.0, 410.0),
        ]);
        let reference = ReferenceSegment::new(23, 24);
        let encoded = encode_frame(&frame, &reference).unwrap();
        let hip = encoded.by_id(24).unwrap();
        assert_eq!((hip.x, hip.y), (0.0, 0.0));
    }

    #[test]
    fn test_encode_sequence_reports_position() {
        let good = shoulder_frame();
        let bad = Frame::new(vec![Landmark::new(0, 1.0, 2.0)]);
        let frames = vec![good.clone(), good, bad];
        let err = encode_sequence(&frames, &ReferenceSegment::shoulders()).unwrap_err();
        match err {
            GestureError::FrameEncode { index, source } => {
                assert_eq!(index, 2);
                assert!(matches!(*source, GestureError::MissingReferenceLandmark(11)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_encode_sequence_length() {
        let frames = vec![shoulder_frame(); 4];
        let encoded = encode_sequence(&frames, &ReferenceSegment::shoulders()).unwrap();
        assert_eq!(encoded.len(), 4);
    }

    #[test]
    fn test_encode_empty_sequence() {
        let encoded = encode_sequence(&[], &ReferenceSegment::shoulders()).unwrap();
        assert!(encoded.is_empty());
    }
}
