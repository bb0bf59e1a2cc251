//! Gesture delta pipeline.
//!
//! 保存済みの生シーケンスを読み込み、隣接フレーム間の差分列を
//! 計算して保存する。キャプチャとは別プロセスで後から走るバッチ処理。

use std::path::Path;

use crate::error::GestureResult;
use crate::motion::frame_diff;
use crate::pose::Frame;
use crate::storage;

/// 隣接フレーム間の差分列を計算
///
/// `delta[k]` は frame\[k\] から frame\[k+1\] への変化。時系列順、
/// 折り返しなし。長さは `n - 1`、フレームが2枚未満なら空列。
pub fn sequence_deltas(frames: &[Frame]) -> GestureResult<Vec<Frame>> {
    frames
        .windows(2)
        .map(|pair| frame_diff(&pair[0], &pair[1]))
        .collect()
}

/// 保存済みシーケンスから差分列を生成して保存する
///
/// 戻り値は書き出した差分フレーム数。
pub fn delta_pass(input: impl AsRef<Path>, output: impl AsRef<Path>) -> GestureResult<usize> {
    let frames = storage::load_sequence(&input)?;
    let deltas = sequence_deltas(&frames)?;
    storage::save_sequence(&deltas, &output)?;
    tracing::debug!(input_frames = frames.len(), deltas = deltas.len(), "delta pass complete");
    Ok(deltas.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GestureError;
    use crate::pose::Landmark;
    use tempfile::TempDir;

    fn frame(points: &[(u32, f32, f32)]) -> Frame {
        Frame::new(
            points
                .iter()
                .map(|&(id, x, y)| Landmark::new(id, x, y))
                .collect(),
        )
    }

    #[test]
    fn test_delta_length() {
        let frames = vec![
            frame(&[(0, 0.0, 0.0)]),
            frame(&[(0, 1.0, 1.0)]),
            frame(&[(0, 3.0, 0.0)]),
            frame(&[(0, 6.0, -2.0)]),
        ];
        let deltas = sequence_deltas(&frames).unwrap();
        assert_eq!(deltas.len(), 3);
    }

    #[test]
    fn test_delta_temporal_order() {
        // delta[k] = frame[k+1] - frame[k]、先頭が末尾を参照しない
        let frames = vec![
            frame(&[(0, 10.0, 20.0)]),
            frame(&[(0, 12.0, 19.0)]),
            frame(&[(0, 15.0, 25.0)]),
        ];
        let deltas = sequence_deltas(&frames).unwrap();
        assert_eq!(deltas[0].get(0), Some(&Landmark::new(0, 2.0, -1.0)));
        assert_eq!(deltas[1].get(0), Some(&Landmark::new(0, 3.0, 6.0)));
    }

    #[test]
    fn test_short_sequences_yield_empty() {
        assert!(sequence_deltas(&[]).unwrap().is_empty());
        assert!(sequence_deltas(&[frame(&[(0, 1.0, 2.0)])]).unwrap().is_empty());
    }

    #[test]
    fn test_misaligned_sequence_fails() {
        let frames = vec![
            frame(&[(0, 0.0, 0.0), (1, 1.0, 1.0)]),
            frame(&[(0, 0.0, 0.0)]),
        ];
        let err = sequence_deltas(&frames).unwrap_err();
        assert!(matches!(err, GestureError::IndexOutOfRange { .. }));
    }

    #[test]
    fn test_delta_pass_round_trip() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("poses.bin");
        let output = dir.path().join("gestures.bin");

        let frames = vec![
            frame(&[(0, 0.0, 0.0), (1, 10.0, 10.0)]),
            frame(&[(0, 5.0, -5.0), (1, 10.0, 12.0)]),
        ];
        storage::save_sequence(&frames, &input).unwrap();

        let count = delta_pass(&input, &output).unwrap();
        assert_eq!(count, 1);

        let deltas = storage::load_sequence(&output).unwrap();
        assert_eq!(deltas[0].get(0), Some(&Landmark::new(0, 5.0, -5.0)));
        assert_eq!(deltas[0].get(1), Some(&Landmark::new(1, 0.0, 2.0)));
    }

    #[test]
    fn test_delta_pass_missing_input() {
        let dir = TempDir::new().unwrap();
        let err = delta_pass(
            dir.path().join("nonexistent.bin"),
            dir.path().join("out.bin"),
        )
        .unwrap_err();
        assert!(matches!(err, GestureError::StorageRead { .. }));
    }
}
