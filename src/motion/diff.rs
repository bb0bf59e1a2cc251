use crate::error::{GestureError, GestureResult};
use crate::pose::{Frame, Landmark};

/// 2フレーム間の座標差分を計算
///
/// 要素 `i` は `(frame1のID, x2 - x1, y2 - y1)`。
/// 両フレームは同じ位置に同じIDが並んでいる前提。
/// 長さが異なる場合は IndexOutOfRange (黙って切り詰めない)。
///
/// 時間方向には関知しない。どちらを先行フレームとするかは呼び出し側が決める。
pub fn frame_diff(frame1: &Frame, frame2: &Frame) -> GestureResult<Frame> {
    if frame1.len() != frame2.len() {
        return Err(GestureError::IndexOutOfRange {
            index: frame1.len().max(frame2.len()) - 1,
            len: frame1.len().min(frame2.len()),
        });
    }

    let deltas = frame1
        .landmarks
        .iter()
        .zip(&frame2.landmarks)
        .map(|(a, b)| Landmark::new(a.id, b.x - a.x, b.y - a.y))
        .collect();
    Ok(Frame::new(deltas))
}
