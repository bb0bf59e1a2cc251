use crate::error::{GestureError, GestureResult};
use crate::pose::Frame;

/// 3ランドマークのなす角度を計算 (度、0〜360)
///
/// `p1`/`p2`/`p3` はフレーム内の位置インデックス (IDではない)。
/// `p2` が頂点。負の角度には360を足して `[0, 360)` に収める。
///
/// 有向角なので `p1` と `p3` を入れ替えると符号反転ではなく
/// 別の値になる。呼び出し側は解剖学的に一貫した順序で渡すこと。
pub fn joint_angle(frame: &Frame, p1: usize, p2: usize, p3: usize) -> GestureResult<f32> {
    let len = frame.len();
    let lookup = |index: usize| {
        frame
            .get(index)
            .ok_or(GestureError::IndexOutOfRange { index, len })
    };
    let a = lookup(p1)?;
    let b = lookup(p2)?;
    let c = lookup(p3)?;

    let mut angle =
        ((c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x)).to_degrees();
    if angle < 0.0 {
        angle += 360.0;
    }
    Ok(angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::Landmark;

    fn approx_eq_f32(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() < eps
    }

    fn right_angle_frame() -> Frame {
        // 頂点を原点に置いた直角
        Frame::new(vec![
            Landmark::new(0, 0.0, 1.0),
            Landmark::new(1, 0.0, 0.0),
            Landmark::new(2, 1.0, 0.0),
        ])
    }

    #[test]
    fn test_right_angle() {
        let frame = right_angle_frame();
        let angle = joint_angle(&frame, 2, 1, 0).unwrap();
        assert!(approx_eq_f32(angle, 90.0, 1e-4));
    }

    #[test]
    fn test_directed_angle_wraps_on_swap() {
        // 入れ替えは符号反転ではなく 360-θ になる
        let frame = right_angle_frame();
        let angle = joint_angle(&frame, 0, 1, 2).unwrap();
        assert!(approx_eq_f32(angle, 270.0, 1e-4));
    }

    #[test]
    fn test_straight_line() {
        let frame = Frame::new(vec![
            Landmark::new(0, -1.0, 0.0),
            Landmark::new(1, 0.0, 0.0),
            Landmark::new(2, 1.0, 0.0),
        ]);
        let angle = joint_angle(&frame, 0, 1, 2).unwrap();
        assert!(approx_eq_f32(angle, 180.0, 1e-4));
    }

    #[test]
    fn test_deterministic() {
        let frame = Frame::new(vec![
            Landmark::new(0, 412.0, 230.0),
            Landmark::new(1, 390.0, 310.0),
            Landmark::new(2, 455.0, 370.0),
        ]);
        let first = joint_angle(&frame, 0, 1, 2).unwrap();
        for _ in 0..10 {
            assert_eq!(joint_angle(&frame, 0, 1, 2).unwrap(), first);
        }
        assert!((0.0..360.0).contains(&first));
    }

    #[test]
    fn test_index_out_of_range() {
        let frame = right_angle_frame();
        let err = joint_angle(&frame, 0, 1, 3).unwrap_err();
        assert!(matches!(
            err,
            GestureError::IndexOutOfRange { index: 3, len: 3 }
        ));
    }
}
