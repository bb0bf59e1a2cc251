use anyhow::Result;
use minifb::{Key, Window, WindowOptions};
use opencv::core::Mat;
use opencv::prelude::*;

use crate::pose::Frame;
use crate::render::skeleton::{
    HIGHLIGHT_COLOR, LANDMARK_COLOR, SKELETON_COLOR, SKELETON_CONNECTIONS,
};

/// minifbを使用したプレビューレンダラー
///
/// 数値パイプラインからは独立した描画専用の出力。
/// フレームデータを読み取るだけで書き換えない。
pub struct MinifbRenderer {
    window: Window,
    buffer: Vec<u32>,
    width: usize,
    height: usize,
}

impl MinifbRenderer {
    /// ウィンドウを作成
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )?;

        let buffer = vec![0u32; width * height];

        Ok(Self {
            window,
            buffer,
            width,
            height,
        })
    }

    /// ウィンドウが開いているか (Escで終了)
    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    /// BGR Mat をバッファにコピー
    pub fn draw_image(&mut self, image: &Mat) -> Result<()> {
        let image_width = image.cols() as usize;
        let image_height = image.rows() as usize;

        // サイズ不一致はクロップで対応
        for y in 0..self.height.min(image_height) {
            for x in 0..self.width.min(image_width) {
                let pixel = image.at_2d::<opencv::core::Vec3b>(y as i32, x as i32)?;
                // BGR -> RGB -> u32
                let r = pixel[2] as u32;
                let g = pixel[1] as u32;
                let b = pixel[0] as u32;
                self.buffer[y * self.width + x] = (r << 16) | (g << 8) | b;
            }
        }

        Ok(())
    }

    /// ピクセル空間のフレームを骨格付きで描画
    ///
    /// `highlight` に一致するIDのランドマークは強調色で大きく描く。
    pub fn draw_landmarks(&mut self, frame: &Frame, highlight: Option<u32>) {
        // 骨格線
        for (start_idx, end_idx) in SKELETON_CONNECTIONS.iter() {
            let start = frame.by_id(*start_idx as u32);
            let end = frame.by_id(*end_idx as u32);
            if let (Some(start), Some(end)) = (start, end) {
                self.draw_line(
                    start.x as i32,
                    start.y as i32,
                    end.x as i32,
                    end.y as i32,
                    SKELETON_COLOR,
                );
            }
        }

        // ランドマーク点
        for lm in &frame.landmarks {
            let (color, radius) = if highlight == Some(lm.id) {
                (HIGHLIGHT_COLOR, 8)
            } else {
                (LANDMARK_COLOR, 4)
            };
            self.draw_circle(lm.x as i32, lm.y as i32, radius, color);
        }
    }

    /// バッファをウィンドウに表示
    pub fn update(&mut self) -> Result<()> {
        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)?;
        Ok(())
    }

    /// Bresenhamのアルゴリズムで線を描画
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// 円を描画（塗りつぶし）
    fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, color: u32) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// ピクセルをセット（境界チェック付き）
    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.buffer[y as usize * self.width + x as usize] = color;
        }
    }
}
