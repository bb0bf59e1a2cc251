//! Sequence persistence.
//!
//! bincode + serde: f32のビットパターン、ID、順序をそのまま往復させる。

use std::fs;
use std::path::Path;

use crate::error::{GestureError, GestureResult};
use crate::pose::Frame;

/// シーケンスをファイルへ保存
///
/// 既存の内容は上書きする。一時ファイルに書いてからrenameするので、
/// 途中で失敗しても保存先に中途半端なデータは残らない。
pub fn save_sequence<P: AsRef<Path>>(frames: &[Frame], path: P) -> GestureResult<()> {
    let path = path.as_ref();
    let write_err = |source: std::io::Error| GestureError::StorageWrite {
        path: path.to_path_buf(),
        source,
    };

    let data = bincode::serialize(frames)
        .map_err(|e| write_err(std::io::Error::other(e)))?;

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, &data).map_err(write_err)?;
    fs::rename(&tmp_path, path).map_err(write_err)?;

    tracing::debug!(
        frames = frames.len(),
        bytes = data.len(),
        path = %path.display(),
        "sequence saved"
    );
    Ok(())
}

/// 保存済みシーケンスを読み込む
///
/// ファイルが無い・読めない場合は StorageRead、
/// バイト列が構造に復元できない場合は CorruptData。
pub fn load_sequence<P: AsRef<Path>>(path: P) -> GestureResult<Vec<Frame>> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| GestureError::StorageRead {
        path: path.to_path_buf(),
        source,
    })?;
    let frames = bincode::deserialize(&data).map_err(|source| GestureError::CorruptData {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(frames)
}
