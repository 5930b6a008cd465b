use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::assets::decode::save_png;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{DispmapError, DispmapResult};
use crate::raster::Bgr8Image;

/// Writes every frame to `<dir>/<prefix>_<index>.png`, index zero-padded to five digits.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Create a sink writing `frame_00000.png`, `frame_00001.png`, ... into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            prefix: "frame".to_string(),
            cfg: None,
            last_idx: None,
            written: Vec::new(),
        }
    }

    /// Replace the default `frame` file-name prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// File path used for frame `idx`.
    pub fn path_for(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("{}_{:05}.png", self.prefix, idx.0))
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> DispmapResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        self.cfg = Some(cfg);
        self.last_idx = None;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Bgr8Image) -> DispmapResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| DispmapError::validation("png sink not started"))?;
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(DispmapError::validation(format!(
                "png sink frames must be strictly increasing (got {} after {})",
                idx.0, last.0
            )));
        }
        if frame.dimensions() != (cfg.width, cfg.height) {
            return Err(DispmapError::dimension_mismatch(format!(
                "png sink expects {}x{} frames, got {}x{}",
                cfg.width,
                cfg.height,
                frame.width(),
                frame.height()
            )));
        }

        let path = self.path_for(idx);
        save_png(frame, &path)?;
        tracing::debug!(frame = idx.0, path = %path.display(), "wrote frame");
        self.last_idx = Some(idx);
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> DispmapResult<()> {
        if self.cfg.take().is_none() {
            return Err(DispmapError::validation("png sink not started"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
