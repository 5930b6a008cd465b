use crate::effects::displace::DisplacementMap;
use crate::effects::overlay::overlay;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{CropRect, FrameIndex, Offset};
use crate::foundation::error::{DispmapError, DispmapResult};
use crate::raster::{Bgr8Image, Bgra8Image};

/// Options for a [`ScrollSession`].
///
/// Defaults reproduce the classic demo: the red channel drives both axes with strength 20 and
/// the crop window advances 3 px per frame.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollOpts {
    /// Map channel for row displacement (`0` blue, `1` green, `2` red).
    pub component_x: i32,
    /// Map channel for column displacement.
    pub component_y: i32,
    /// Row displacement strength.
    pub scale_x: i32,
    /// Column displacement strength.
    pub scale_y: i32,
    /// Horizontal crop advance per frame, in pixels. Must be >= 1.
    pub step_x: u32,
    /// Optional cap on the number of rendered frames. Must be >= 1 when set.
    pub max_frames: Option<u64>,
}

impl Default for ScrollOpts {
    fn default() -> Self {
        Self {
            component_x: 2,
            component_y: 2,
            scale_x: 20,
            scale_y: 20,
            step_x: 3,
            max_frames: None,
        }
    }
}

/// Counters returned by [`ScrollSession::render_to_sink`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollStats {
    /// Frames pushed to the sink.
    pub frames_rendered: u64,
    /// Crop offset of the last rendered frame.
    pub last_offset_x: u32,
}

/// Slides a target-sized window across a wider map and composites one frame per position.
///
/// Frame `i` crops the map at column `i * step_x` (row 0), warps the target through that crop
/// and overlays the warped target onto the same crop. The first frame is always produced; the
/// window stops once it would reach the right edge of the map.
#[derive(Debug)]
pub struct ScrollSession<'a> {
    map: &'a Bgr8Image,
    target: &'a Bgra8Image,
    filter: DisplacementMap,
    step_x: u32,
    frame_count: u64,
}

impl<'a> ScrollSession<'a> {
    /// Validate `opts` against the inputs and build a session.
    pub fn new(
        map: &'a Bgr8Image,
        target: &'a Bgra8Image,
        opts: &ScrollOpts,
    ) -> DispmapResult<Self> {
        let filter =
            DisplacementMap::new(opts.component_x, opts.component_y, opts.scale_x, opts.scale_y)?;
        if opts.step_x == 0 {
            return Err(DispmapError::invalid_argument("scroll step_x must be >= 1"));
        }
        if let Some(n) = opts.max_frames
            && n == 0
        {
            return Err(DispmapError::validation(
                "scroll max_frames must be >= 1 when set",
            ));
        }
        if target.width() > map.width() || target.height() > map.height() {
            return Err(DispmapError::validation(format!(
                "target ({}x{}) needs to have smaller dimensions than map ({}x{})",
                target.width(),
                target.height(),
                map.width(),
                map.height()
            )));
        }

        let span = u64::from(map.width() - target.width());
        let natural = if span == 0 {
            1
        } else {
            span.div_ceil(u64::from(opts.step_x))
        };
        let frame_count = opts.max_frames.map_or(natural, |cap| natural.min(cap));

        Ok(Self {
            map,
            target,
            filter,
            step_x: opts.step_x,
            frame_count,
        })
    }

    /// Number of frames this session produces.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Output frame dimensions (the target's).
    pub fn frame_dimensions(&self) -> (u32, u32) {
        self.target.dimensions()
    }

    /// Map window used for frame `idx`.
    pub fn crop_rect(&self, idx: FrameIndex) -> DispmapResult<CropRect> {
        if idx.0 >= self.frame_count {
            return Err(DispmapError::validation(format!(
                "frame {} out of range (session has {} frames)",
                idx.0, self.frame_count
            )));
        }
        // idx * step_x < map.width - target.width, so it fits in u32.
        let x = (idx.0 * u64::from(self.step_x)) as u32;
        Ok(CropRect::new(x, 0, self.target.width(), self.target.height()))
    }

    /// Crop, displace and overlay frame `idx`.
    #[tracing::instrument(level = "debug", skip(self), fields(frame = idx.0))]
    pub fn render_frame(&self, idx: FrameIndex) -> DispmapResult<Bgr8Image> {
        let rect = self.crop_rect(idx)?;
        let crop = self.map.crop(rect)?;
        let warped = self.filter.apply(&crop, self.target)?;
        Ok(overlay(&crop, &warped, Offset::ZERO))
    }

    /// Render every frame in order into `sink`.
    pub fn render_to_sink(&self, sink: &mut dyn FrameSink) -> DispmapResult<ScrollStats> {
        let (width, height) = self.frame_dimensions();
        sink.begin(SinkConfig {
            width,
            height,
            frame_count: self.frame_count,
        })?;

        let mut stats = ScrollStats::default();
        for i in 0..self.frame_count {
            let idx = FrameIndex(i);
            let frame = self.render_frame(idx)?;
            sink.push_frame(idx, &frame)?;
            stats.frames_rendered += 1;
            stats.last_offset_x = self.crop_rect(idx)?.x;
            tracing::debug!(frame = i, offset_x = stats.last_offset_x, "pushed frame");
        }
        sink.end()?;

        tracing::info!(
            frames = stats.frames_rendered,
            width,
            height,
            "scroll render complete"
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/scroll.rs"]
mod tests;
