use rayon::prelude::*;

use crate::foundation::core::Resolution;
use crate::foundation::error::{ProcgenError, ProcgenResult};
use crate::generate::batch::Instance;
use crate::synth::plan::FieldPlan;

/// Which image row maps to `uv.y = 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Row 0 is the top of the picture (PNG convention).
    #[default]
    TopLeft,
    /// Row 0 is the bottom of the picture (GL framebuffer convention).
    BottomLeft,
}

/// Options for [`RasterExecutor`].
#[derive(Clone, Debug, Default)]
pub struct RasterOpts {
    /// Worker threads; `None` lets rayon decide.
    pub threads: Option<usize>,
    /// Row order of the output buffer.
    pub origin: Origin,
}

/// Straight (non-premultiplied) RGBA8 pixels, row-major, alpha always 255.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// RGBA at `(x, y)` in buffer order.
    ///
    /// # Panics
    ///
    /// If `(x, y)` lies outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Reject buffers whose length is not `width * height * 4`.
    pub fn check_len(&self) -> ProcgenResult<()> {
        let expected = self.width as usize * self.height as usize * 4;
        if self.data.len() != expected {
            return Err(ProcgenError::render(format!(
                "frame buffer holds {} bytes, {}x{} needs {expected}",
                self.data.len(),
                self.width,
                self.height
            )));
        }
        Ok(())
    }

    /// Convert into an `image` buffer.
    pub fn into_image(self) -> ProcgenResult<image::RgbaImage> {
        self.check_len()?;
        image::RgbaImage::from_raw(self.width, self.height, self.data)
            .ok_or_else(|| ProcgenError::render("frame buffer does not match its dimensions"))
    }
}

fn to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

/// Runs the field synthesizer over whole rasters on a dedicated rayon pool.
pub struct RasterExecutor {
    pool: rayon::ThreadPool,
    origin: Origin,
}

impl RasterExecutor {
    /// Build the executor and its thread pool.
    pub fn new(opts: RasterOpts) -> ProcgenResult<Self> {
        Ok(Self {
            pool: build_thread_pool(opts.threads)?,
            origin: opts.origin,
        })
    }

    /// Number of worker threads in the pool.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Render one instance at `resolution`.
    #[tracing::instrument(skip(self, instance), fields(id = %instance.id))]
    pub fn render(&self, instance: &Instance, resolution: Resolution) -> ProcgenResult<FrameRGBA> {
        let started = std::time::Instant::now();
        let plan = FieldPlan::from_instance(instance);
        let data = self.pool.install(|| self.rasterize(&plan, resolution));
        tracing::debug!(
            width = resolution.width,
            height = resolution.height,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "rendered"
        );
        Ok(FrameRGBA {
            width: resolution.width,
            height: resolution.height,
            data,
        })
    }

    /// Render every instance at the same resolution, in order.
    #[tracing::instrument(skip(self, instances), fields(count = instances.len()))]
    pub fn render_batch(
        &self,
        instances: &[Instance],
        resolution: Resolution,
    ) -> ProcgenResult<Vec<FrameRGBA>> {
        instances
            .iter()
            .map(|inst| self.render(inst, resolution))
            .collect()
    }

    fn rasterize(&self, plan: &FieldPlan, resolution: Resolution) -> Vec<u8> {
        let w = resolution.width as usize;
        let h = resolution.height;
        let mut data = vec![0u8; w * h as usize * 4];
        let origin = self.origin;
        data.par_chunks_mut(w * 4)
            .enumerate()
            .for_each(|(row, out)| {
                let up = match origin {
                    Origin::TopLeft => h as usize - 1 - row,
                    Origin::BottomLeft => row,
                };
                let v = (up as f32 + 0.5) / h as f32;
                for (x, px) in out.chunks_exact_mut(4).enumerate() {
                    let u = (x as f32 + 0.5) / w as f32;
                    let [r, g, b] = plan.shade([u, v], resolution);
                    px.copy_from_slice(&[to_u8(r), to_u8(g), to_u8(b), 255]);
                }
            });
        data
    }
}

/// Tile equally sized frames row-major into a `columns`-wide grid; empty cells stay black.
pub fn contact_sheet(frames: &[FrameRGBA], columns: usize) -> ProcgenResult<FrameRGBA> {
    let Some(first) = frames.first() else {
        return Err(ProcgenError::validation("contact sheet needs at least one frame"));
    };
    if columns == 0 {
        return Err(ProcgenError::validation("contact sheet columns must be >= 1"));
    }
    let (cw, ch) = (first.width as usize, first.height as usize);
    if let Some(odd) = frames
        .iter()
        .find(|f| f.width != first.width || f.height != first.height)
    {
        return Err(ProcgenError::validation(format!(
            "contact sheet frames must share a size ({}x{} vs {}x{})",
            cw, ch, odd.width, odd.height
        )));
    }
    for frame in frames {
        frame.check_len()?;
    }

    let cols = columns.min(frames.len());
    let rows = frames.len().div_ceil(cols);
    let width = cw * cols;
    let mut data = vec![0u8; width * ch * rows * 4];
    for pixel in data.chunks_exact_mut(4) {
        pixel[3] = 255;
    }
    for (i, frame) in frames.iter().enumerate() {
        let (row, col) = (i / cols, i % cols);
        for y in 0..ch {
            let src = &frame.data[y * cw * 4..(y + 1) * cw * 4];
            let dst_start = ((row * ch + y) * width + col * cw) * 4;
            data[dst_start..dst_start + cw * 4].copy_from_slice(src);
        }
    }

    Ok(FrameRGBA {
        width: u32::try_from(width).map_err(|_| ProcgenError::render("contact sheet too wide"))?,
        height: u32::try_from(ch * rows)
            .map_err(|_| ProcgenError::render("contact sheet too tall"))?,
        data,
    })
}

fn build_thread_pool(threads: Option<usize>) -> ProcgenResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ProcgenError::validation(
            "raster 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ProcgenError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
