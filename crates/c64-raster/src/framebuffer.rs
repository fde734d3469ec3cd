//! BGRA framebuffer.
//!
//! `width * height` pixels, 4 bytes each in B, G, R, A order, row-major
//! with a stride of `4 * width`. All writes take signed coordinates and
//! are clipped: anything outside the buffer is silently dropped.

/// Bytes per pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Fixed-size BGRA pixel buffer.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Allocate a zeroed buffer.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    #[must_use]
    pub fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Raw BGRA bytes, ready for upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Zero every byte, alpha included.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Byte offset of pixel `(x, y)`, or `None` when it lies outside.
    #[must_use]
    pub fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y as usize * self.stride() + x as usize * BYTES_PER_PIXEL)
    }

    /// Pixel bytes at `(x, y)`.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let idx = self.offset(x, y)?;
        let mut bgra = [0; BYTES_PER_PIXEL];
        bgra.copy_from_slice(&self.pixels[idx..idx + BYTES_PER_PIXEL]);
        Some(bgra)
    }

    /// Write one pixel. Returns `false` if it was clipped.
    pub fn put(&mut self, x: i32, y: i32, bgra: [u8; 4]) -> bool {
        match self.offset(x, y) {
            Some(idx) => {
                self.pixels[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&bgra);
                true
            }
            None => false,
        }
    }

    /// Fill a `w x h` block whose top-left corner is `(x, y)`, clipped.
    pub fn fill_block(&mut self, x: i32, y: i32, w: u32, h: u32, bgra: [u8; 4]) {
        // Intersect with the buffer, in i64 so w/h near u32::MAX can't wrap.
        let x_start = i64::from(x).max(0);
        let y_start = i64::from(y).max(0);
        let x_end = (i64::from(x) + i64::from(w)).min(i64::from(self.width));
        let y_end = (i64::from(y) + i64::from(h)).min(i64::from(self.height));
        if x_start >= x_end || y_start >= y_end {
            return;
        }

        let stride = self.stride();
        for row in y_start as usize..y_end as usize {
            let line = row * stride;
            for col in x_start as usize..x_end as usize {
                let idx = line + col * BYTES_PER_PIXEL;
                self.pixels[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&bgra);
            }
        }
    }

    /// Copy out as RGBA bytes (for image encoders).
    #[must_use]
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len());
        for px in self.pixels.chunks_exact(BYTES_PER_PIXEL) {
            rgba.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
        }
        rgba
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [0x00, 0x00, 0xFF, 0xFF];

    #[test]
    fn size_and_stride() {
        let fb = Framebuffer::new(640, 512);
        assert_eq!(fb.as_bytes().len(), 640 * 512 * 4);
        assert_eq!(fb.stride(), 2560);
    }

    #[test]
    fn put_and_read_back() {
        let mut fb = Framebuffer::new(4, 3);
        assert!(fb.put(3, 2, RED));
        assert_eq!(fb.pixel(3, 2), Some(RED));
        assert_eq!(fb.offset(3, 2), Some(2 * 16 + 3 * 4));
    }

    #[test]
    fn put_outside_is_clipped() {
        let mut fb = Framebuffer::new(4, 3);
        assert!(!fb.put(-1, 0, RED));
        assert!(!fb.put(4, 0, RED));
        assert!(!fb.put(0, 3, RED));
        assert!(!fb.put(0, -1, RED));
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn fill_block_clips_all_edges() {
        let mut fb = Framebuffer::new(4, 4);
        fb.fill_block(-2, -2, 4, 4, RED);
        for y in 0..4 {
            for x in 0..4 {
                let expect = if x < 2 && y < 2 { RED } else { [0; 4] };
                assert_eq!(fb.pixel(x, y), Some(expect), "pixel ({x}, {y})");
            }
        }

        let mut fb = Framebuffer::new(4, 4);
        fb.fill_block(3, 3, 10, 10, RED);
        assert_eq!(fb.pixel(3, 3), Some(RED));
        assert_eq!(fb.pixel(2, 3), Some([0; 4]));
    }

    #[test]
    fn fill_block_fully_outside() {
        let mut fb = Framebuffer::new(4, 4);
        fb.fill_block(10, 0, 2, 2, RED);
        fb.fill_block(0, -5, 2, 2, RED);
        fb.fill_block(i32::MAX, i32::MAX, u32::MAX, u32::MAX, RED);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn clear_zeroes_everything() {
        let mut fb = Framebuffer::new(2, 2);
        fb.fill_block(0, 0, 2, 2, RED);
        fb.clear();
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn rgba_conversion_swaps_red_and_blue() {
        let mut fb = Framebuffer::new(1, 1);
        fb.put(0, 0, [0x11, 0x22, 0x33, 0xFF]);
        assert_eq!(fb.to_rgba(), vec![0x33, 0x22, 0x11, 0xFF]);
    }
}
