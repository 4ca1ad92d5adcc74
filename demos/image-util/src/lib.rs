use heatgrid::color::to_rgb8;
use heatgrid::d2::Quad;
use image::{Rgb, RgbImage};

/// Rasterize `quads` into `out/<prefix>_<index>.png`.
///
/// Pixel row 0 of the image is the top of the window, so quads are drawn
/// with the y axis flipped.
pub fn save_mesh<I>(
    prefix: &str,
    index: usize,
    quads: I,
    width: u32,
    height: u32,
) -> anyhow::Result<()>
where
    I: IntoIterator<Item = Quad>,
{
    let mut img = RgbImage::new(width, height);

    for q in quads {
        let size = q.size as u32;
        let (ox, oy) = (q.origin.x as u32, q.origin.y as u32);

        for i in 0..size {
            for j in 0..size {
                let (px, py) = (ox + i, oy + j);
                if px >= width || py >= height {
                    continue;
                }

                let s = (i as f64 + 0.5) / q.size;
                let t = (j as f64 + 0.5) / q.size;
                img.put_pixel(px, height - 1 - py, Rgb(to_rgb8(q.shade(s, t))));
            }
        }
    }

    std::fs::create_dir_all("out")?;
    img.save(format!("out/{}_{:06}.png", prefix, index))?;

    Ok(())
}
