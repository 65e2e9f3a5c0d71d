use std::fmt::Display;
use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;

use crate::color_space::ColorMode;
use crate::error::{ColorMapError, Result};
use crate::options::PlotOptions;
use crate::sample::PixelSample;

pub type ScatterDrawingArea<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

type ChartPoint = (f64, f64, f64);

fn plot_error<E: Display>(e: E) -> ColorMapError {
    ColorMapError::Plot(e.to_string())
}

/// Chart position of a pixel. Plotters draws its y axis upwards, so the third
/// channel goes on y and the second on z.
pub fn chart_coord(channels: [u8; 3]) -> ChartPoint {
    (channels[0] as f64, channels[2] as f64, channels[1] as f64)
}

/// Channel names placed at the far end of each axis.
pub fn axis_labels(mode: ColorMode) -> [(&'static str, ChartPoint); 3] {
    let [first, second, third] = mode.channel_labels();
    let [max0, max1, max2] = mode.channel_max().map(f64::from);
    [
        (first, (max0, 0.0, 0.0)),
        (second, (0.0, 0.0, max1)),
        (third, (0.0, max2, 0.0)),
    ]
}

/// Draw the sample as a 3D scatter chart onto any plotters area.
pub fn draw_scatter<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    sample: &PixelSample,
    options: &PlotOptions,
) -> Result<()> {
    let mode = sample.mode();
    let [max0, max1, max2] = mode.channel_max().map(f64::from);

    area.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(area)
        .caption(&options.title, ("sans-serif", 20).into_font())
        .margin(10)
        .build_cartesian_3d(0.0..max0, 0.0..max2, 0.0..max1)
        .map_err(plot_error)?;

    chart.with_projection(|mut pb| {
        pb.yaw = options.yaw;
        pb.pitch = options.pitch;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.1))
        .max_light_lines(4)
        .draw()
        .map_err(plot_error)?;

    let size = options.point_size as i32;
    chart
        .draw_series(sample.points().iter().map(|p| {
            let [r, g, b] = p.rgb8();
            Circle::new(chart_coord(p.channels), size, RGBColor(r, g, b).filled())
        }))
        .map_err(plot_error)?;

    let label_style = ("sans-serif", 16).into_font().color(&BLACK);
    chart
        .draw_series(
            axis_labels(mode)
                .into_iter()
                .map(|(label, pos)| Text::new(label, pos, label_style.clone())),
        )
        .map_err(plot_error)?;

    Ok(())
}

/// A rendered chart held as packed 8-bit RGB.
#[derive(Debug, Clone)]
pub struct ScatterImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl ScatterImage {
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut png_data = Vec::new();
        let encoder = PngEncoder::new(Cursor::new(&mut png_data));
        encoder.write_image(
            &self.rgb,
            self.width,
            self.height,
            image::ColorType::Rgb8.into(),
        )?;
        Ok(png_data)
    }

    /// PNG wrapped in a `data:` URI, ready for an `img` element.
    pub fn to_data_uri(&self) -> Result<String> {
        let buffer_base64 = BASE64_STANDARD.encode(self.to_png()?);
        Ok(format!("data:image/png;base64,{}", buffer_base64))
    }
}

/// Rasterize the scatter chart into an in-memory RGB buffer.
pub fn render_scatter(sample: &PixelSample, options: &PlotOptions) -> Result<ScatterImage> {
    let (width, height) = (options.width, options.height);
    let mut buffer = vec![0u8; (width as usize) * (height as usize) * 3];

    if sample.is_empty() {
        tracing::warn!("rendering an empty pixel sample");
    }

    {
        let drawing_area: ScatterDrawingArea =
            BitMapBackend::with_buffer(buffer.as_mut_slice(), (width, height))
                .into_drawing_area();
        draw_scatter(&drawing_area, sample, options)?;
        drawing_area.present().map_err(plot_error)?;
    }

    tracing::debug!(
        "rendered {} points into a {}x{} chart",
        sample.len(),
        width,
        height
    );

    Ok(ScatterImage {
        width,
        height,
        rgb: buffer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_channel_is_vertical() {
        assert_eq!(chart_coord([10, 20, 30]), (10.0, 30.0, 20.0));
    }

    #[test]
    fn labels_sit_on_axis_ends() {
        let labels = axis_labels(ColorMode::Hsv);
        assert_eq!(labels[0], ("Hue", (180.0, 0.0, 0.0)));
        assert_eq!(labels[1], ("Saturation", (0.0, 0.0, 255.0)));
        assert_eq!(labels[2], ("Value", (0.0, 255.0, 0.0)));
    }

    #[test]
    fn png_keeps_dimensions() {
        let image = ScatterImage {
            width: 3,
            height: 2,
            rgb: vec![200; 3 * 2 * 3],
        };
        let decoded = image::load_from_memory(&image.to_png().unwrap())
            .unwrap()
            .into_rgb8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(2, 1).0, [200, 200, 200]);
    }

    #[test]
    fn data_uri_has_png_prefix() {
        let image = ScatterImage {
            width: 1,
            height: 1,
            rgb: vec![0, 0, 0],
        };
        let uri = image.to_data_uri().unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    fn small_options() -> PlotOptions {
        PlotOptions::new().width(200).height(150).build().unwrap()
    }

    #[test]
    fn renders_hsv_sample_onto_white() {
        let sample = PixelSample::new(
            ColorMode::Hsv,
            3,
            vec![[0, 255, 255], [60, 255, 255], [120, 0, 10]],
        );
        let chart = render_scatter(&sample, &small_options()).unwrap();

        assert_eq!((chart.width, chart.height), (200, 150));
        assert_eq!(chart.rgb.len(), 200 * 150 * 3);
        let drawn = chart
            .rgb
            .chunks_exact(3)
            .filter(|px| *px != [255, 255, 255])
            .count();
        assert!(drawn > 0, "chart is blank");
    }

    #[test]
    fn renders_empty_sample() {
        let sample = PixelSample::new(ColorMode::Rgb, 0, vec![]);
        let chart = render_scatter(&sample, &small_options()).unwrap();
        assert_eq!(chart.rgb.len(), 200 * 150 * 3);
        // axes and caption are still drawn
        assert!(chart.rgb.chunks_exact(3).any(|px| px != [255, 255, 255]));
        assert!(chart.to_png().is_ok());
    }
}
