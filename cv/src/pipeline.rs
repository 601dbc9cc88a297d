use opencv::core::{self, Mat, Point, Scalar, Size2i};
use opencv::imgproc;
use opencv::prelude::*;

// Threshold windows and blur radius straight out of the pipeline builder.
const HUE: [f64; 2] = [0.0, 17.346568110980726];
const SATURATION: [f64; 2] = [107.77877697841726, 255.0];
const VALUE: [f64; 2] = [123.83093525179855, 255.0];
const BLUR_RADIUS: f64 = 21.69811320754717;
const EXTRACTED_CHANNEL: i32 = 2;

/// Runs the fixed sequence over one frame: threshold the target colors, pull
/// the Cb channel out of a YCrCb conversion, blur the mask, and add the two.
pub fn process(frame: &Mat) -> anyhow::Result<Mat> {
    let mask = hsv_threshold(frame, HUE, SATURATION, VALUE)?;

    let mut ycrcb = Mat::default();
    imgproc::cvt_color(frame, &mut ycrcb, imgproc::COLOR_RGB2YCrCb, 0)?;

    let channel = extract_channel(&ycrcb, EXTRACTED_CHANNEL)?;
    let blurred = blur(&mask, BlurKind::Box, BLUR_RADIUS)?;

    add(&channel, &blurred)
}

/// Masks pixels whose hue, saturation, and value all fall inside the given
/// windows.
pub fn hsv_threshold(
    input: &Mat,
    hue: [f64; 2],
    sat: [f64; 2],
    val: [f64; 2],
) -> anyhow::Result<Mat> {
    let mut hsv = Mat::default();
    imgproc::cvt_color(input, &mut hsv, imgproc::COLOR_BGR2HSV, 0)?;

    let mut mask = Mat::default();
    core::in_range(
        &hsv,
        &Scalar::new(hue[0], sat[0], val[0], 0.0),
        &Scalar::new(hue[1], sat[1], val[1], 0.0),
        &mut mask,
    )?;

    Ok(mask)
}

pub fn extract_channel(src: &Mat, channel: i32) -> anyhow::Result<Mat> {
    let mut out = Mat::default();
    core::extract_channel(src, &mut out, channel)?;
    Ok(out)
}

#[derive(Clone, Copy, Debug)]
pub enum BlurKind {
    Box,
    Gaussian,
    Median,
    Bilateral,
}

/// Softens an image. Kernel sizes follow the radius the way each filter
/// expects them.
pub fn blur(input: &Mat, kind: BlurKind, radius: f64) -> anyhow::Result<Mat> {
    let radius = (radius + 0.5) as i32;
    let mut out = Mat::default();

    match kind {
        BlurKind::Box => {
            let kernel = 2 * radius + 1;
            imgproc::blur(
                input,
                &mut out,
                Size2i::new(kernel, kernel),
                Point::new(-1, -1),
                core::BORDER_DEFAULT,
            )?;
        }
        BlurKind::Gaussian => {
            let kernel = 6 * radius + 1;
            imgproc::gaussian_blur(
                input,
                &mut out,
                Size2i::new(kernel, kernel),
                radius as f64,
                0.0,
                core::BORDER_DEFAULT,
            )?;
        }
        BlurKind::Median => {
            let kernel = 2 * radius + 1;
            imgproc::median_blur(input, &mut out, kernel)?;
        }
        BlurKind::Bilateral => {
            imgproc::bilateral_filter(
                input,
                &mut out,
                -1,
                radius as f64,
                radius as f64,
                core::BORDER_DEFAULT,
            )?;
        }
    }

    Ok(out)
}

pub fn add(src1: &Mat, src2: &Mat) -> anyhow::Result<Mat> {
    let mut out = Mat::default();
    core::add(src1, src2, &mut out, &core::no_array(), -1)?;
    Ok(out)
}
