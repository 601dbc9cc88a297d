use anyhow::Context;
use opencv::core::Vector;
use opencv::imgcodecs;

use cv::pipeline;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("usage: find_targets <image>")?;

    let image = imgcodecs::imread(&path, imgcodecs::IMREAD_COLOR)?;
    let output = pipeline::process(&image)?;

    let out_path = format!("{}.targets.png", path);
    imgcodecs::imwrite(&out_path, &output, &Vector::default())?;
    println!("wrote {}", out_path);

    Ok(())
}
