use crate::icon::IconRenderer;
use anyhow::Result;
use image::ImageFormat;
use std::path::Path;

pub const DPI_LABEL: [&str; 5] = ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"];

pub const DPI_SIZE: [u32; 5] = [48, 72, 96, 144, 192];

pub const DPI_FOREGROUND_SIZE: [u32; 5] = [108, 162, 216, 324, 432];

/// Writes all launcher assets for every density bucket under `res`.
pub fn mipmap_ic_launcher<P: AsRef<Path>>(renderer: &IconRenderer, res: P) -> Result<()> {
    for ((label, size), foreground_size) in DPI_LABEL.iter().zip(DPI_SIZE).zip(DPI_FOREGROUND_SIZE)
    {
        write_density(renderer, res.as_ref(), label, size, foreground_size)?;
    }
    Ok(())
}

/// Writes the three icons of one density bucket into `res/mipmap-<label>`,
/// creating the directory if needed. Existing files are overwritten.
pub fn write_density(
    renderer: &IconRenderer,
    res: &Path,
    label: &str,
    launcher_size: u32,
    foreground_size: u32,
) -> Result<()> {
    let dir = res.join(format!("mipmap-{}", label));
    std::fs::create_dir_all(&dir)?;
    tracing::debug!(
        "writing {} (launcher {}px, foreground {}px)",
        dir.display(),
        launcher_size,
        foreground_size
    );
    renderer
        .foreground(foreground_size)
        .save_with_format(dir.join("ic_launcher_foreground.png"), ImageFormat::Png)?;
    renderer
        .launcher(launcher_size)
        .save_with_format(dir.join("ic_launcher.png"), ImageFormat::Png)?;
    renderer
        .round(launcher_size)
        .save_with_format(dir.join("ic_launcher_round.png"), ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::BACKGROUND;
    use image::GenericImageView;

    #[test]
    fn writes_all_densities() -> Result<()> {
        crate::tests::init_logger();
        let Some(typeface) = crate::tests::system_typeface()? else {
            return Ok(());
        };
        let renderer = IconRenderer::new(typeface, "Ame", BACKGROUND);
        let res = tempfile::tempdir()?;
        mipmap_ic_launcher(&renderer, res.path())?;
        for ((label, size), foreground_size) in
            DPI_LABEL.iter().zip(DPI_SIZE).zip(DPI_FOREGROUND_SIZE)
        {
            let dir = res.path().join(format!("mipmap-{}", label));
            let foreground = image::open(dir.join("ic_launcher_foreground.png"))?;
            assert_eq!(foreground.dimensions(), (foreground_size, foreground_size));
            let launcher = image::open(dir.join("ic_launcher.png"))?;
            assert_eq!(launcher.dimensions(), (size, size));
            let round = image::open(dir.join("ic_launcher_round.png"))?;
            assert_eq!(round.dimensions(), (size, size));
        }
        Ok(())
    }

    #[test]
    fn reruns_are_byte_identical() -> Result<()> {
        let Some(typeface) = crate::tests::system_typeface()? else {
            return Ok(());
        };
        let renderer = IconRenderer::new(typeface, "Ame", BACKGROUND);
        let res = tempfile::tempdir()?;
        write_density(&renderer, res.path(), "mdpi", 48, 108)?;
        let path = res.path().join("mipmap-mdpi").join("ic_launcher_round.png");
        let first = std::fs::read(&path)?;
        write_density(&renderer, res.path(), "mdpi", 48, 108)?;
        let second = std::fs::read(&path)?;
        assert_eq!(first, second);
        Ok(())
    }
}
